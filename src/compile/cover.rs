use crate::compile::plan::{
    PagePlan, PlanInputs, Resolver, SlotContent, SlotPlan, TextPlan, has_area, validate_geometry,
};
use crate::foundation::core::{Color, Point, Rect, Size};
use crate::foundation::error::{FolioError, FolioResult};
use crate::layout::fit::{FitOptions, PageGeometry};
use crate::model::{Cover, CoverLayout, TextAlign};
use crate::overlay::translate::{DrawCmd, Geom, Paint};
use crate::report::RenderReport;

/// Spine width used by the renderers, in page units.
pub const DEFAULT_SPINE_WIDTH: f64 = 30.0;
/// Spine fill when the cover has no color.
pub const DEFAULT_SPINE_COLOR: Color = Color::rgb(0xdd, 0xdd, 0xdd);

/// Slot index of the front photo in a cover plan.
pub const FRONT_SLOT: usize = 0;
/// Slot index of the back photo in a cover plan.
pub const BACK_SLOT: usize = 1;

const TITLE_FONT: &str = "Playfair Display";
const BODY_FONT: &str = "Helvetica";

/// Panel-relative percentage boxes for one cover variant.
struct CoverBoxes {
    photo: (f64, f64, f64, f64),
    title_y: f64,
    subtitle_y: f64,
    light_text: bool,
}

fn boxes(layout: CoverLayout) -> CoverBoxes {
    match layout {
        CoverLayout::Standard => CoverBoxes {
            photo: (10.0, 10.0, 80.0, 60.0),
            title_y: 74.0,
            subtitle_y: 84.0,
            light_text: false,
        },
        CoverLayout::PhotoBottom => CoverBoxes {
            photo: (10.0, 30.0, 80.0, 60.0),
            title_y: 8.0,
            subtitle_y: 18.0,
            light_text: false,
        },
        CoverLayout::FullBleed => CoverBoxes {
            photo: (0.0, 0.0, 100.0, 100.0),
            title_y: 70.0,
            subtitle_y: 80.0,
            light_text: true,
        },
    }
}

const BACK_PHOTO: (f64, f64, f64, f64) = (20.0, 25.0, 60.0, 40.0);

/// Resolve the cover into a three-panel [`PagePlan`]: back | spine | front.
///
/// `inputs.geometry.size` is the size of one panel; the plan is two panels plus `spine_width`
/// wide and the margins apply to the whole spread. Both photos go through the same bounds fitter
/// as page slots.
#[tracing::instrument(skip_all, fields(layout = ?cover.layout))]
pub fn compile_cover(
    cover: &Cover,
    spine_width: f64,
    inputs: &PlanInputs<'_>,
    report: &mut RenderReport,
) -> FolioResult<PagePlan> {
    validate_geometry(&inputs.geometry)?;
    if !(spine_width.is_finite() && spine_width >= 0.0) {
        return Err(FolioError::validation(format!(
            "spine width must be finite and >= 0, got {spine_width}"
        )));
    }

    let panel = inputs.geometry.size;
    let size = Size::new(panel.width * 2.0 + spine_width, panel.height);
    let spread = PageGeometry::new(size, inputs.geometry.margins);
    let hard = spread.hard_bounds();
    let mut cx = Resolver::new(inputs, None, report).with_geometry(spread);

    let back_x = 0.0;
    let spine_x = panel.width;
    let front_x = panel.width + spine_width;
    let panel_rect = |x0: f64, (x, y, w, h): (f64, f64, f64, f64)| {
        Rect::new(
            x0 + x / 100.0 * panel.width,
            y / 100.0 * panel.height,
            x0 + (x + w) / 100.0 * panel.width,
            (y + h) / 100.0 * panel.height,
        )
    };

    let background = cx.background_or(cover.theme.as_deref(), cover.color.as_deref());

    let spine = Rect::new(spine_x, 0.0, spine_x + spine_width, panel.height);
    let spine_color = cover
        .color
        .as_deref()
        .and_then(Color::parse)
        .unwrap_or(DEFAULT_SPINE_COLOR);
    let decorations = if has_area(spine) {
        vec![DrawCmd {
            geom: Geom::Rect(spine),
            paint: Paint {
                stroke: None,
                fill: Some(spine_color),
            },
        }]
    } else {
        Vec::new()
    };

    let variant = boxes(cover.layout);
    let mut slots = Vec::with_capacity(2);
    for (index, photo_id, rect) in [
        (
            FRONT_SLOT,
            cover.front_photo_id.as_deref(),
            panel_rect(front_x, variant.photo),
        ),
        (
            BACK_SLOT,
            cover.back_photo_id.as_deref(),
            panel_rect(back_x, BACK_PHOTO),
        ),
    ] {
        let bounds = rect.intersect(hard);
        let content = match photo_id {
            Some(id) => cx.photo(index, id, rect, &FitOptions::default()),
            None => has_area(bounds).then_some(SlotContent::Empty),
        };
        if let Some(content) = content {
            slots.push(SlotPlan {
                index,
                photo_id: photo_id.map(str::to_owned),
                bounds,
                rotation: 0.0,
                content,
                frame: Vec::new(),
            });
        }
    }

    let text_color = cover
        .text_color
        .as_deref()
        .and_then(Color::parse)
        .unwrap_or(if variant.light_text {
            Color::WHITE
        } else {
            Color::BLACK
        });
    let line = |id: &str, content: &str, y_pct: f64, font_size_px: f64, family: &str| TextPlan {
        id: id.to_owned(),
        content: content.to_owned(),
        origin: Point::new(front_x + 0.1 * panel.width, y_pct / 100.0 * panel.height),
        width: 0.8 * panel.width,
        font_size_px,
        color: text_color,
        font_family: family.to_owned(),
        style_id: None,
        bold: false,
        italic: false,
        align: TextAlign::Center,
        rotation: 0.0,
    };

    let mut texts = Vec::new();
    if !cover.title.trim().is_empty() {
        let mut title = line("cover-title", &cover.title, variant.title_y, 32.0, TITLE_FONT);
        title.bold = true;
        texts.push(title);
    }
    if !cover.subtitle.trim().is_empty() {
        texts.push(line(
            "cover-subtitle",
            &cover.subtitle,
            variant.subtitle_y,
            16.0,
            BODY_FONT,
        ));
    }
    let spine_text = cover
        .spine_text
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .or_else(|| Some(cover.title.as_str()).filter(|t| !t.trim().is_empty()));
    if let Some(spine_text) = spine_text
        && spine_width > 0.0
    {
        // Rotated a quarter turn clockwise about its top-left corner, so the box hangs to the
        // left of the origin.
        let font_size_px = (spine_width * 0.5 / 0.75).min(14.0);
        let line_height = font_size_px * 0.75 * 1.2;
        texts.push(TextPlan {
            id: "cover-spine".to_owned(),
            content: spine_text.to_owned(),
            origin: Point::new(
                spine_x + spine_width / 2.0 + line_height / 2.0,
                0.05 * panel.height,
            ),
            width: 0.9 * panel.height,
            font_size_px,
            color: text_color_on(spine_color),
            font_family: BODY_FONT.to_owned(),
            style_id: None,
            bold: false,
            italic: false,
            align: TextAlign::Center,
            rotation: 90.0,
        });
    }

    Ok(PagePlan {
        page_index: None,
        size,
        background,
        decorations,
        slots,
        texts,
    })
}

fn text_color_on(bg: Color) -> Color {
    let [r, g, b] = bg.to_rgb_f32();
    let luma = 0.299 * r + 0.587 * g + 0.114 * b;
    if luma < 0.5 {
        Color::WHITE
    } else {
        Color::BLACK
    }
}
