use crate::assets::store::{PreparedImages, PreparedSource};
use crate::catalog::AssetCatalog;
use crate::foundation::core::{Color, Point, Rect, Size};
use crate::foundation::error::{FolioError, FolioResult};
use crate::foundation::math::{EPS, is_positive_finite};
use crate::layout::fit::{Fit, FitOptions, PageGeometry, fit};
use crate::model::{FrameShape, Page, Project, TextAlign, TextElement};
use crate::overlay::translate::{DrawCmd, map_to_target};
use crate::report::{DiagnosticKind, RenderReport};

/// Fill of a photo placeholder.
pub const PLACEHOLDER_FILL: Color = Color::rgb(0xf0, 0xf0, 0xf0);
/// Outline of a photo placeholder.
pub const PLACEHOLDER_STROKE: Color = Color::rgb(0xc8, 0xc8, 0xc8);
/// Font size used when neither the element nor its style sets one, in CSS pixels.
pub const DEFAULT_FONT_SIZE_PX: f64 = 16.0;
/// Text box width used when the element sets none, in percent of page width.
pub const DEFAULT_TEXT_WIDTH_PCT: f64 = 50.0;
/// Font family used when neither the element nor its style sets one.
pub const DEFAULT_FONT_FAMILY: &str = "Helvetica";

/// Resolved page background.
#[derive(Clone, Debug, PartialEq)]
pub enum BackgroundPaint {
    /// Flat color.
    Color(Color),
    /// Image scaled to cover the page (centred, overflow cropped), with the color to use if the
    /// image is unavailable.
    Texture {
        /// Image source (URL, data URI or relative path).
        source: String,
        /// Flat fallback.
        fallback: Color,
    },
}

/// What occupies a slot.
#[derive(Clone, Debug, PartialEq)]
pub enum SlotContent {
    /// A fitted photo.
    Image {
        /// Photo id in the asset catalog.
        photo_id: String,
        /// Image source.
        source: String,
        /// Fitted rectangle, inside the hard bounds.
        rect: Rect,
        /// Intrinsic pixel size when the source was prepared.
        pixels: Option<(u32, u32)>,
    },
    /// The photo could not be resolved; a grey box fills the slot.
    Placeholder {
        /// Slot bounds clipped to the printable area.
        rect: Rect,
    },
    /// No photo assigned.
    Empty,
}

/// One slot after fitting and frame translation.
#[derive(Clone, Debug, PartialEq)]
pub struct SlotPlan {
    /// Index into the page layout.
    pub index: usize,
    /// Assigned photo id, if any.
    pub photo_id: Option<String>,
    /// Slot rectangle clipped to the printable area.
    pub bounds: Rect,
    /// Clockwise rotation in degrees about the center of `bounds`.
    pub rotation: f64,
    /// Photo, placeholder or nothing.
    pub content: SlotContent,
    /// Image frame shapes, drawn over the content.
    pub frame: Vec<DrawCmd>,
}

/// One text element in page units.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPlan {
    /// Element id.
    pub id: String,
    /// Text; `\n` separates lines.
    pub content: String,
    /// Top-left corner of the text box.
    pub origin: Point,
    /// Box width used for wrapping and alignment.
    pub width: f64,
    /// Font size in CSS pixels.
    pub font_size_px: f64,
    /// Fill color.
    pub color: Color,
    /// Requested family name.
    pub font_family: String,
    /// Text style id the element referenced.
    pub style_id: Option<String>,
    /// Bold weight.
    pub bold: bool,
    /// Italic style.
    pub italic: bool,
    /// Alignment inside the box.
    pub align: TextAlign,
    /// Clockwise rotation in degrees about `origin`.
    pub rotation: f64,
}

/// Backend-neutral description of one page, in paint order.
///
/// Both renderers draw exactly this: background, decorations, slots (content then frame) and
/// text. Geometry is in page units with the origin at the top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct PagePlan {
    /// Page index, `None` for the cover.
    pub page_index: Option<usize>,
    /// Page size.
    pub size: Size,
    /// Background.
    pub background: BackgroundPaint,
    /// Page-level shapes drawn over the background.
    pub decorations: Vec<DrawCmd>,
    /// Slots in layout order.
    pub slots: Vec<SlotPlan>,
    /// Text in element order.
    pub texts: Vec<TextPlan>,
}

/// Shared inputs of a page compile.
#[derive(Clone, Copy, Debug)]
pub struct PlanInputs<'a> {
    /// Id lookups.
    pub catalog: &'a AssetCatalog,
    /// Fetched image bytes and dimensions.
    pub images: &'a PreparedImages,
    /// Page size and print margins.
    pub geometry: PageGeometry,
    /// Forces every page frame to this color.
    pub page_frame_color: Option<&'a str>,
}

/// Resolve a page into a [`PagePlan`].
///
/// Missing photos, failed fetches, unplaceable slots and bad frame primitives are recorded in
/// `report`. Only a structurally corrupt layout or page geometry returns an error.
#[tracing::instrument(skip_all, fields(page = %page.id, index = page_index))]
pub fn compile_page(
    page: &Page,
    page_index: usize,
    inputs: &PlanInputs<'_>,
    report: &mut RenderReport,
) -> FolioResult<PagePlan> {
    validate_geometry(&inputs.geometry)?;
    if let Some(layout) = &page.layout {
        layout.validate()?;
    }

    let mut cx = Resolver::new(inputs, Some(page_index), report);
    let page_rect = inputs.geometry.page_rect();
    let hard = inputs.geometry.hard_bounds();

    let background = cx.background(page.background.as_deref());

    let decorations = match page.page_frame_id.as_deref() {
        Some(frame_id) => {
            let color = inputs
                .page_frame_color
                .or(page.page_frame_color.as_deref());
            cx.frame(frame_id, color, FrameShape::Rect, page_rect, None)
        }
        None => Vec::new(),
    };

    let mut slots = Vec::with_capacity(page.slots().len());
    for (index, slot) in page.slots().iter().enumerate() {
        let declared = inputs.geometry.slot_rect(slot).abs();
        let bounds = declared.intersect(hard);
        let content = match slot.photo_id.as_deref() {
            Some(photo_id) => {
                let opts = FitOptions::for_slot(slot, &inputs.geometry);
                cx.photo(index, photo_id, declared, &opts)
            }
            None => has_area(bounds).then_some(SlotContent::Empty),
        };
        let Some(content) = content else {
            continue;
        };

        let frame_id = slot.frame_id.as_deref().or(page.image_frame_id.as_deref());
        let frame = match frame_id {
            Some(frame_id) if content != SlotContent::Empty => {
                let color = slot
                    .frame_color
                    .as_deref()
                    .or(page.image_frame_color.as_deref());
                let shape = slot.shape.or(page.image_shape).unwrap_or_default();
                cx.frame(frame_id, color, shape, bounds, Some(index))
            }
            _ => Vec::new(),
        };

        slots.push(SlotPlan {
            index,
            photo_id: slot.photo_id.clone(),
            bounds,
            rotation: slot.rotation,
            content,
            frame,
        });
    }

    let texts = page.elements.iter().map(|el| cx.text(el)).collect();

    tracing::debug!(slots = slots.len(), "page compiled");
    Ok(PagePlan {
        page_index: Some(page_index),
        size: inputs.geometry.size,
        background,
        decorations,
        slots,
        texts,
    })
}

/// Image sources a page needs, in paint order, without duplicates.
pub fn sources_for_page(page: &Page, catalog: &AssetCatalog) -> Vec<String> {
    let mut out = Vec::new();
    push_background_source(&mut out, page.background.as_deref(), catalog);
    for slot in page.slots() {
        if let Some(photo) = slot.photo_id.as_deref().and_then(|id| catalog.photo(id)) {
            push_unique(&mut out, &photo.url);
        }
    }
    out
}

/// Image sources for the cover and every page of `project`.
pub fn sources_for_project(project: &Project, catalog: &AssetCatalog) -> Vec<String> {
    let mut out = Vec::new();
    let cover = &project.cover;
    push_background_source(&mut out, cover.theme.as_deref(), catalog);
    for id in [&cover.front_photo_id, &cover.back_photo_id]
        .into_iter()
        .flatten()
    {
        if let Some(photo) = catalog.photo(id) {
            push_unique(&mut out, &photo.url);
        }
    }
    for page in &project.pages {
        for s in sources_for_page(page, catalog) {
            push_unique(&mut out, &s);
        }
    }
    out
}

fn push_background_source(out: &mut Vec<String>, value: Option<&str>, catalog: &AssetCatalog) {
    if let Some(url) = value
        .and_then(|v| catalog.background(v.trim()))
        .and_then(|bg| bg.url.as_deref())
    {
        push_unique(out, url);
    }
}

fn push_unique(out: &mut Vec<String>, s: &str) {
    if !s.is_empty() && !out.iter().any(|o| o == s) {
        out.push(s.to_owned());
    }
}

pub(crate) fn validate_geometry(geometry: &PageGeometry) -> FolioResult<()> {
    let Size { width, height } = geometry.size;
    if !(is_positive_finite(width) && is_positive_finite(height)) {
        return Err(FolioError::validation(format!(
            "page size must be positive and finite, got {width}x{height}"
        )));
    }
    let m = geometry.margins;
    if ![m.top, m.right, m.bottom, m.left]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0)
    {
        return Err(FolioError::validation("page margins must be finite and >= 0"));
    }
    Ok(())
}

pub(crate) fn has_area(r: Rect) -> bool {
    r.width() > EPS && r.height() > EPS
}

/// Per-compile lookups that record what they could not resolve.
pub(crate) struct Resolver<'a, 'r> {
    catalog: &'a AssetCatalog,
    images: &'a PreparedImages,
    geometry: PageGeometry,
    page_index: Option<usize>,
    report: &'r mut RenderReport,
}

impl<'a, 'r> Resolver<'a, 'r> {
    pub(crate) fn new(
        inputs: &PlanInputs<'a>,
        page_index: Option<usize>,
        report: &'r mut RenderReport,
    ) -> Self {
        Self {
            catalog: inputs.catalog,
            images: inputs.images,
            geometry: inputs.geometry,
            page_index,
            report,
        }
    }

    pub(crate) fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    fn diag(&mut self, kind: DiagnosticKind, slot: Option<usize>, detail: String) {
        self.report.push(kind, self.page_index, slot, detail);
    }

    /// Catalog texture first, then a literal color, then white.
    pub(crate) fn background(&mut self, value: Option<&str>) -> BackgroundPaint {
        self.background_or(value, None)
    }

    /// Like [`Self::background`], but an unresolvable `value` falls back to `fallback` before
    /// white.
    pub(crate) fn background_or(
        &mut self,
        value: Option<&str>,
        fallback: Option<&str>,
    ) -> BackgroundPaint {
        let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return match fallback {
                Some(_) => self.background_or(fallback, None),
                None => BackgroundPaint::Color(Color::WHITE),
            };
        };
        let (catalog, images) = (self.catalog, self.images);
        if let Some(bg) = catalog.background(value) {
            let fallback = bg
                .color
                .as_deref()
                .and_then(Color::parse)
                .unwrap_or(Color::WHITE);
            let Some(url) = bg.url.as_deref() else {
                return BackgroundPaint::Color(fallback);
            };
            if let Some(PreparedSource::Failed(msg)) = images.get(url) {
                self.diag(
                    DiagnosticKind::FetchFailure,
                    None,
                    format!("background '{value}': {msg}"),
                );
                return BackgroundPaint::Color(fallback);
            }
            return BackgroundPaint::Texture {
                source: url.to_owned(),
                fallback,
            };
        }
        match Color::parse(value) {
            Some(c) => BackgroundPaint::Color(c),
            None => {
                self.diag(
                    DiagnosticKind::MissingAsset,
                    None,
                    format!("unknown background '{value}'"),
                );
                match fallback {
                    Some(_) => self.background_or(fallback, None),
                    None => BackgroundPaint::Color(Color::WHITE),
                }
            }
        }
    }

    /// Resolve and fit one photo. `None` means the slot paints nothing.
    pub(crate) fn photo(
        &mut self,
        index: usize,
        photo_id: &str,
        declared: Rect,
        opts: &FitOptions,
    ) -> Option<SlotContent> {
        let bounds = declared.intersect(self.geometry.hard_bounds());
        let (catalog, images) = (self.catalog, self.images);
        let Some(photo) = catalog.photo(photo_id) else {
            self.diag(
                DiagnosticKind::MissingAsset,
                Some(index),
                format!("unknown photo '{photo_id}'"),
            );
            return self.placeholder(index, bounds);
        };

        let (aspect, pixels) = match images.get(&photo.url) {
            Some(PreparedSource::Ready(img)) => (img.aspect_ratio(), Some((img.width, img.height))),
            Some(PreparedSource::Failed(msg)) => {
                let detail = format!("photo '{photo_id}': {msg}");
                self.diag(DiagnosticKind::FetchFailure, Some(index), detail);
                return self.placeholder(index, bounds);
            }
            None => match photo.known_aspect_ratio() {
                Some(r) => (r, None),
                None => {
                    let detail =
                        format!("photo '{photo_id}' was not fetched and has no aspect ratio");
                    self.diag(DiagnosticKind::FetchFailure, Some(index), detail);
                    return self.placeholder(index, bounds);
                }
            },
        };

        match fit(declared, aspect, &self.geometry, opts) {
            Fit::Placed(rect) => Some(SlotContent::Image {
                photo_id: photo_id.to_owned(),
                source: photo.url.clone(),
                rect,
                pixels,
            }),
            Fit::Skip(reason) => {
                self.diag(
                    DiagnosticKind::BoundsViolation,
                    Some(index),
                    format!("photo '{photo_id}' skipped: {reason}"),
                );
                None
            }
        }
    }

    fn placeholder(&mut self, index: usize, bounds: Rect) -> Option<SlotContent> {
        if has_area(bounds) {
            return Some(SlotContent::Placeholder { rect: bounds });
        }
        self.diag(
            DiagnosticKind::BoundsViolation,
            Some(index),
            "slot lies outside the printable area".to_owned(),
        );
        None
    }

    /// Frame shapes mapped onto `target`.
    pub(crate) fn frame(
        &mut self,
        frame_id: &str,
        color: Option<&str>,
        shape: FrameShape,
        target: Rect,
        slot: Option<usize>,
    ) -> Vec<DrawCmd> {
        let catalog = self.catalog;
        let Some(frame) = catalog.frame(frame_id) else {
            self.diag(
                DiagnosticKind::MissingAsset,
                slot,
                format!("unknown frame '{frame_id}'"),
            );
            return Vec::new();
        };
        if !has_area(target) {
            return Vec::new();
        }
        let color = color.unwrap_or(&frame.color);
        let (prims, local) = frame.primitives(target.size(), color, shape);
        let translation = map_to_target(&prims, local, target, color);
        for reason in translation.rejected {
            self.diag(
                DiagnosticKind::UnsupportedPrimitive,
                slot,
                format!("frame '{frame_id}': {reason}"),
            );
        }
        translation.cmds
    }

    /// Element fields first, then its text style, then defaults.
    pub(crate) fn text(&mut self, el: &TextElement) -> TextPlan {
        let catalog = self.catalog;
        let style = match el.style_id.as_deref() {
            Some(id) => {
                let style = catalog.text_style(id);
                if style.is_none() {
                    self.diag(
                        DiagnosticKind::MissingAsset,
                        None,
                        format!("text '{}': unknown style '{id}'", el.id),
                    );
                }
                style
            }
            None => None,
        };

        let size = self.geometry.size;
        let font_size_px = el
            .font_size
            .or(style.and_then(|s| s.font_size))
            .filter(|v| is_positive_finite(*v))
            .unwrap_or(DEFAULT_FONT_SIZE_PX);
        let color = el
            .color
            .as_deref()
            .or(style.and_then(|s| s.color.as_deref()))
            .and_then(Color::parse)
            .unwrap_or(Color::BLACK);
        let font_family = el
            .font_family
            .as_deref()
            .or(style.and_then(|s| s.font_family.as_deref()))
            .unwrap_or(DEFAULT_FONT_FAMILY)
            .to_owned();
        let width_pct = el
            .width
            .filter(|v| is_positive_finite(*v))
            .unwrap_or(DEFAULT_TEXT_WIDTH_PCT);

        TextPlan {
            id: el.id.clone(),
            content: el.content.clone(),
            origin: Point::new(el.x / 100.0 * size.width, el.y / 100.0 * size.height),
            width: width_pct / 100.0 * size.width,
            font_size_px,
            color,
            font_family,
            style_id: el.style_id.clone(),
            bold: style.is_some_and(|s| s.bold),
            italic: style.is_some_and(|s| s.italic),
            align: el.align.unwrap_or_default(),
            rotation: if el.rotation.is_finite() {
                el.rotation
            } else {
                0.0
            },
        }
    }
}
