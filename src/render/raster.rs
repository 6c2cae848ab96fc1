use std::io::Cursor;
use std::sync::{Arc, OnceLock};

use anyhow::Context;
use base64::Engine as _;

use crate::assets::decode::{DecodedRgba, decode_rgba8, demultiply_rgba8_in_place};
use crate::assets::store::{PreparedImage, PreparedImages};
use crate::catalog::AssetCatalog;
use crate::compile::{
    BackgroundPaint, PLACEHOLDER_FILL, PLACEHOLDER_STROKE, PagePlan, PlanInputs, SlotContent,
    TextPlan, compile_page,
};
use crate::foundation::core::{Color, Rect};
use crate::foundation::error::{FolioError, FolioResult};
use crate::model::{Page, TextAlign};
use crate::overlay::path::fmt_num;
use crate::render::RenderOptions;
use crate::render::dom::{DomNode, svg_shape};
use crate::render::pdf::{BaseFamily, PT_PER_PX, PdfFont, wrap_lines};
use crate::report::{DiagnosticKind, RenderReport};

/// Resolution of proof images when none is given.
pub const DEFAULT_PROOF_DPI: f64 = 150.0;

const MAX_DIM: u32 = 16_384;

/// Render one page to PNG at `dpi`.
#[tracing::instrument(skip_all, fields(page = %page.id, index = page_index, dpi))]
pub fn render_png(
    page: &Page,
    page_index: usize,
    catalog: &AssetCatalog,
    images: &PreparedImages,
    options: &RenderOptions,
    dpi: f64,
) -> FolioResult<(Vec<u8>, RenderReport)> {
    options.validate()?;
    if !(dpi.is_finite() && dpi > 0.0) {
        return Err(FolioError::validation(format!("dpi must be positive, got {dpi}")));
    }
    let inputs = PlanInputs {
        catalog,
        images,
        geometry: options.geometry_for_page(page_index),
        page_frame_color: options.page_frame_color_override.as_deref(),
    };
    let mut report = RenderReport::new();
    let plan = compile_page(page, page_index, &inputs, &mut report)?;
    let pixels = rasterize_plan(&plan, images, dpi / 72.0, &mut report)?;
    Ok((encode_png(&pixels)?, report))
}

/// Rasterize a plan at `scale` pixels per page unit.
pub fn rasterize_plan(
    plan: &PagePlan,
    images: &PreparedImages,
    scale: f64,
    report: &mut RenderReport,
) -> FolioResult<DecodedRgba> {
    let width = to_px(plan.size.width * scale)?;
    let height = to_px(plan.size.height * scale)?;

    let svg = plan_to_svg(plan, images, report).to_html();
    let opts = usvg::Options {
        fontdb: system_fontdb(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(&svg, &opts).context("parse page svg")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| FolioError::render("failed to allocate page pixmap"))?;
    let sx = width as f32 / tree.size().width();
    let sy = height as f32 / tree.size().height();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    let mut rgba8 = pixmap.take();
    demultiply_rgba8_in_place(&mut rgba8);
    Ok(DecodedRgba {
        width,
        height,
        rgba8,
    })
}

/// Encode straight-alpha pixels as PNG.
pub fn encode_png(pixels: &DecodedRgba) -> FolioResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(pixels.width, pixels.height, pixels.rgba8.clone())
        .ok_or_else(|| FolioError::render("pixel buffer does not match its size"))?;
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(out)
}

/// Standalone SVG document drawing `plan` in page units.
///
/// Photos are inlined as data URIs so the document needs no resolver.
pub fn plan_to_svg(plan: &PagePlan, images: &PreparedImages, report: &mut RenderReport) -> DomNode {
    let (w, h) = (fmt_num(plan.size.width), fmt_num(plan.size.height));
    let mut svg = DomNode::element("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("xmlns:xlink", "http://www.w3.org/1999/xlink")
        .attr("width", w.clone())
        .attr("height", h.clone())
        .attr("viewBox", format!("0 0 {w} {h}"));

    let full = Rect::from_origin_size((0.0, 0.0), plan.size);
    match &plan.background {
        BackgroundPaint::Color(c) => svg.push(rect_node(full, Some(*c), None)),
        BackgroundPaint::Texture { source, fallback } => {
            svg.push(rect_node(full, Some(*fallback), None));
            match images.ready(source).map(data_uri) {
                Some(Ok(uri)) => svg.push(
                    image_node(full, uri).attr("preserveAspectRatio", "xMidYMid slice"),
                ),
                Some(Err(err)) => report.push(
                    DiagnosticKind::FetchFailure,
                    plan.page_index,
                    None,
                    format!("background texture: {err}"),
                ),
                None => report.push(
                    DiagnosticKind::FetchFailure,
                    plan.page_index,
                    None,
                    "background texture was not fetched",
                ),
            }
        }
    }

    for cmd in &plan.decorations {
        svg.push(svg_shape(cmd));
    }

    for slot in &plan.slots {
        let mut g = DomNode::element("g");
        if slot.rotation != 0.0 {
            let c = slot.bounds.center();
            g = g.attr(
                "transform",
                format!("rotate({} {} {})", fmt_num(slot.rotation), fmt_num(c.x), fmt_num(c.y)),
            );
        }
        match &slot.content {
            SlotContent::Image {
                photo_id,
                source,
                rect,
                ..
            } => match images.ready(source).map(data_uri) {
                Some(Ok(uri)) => g.push(image_node(*rect, uri).attr("preserveAspectRatio", "none")),
                other => {
                    let detail = match other {
                        Some(Err(err)) => format!("photo '{photo_id}': {err}"),
                        _ => format!("photo '{photo_id}' was not fetched"),
                    };
                    report.push(
                        DiagnosticKind::FetchFailure,
                        plan.page_index,
                        Some(slot.index),
                        detail,
                    );
                    g.push(placeholder_node(slot.bounds));
                }
            },
            SlotContent::Placeholder { rect } => g.push(placeholder_node(*rect)),
            SlotContent::Empty => {}
        }
        for cmd in &slot.frame {
            g.push(svg_shape(cmd));
        }
        svg.push(g);
    }

    for text in &plan.texts {
        if let Some(node) = text_node(text) {
            svg.push(node);
        }
    }
    svg
}

fn text_node(text: &TextPlan) -> Option<DomNode> {
    let font = PdfFont {
        family: BaseFamily::resolve(text.style_id.as_deref(), &text.font_family),
        bold: text.bold,
        italic: text.italic,
    };
    let size = text.font_size_px * PT_PER_PX;
    let lines = wrap_lines(&text.content, text.width, size, font);
    if lines.is_empty() {
        return None;
    }

    let (anchor, x) = match text.align {
        TextAlign::Left => ("start", text.origin.x),
        TextAlign::Center => ("middle", text.origin.x + text.width / 2.0),
        TextAlign::Right => ("end", text.origin.x + text.width),
    };
    let generic = match font.family {
        BaseFamily::Sans => "sans-serif",
        BaseFamily::Serif => "serif",
        BaseFamily::Mono => "monospace",
    };
    let mut node = DomNode::element("text")
        .attr(
            "font-family",
            format!("{}, {generic}", text.font_family.replace(['"', ','], "")),
        )
        .attr("font-size", fmt_num(size))
        .attr("fill", text.color.to_hex())
        .attr("text-anchor", anchor);
    if text.bold {
        node = node.attr("font-weight", "bold");
    }
    if text.italic {
        node = node.attr("font-style", "italic");
    }
    if text.rotation != 0.0 {
        node = node.attr(
            "transform",
            format!(
                "rotate({} {} {})",
                fmt_num(text.rotation),
                fmt_num(text.origin.x),
                fmt_num(text.origin.y)
            ),
        );
    }
    for (i, line) in lines.into_iter().enumerate() {
        let baseline = text.origin.y + size * (0.9 + 1.2 * i as f64);
        node.push(
            DomNode::element("tspan")
                .attr("x", fmt_num(x))
                .attr("y", fmt_num(baseline))
                .child(DomNode::text(line)),
        );
    }
    Some(node)
}

fn rect_node(r: Rect, fill: Option<Color>, stroke: Option<Color>) -> DomNode {
    let mut node = DomNode::element("rect")
        .attr("x", fmt_num(r.x0))
        .attr("y", fmt_num(r.y0))
        .attr("width", fmt_num(r.width()))
        .attr("height", fmt_num(r.height()))
        .attr("fill", fill.map_or_else(|| "none".to_owned(), |c| c.to_hex()));
    if let Some(c) = stroke {
        node = node.attr("stroke", c.to_hex()).attr("stroke-width", "1");
    }
    node
}

fn placeholder_node(r: Rect) -> DomNode {
    rect_node(r, Some(PLACEHOLDER_FILL), Some(PLACEHOLDER_STROKE))
}

fn image_node(r: Rect, uri: String) -> DomNode {
    DomNode::element("image")
        .attr("x", fmt_num(r.x0))
        .attr("y", fmt_num(r.y0))
        .attr("width", fmt_num(r.width()))
        .attr("height", fmt_num(r.height()))
        .attr("xlink:href", uri)
}

/// PNG, JPEG, GIF and WebP are inlined as-is; other formats are re-encoded as PNG.
fn data_uri(img: &PreparedImage) -> FolioResult<String> {
    let b64 = base64::engine::general_purpose::STANDARD;
    let mime = match img.format {
        image::ImageFormat::Png => Some("image/png"),
        image::ImageFormat::Jpeg => Some("image/jpeg"),
        image::ImageFormat::Gif => Some("image/gif"),
        image::ImageFormat::WebP => Some("image/webp"),
        _ => None,
    };
    if let Some(mime) = mime {
        return Ok(format!("data:{mime};base64,{}", b64.encode(img.bytes.as_slice())));
    }
    let png = encode_png(&decode_rgba8(img.bytes.as_slice())?)?;
    Ok(format!("data:image/png;base64,{}", b64.encode(png)))
}

fn system_fontdb() -> Arc<usvg::fontdb::Database> {
    static DB: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "system fonts loaded");
        Arc::new(db)
    })
    .clone()
}

fn to_px(v: f64) -> FolioResult<u32> {
    if !(v.is_finite() && v > 0.0) {
        return Err(FolioError::render(format!("invalid raster extent {v}")));
    }
    let px = v.ceil() as u64;
    if px > u64::from(MAX_DIM) {
        return Err(FolioError::render(format!(
            "raster extent {px} exceeds {MAX_DIM} pixels"
        )));
    }
    Ok(px.max(1) as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
