use std::collections::HashMap;

use kurbo::{BezPath, PathEl, Shape};
use pdf_writer::{Content, Filter, Name, Pdf, Rect as PdfRect, Ref, Str, TextStr};

use crate::assets::decode::{decode_rgba8, jpeg_passthrough_components};
use crate::assets::fetch::SourceLoader;
use crate::assets::store::{PreparedImage, PreparedImages};
use crate::catalog::AssetCatalog;
use crate::compile::{
    BackgroundPaint, PLACEHOLDER_FILL, PLACEHOLDER_STROKE, PagePlan, PlanInputs, SlotContent,
    TextPlan, compile_cover, compile_page, sources_for_project,
};
use crate::foundation::core::{Affine, Color, Point, Rect};
use crate::foundation::error::{FolioError, FolioResult};
use crate::foundation::math::cover_rect;
use crate::model::{Cover, Page, Project, TextAlign};
use crate::overlay::translate::{DrawCmd, Geom, Paint, Stroke};
use crate::print::dpi::{Resolution, classify_dpi, effective_dpi};
use crate::print::sizes::PageMedia;
use crate::render::RenderOptions;
use crate::report::{DiagnosticKind, RenderReport};

/// Points per CSS pixel.
pub const PT_PER_PX: f64 = 0.75;
const LINE_HEIGHT: f64 = 1.2;
const FIRST_BASELINE: f64 = 0.9;

/// The three families the export can draw with (PDF base-14 fonts).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseFamily {
    /// Helvetica.
    Sans,
    /// Times.
    Serif,
    /// Courier.
    Mono,
}

impl BaseFamily {
    /// Keyword match on a family name.
    pub fn from_family(family: &str) -> Self {
        let f = family.to_ascii_lowercase();
        if f.contains("mono") || f.contains("courier") || f.contains("typewriter") {
            Self::Mono
        } else if f.contains("sans") {
            Self::Sans
        } else if ["serif", "playfair", "merriweather", "times", "georgia", "garamond"]
            .iter()
            .any(|k| f.contains(k))
        {
            Self::Serif
        } else {
            Self::Sans
        }
    }

    /// Text style id first, then the family name.
    pub fn resolve(style_id: Option<&str>, family: &str) -> Self {
        if let Some(id) = style_id.map(str::to_ascii_lowercase) {
            if id.contains("typewriter") {
                return Self::Mono;
            }
            if id.contains("serif") {
                return Self::Serif;
            }
        }
        Self::from_family(family)
    }
}

/// One of the twelve base fonts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PdfFont {
    /// Family.
    pub family: BaseFamily,
    /// Bold weight.
    pub bold: bool,
    /// Italic or oblique.
    pub italic: bool,
}

impl PdfFont {
    /// PostScript name of the base font.
    pub fn base_name(self) -> &'static str {
        match (self.family, self.bold, self.italic) {
            (BaseFamily::Sans, false, false) => "Helvetica",
            (BaseFamily::Sans, true, false) => "Helvetica-Bold",
            (BaseFamily::Sans, false, true) => "Helvetica-Oblique",
            (BaseFamily::Sans, true, true) => "Helvetica-BoldOblique",
            (BaseFamily::Serif, false, false) => "Times-Roman",
            (BaseFamily::Serif, true, false) => "Times-Bold",
            (BaseFamily::Serif, false, true) => "Times-Italic",
            (BaseFamily::Serif, true, true) => "Times-BoldItalic",
            (BaseFamily::Mono, false, false) => "Courier",
            (BaseFamily::Mono, true, false) => "Courier-Bold",
            (BaseFamily::Mono, false, true) => "Courier-Oblique",
            (BaseFamily::Mono, true, true) => "Courier-BoldOblique",
        }
    }

    // Average advance in em, good enough for wrapping and alignment.
    fn avg_advance(self) -> f64 {
        let base = match self.family {
            BaseFamily::Sans => 0.52,
            BaseFamily::Serif => 0.48,
            BaseFamily::Mono => 0.6,
        };
        if self.bold && self.family != BaseFamily::Mono {
            base + 0.03
        } else {
            base
        }
    }

    fn measure(self, line: &str, size: f64) -> f64 {
        line.chars().count() as f64 * self.avg_advance() * size
    }
}

#[derive(Default)]
struct PageResources {
    fonts: Vec<(String, Ref)>,
    images: Vec<(String, Ref)>,
}

impl PageResources {
    fn use_font(&mut self, entry: &(String, Ref)) {
        if !self.fonts.contains(entry) {
            self.fonts.push(entry.clone());
        }
    }

    fn use_image(&mut self, entry: &(String, Ref)) {
        if !self.images.contains(entry) {
            self.images.push(entry.clone());
        }
    }
}

/// PDF under construction. Pages are appended in call order.
pub struct PdfDocument {
    pdf: Pdf,
    next_id: i32,
    catalog_id: Ref,
    page_tree_id: Ref,
    page_ids: Vec<Ref>,
    fonts: HashMap<PdfFont, (String, Ref)>,
    images: HashMap<u64, (String, Ref)>,
}

impl Default for PdfDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfDocument")
            .field("pages", &self.page_ids.len())
            .field("fonts", &self.fonts.len())
            .field("images", &self.images.len())
            .finish()
    }
}

impl PdfDocument {
    /// Empty document.
    pub fn new() -> Self {
        Self {
            pdf: Pdf::new(),
            next_id: 3,
            catalog_id: Ref::new(1),
            page_tree_id: Ref::new(2),
            page_ids: Vec::new(),
            fonts: HashMap::new(),
            images: HashMap::new(),
        }
    }

    /// Pages written so far.
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn alloc(&mut self) -> Ref {
        let r = Ref::new(self.next_id);
        self.next_id += 1;
        r
    }

    /// Append one page drawing `plan` on `media`.
    ///
    /// Images missing from `images`, or that cannot be embedded, become placeholders and are
    /// reported. Placed photos are checked for print resolution.
    pub fn add_plan(
        &mut self,
        plan: &PagePlan,
        media: &PageMedia,
        images: &PreparedImages,
        report: &mut RenderReport,
    ) -> FolioResult<()> {
        let page_id = self.alloc();
        let content_id = self.alloc();
        let mut content = Content::new();
        let mut res = PageResources::default();

        let sheet = media.media_size();
        let bleed = media.bleed;
        // Page space is y-down from the trim box corner; PDF space is y-up from the sheet corner.
        let flip = Affine::new([1.0, 0.0, 0.0, -1.0, bleed, sheet.height - bleed]);
        let bleed_rect = Rect::new(
            -bleed,
            -bleed,
            plan.size.width + bleed,
            plan.size.height + bleed,
        );

        match &plan.background {
            BackgroundPaint::Color(c) => fill_rect(&mut content, bleed_rect, *c, flip),
            BackgroundPaint::Texture { source, fallback } => {
                let drawn = match images.ready(source) {
                    Some(img) => match self.embed_image(img) {
                        Ok(entry) => {
                            res.use_image(&entry);
                            // Scale to cover the sheet, cropping the overflow like the preview.
                            let area = cover_rect(bleed_rect, img.aspect_ratio());
                            content.save_state();
                            emit_path(&mut content, &(flip * bleed_rect.to_path(0.1)));
                            content.clip_nonzero();
                            content.end_path();
                            draw_image(&mut content, &entry.0, area, flip);
                            content.restore_state();
                            true
                        }
                        Err(err) => {
                            report.push(
                                DiagnosticKind::FetchFailure,
                                plan.page_index,
                                None,
                                format!("background texture: {err}"),
                            );
                            false
                        }
                    },
                    None => {
                        report.push(
                            DiagnosticKind::FetchFailure,
                            plan.page_index,
                            None,
                            format!("background texture '{}' was not fetched", short(source)),
                        );
                        false
                    }
                };
                if !drawn {
                    fill_rect(&mut content, bleed_rect, *fallback, flip);
                }
            }
        }

        for cmd in &plan.decorations {
            draw_cmd(&mut content, cmd, flip);
        }

        for slot in &plan.slots {
            let transform = if slot.rotation != 0.0 {
                flip * Affine::rotate_about(slot.rotation.to_radians(), slot.bounds.center())
            } else {
                flip
            };
            match &slot.content {
                SlotContent::Image {
                    photo_id,
                    source,
                    rect,
                    ..
                } => {
                    let embedded = match images.ready(source) {
                        Some(img) => self
                            .embed_image(img)
                            .map(|e| (e, img))
                            .map_err(|e| e.to_string()),
                        None => Err(format!("photo '{photo_id}' was not fetched")),
                    };
                    match embedded {
                        Ok((entry, img)) => {
                            res.use_image(&entry);
                            draw_image(&mut content, &entry.0, *rect, transform);
                            check_resolution(
                                report,
                                plan.page_index,
                                slot.index,
                                photo_id,
                                img,
                                *rect,
                            );
                        }
                        Err(detail) => {
                            report.push(
                                DiagnosticKind::FetchFailure,
                                plan.page_index,
                                Some(slot.index),
                                detail,
                            );
                            draw_placeholder(&mut content, slot.bounds, transform);
                        }
                    }
                }
                SlotContent::Placeholder { rect } => {
                    draw_placeholder(&mut content, *rect, transform);
                }
                SlotContent::Empty => {}
            }
            for cmd in &slot.frame {
                draw_cmd(&mut content, cmd, transform);
            }
        }

        for text in &plan.texts {
            let font = PdfFont {
                family: BaseFamily::resolve(text.style_id.as_deref(), &text.font_family),
                bold: text.bold,
                italic: text.italic,
            };
            let entry = self.font(font);
            res.use_font(&entry);
            draw_text(&mut content, text, font, &entry.0, flip);
        }

        let raw = content.finish();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&raw, 6);
        self.pdf
            .stream(content_id, &compressed)
            .filter(Filter::FlateDecode);

        let mut page = self.pdf.page(page_id);
        let media_box = PdfRect::new(0.0, 0.0, sheet.width as f32, sheet.height as f32);
        page.media_box(media_box);
        if bleed > 0.0 {
            let t = media.trim_rect();
            page.bleed_box(media_box);
            page.trim_box(PdfRect::new(t.x0 as f32, t.y0 as f32, t.x1 as f32, t.y1 as f32));
        }
        page.parent(self.page_tree_id);
        page.contents(content_id);
        {
            let mut resources = page.resources();
            if !res.fonts.is_empty() {
                let mut fonts = resources.fonts();
                for (name, id) in &res.fonts {
                    fonts.pair(Name(name.as_bytes()), *id);
                }
            }
            if !res.images.is_empty() {
                let mut xobjects = resources.x_objects();
                for (name, id) in &res.images {
                    xobjects.pair(Name(name.as_bytes()), *id);
                }
            }
        }
        drop(page);

        self.page_ids.push(page_id);
        tracing::debug!(page = ?plan.page_index, total = self.page_ids.len(), "pdf page written");
        Ok(())
    }

    fn font(&mut self, font: PdfFont) -> (String, Ref) {
        if let Some(entry) = self.fonts.get(&font) {
            return entry.clone();
        }
        let id = self.alloc();
        let name = format!("F{}", self.fonts.len() + 1);
        self.pdf
            .type1_font(id)
            .base_font(Name(font.base_name().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        let entry = (name, id);
        self.fonts.insert(font, entry.clone());
        entry
    }

    /// Embed once per distinct source. JPEG passes through; anything else is re-encoded as
    /// Flate RGB with an alpha soft mask when needed.
    fn embed_image(&mut self, img: &PreparedImage) -> FolioResult<(String, Ref)> {
        if let Some(entry) = self.images.get(&img.id) {
            return Ok(entry.clone());
        }

        let passthrough = if img.format == image::ImageFormat::Jpeg {
            jpeg_passthrough_components(img.bytes.as_slice())
        } else {
            None
        };

        if let Some(components) = passthrough {
            let (w, h) = (to_i32(img.width)?, to_i32(img.height)?);
            let id = self.alloc();
            let mut xobj = self.pdf.image_xobject(id, img.bytes.as_slice());
            xobj.filter(Filter::DctDecode);
            xobj.width(w);
            xobj.height(h);
            if components == 1 {
                xobj.color_space().device_gray();
            } else {
                xobj.color_space().device_rgb();
            }
            xobj.bits_per_component(8);
            drop(xobj);
            return Ok(self.remember_image(img.id, id));
        }

        let decoded = decode_rgba8(img.bytes.as_slice())?;
        let (w, h) = (to_i32(decoded.width)?, to_i32(decoded.height)?);
        let id = self.alloc();
        let smask = if decoded.has_alpha() {
            let alpha: Vec<u8> = decoded.rgba8.chunks_exact(4).map(|px| px[3]).collect();
            let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&alpha, 6);
            let mask_id = self.alloc();
            let mut mask = self.pdf.image_xobject(mask_id, &compressed);
            mask.filter(Filter::FlateDecode);
            mask.width(w);
            mask.height(h);
            mask.color_space().device_gray();
            mask.bits_per_component(8);
            Some(mask_id)
        } else {
            None
        };

        let rgb: Vec<u8> = decoded
            .rgba8
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&rgb, 6);
        let mut xobj = self.pdf.image_xobject(id, &compressed);
        xobj.filter(Filter::FlateDecode);
        xobj.width(w);
        xobj.height(h);
        xobj.color_space().device_rgb();
        xobj.bits_per_component(8);
        if let Some(mask_id) = smask {
            xobj.s_mask(mask_id);
        }
        drop(xobj);
        Ok(self.remember_image(img.id, id))
    }

    fn remember_image(&mut self, key: u64, id: Ref) -> (String, Ref) {
        let entry = (format!("Im{}", self.images.len() + 1), id);
        self.images.insert(key, entry.clone());
        entry
    }

    /// Write the page tree and return the file bytes.
    pub fn finish(mut self) -> Vec<u8> {
        let info_id = self.alloc();
        self.pdf.document_info(info_id).producer(TextStr("folio"));
        self.pdf.catalog(self.catalog_id).pages(self.page_tree_id);
        let count = i32::try_from(self.page_ids.len()).unwrap_or(i32::MAX);
        self.pdf
            .pages(self.page_tree_id)
            .kids(self.page_ids.iter().copied())
            .count(count);
        self.pdf.finish()
    }
}

/// Append one logical page to `doc`.
///
/// Geometry is compiled exactly as for the DOM preview. Returns what was recovered on the way.
#[tracing::instrument(skip_all, fields(page = %page.id, index = page_index))]
pub fn render_to_pdf(
    page: &Page,
    page_index: usize,
    catalog: &AssetCatalog,
    images: &PreparedImages,
    options: &RenderOptions,
    doc: &mut PdfDocument,
) -> FolioResult<RenderReport> {
    options.validate()?;
    let inputs = PlanInputs {
        catalog,
        images,
        geometry: options.geometry_for_page(page_index),
        page_frame_color: options.page_frame_color_override.as_deref(),
    };
    let mut report = RenderReport::new();
    let plan = compile_page(page, page_index, &inputs, &mut report)?;
    let media = options.media_for(plan.size);
    doc.add_plan(&plan, &media, images, &mut report)?;
    Ok(report)
}

/// Append the cover spread to `doc`.
#[tracing::instrument(skip_all)]
pub fn render_cover_to_pdf(
    cover: &Cover,
    catalog: &AssetCatalog,
    images: &PreparedImages,
    options: &RenderOptions,
    doc: &mut PdfDocument,
) -> FolioResult<RenderReport> {
    options.validate()?;
    let inputs = PlanInputs {
        catalog,
        images,
        geometry: options.cover_panel_geometry(),
        page_frame_color: None,
    };
    let mut report = RenderReport::new();
    let plan = compile_cover(cover, options.spine_width, &inputs, &mut report)?;
    let media = options.media_for(plan.size);
    doc.add_plan(&plan, &media, images, &mut report)?;
    Ok(report)
}

/// Export a whole book: the cover first, then every page in order.
///
/// All images are fetched up front (in parallel); pages are written strictly in order. The
/// project's print size applies unless `options` names one.
#[tracing::instrument(skip_all, fields(pages = project.pages.len()))]
pub fn export_book(
    project: &Project,
    catalog: &AssetCatalog,
    loader: &SourceLoader,
    options: &RenderOptions,
) -> FolioResult<(Vec<u8>, RenderReport)> {
    let mut options = options.clone();
    if options.print_size.is_none() {
        options.print_size = project.print_size.clone();
    }
    options.validate()?;

    let sources = sources_for_project(project, catalog);
    let images = PreparedImages::prepare(&sources, loader, options.threads)?;

    let mut doc = PdfDocument::new();
    let mut report = render_cover_to_pdf(&project.cover, catalog, &images, &options, &mut doc)?;
    for (i, page) in project.pages.iter().enumerate() {
        report.merge(render_to_pdf(page, i, catalog, &images, &options, &mut doc)?);
    }
    tracing::info!(
        pages = doc.page_count(),
        diagnostics = report.diagnostics.len(),
        "book exported"
    );
    Ok((doc.finish(), report))
}

fn check_resolution(
    report: &mut RenderReport,
    page_index: Option<usize>,
    slot_index: usize,
    photo_id: &str,
    img: &PreparedImage,
    rect: Rect,
) {
    let dpi = effective_dpi(img.width, img.height, rect.width(), rect.height());
    let verdict = classify_dpi(dpi);
    if verdict != Resolution::Good {
        report.push(
            DiagnosticKind::LowResolution,
            page_index,
            Some(slot_index),
            format!("photo '{photo_id}' prints at {dpi:.0} dpi ({verdict:?})"),
        );
    }
}

fn to_i32(v: u32) -> FolioResult<i32> {
    i32::try_from(v).map_err(|_| FolioError::render(format!("image dimension {v} too large")))
}

fn short(source: &str) -> &str {
    if source.starts_with("data:") {
        return "data URI";
    }
    source
}

fn coeffs(a: Affine) -> [f32; 6] {
    a.as_coeffs().map(|v| v as f32)
}

fn geom_path(geom: &Geom) -> BezPath {
    match geom {
        Geom::Rect(r) => r.to_path(0.1),
        Geom::Ellipse { center, rx, ry } => {
            kurbo::Ellipse::new(*center, (*rx, *ry), 0.0).to_path(0.1)
        }
        Geom::Path(p) => p.to_bez_path(),
    }
}

fn emit_path(content: &mut Content, path: &BezPath) {
    let mut last = Point::ORIGIN;
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                content.move_to(p.x as f32, p.y as f32);
                last = p;
            }
            PathEl::LineTo(p) => {
                content.line_to(p.x as f32, p.y as f32);
                last = p;
            }
            PathEl::QuadTo(q, p) => {
                let c1 = last + (q - last) * (2.0 / 3.0);
                let c2 = p + (q - p) * (2.0 / 3.0);
                content.cubic_to(
                    c1.x as f32,
                    c1.y as f32,
                    c2.x as f32,
                    c2.y as f32,
                    p.x as f32,
                    p.y as f32,
                );
                last = p;
            }
            PathEl::CurveTo(c1, c2, p) => {
                content.cubic_to(
                    c1.x as f32,
                    c1.y as f32,
                    c2.x as f32,
                    c2.y as f32,
                    p.x as f32,
                    p.y as f32,
                );
                last = p;
            }
            PathEl::ClosePath => {
                content.close_path();
            }
        }
    }
}

/// Shapes are transformed on the CPU so stroke widths stay in page units; the transforms used
/// here never scale.
fn draw_cmd(content: &mut Content, cmd: &DrawCmd, transform: Affine) {
    let path = transform * geom_path(&cmd.geom);
    content.save_state();
    if let Some(fill) = cmd.paint.fill {
        let [r, g, b] = fill.to_rgb_f32();
        content.set_fill_rgb(r, g, b);
    }
    if let Some(stroke) = &cmd.paint.stroke {
        let [r, g, b] = stroke.color.to_rgb_f32();
        content.set_stroke_rgb(r, g, b);
        content.set_line_width(stroke.width as f32);
        if !stroke.dash.is_empty() {
            content.set_dash_pattern(stroke.dash.iter().map(|d| *d as f32), 0.0);
        }
    }
    emit_path(content, &path);
    match (cmd.paint.fill.is_some(), cmd.paint.stroke.is_some()) {
        (true, true) => content.fill_nonzero_and_stroke(),
        (true, false) => content.fill_nonzero(),
        (false, true) => content.stroke(),
        (false, false) => content.end_path(),
    };
    content.restore_state();
}

fn fill_rect(content: &mut Content, rect: Rect, color: Color, transform: Affine) {
    let cmd = DrawCmd {
        geom: Geom::Rect(rect),
        paint: Paint {
            stroke: None,
            fill: Some(color),
        },
    };
    draw_cmd(content, &cmd, transform);
}

fn draw_placeholder(content: &mut Content, rect: Rect, transform: Affine) {
    let cmd = DrawCmd {
        geom: Geom::Rect(rect),
        paint: Paint {
            stroke: Some(Stroke {
                color: PLACEHOLDER_STROKE,
                width: 1.0,
                dash: Vec::new(),
            }),
            fill: Some(PLACEHOLDER_FILL),
        },
    };
    draw_cmd(content, &cmd, transform);
}

fn draw_image(content: &mut Content, name: &str, rect: Rect, transform: Affine) {
    // The image unit square has its origin at the bottom-left corner of the picture.
    let unit = Affine::new([rect.width(), 0.0, 0.0, -rect.height(), rect.x0, rect.y1]);
    content.save_state();
    content.transform(coeffs(transform * unit));
    content.x_object(Name(name.as_bytes()));
    content.restore_state();
}

fn draw_text(content: &mut Content, text: &TextPlan, font: PdfFont, font_name: &str, flip: Affine) {
    let size = text.font_size_px * PT_PER_PX;
    let lines = wrap_lines(&text.content, text.width, size, font);
    if lines.is_empty() {
        return;
    }
    let rotate = Affine::rotate_about(text.rotation.to_radians(), text.origin);
    let [r, g, b] = text.color.to_rgb_f32();

    content.save_state();
    content.set_fill_rgb(r, g, b);
    content.begin_text();
    content.set_font(Name(font_name.as_bytes()), size as f32);
    for (i, line) in lines.iter().enumerate() {
        let free = (text.width - font.measure(line, size)).max(0.0);
        let dx = match text.align {
            TextAlign::Left => 0.0,
            TextAlign::Center => free / 2.0,
            TextAlign::Right => free,
        };
        let baseline = (
            text.origin.x + dx,
            text.origin.y + size * (FIRST_BASELINE + LINE_HEIGHT * i as f64),
        );
        let m = flip * rotate * Affine::translate(baseline) * Affine::scale_non_uniform(1.0, -1.0);
        content.set_text_matrix(coeffs(m));
        content.show(Str(&encode_win_ansi(line)));
    }
    content.end_text();
    content.restore_state();
}

/// Greedy word wrap on explicit lines.
pub(crate) fn wrap_lines(content: &str, width: f64, size: f64, font: PdfFont) -> Vec<String> {
    let mut out = Vec::new();
    for para in content.lines() {
        let mut line = String::new();
        for word in para.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
                continue;
            }
            let candidate = format!("{line} {word}");
            if font.measure(&candidate, size) <= width {
                line = candidate;
            } else {
                out.push(std::mem::take(&mut line));
                line.push_str(word);
            }
        }
        out.push(line);
    }
    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out
}

/// Encode for the WinAnsi base-font encoding; unmappable characters become `?`.
pub(crate) fn encode_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            ' '..='~' | '\u{a0}'..='\u{ff}' => c as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/pdf.rs"]
mod tests;
