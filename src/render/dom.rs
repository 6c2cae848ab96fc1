use crate::assets::store::PreparedImages;
use crate::catalog::AssetCatalog;
use crate::compile::{
    BackgroundPaint, PLACEHOLDER_FILL, PLACEHOLDER_STROKE, PagePlan, PlanInputs, SlotContent,
    SlotPlan, TextPlan, compile_cover, compile_page,
};
use crate::foundation::core::{Color, Rect};
use crate::foundation::error::FolioResult;
use crate::model::{Cover, Page, TextAlign};
use crate::overlay::path::fmt_num;
use crate::overlay::translate::{DrawCmd, Geom, Paint};
use crate::render::RenderOptions;
use crate::render::pdf::BaseFamily;
use crate::report::RenderReport;

/// CSS pixels per point.
pub const PX_PER_PT: f64 = 96.0 / 72.0;

/// What the editor currently has selected.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "target")]
pub enum Selection {
    /// Nothing.
    #[default]
    None,
    /// A slot by index.
    Slot(usize),
    /// A text element by id.
    Text(String),
}

/// Minimal DOM tree: elements with ordered attributes, and text.
#[derive(Clone, Debug, PartialEq)]
pub enum DomNode {
    /// Element node.
    Element {
        /// Tag name.
        tag: String,
        /// Attributes in insertion order.
        attrs: Vec<(String, String)>,
        /// Child nodes.
        children: Vec<DomNode>,
    },
    /// Text node (escaped on output).
    Text(String),
}

const VOID_TAGS: &[&str] = &["img", "br", "rect", "ellipse", "path", "image"];

impl DomNode {
    /// Empty element.
    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Text node.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Builder: set an attribute (appended, not deduplicated).
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Element { attrs, .. } = &mut self {
            attrs.push((name.into(), value.into()));
        }
        self
    }

    /// Builder: append a child.
    pub fn child(mut self, node: DomNode) -> Self {
        self.push(node);
        self
    }

    /// Append a child in place. Text nodes ignore children.
    pub fn push(&mut self, node: DomNode) {
        if let Self::Element { children, .. } = self {
            children.push(node);
        }
    }

    /// Tag name of an element.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element { tag, .. } => Some(tag.as_str()),
            Self::Text(_) => None,
        }
    }

    /// Attribute value.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        match self {
            Self::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            Self::Text(_) => None,
        }
    }

    /// Child nodes.
    pub fn children(&self) -> &[DomNode] {
        match self {
            Self::Element { children, .. } => children.as_slice(),
            Self::Text(_) => &[],
        }
    }

    /// True when the `class` attribute lists `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|c| c.split_ascii_whitespace().any(|c| c == class))
    }

    /// Pixel value of an inline style property such as `left`.
    pub fn style_px(&self, prop: &str) -> Option<f64> {
        self.get_attr("style")?.split(';').find_map(|decl| {
            let (k, v) = decl.split_once(':')?;
            if k.trim() != prop {
                return None;
            }
            v.trim().strip_suffix("px")?.parse().ok()
        })
    }

    /// Depth-first search, including `self`.
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&DomNode) -> bool) -> Vec<&'a DomNode> {
        let mut out = Vec::new();
        self.walk(pred, &mut out);
        out
    }

    fn walk<'a>(&'a self, pred: &dyn Fn(&DomNode) -> bool, out: &mut Vec<&'a DomNode>) {
        if pred(self) {
            out.push(self);
        }
        for c in self.children() {
            c.walk(pred, out);
        }
    }

    /// Concatenated text content.
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Element { children, .. } => children.iter().map(DomNode::text_content).collect(),
        }
    }

    /// Serialize as HTML (SVG children use self-closing shape tags).
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(s) => out.push_str(&escape(s)),
            Self::Element {
                tag,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (k, v) in attrs {
                    out.push(' ');
                    out.push_str(k);
                    out.push_str("=\"");
                    out.push_str(&escape(v));
                    out.push('"');
                }
                if children.is_empty() && VOID_TAGS.contains(&tag.as_str()) {
                    out.push_str("/>");
                    return;
                }
                out.push('>');
                for c in children {
                    c.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render one page as an interactive DOM tree.
///
/// Geometry comes from [`compile_page`], so it matches the PDF export exactly. Problems are
/// recorded in the returned report; only a corrupt layout fails.
#[tracing::instrument(skip_all, fields(page = %page.id, index = page_index))]
pub fn render(
    page: &Page,
    page_index: usize,
    catalog: &AssetCatalog,
    images: &PreparedImages,
    options: &RenderOptions,
    selection: &Selection,
) -> FolioResult<(DomNode, RenderReport)> {
    options.validate()?;
    let inputs = PlanInputs {
        catalog,
        images,
        geometry: options.geometry_for_page(page_index),
        page_frame_color: options.page_frame_color_override.as_deref(),
    };
    let mut report = RenderReport::new();
    let plan = compile_page(page, page_index, &inputs, &mut report)?;
    let scale = preview_scale(&plan, options);
    let mut node = render_plan(&plan, scale, selection);
    if let DomNode::Element { attrs, .. } = &mut node {
        attrs.push(("data-page-id".to_owned(), page.id.clone()));
    }
    Ok((node, report))
}

/// Render the cover spread as a DOM tree.
#[tracing::instrument(skip_all)]
pub fn render_cover(
    cover: &Cover,
    catalog: &AssetCatalog,
    images: &PreparedImages,
    options: &RenderOptions,
    selection: &Selection,
) -> FolioResult<(DomNode, RenderReport)> {
    options.validate()?;
    let inputs = PlanInputs {
        catalog,
        images,
        geometry: options.cover_panel_geometry(),
        page_frame_color: None,
    };
    let mut report = RenderReport::new();
    let plan = compile_cover(cover, options.spine_width, &inputs, &mut report)?;
    let scale = preview_scale(&plan, options);
    Ok((render_plan(&plan, scale, selection), report))
}

fn preview_scale(plan: &PagePlan, options: &RenderOptions) -> f64 {
    options
        .preview_width_px
        .map_or(PX_PER_PT, |w| w / plan.size.width)
}

/// Draw a plan at `scale` CSS pixels per page unit.
pub fn render_plan(plan: &PagePlan, scale: f64, selection: &Selection) -> DomNode {
    let mut style = format!(
        "position:relative;overflow:hidden;width:{}px;height:{}px;",
        fmt_num(plan.size.width * scale),
        fmt_num(plan.size.height * scale)
    );
    match &plan.background {
        BackgroundPaint::Color(c) => style.push_str(&format!("background-color:{};", c.to_css())),
        BackgroundPaint::Texture { source, fallback } => style.push_str(&format!(
            "background-color:{};background-image:url('{}');background-size:cover;\
             background-position:center;",
            fallback.to_css(),
            css_url(source)
        )),
    }

    let class = if plan.page_index.is_some() {
        "folio-page"
    } else {
        "folio-page folio-cover"
    };
    let mut root = DomNode::element("div")
        .attr("class", class)
        .attr("style", style);
    if let Some(i) = plan.page_index {
        root = root.attr("data-page-index", i.to_string());
    }

    if !plan.decorations.is_empty() {
        let full = Rect::from_origin_size((0.0, 0.0), plan.size);
        root.push(overlay_svg("page-frame", full, scale, &plan.decorations));
    }
    for slot in &plan.slots {
        root.push(slot_node(slot, scale, selection));
    }
    for text in &plan.texts {
        root.push(text_node(text, scale, selection));
    }
    root
}

fn slot_node(slot: &SlotPlan, scale: f64, selection: &Selection) -> DomNode {
    let b = slot.bounds;
    let mut style = box_style(b, scale);
    if slot.rotation != 0.0 {
        style.push_str(&format!("transform:rotate({}deg);", fmt_num(slot.rotation)));
    }
    let selected = *selection == Selection::Slot(slot.index);
    let mut class = String::from("page-slot photo-slot");
    if selected {
        class.push_str(" selected");
    }
    let mut node = DomNode::element("div")
        .attr("class", class)
        .attr("style", style)
        .attr("data-slot-index", slot.index.to_string())
        .attr("data-selectable", "slot");
    if let Some(id) = &slot.photo_id {
        node = node.attr("data-photo-id", id.clone());
    }

    match &slot.content {
        SlotContent::Image {
            photo_id,
            source,
            rect,
            ..
        } => {
            let local = Rect::new(rect.x0 - b.x0, rect.y0 - b.y0, rect.x1 - b.x0, rect.y1 - b.y0);
            node.push(
                DomNode::element("img")
                    .attr("class", "slot-photo")
                    .attr("src", source.clone())
                    .attr("alt", photo_id.clone())
                    .attr("draggable", "false")
                    .attr("style", box_style(local, scale)),
            );
        }
        SlotContent::Placeholder { .. } => {
            node.push(DomNode::element("div").attr("class", "slot-placeholder").attr(
                "style",
                format!(
                    "position:absolute;inset:0;box-sizing:border-box;background:{};border:1px solid {};",
                    PLACEHOLDER_FILL.to_css(),
                    PLACEHOLDER_STROKE.to_css()
                ),
            ));
        }
        SlotContent::Empty => {
            node.push(
                DomNode::element("div")
                    .attr("class", "slot-empty")
                    .attr("style", "position:absolute;inset:0;"),
            );
        }
    }

    if !slot.frame.is_empty() {
        node.push(overlay_svg("slot-frame", b, scale, &slot.frame));
    }
    if selected {
        node.push(selection_overlay());
    }
    node
}

fn text_node(text: &TextPlan, scale: f64, selection: &Selection) -> DomNode {
    let selected = matches!(selection, Selection::Text(id) if *id == text.id);
    let mut style = format!(
        "position:absolute;left:{}px;top:{}px;width:{}px;font-size:{}px;line-height:1.2;\
         font-family:{};color:{};text-align:{};white-space:pre-wrap;",
        fmt_num(text.origin.x * scale),
        fmt_num(text.origin.y * scale),
        fmt_num(text.width * scale),
        fmt_num(text.font_size_px * 0.75 * scale),
        css_family(text.style_id.as_deref(), &text.font_family),
        text.color.to_css(),
        match text.align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    );
    if text.bold {
        style.push_str("font-weight:bold;");
    }
    if text.italic {
        style.push_str("font-style:italic;");
    }
    if text.rotation != 0.0 {
        style.push_str(&format!(
            "transform:rotate({}deg);transform-origin:0 0;",
            fmt_num(text.rotation)
        ));
    }
    let class = if selected {
        "page-element text-element selected"
    } else {
        "page-element text-element"
    };
    let mut node = DomNode::element("div")
        .attr("class", class)
        .attr("style", style)
        .attr("data-element-id", text.id.clone())
        .attr("data-selectable", "text")
        .child(DomNode::text(text.content.clone()));
    if selected {
        node.push(selection_overlay());
    }
    node
}

fn selection_overlay() -> DomNode {
    DomNode::element("div").attr("class", "selection-overlay").attr(
        "style",
        "position:absolute;inset:-2px;border:2px solid #3b82f6;pointer-events:none;",
    )
}

fn box_style(r: Rect, scale: f64) -> String {
    format!(
        "position:absolute;left:{}px;top:{}px;width:{}px;height:{}px;",
        fmt_num(r.x0 * scale),
        fmt_num(r.y0 * scale),
        fmt_num(r.width() * scale),
        fmt_num(r.height() * scale)
    )
}

/// SVG element filling its parent whose user space is `view`, in page units.
fn overlay_svg(class: &str, view: Rect, scale: f64, cmds: &[DrawCmd]) -> DomNode {
    let mut svg = DomNode::element("svg")
        .attr("class", class)
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr(
            "viewBox",
            format!(
                "{} {} {} {}",
                fmt_num(view.x0),
                fmt_num(view.y0),
                fmt_num(view.width()),
                fmt_num(view.height())
            ),
        )
        .attr("preserveAspectRatio", "none")
        .attr(
            "style",
            format!(
                "position:absolute;left:0;top:0;width:{}px;height:{}px;overflow:visible;pointer-events:none;",
                fmt_num(view.width() * scale),
                fmt_num(view.height() * scale)
            ),
        );
    for cmd in cmds {
        svg.push(svg_shape(cmd));
    }
    svg
}

/// One draw command as an SVG shape element in page units.
pub(crate) fn svg_shape(cmd: &DrawCmd) -> DomNode {
    let node = match &cmd.geom {
        Geom::Rect(r) => DomNode::element("rect")
            .attr("x", fmt_num(r.x0))
            .attr("y", fmt_num(r.y0))
            .attr("width", fmt_num(r.width()))
            .attr("height", fmt_num(r.height())),
        Geom::Ellipse { center, rx, ry } => DomNode::element("ellipse")
            .attr("cx", fmt_num(center.x))
            .attr("cy", fmt_num(center.y))
            .attr("rx", fmt_num(*rx))
            .attr("ry", fmt_num(*ry)),
        Geom::Path(p) => DomNode::element("path").attr("d", p.to_svg()),
    };
    paint_attrs(node, &cmd.paint)
}

fn paint_attrs(mut node: DomNode, paint: &Paint) -> DomNode {
    node = match paint.fill {
        Some(c) => with_color(node, "fill", c),
        None => node.attr("fill", "none"),
    };
    if let Some(s) = &paint.stroke {
        node = with_color(node, "stroke", s.color).attr("stroke-width", fmt_num(s.width));
        if !s.dash.is_empty() {
            let dash: Vec<String> = s.dash.iter().map(|d| fmt_num(*d)).collect();
            node = node.attr("stroke-dasharray", dash.join(" "));
        }
    }
    node
}

fn with_color(node: DomNode, attr: &str, c: Color) -> DomNode {
    let node = node.attr(attr, c.to_hex());
    if c.a == 255 {
        node
    } else {
        node.attr(
            format!("{attr}-opacity"),
            fmt_num(f64::from(c.a) / 255.0),
        )
    }
}

/// Escape `source` for a single-quoted CSS `url('..')`.
fn css_url(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for ch in source.chars() {
        match ch {
            '\\' | '\'' => {
                out.push('\\');
                out.push(ch);
            }
            c if c.is_control() => out.push_str(&format!("\\{:x} ", u32::from(c))),
            c => out.push(c),
        }
    }
    out
}

fn css_family(style_id: Option<&str>, family: &str) -> String {
    let generic = match BaseFamily::resolve(style_id, family) {
        BaseFamily::Serif => "serif",
        BaseFamily::Mono => "monospace",
        BaseFamily::Sans => "sans-serif",
    };
    let name = family.replace(['"', '\'', ';'], "");
    format!("'{name}', {generic}")
}

#[cfg(test)]
#[path = "../../tests/unit/render/dom.rs"]
mod tests;
