use std::fmt;
use std::sync::Arc;

use crate::foundation::core::Size;
use crate::model::FrameShape;
use crate::overlay::primitive::{PrimitiveDef, Style};

/// Procedural frame: produces primitives for a target of `width` x `height` local units.
pub trait FrameGenerator: Send + Sync + fmt::Debug {
    /// Primitives in `0..width`, `0..height`.
    fn generate(&self, width: f64, height: f64, color: &str, shape: FrameShape) -> Vec<PrimitiveDef>;
}

/// Where a frame may be applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameKind {
    /// Decorates the whole page.
    Page,
    /// Decorates a single photo slot.
    Image,
}

/// How a frame produces its primitives.
#[derive(Clone, Debug)]
pub enum FrameSource {
    /// Computed per target size.
    Generated(Arc<dyn FrameGenerator>),
    /// Authored once in a fixed view box and scaled to the target.
    Static {
        /// Authoring space.
        view_box: Size,
        /// Primitives in view-box units.
        primitives: Vec<PrimitiveDef>,
    },
}

/// Frame catalog entry.
#[derive(Clone, Debug)]
pub struct FrameDef {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Page or image frame.
    pub kind: FrameKind,
    /// Default color.
    pub color: String,
    /// Primitive source.
    pub source: FrameSource,
}

impl FrameDef {
    /// Primitives for a `size` target, plus the local space they are authored in.
    pub fn primitives(&self, size: Size, color: &str, shape: FrameShape) -> (Vec<PrimitiveDef>, Size) {
        match &self.source {
            FrameSource::Generated(g) => (g.generate(size.width, size.height, color, shape), size),
            FrameSource::Static {
                view_box,
                primitives,
            } => (primitives.clone(), *view_box),
        }
    }
}

/// View box of a [`StaticFrameDef`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewBox {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// Serializable static frame, as found in project files.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticFrameDef {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Page or image frame.
    pub kind: FrameKind,
    /// Default color, substituted for `currentColor`.
    pub color: String,
    /// Authoring space.
    pub view_box: ViewBox,
    /// Primitives in view-box units.
    pub primitives: Vec<PrimitiveDef>,
}

impl StaticFrameDef {
    /// Convert into a catalog entry.
    pub fn into_frame(self) -> FrameDef {
        FrameDef {
            id: self.id,
            name: self.name,
            kind: self.kind,
            color: self.color,
            source: FrameSource::Static {
                view_box: Size::new(self.view_box.width, self.view_box.height),
                primitives: self.primitives,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Builtin {
    ClassicGold,
    ModernBold,
    ElegantSerif,
    ArtDeco,
    CornerFlourish,
    MinimalFloating,
    DoubleInk,
    DotsFine,
    VignetteOval,
    Diagonal,
    ThinLine,
    Polaroid,
    Dashed,
}

impl FrameGenerator for Builtin {
    fn generate(&self, w: f64, h: f64, color: &str, shape: FrameShape) -> Vec<PrimitiveDef> {
        match self {
            Self::ClassicGold => vec![
                inset_rect(w, h, 20.0, Style::stroked(color, 2.0)),
                inset_rect(w, h, 26.0, Style::stroked(color, 1.0)),
            ],
            Self::ModernBold => vec![inset_rect(w, h, 24.0, Style::stroked(color, 4.0))],
            Self::ElegantSerif => vec![
                inset_rect(w, h, 16.0, Style::stroked(color, 3.0)),
                inset_rect(w, h, 23.0, Style::stroked(color, 0.5)),
            ],
            Self::ArtDeco => {
                let d = format!("{} {}", octagon(w, h, 20.0), octagon(w, h, 25.0));
                vec![PrimitiveDef::path(d, Style::stroked(color, 1.5))]
            }
            Self::CornerFlourish => {
                let (m, len) = (30.0, 40.0);
                let d = format!(
                    "M {m},{} L {m},{m} L {},{m} M {},{m} L {},{m} L {},{} M {m},{} L {m},{} L {},{} M {},{} L {},{} L {},{}",
                    m + len,
                    m + len,
                    w - m - len,
                    w - m,
                    w - m,
                    m + len,
                    h - m - len,
                    h - m,
                    m + len,
                    h - m,
                    w - m - len,
                    h - m,
                    w - m,
                    h - m,
                    w - m,
                    h - m - len,
                );
                let mut out = vec![PrimitiveDef::path(d, Style::stroked(color, 2.0))];
                for (cx, cy) in [(m, m), (w - m, m), (m, h - m), (w - m, h - m)] {
                    out.push(PrimitiveDef::circle(cx, cy, 3.0, Style::filled(color)));
                }
                out
            }
            Self::MinimalFloating => vec![inset_rect(
                w,
                h,
                40.0,
                Style::stroked(color, 0.5).dashed("4 4"),
            )],
            Self::DoubleInk => vec![
                inset_rect(w, h, 18.0, Style::stroked(color, 2.0)),
                inset_rect(w, h, 28.0, Style::stroked(color, 0.8)),
            ],
            Self::DotsFine => vec![inset_rect(
                w,
                h,
                22.0,
                Style::stroked(color, 1.0).dashed("1 6"),
            )],
            Self::VignetteOval => vec![PrimitiveDef::ellipse(
                w / 2.0,
                h / 2.0,
                (w - 68.0) / 2.0,
                (h - 68.0) / 2.0,
                Style::stroked(color, 1.5),
            )],
            Self::Diagonal => {
                let (i, d) = (24.0, 40.0);
                let corners = [
                    ((i, i + d), (i + d, i)),
                    ((w - i - d, i), (w - i, i + d)),
                    ((i, h - i - d), (i + d, h - i)),
                    ((w - i - d, h - i), (w - i, h - i - d)),
                ];
                let mut out: Vec<PrimitiveDef> = corners
                    .iter()
                    .map(|((x0, y0), (x1, y1))| {
                        PrimitiveDef::path(format!("M{x0} {y0} L{x1} {y1}"), Style::stroked(color, 2.0))
                    })
                    .collect();
                out.push(inset_rect(w, h, i, Style::stroked(color, 0.6)));
                out
            }
            Self::ThinLine => vec![shape_outline(w, h, shape, Style::stroked(color, 2.0))],
            Self::Polaroid => {
                let band = 12.0;
                match shape {
                    FrameShape::Rect => vec![
                        inset_rect(w, h, band / 2.0, Style::stroked(color, band)),
                        PrimitiveDef::rect(
                            0.0,
                            h - band * 3.0,
                            w,
                            band * 3.0,
                            Style::filled(color),
                        ),
                    ],
                    _ => vec![shape_outline(w, h, shape, Style::stroked(color, band))],
                }
            }
            Self::Dashed => vec![shape_outline(
                w,
                h,
                shape,
                Style::stroked(color, 1.5).dashed("6 4"),
            )],
        }
    }
}

/// Rectangle with 45-degree cut corners, `m` from the edges.
fn octagon(w: f64, h: f64, m: f64) -> String {
    let s = 15.0;
    format!(
        "M {},{m} L {},{m} L {},{} L {},{} L {},{} L {},{} L {m},{} L {m},{} Z",
        m + s,
        w - m - s,
        w - m,
        m + s,
        w - m,
        h - m - s,
        w - m - s,
        h - m,
        m + s,
        h - m,
        h - m - s,
        m + s,
    )
}

fn inset_rect(w: f64, h: f64, inset: f64, style: Style) -> PrimitiveDef {
    PrimitiveDef::rect(inset, inset, w - inset * 2.0, h - inset * 2.0, style)
}

/// Outline hugging the target, inset by half the stroke so it stays inside.
fn shape_outline(w: f64, h: f64, shape: FrameShape, style: Style) -> PrimitiveDef {
    let half = style.stroke_width.unwrap_or(1.0) / 2.0;
    match shape {
        FrameShape::Rect => inset_rect(w, h, half, style),
        FrameShape::Circle => {
            PrimitiveDef::circle(w / 2.0, h / 2.0, w.min(h) / 2.0 - half, style)
        }
        FrameShape::Oval => {
            PrimitiveDef::ellipse(w / 2.0, h / 2.0, w / 2.0 - half, h / 2.0 - half, style)
        }
    }
}

pub(crate) fn builtin() -> Vec<FrameDef> {
    const TABLE: &[(&str, &str, FrameKind, &str, Builtin)] = &[
        ("frame-classic-gold", "Classic Gold", FrameKind::Page, "#d4af37", Builtin::ClassicGold),
        ("frame-modern-bold", "Modern Bold", FrameKind::Page, "#1a1a1a", Builtin::ModernBold),
        ("frame-elegant-serif", "Elegant Serif", FrameKind::Page, "#555555", Builtin::ElegantSerif),
        ("frame-art-deco", "Art Deco", FrameKind::Page, "#c0c0c0", Builtin::ArtDeco),
        ("frame-corner-flourish", "Corner Flourish", FrameKind::Page, "#8b4513", Builtin::CornerFlourish),
        ("frame-minimal-floating", "Minimal Floating", FrameKind::Page, "#999999", Builtin::MinimalFloating),
        ("frame-double-ink", "Double Ink", FrameKind::Page, "#2f2f2f", Builtin::DoubleInk),
        ("frame-dots-fine", "Fine Dots", FrameKind::Page, "#94a3b8", Builtin::DotsFine),
        ("frame-vignette-oval", "Oval Vignette", FrameKind::Page, "#64748b", Builtin::VignetteOval),
        ("frame-diagonal", "Diagonal Corners", FrameKind::Page, "#111827", Builtin::Diagonal),
        ("image-thin-line", "Thin Line", FrameKind::Image, "#333333", Builtin::ThinLine),
        ("image-polaroid", "Polaroid", FrameKind::Image, "#ffffff", Builtin::Polaroid),
        ("image-dashed", "Dashed", FrameKind::Image, "#666666", Builtin::Dashed),
    ];
    TABLE
        .iter()
        .map(|&(id, name, kind, color, generator)| FrameDef {
            id: id.to_owned(),
            name: name.to_owned(),
            kind,
            color: color.to_owned(),
            source: FrameSource::Generated(Arc::new(generator)),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/frames.rs"]
mod tests;
