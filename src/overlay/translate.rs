use crate::foundation::core::{Affine, Color, Point, Rect, Size};
use crate::overlay::path::PathData;
use crate::overlay::primitive::{PrimitiveDef, Style};

/// Resolved stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Width in target units.
    pub width: f64,
    /// Dash lengths in target units, empty for solid.
    pub dash: Vec<f64>,
}

/// Resolved paint; at least one of `stroke`/`fill` is set.
#[derive(Clone, Debug, PartialEq)]
pub struct Paint {
    /// Outline.
    pub stroke: Option<Stroke>,
    /// Interior.
    pub fill: Option<Color>,
}

/// Geometry in target coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Geom {
    /// Axis-aligned rectangle.
    Rect(Rect),
    /// Axis-aligned ellipse (circles become ellipses under non-uniform scale).
    Ellipse {
        /// Center.
        center: Point,
        /// Horizontal radius.
        rx: f64,
        /// Vertical radius.
        ry: f64,
    },
    /// Polyline path.
    Path(PathData),
}

/// One drawable shape, ready for any backend.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCmd {
    /// Shape.
    pub geom: Geom,
    /// Paint.
    pub paint: Paint,
}

/// Output of [`map_to_target`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Translation {
    /// Drawable shapes in authoring order.
    pub cmds: Vec<DrawCmd>,
    /// Human-readable reasons for every primitive that was dropped as unsupported or malformed.
    pub rejected: Vec<String>,
}

/// Map primitives authored in `local` space into `target`.
///
/// The mapping is a non-uniform scale followed by a translation. Stroke widths and dash lengths
/// scale by the geometric mean of the two axis factors. Primitives without a paintable stroke or
/// fill are dropped silently; unknown or malformed ones are dropped and listed in
/// [`Translation::rejected`].
pub fn map_to_target(
    prims: &[PrimitiveDef],
    local: Size,
    target: Rect,
    current_color: &str,
) -> Translation {
    let mut out = Translation::default();
    if !(local.width > 0.0 && local.height > 0.0 && local.width.is_finite() && local.height.is_finite())
    {
        out.rejected
            .push(format!("invalid local space {}x{}", local.width, local.height));
        return out;
    }

    let sx = target.width() / local.width;
    let sy = target.height() / local.height;
    let k = (sx * sy).abs().sqrt();
    let affine = Affine::translate((target.x0, target.y0)) * Affine::scale_non_uniform(sx, sy);

    for prim in prims {
        let Some(style) = prim.style() else {
            out.rejected.push("unknown primitive type".to_owned());
            continue;
        };
        let Some(paint) = resolve_paint(style, current_color, k) else {
            continue;
        };
        match map_geom(prim, affine, sx, sy) {
            Ok(geom) => out.cmds.push(DrawCmd { geom, paint }),
            Err(reason) => out.rejected.push(reason),
        }
    }
    out
}

fn map_geom(prim: &PrimitiveDef, affine: Affine, sx: f64, sy: f64) -> Result<Geom, String> {
    match prim {
        PrimitiveDef::Rect {
            x,
            y,
            width,
            height,
            ..
        } => {
            if !all_finite(&[*x, *y, *width, *height]) || *width <= 0.0 || *height <= 0.0 {
                return Err(format!("rect with invalid geometry {width}x{height}"));
            }
            let p0 = affine * Point::new(*x, *y);
            let p1 = affine * Point::new(x + width, y + height);
            Ok(Geom::Rect(Rect::from_points(p0, p1)))
        }
        PrimitiveDef::Circle { cx, cy, r, .. } => {
            if !all_finite(&[*cx, *cy, *r]) || *r <= 0.0 {
                return Err(format!("circle with invalid radius {r}"));
            }
            Ok(Geom::Ellipse {
                center: affine * Point::new(*cx, *cy),
                rx: r * sx.abs(),
                ry: r * sy.abs(),
            })
        }
        PrimitiveDef::Ellipse { cx, cy, rx, ry, .. } => {
            if !all_finite(&[*cx, *cy, *rx, *ry]) || *rx <= 0.0 || *ry <= 0.0 {
                return Err(format!("ellipse with invalid radii {rx}x{ry}"));
            }
            Ok(Geom::Ellipse {
                center: affine * Point::new(*cx, *cy),
                rx: rx * sx.abs(),
                ry: ry * sy.abs(),
            })
        }
        PrimitiveDef::Path { d, .. } => PathData::parse(d)
            .map(|p| Geom::Path(p.transformed(affine)))
            .map_err(|e| e.to_string()),
        PrimitiveDef::Unknown => Err("unknown primitive type".to_owned()),
    }
}

fn resolve_paint(style: &Style, current_color: &str, k: f64) -> Option<Paint> {
    let resolve = |s: &str| {
        if s.trim().eq_ignore_ascii_case("currentcolor") {
            Color::parse(current_color)
        } else {
            Color::parse(s)
        }
    };

    let width = style.stroke_width.unwrap_or(1.0) * k;
    let stroke = style
        .stroke
        .as_deref()
        .and_then(resolve)
        .filter(|_| width.is_finite() && width > 0.0)
        .map(|color| Stroke {
            color,
            width,
            dash: style
                .stroke_dasharray
                .as_deref()
                .map(|d| parse_dash(d, k))
                .unwrap_or_default(),
        });
    let fill = style.fill.as_deref().and_then(resolve);

    if stroke.is_none() && fill.is_none() {
        return None;
    }
    Some(Paint { stroke, fill })
}

fn parse_dash(s: &str, k: f64) -> Vec<f64> {
    let vals: Option<Vec<f64>> = s
        .split(|c: char| c == ',' || c.is_ascii_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0))
        .collect();
    match vals {
        Some(v) if v.iter().any(|d| *d > 0.0) => v.into_iter().map(|d| d * k).collect(),
        _ => Vec::new(),
    }
}

fn all_finite(vals: &[f64]) -> bool {
    vals.iter().all(|v| v.is_finite())
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/translate.rs"]
mod tests;
