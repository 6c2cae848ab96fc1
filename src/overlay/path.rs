use kurbo::BezPath;

use crate::foundation::core::{Affine, Line, Point};

/// One operation of the restricted path vocabulary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathOp {
    /// Start a subpath; also becomes the target of the next close.
    Move(Point),
    /// Straight segment from the current point.
    Line(Point),
    /// Straight segment back to the last move point.
    Close,
}

/// Path data reduced to absolute `M`/`L`/`Z` operations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    /// Operations in authoring order.
    pub ops: Vec<PathOp>,
}

/// Why a path string was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// A command outside `M`, `L`, `Z`, `z`.
    #[error("unsupported path command '{command}' at byte {offset}")]
    UnsupportedCommand {
        /// Offending command letter.
        command: char,
        /// Byte offset in the source string.
        offset: usize,
    },
    /// Coordinates before any command, or a path not starting with `M`.
    #[error("path must start with 'M'")]
    MissingMove,
    /// A number that does not parse, or an odd coordinate count.
    #[error("malformed coordinates at byte {offset}")]
    Malformed {
        /// Byte offset in the source string.
        offset: usize,
    },
}

impl PathData {
    /// Parse SVG path data restricted to absolute `M`/`L` and `Z`/`z`.
    ///
    /// Extra coordinate pairs after `M` are implicit line-tos, after `L` further line-tos.
    /// Relative and curve commands are rejected rather than approximated.
    pub fn parse(d: &str) -> Result<Self, PathError> {
        let mut ops = Vec::new();
        let mut cmd: Option<char> = None;
        let mut pending: Option<f64> = None;
        let mut first_pair_in_cmd = true;
        let bytes = d.as_bytes();
        let mut i = 0;

        while i < bytes.len() {
            let c = bytes[i] as char;
            if c.is_ascii_whitespace() || c == ',' {
                i += 1;
                continue;
            }
            if c.is_ascii_alphabetic() && c != 'e' && c != 'E' {
                if pending.is_some() || (matches!(cmd, Some('M' | 'L')) && first_pair_in_cmd) {
                    return Err(PathError::Malformed { offset: i });
                }
                match c {
                    'M' => {}
                    'L' if cmd.is_some() => {}
                    'Z' | 'z' if cmd.is_some() => ops.push(PathOp::Close),
                    'L' | 'Z' | 'z' => return Err(PathError::MissingMove),
                    other => {
                        return Err(PathError::UnsupportedCommand {
                            command: other,
                            offset: i,
                        });
                    }
                }
                cmd = Some(c);
                first_pair_in_cmd = true;
                i += 1;
                continue;
            }

            let start = i;
            let end = scan_number(bytes, i);
            if end == start {
                return Err(PathError::Malformed { offset: start });
            }
            let v: f64 = d[start..end]
                .parse()
                .map_err(|_| PathError::Malformed { offset: start })?;
            if !v.is_finite() {
                return Err(PathError::Malformed { offset: start });
            }
            i = end;

            let Some(current) = cmd else {
                return Err(PathError::MissingMove);
            };
            match pending.take() {
                None => pending = Some(v),
                Some(x) => {
                    let p = Point::new(x, v);
                    match current {
                        'M' if first_pair_in_cmd => ops.push(PathOp::Move(p)),
                        'M' | 'L' => ops.push(PathOp::Line(p)),
                        _ => return Err(PathError::Malformed { offset: start }),
                    }
                    first_pair_in_cmd = false;
                }
            }
        }

        if pending.is_some() {
            return Err(PathError::Malformed { offset: d.len() });
        }
        if (cmd == Some('M') || cmd == Some('L')) && first_pair_in_cmd {
            return Err(PathError::Malformed { offset: d.len() });
        }
        Ok(Self { ops })
    }

    /// Straight segments this path strokes, in order.
    pub fn segments(&self) -> Vec<Line> {
        let mut out = Vec::new();
        let mut current: Option<Point> = None;
        let mut last_move: Option<Point> = None;
        for op in &self.ops {
            match *op {
                PathOp::Move(p) => {
                    current = Some(p);
                    last_move = Some(p);
                }
                PathOp::Line(p) => {
                    if let Some(c) = current {
                        out.push(Line::new(c, p));
                    }
                    current = Some(p);
                }
                PathOp::Close => {
                    if let (Some(c), Some(m)) = (current, last_move) {
                        out.push(Line::new(c, m));
                    }
                    current = last_move;
                }
            }
        }
        out
    }

    /// Apply an affine map to every point.
    pub fn transformed(&self, affine: Affine) -> Self {
        let ops = self
            .ops
            .iter()
            .map(|op| match *op {
                PathOp::Move(p) => PathOp::Move(affine * p),
                PathOp::Line(p) => PathOp::Line(affine * p),
                PathOp::Close => PathOp::Close,
            })
            .collect();
        Self { ops }
    }

    /// Serialize back to SVG path data.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        for op in &self.ops {
            if !out.is_empty() {
                out.push(' ');
            }
            match op {
                PathOp::Move(p) => out.push_str(&format!("M{} {}", fmt_num(p.x), fmt_num(p.y))),
                PathOp::Line(p) => out.push_str(&format!("L{} {}", fmt_num(p.x), fmt_num(p.y))),
                PathOp::Close => out.push('Z'),
            }
        }
        out
    }

    /// Same outline as a kurbo path, for backends that draw Bézier paths.
    pub fn to_bez_path(&self) -> BezPath {
        let mut out = BezPath::new();
        for op in &self.ops {
            match *op {
                PathOp::Move(p) => out.move_to(p),
                PathOp::Line(p) => out.line_to(p),
                PathOp::Close => out.close_path(),
            }
        }
        out
    }

    /// True when some subpath ends with a close.
    pub fn has_close(&self) -> bool {
        self.ops.iter().any(|op| matches!(op, PathOp::Close))
    }
}

/// Compact decimal formatting for SVG/HTML output.
pub(crate) fn fmt_num(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    if r == r.trunc() {
        format!("{}", r as i64)
    } else {
        format!("{r}")
    }
}

fn scan_number(b: &[u8], mut i: usize) -> usize {
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let mut seen_dot = false;
    while i < b.len() {
        match b[i] {
            b'0'..=b'9' => i += 1,
            b'.' if !seen_dot => {
                seen_dot = true;
                i += 1;
            }
            _ => break,
        }
    }
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        if j < b.len() && b[j].is_ascii_digit() {
            while j < b.len() && b[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }
    i
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/path.rs"]
mod tests;
