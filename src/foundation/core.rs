pub use kurbo::{Affine, Line, Point, Rect, Size, Vec2};

/// Inset edges in page units (points for print, pixels for the preview).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Edges {
    /// Top inset.
    #[serde(default)]
    pub top: f64,
    /// Right inset.
    #[serde(default)]
    pub right: f64,
    /// Bottom inset.
    #[serde(default)]
    pub bottom: f64,
    /// Left inset.
    #[serde(default)]
    pub left: f64,
}

impl Edges {
    /// Same inset on all four sides.
    pub fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// Shrink `rect` by these edges. The result may be empty (negative extent is clamped to zero).
    pub fn shrink(self, rect: Rect) -> Rect {
        let x0 = rect.x0 + self.left;
        let y0 = rect.y0 + self.top;
        let x1 = (rect.x1 - self.right).max(x0);
        let y1 = (rect.y1 - self.bottom).max(y0);
        Rect::new(x0, y0, x1, y1)
    }

    /// Multiply every edge by `k`.
    pub fn scaled(self, k: f64) -> Self {
        Self {
            top: self.top * k,
            right: self.right * k,
            bottom: self.bottom * k,
            left: self.left * k,
        }
    }
}

/// Straight-alpha sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Opaque color from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a paint value.
    ///
    /// Accepts `#RGB`, `#RRGGBB`, `#RRGGBBAA`, CSS `rgb()`/`rgba()` and a handful of CSS
    /// keywords. `none`, `transparent` and anything unparseable yield `None`, which callers treat
    /// as "do not paint".
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok();
        }
        let lower = s.to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
        {
            return parse_rgb_fn(args.strip_suffix(')')?);
        }
        match lower.as_str() {
            "white" => Some(Self::WHITE),
            "black" => Some(Self::BLACK),
            "gray" | "grey" => Some(Self::rgb(128, 128, 128)),
            "silver" => Some(Self::rgb(192, 192, 192)),
            "gold" => Some(Self::rgb(255, 215, 0)),
            "red" => Some(Self::rgb(255, 0, 0)),
            "green" => Some(Self::rgb(0, 128, 0)),
            "blue" => Some(Self::rgb(0, 0, 255)),
            _ => None,
        }
    }

    /// Lowercase `#rrggbb` form (alpha dropped).
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS color string, `rgba(..)` when not fully opaque.
    pub fn to_css(self) -> String {
        if self.a == 255 {
            self.to_hex()
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                f64::from(self.a) / 255.0
            )
        }
    }

    /// Normalized `[r, g, b]` channels for PDF color operators.
    pub fn to_rgb_f32(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }
}

impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if self.a == 255 {
            serializer.serialize_str(&self.to_hex())
        } else {
            serializer.serialize_str(&format!("{}{:02x}", self.to_hex(), self.a))
        }
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid color \"{s}\"")))
    }
}

/// Arguments of `rgb(..)`/`rgba(..)`: comma or space separated, optional `/` before alpha.
/// Channels are 0-255 or percentages; alpha is 0-1 or a percentage.
fn parse_rgb_fn(args: &str) -> Option<Color> {
    let parts: Vec<&str> = args
        .split([',', ' ', '/'])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if !(parts.len() == 3 || parts.len() == 4) {
        return None;
    }
    let unit = |p: &str, scale: f64| -> Option<f64> {
        let v = match p.strip_suffix('%') {
            Some(pct) => pct.parse::<f64>().ok()? / 100.0 * scale,
            None => p.parse::<f64>().ok()?,
        };
        v.is_finite().then(|| v.clamp(0.0, scale))
    };
    let channel = |p: &str| unit(p, 255.0).map(|v| v.round() as u8);
    let a = match parts.get(3) {
        Some(p) => (unit(p, 1.0)? * 255.0).round() as u8,
        None => 255,
    };
    Some(Color {
        r: channel(parts[0])?,
        g: channel(parts[1])?,
        b: channel(parts[2])?,
        a,
    })
}

fn parse_hex(s: &str) -> Result<Color, String> {
    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ascii".to_owned());
    }

    match s.len() {
        3 => {
            let mut ch = [0u8; 3];
            for (i, c) in s.chars().enumerate() {
                let v = hex_byte(&c.to_string())?;
                ch[i] = v * 17;
            }
            Ok(Color::rgb(ch[0], ch[1], ch[2]))
        }
        6 => Ok(Color::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Color {
            r: hex_byte(&s[0..2])?,
            g: hex_byte(&s[2..4])?,
            b: hex_byte(&s[4..6])?,
            a: hex_byte(&s[6..8])?,
        }),
        _ => Err("hex color must be #RGB, #RRGGBB or #RRGGBBAA".to_owned()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
