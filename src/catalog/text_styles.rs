/// Named text style a [`crate::model::TextElement`] can reference.
///
/// Fields set on the element itself win over the style.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Font family.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Font size in CSS pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Bold weight.
    #[serde(default)]
    pub bold: bool,
    /// Italic style.
    #[serde(default)]
    pub italic: bool,
}

pub(crate) fn builtin() -> Vec<TextStyle> {
    BUILTIN
        .iter()
        .map(|&(id, name, family, color, bold, italic)| TextStyle {
            id: id.to_owned(),
            name: name.to_owned(),
            font_family: Some(family.to_owned()),
            font_size: None,
            color: Some(color.to_owned()),
            bold,
            italic,
        })
        .collect()
}

const BUILTIN: &[(&str, &str, &str, &str, bool, bool)] = &[
    ("style-retro-pop", "Retro Pop", "Montserrat", "#ff0055", true, false),
    ("style-neon-glow", "Neon Glow", "Courier New", "#ffffff", true, false),
    (
        "style-elegant-gold",
        "Elegant Gold",
        "Playfair Display",
        "#d4af37",
        true,
        false,
    ),
    (
        "style-vintage-typewriter",
        "Vintage Typewriter",
        "Special Elite",
        "#4e342e",
        false,
        false,
    ),
    (
        "style-minimal-shadow",
        "Minimal Shadow",
        "Inter",
        "#333333",
        true,
        false,
    ),
    (
        "style-bold-serif",
        "Bold Serif",
        "DM Serif Display",
        "#0f172a",
        true,
        false,
    ),
    ("style-handwritten", "Handwritten", "DM Sans", "#334155", false, true),
    ("style-minimal-caps", "Minimal Caps", "Inter", "#111827", true, false),
];
