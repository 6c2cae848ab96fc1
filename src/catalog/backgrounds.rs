/// Background texture entry.
///
/// A texture is an image painted over the full page. `color` is the flat fill used underneath it
/// and in its place when the texture cannot be loaded.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundDef {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Texture image source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Base fill color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Preferred text color on this background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

pub(crate) fn builtin() -> Vec<BackgroundDef> {
    BUILTIN
        .iter()
        .map(|&(id, name, url, color, text)| BackgroundDef {
            id: id.to_owned(),
            name: name.to_owned(),
            url: Some(url.to_owned()),
            color: Some(color.to_owned()),
            text_color: Some(text.to_owned()),
        })
        .collect()
}

const BUILTIN: &[(&str, &str, &str, &str, &str)] = &[
    (
        "classic",
        "Classic Minimal",
        "assets/backgrounds/geometric_minimal.png",
        "#f5f5f5",
        "#1a1a1a",
    ),
    (
        "botanical",
        "Vintage Botanical",
        "assets/backgrounds/botanical_pattern.png",
        "#2d3d30",
        "#d4e6d7",
    ),
    (
        "noir-film",
        "Noir Filmstrip",
        "assets/backgrounds/vintage_paper_texture.png",
        "#111111",
        "#e0e0e0",
    ),
    (
        "bauhaus-pop",
        "Bauhaus Pop",
        "assets/backgrounds/watercolor_mesh.png",
        "#0a9396",
        "#ffffff",
    ),
    (
        "archive",
        "The Archive",
        "assets/backgrounds/vintage_paper_texture.png",
        "#fef3c7",
        "#5c4033",
    ),
    (
        "linen-sage",
        "Linen Sage",
        "https://www.transparenttextures.com/patterns/light-paper-fibers.png",
        "#f9fafb",
        "#111827",
    ),
    (
        "paper-cream",
        "Paper Cream",
        "https://www.transparenttextures.com/patterns/rice-paper-2.png",
        "#fffaf2",
        "#1f2937",
    ),
    (
        "grainy-noir",
        "Grainy Noir",
        "https://www.transparenttextures.com/patterns/subtle-grunge.png",
        "#0b0f14",
        "#f8fafc",
    ),
];
