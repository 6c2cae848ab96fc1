/// Arrangement of the front panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoverLayout {
    /// Framed photo in the upper part, title below.
    #[default]
    Standard,
    /// Photo covers the whole panel, title printed over it.
    FullBleed,
    /// Title on top, photo in the lower part.
    PhotoBottom,
}

/// Three-panel cover: back, spine, front.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cover {
    /// Main title on the front panel.
    #[serde(default)]
    pub title: String,
    /// Optional subtitle under the title.
    #[serde(default)]
    pub subtitle: String,
    /// Front panel arrangement.
    #[serde(default)]
    pub layout: CoverLayout,
    /// Photo on the front panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_photo_id: Option<String>,
    /// Photo on the back panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_photo_id: Option<String>,
    /// Text running along the spine; falls back to the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spine_text: Option<String>,
    /// Background texture id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Background hex color used when no theme resolves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Title color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}
