/// Photo reference owned by the asset catalog.
///
/// Slots refer to photos by [`Photo::id`] only. Replacing the pixels of a photo means
/// registering a new id or URL, never mutating an existing entry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Stable identifier.
    pub id: String,
    /// `http(s)` URL, `data:` URI, or a path relative to the project root.
    pub url: String,
    /// Width divided by height, when the catalog already knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
}

impl Photo {
    /// Photo with an unknown aspect ratio.
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            aspect_ratio: None,
        }
    }

    /// Builder-style setter for the aspect ratio.
    pub fn with_aspect_ratio(mut self, ratio: f64) -> Self {
        self.aspect_ratio = Some(ratio);
        self
    }

    /// Aspect ratio if present and usable for fitting.
    pub fn known_aspect_ratio(&self) -> Option<f64> {
        self.aspect_ratio.filter(|r| r.is_finite() && *r > 0.0)
    }
}

impl AsRef<str> for Photo {
    fn as_ref(&self) -> &str {
        &self.id
    }
}
