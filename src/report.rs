//! Recoverable per-slot and per-primitive problems.
//!
//! Rendering never fails because of bad data inside a page. Each problem becomes a
//! [`Diagnostic`] in the [`RenderReport`] returned next to the output, and is logged at `warn`.

/// Category of a recovered problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// A slot, frame, background or text style references an unknown id.
    MissingAsset,
    /// Image bytes could not be fetched or recognized.
    FetchFailure,
    /// A slot could not be placed inside the printable area and was skipped.
    BoundsViolation,
    /// A frame primitive outside the supported vocabulary was ignored.
    UnsupportedPrimitive,
    /// A placed photo prints below the recommended resolution.
    LowResolution,
}

/// One recovered problem.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// Category.
    pub kind: DiagnosticKind,
    /// Page index, `None` for the cover.
    pub page_index: Option<usize>,
    /// Slot index on that page, when the problem is slot-specific.
    pub slot_index: Option<usize>,
    /// Human-readable detail.
    pub detail: String,
}

/// Diagnostics collected while rendering.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct RenderReport {
    /// Problems in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
}

impl RenderReport {
    /// Empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record and log a problem.
    pub fn push(
        &mut self,
        kind: DiagnosticKind,
        page_index: Option<usize>,
        slot_index: Option<usize>,
        detail: impl Into<String>,
    ) {
        let detail = detail.into();
        tracing::warn!(?kind, ?page_index, ?slot_index, %detail, "recovered render problem");
        self.diagnostics.push(Diagnostic {
            kind,
            page_index,
            slot_index,
            detail,
        });
    }

    /// Append another report.
    pub fn merge(&mut self, other: RenderReport) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Number of diagnostics of `kind`.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }

    /// True when nothing was recovered.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/unit/report/report.rs"]
mod tests;
