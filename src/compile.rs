//! The composition step shared by every renderer.
//!
//! A page (or the cover) is resolved once into a [`PagePlan`]: background, decorations, fitted
//! slots with their frames and positioned text, all in page units. The DOM, PDF and raster
//! backends only draw plans, so they cannot disagree on geometry.

/// Cover spread composition.
pub mod cover;
/// Page plans.
pub mod plan;

pub use cover::{BACK_SLOT, DEFAULT_SPINE_WIDTH, FRONT_SLOT, compile_cover};
pub use plan::{
    BackgroundPaint, PLACEHOLDER_FILL, PLACEHOLDER_STROKE, PagePlan, PlanInputs, SlotContent,
    SlotPlan, TextPlan, compile_page, sources_for_page, sources_for_project,
};

#[cfg(test)]
#[path = "../tests/unit/compile/plan.rs"]
mod plan_tests;

#[cfg(test)]
#[path = "../tests/unit/compile/cover.rs"]
mod cover_tests;
