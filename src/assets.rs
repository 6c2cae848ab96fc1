//! Image acquisition, front-loaded before any rendering.
//!
//! Renderers never perform IO. Callers collect the sources a page needs, run
//! [`PreparedImages::prepare`] once (fetches run in parallel, results keep source order), and hand
//! the prepared set to every backend. A failed fetch becomes a [`PreparedSource::Failed`] entry
//! that renders as a placeholder.

/// Image decoding and format sniffing.
pub mod decode;
/// Source resolution and fetching.
pub mod fetch;
/// Prepared image set handed to renderers.
pub mod store;

pub use decode::{DecodedRgba, decode_rgba8, probe_dimensions};
pub use fetch::{HttpFetcher, ImageFetcher, MemoryFetcher, SourceLoader, decode_data_uri};
pub use store::{PreparedImage, PreparedImages, PreparedSource};
