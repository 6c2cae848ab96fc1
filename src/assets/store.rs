use std::collections::HashMap;
use std::sync::Arc;

use rayon::prelude::*;

use crate::assets::decode::probe_dimensions;
use crate::assets::fetch::SourceLoader;
use crate::foundation::error::{FolioError, FolioResult};
use crate::foundation::math::hash_str;

/// Fetched and probed image, shared between backends.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    /// Stable id derived from the source string.
    pub id: u64,
    /// Encoded format.
    pub format: image::ImageFormat,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Encoded bytes as fetched.
    pub bytes: Arc<Vec<u8>>,
}

impl PreparedImage {
    /// Probe `bytes` and wrap them.
    pub fn from_bytes(source: &str, bytes: Vec<u8>) -> FolioResult<Self> {
        let (format, width, height) = probe_dimensions(&bytes)?;
        Ok(Self {
            id: hash_str(source),
            format,
            width,
            height,
            bytes: Arc::new(bytes),
        })
    }

    /// Intrinsic width / height.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Outcome of preparing one source.
#[derive(Clone, Debug)]
pub enum PreparedSource {
    /// Bytes fetched and recognized.
    Ready(PreparedImage),
    /// Fetch or probe failed; the message is kept for diagnostics.
    Failed(String),
}

/// Prepared images keyed by source string.
#[derive(Clone, Debug, Default)]
pub struct PreparedImages {
    entries: HashMap<String, PreparedSource>,
}

impl PreparedImages {
    /// Empty set; every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch and probe every distinct source in parallel.
    ///
    /// Individual failures are recorded, never returned. `threads` bounds the worker pool
    /// (`None` uses rayon's default).
    #[tracing::instrument(skip_all, fields(sources = sources.len()))]
    pub fn prepare<S: AsRef<str> + Sync>(
        sources: &[S],
        loader: &SourceLoader,
        threads: Option<usize>,
    ) -> FolioResult<Self> {
        let mut uniq = Vec::<&str>::new();
        for s in sources {
            let s = s.as_ref();
            if !s.is_empty() && !uniq.contains(&s) {
                uniq.push(s);
            }
        }

        let pool = build_thread_pool(threads)?;
        let results: Vec<(String, PreparedSource)> = pool.install(|| {
            uniq.par_iter()
                .map(|&src| {
                    let prepared = loader
                        .load(src)
                        .and_then(|bytes| PreparedImage::from_bytes(src, bytes));
                    let entry = match prepared {
                        Ok(img) => PreparedSource::Ready(img),
                        Err(e) => {
                            tracing::warn!(source = %short(src), error = %e, "image source failed");
                            PreparedSource::Failed(e.to_string())
                        }
                    };
                    (src.to_owned(), entry)
                })
                .collect()
        });

        let mut out = Self::new();
        for (src, entry) in results {
            out.entries.insert(src, entry);
        }
        Ok(out)
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, source: impl Into<String>, entry: PreparedSource) {
        self.entries.insert(source.into(), entry);
    }

    /// Entry for `source`.
    pub fn get(&self, source: &str) -> Option<&PreparedSource> {
        self.entries.get(source)
    }

    /// Ready image for `source`.
    pub fn ready(&self, source: &str) -> Option<&PreparedImage> {
        match self.entries.get(source) {
            Some(PreparedSource::Ready(img)) => Some(img),
            _ => None,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn build_thread_pool(threads: Option<usize>) -> FolioResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(FolioError::validation("'threads' must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| FolioError::asset(format!("failed to build rayon thread pool: {e}")))
}

/// Data URIs can be megabytes long; keep log fields readable.
fn short(src: &str) -> &str {
    if src.starts_with("data:") {
        "data:…"
    } else {
        src
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
