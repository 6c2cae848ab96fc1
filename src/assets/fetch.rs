use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use base64::Engine as _;

use crate::foundation::error::{FolioError, FolioResult};

/// Default bound on a single remote fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Source of remote image bytes.
pub trait ImageFetcher: Send + Sync {
    /// Fetch the bytes behind an `http(s)` URL.
    fn fetch(&self, url: &str) -> FolioResult<Vec<u8>>;
}

/// Blocking HTTP fetcher with a per-request timeout.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> FolioResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("build http client")?;
        Ok(Self { client })
    }
}

impl ImageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> FolioResult<Vec<u8>> {
        let resp = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("GET {url}"))?
            .error_for_status()
            .with_context(|| format!("GET {url}"))?;
        let bytes = resp.bytes().with_context(|| format!("read body of {url}"))?;
        Ok(bytes.to_vec())
    }
}

/// In-memory fetcher keyed by URL.
#[derive(Clone, Debug, Default)]
pub struct MemoryFetcher {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryFetcher {
    /// Empty fetcher; every URL fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `bytes` for `url`.
    pub fn with(mut self, url: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.entries.insert(url.into(), bytes);
        self
    }
}

impl ImageFetcher for MemoryFetcher {
    fn fetch(&self, url: &str) -> FolioResult<Vec<u8>> {
        self.entries
            .get(url)
            .cloned()
            .ok_or_else(|| FolioError::asset(format!("no bytes for '{url}'")))
    }
}

/// Resolves a photo source string to bytes.
///
/// `data:` URIs are decoded in-process, `http(s)` URLs go to the remote fetcher, anything else is
/// a path relative to the project root.
#[derive(Clone)]
pub struct SourceLoader {
    root: Option<PathBuf>,
    remote: Arc<dyn ImageFetcher>,
}

impl std::fmt::Debug for SourceLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceLoader")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl SourceLoader {
    /// Loader over `remote`, without a file root.
    pub fn new(remote: Arc<dyn ImageFetcher>) -> Self {
        Self { root: None, remote }
    }

    /// Loader using a real HTTP client.
    pub fn http(timeout: Duration) -> FolioResult<Self> {
        Ok(Self::new(Arc::new(HttpFetcher::new(timeout)?)))
    }

    /// Resolve relative paths against `root`.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Bytes behind `source`.
    pub fn load(&self, source: &str) -> FolioResult<Vec<u8>> {
        let source = source.trim();
        if source.starts_with("data:") {
            return decode_data_uri(source);
        }
        if source.starts_with("http://") || source.starts_with("https://") {
            return self.remote.fetch(source);
        }
        let root = self.root.as_ref().ok_or_else(|| {
            FolioError::asset(format!("relative source '{source}' needs a root directory"))
        })?;
        let rel = normalize_rel_path(source)?;
        let path = root.join(&rel);
        let bytes = std::fs::read(&path).with_context(|| format!("read '{}'", path.display()))?;
        Ok(bytes)
    }
}

/// Decode a `data:` URI body (`;base64` or percent-encoded).
pub fn decode_data_uri(uri: &str) -> FolioResult<Vec<u8>> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| FolioError::asset("not a data uri"))?;
    let (meta, data) = rest
        .split_once(',')
        .ok_or_else(|| FolioError::asset("data uri without ',' separator"))?;
    if meta.split(';').any(|p| p.eq_ignore_ascii_case("base64")) {
        let cleaned: String = data.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        base64::engine::general_purpose::STANDARD
            .decode(cleaned.as_bytes())
            .map_err(|e| FolioError::asset(format!("invalid base64 in data uri: {e}")))
    } else {
        percent_decode(data)
    }
}

fn percent_decode(s: &str) -> FolioResult<Vec<u8>> {
    let b = s.as_bytes();
    let mut out = Vec::with_capacity(b.len());
    let mut i = 0;
    while i < b.len() {
        if b[i] == b'%' {
            let hex = s
                .get(i + 1..i + 3)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .ok_or_else(|| FolioError::asset("invalid percent escape in data uri"))?;
            out.push(hex);
            i += 3;
        } else {
            out.push(b[i]);
            i += 1;
        }
    }
    Ok(out)
}

/// Normalize and validate project-relative paths.
///
/// The result uses `/` separators, drops `.` segments, and rejects absolute paths or parent
/// traversals (`..`).
pub(crate) fn normalize_rel_path(source: &str) -> FolioResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(FolioError::validation("asset paths must be relative"));
    }
    if s.is_empty() {
        return Err(FolioError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(FolioError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(FolioError::validation("asset path must contain a file name"));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fetch.rs"]
mod tests;
