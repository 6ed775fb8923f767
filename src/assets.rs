//! Cached remote assets (fonts)
//!
//! Guarantees a remote binary file is present at a deterministic local path,
//! fetching it at most once. A cached file is trusted as-is: no checksum, no
//! expiry, no re-validation.

use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

/// Asset fetch error types
#[derive(Error, Debug)]
pub enum FetchError {
    /// Server answered with a non-success status
    #[error("fetch of {url} failed: HTTP {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Request could not be completed
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Cache directory creation or file write failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fetches the full body of a remote asset.
///
/// The body is downloaded into memory in one piece, so a network failure
/// never leaves a partial file behind.
#[cfg_attr(test, automock)]
pub trait AssetFetcher {
    /// Fetch `url` and return the complete response body.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Blocking HTTP fetcher.
#[derive(Debug)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Create a fetcher with a 30 second request timeout.
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client })
    }
}

impl AssetFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send()?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes()?.to_vec())
    }
}

/// Font cache rooted at a local directory.
#[derive(Debug, Clone)]
pub struct FontCache {
    cache_dir: PathBuf,
}

impl FontCache {
    /// Create a cache rooted at `cache_dir`. The directory is created lazily
    /// on first use.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    /// Root directory of this cache.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Local path a font with this logical name caches to.
    pub fn font_path(&self, logical_name: &str) -> PathBuf {
        self.cache_dir.join(format!("{logical_name}.ttf"))
    }

    /// Ensure the font named `logical_name` is cached locally, fetching
    /// `url` once on a miss. Returns the local path.
    ///
    /// An existing file is a cache hit and is returned without touching the
    /// network. A failed fetch is fatal: no retry, no file created.
    pub fn ensure_cached(
        &self,
        url: &str,
        logical_name: &str,
        fetcher: &dyn AssetFetcher,
    ) -> Result<PathBuf, FetchError> {
        std::fs::create_dir_all(&self.cache_dir)?;

        let local = self.font_path(logical_name);
        if local.is_file() {
            tracing::info!(path = %local.display(), "font loaded from cache");
            return Ok(local);
        }

        let body = fetcher.fetch(url)?;
        std::fs::write(&local, body)?;
        tracing::info!(url, path = %local.display(), "font downloaded and cached");

        Ok(local)
    }

    /// Check whether a font is already cached.
    pub fn is_cached(&self, logical_name: &str) -> bool {
        self.font_path(logical_name).is_file()
    }
}
