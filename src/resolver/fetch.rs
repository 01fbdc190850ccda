//! Remote extension downloads.
//!
//! A [`ExtensionFetcher`] wraps a shared [`reqwest::Client`] configured
//! with a fixed total timeout covering the whole request cycle - connect,
//! headers, and body transfer. Each successful fetch materializes the
//! response body as a uniquely named `.vsix` file in the system temp
//! directory and hands ownership of that file to the caller.
//!
//! Downloads are single-attempt. The resolution coordinator treats any
//! failure as "drop this entry", so there is no retry layer here.

use std::path::PathBuf;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::constants::{FETCH_TIMEOUT, VSIX_SUFFIX};
use crate::core::ExtloadError;

/// Downloads extension archives over HTTP(S).
///
/// Cheap to clone - the underlying client is reference-counted and its
/// connection pool is shared between clones, which is what the resolution
/// coordinator relies on when it fans out one download task per URL.
#[derive(Debug, Clone)]
pub struct ExtensionFetcher {
    client: reqwest::Client,
}

impl ExtensionFetcher {
    /// Create a fetcher with the default 10 second total timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ExtloadError::HttpClientInit`] if the HTTP client cannot
    /// be constructed (typically a broken TLS backend).
    pub fn new() -> Result<Self, ExtloadError> {
        Self::with_timeout(FETCH_TIMEOUT)
    }

    /// Create a fetcher with a custom total timeout.
    ///
    /// The timeout bounds the entire request including body transfer, not
    /// just connection setup. Mostly useful in tests that simulate slow
    /// servers without waiting out the production bound.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ExtloadError> {
        let client = reqwest::Client::builder().timeout(timeout).build().map_err(|e| {
            ExtloadError::HttpClientInit {
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            client,
        })
    }

    /// Download one extension archive and return the local path.
    ///
    /// Issues a single GET. Success is strictly status 200: anything else
    /// is [`ExtloadError::FetchStatus`] carrying the status code and its
    /// textual reason. On success the body is streamed chunk by chunk into
    /// a fresh `vsix*.vsix` temp file which is kept on disk - the caller
    /// (ultimately the editor process) owns its lifetime.
    ///
    /// # Errors
    ///
    /// [`ExtloadError::FetchFailed`] for transport errors (DNS, refused
    /// connection, timeout) and for any write failure while streaming; a
    /// partially written temp file may be left behind in that case.
    /// [`ExtloadError::FetchStatus`] for non-200 responses.
    pub async fn fetch(&self, url: &str) -> Result<PathBuf, ExtloadError> {
        let fetch_err = |reason: String| ExtloadError::FetchFailed {
            url: url.to_string(),
            reason,
        };

        debug!("downloading extension from {url}");
        let mut response =
            self.client.get(url).send().await.map_err(|e| fetch_err(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ExtloadError::FetchStatus {
                url: url.to_string(),
                status: format!(
                    "{} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            });
        }

        let (file, path) = tempfile::Builder::new()
            .prefix("vsix")
            .suffix(VSIX_SUFFIX)
            .tempfile()
            .map_err(|e| fetch_err(e.to_string()))?
            // Ownership of the download transfers to the caller, so the
            // file must survive this function.
            .keep()
            .map_err(|e| fetch_err(e.to_string()))?;

        let mut file = tokio::fs::File::from_std(file);
        while let Some(chunk) = response.chunk().await.map_err(|e| fetch_err(e.to_string()))? {
            file.write_all(&chunk).await.map_err(|e| fetch_err(e.to_string()))?;
        }
        file.flush().await.map_err(|e| fetch_err(e.to_string()))?;

        debug!("downloaded {url} to {}", path.display());
        Ok(path)
    }
}
