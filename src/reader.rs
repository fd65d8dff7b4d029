//! Source content readers.
//!
//! A source is either a path to a local file or an absolute URL. The
//! production reader tries the filesystem first and falls back to HTTP,
//! mirroring how sources are written on the command line.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;

use crate::error::{Error, ReadError, ReadResult, Result};

/// Capability to fetch the raw content behind a source identifier.
///
/// Implementations are shared across tasks behind an `Arc`, so they must be
/// cheap to call concurrently. Dropping the returned future must abort any
/// in-flight I/O it reasonably can — network reads promptly, local file
/// reads best-effort.
pub trait SourceReader: Send + Sync + 'static {
    /// Read the raw bytes behind `source`.
    fn read(&self, source: &str) -> impl Future<Output = ReadResult> + Send;
}

/// Reader for local files and HTTP(S) URLs.
///
/// Holds one [`reqwest::Client`] shared by all requests; the client-level
/// timeout caps each request independently of batch cancellation.
#[derive(Debug, Clone)]
pub struct FsHttpReader {
    client: reqwest::Client,
}

impl FsHttpReader {
    /// Build a reader whose HTTP requests time out after `http_timeout`.
    pub fn new(http_timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(http_timeout)
            .build()
            .map_err(|e| Error::Config(format!("build http client: {e}")))?;
        Ok(Self { client })
    }
}

impl SourceReader for FsHttpReader {
    async fn read(&self, source: &str) -> ReadResult {
        // An existing path is read as a file; everything else must parse as
        // an absolute URL before any network attempt.
        if tokio::fs::metadata(source).await.is_ok() {
            return Ok(tokio::fs::read(source).await?);
        }

        let url = reqwest::Url::parse(source).map_err(|_| ReadError::InvalidSource)?;

        let request = self.client.get(url).build().map_err(ReadError::Request)?;
        let response = self
            .client
            .execute(request)
            .await
            .map_err(ReadError::Http)?;

        if response.status() != StatusCode::OK {
            return Err(ReadError::Status(response.status()));
        }

        let body = response.bytes().await.map_err(ReadError::Http)?;
        Ok(body.to_vec())
    }
}
