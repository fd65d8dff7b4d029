//! Error types for wordcount.
//!
//! Per-source failures carry the cause in [`ReadError`]; the engine tags
//! them with the offending source before they surface. Errors are never
//! retried or aggregated — the first one observed wins the whole batch.

use thiserror::Error;

/// Why reading a single source failed.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The source is neither an existing file path nor an absolute URL.
    /// Rejected before any I/O is attempted.
    #[error("invalid source")]
    InvalidSource,

    /// Local filesystem read failed.
    #[error("read file: {0}")]
    File(#[from] std::io::Error),

    /// The HTTP request could not be constructed.
    #[error("create http request: {0}")]
    Request(#[source] reqwest::Error),

    /// HTTP transport failed (connect, timeout, body read).
    #[error("http get: {0}")]
    Http(#[source] reqwest::Error),

    /// The response arrived with a status other than 200 OK.
    /// The body is not read.
    #[error("status is not OK ({0})")]
    Status(reqwest::StatusCode),
}

/// Outcome of reading one source's raw content.
pub type ReadResult = std::result::Result<Vec<u8>, ReadError>;

#[derive(Debug, Error)]
pub enum Error {
    /// A per-source failure, tagged with the offending source.
    #[error("count in source {source:?}: {cause}")]
    Source {
        source: String,
        #[source]
        cause: ReadError,
    },

    /// Invalid configuration detected at startup.
    #[error("config: {0}")]
    Config(String),

    /// Telemetry initialization failed.
    #[error("telemetry: {0}")]
    Telemetry(String),
}

pub type Result<T> = std::result::Result<T, Error>;
