//! Error types for asset loading.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Failure to retrieve the remote asset.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The asset URL could not be parsed; no request was made.
    #[error("invalid asset URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The server answered with a non-2xx status.
    #[error("HTTP {status} for url ({url})")]
    Status { url: String, status: StatusCode },
    /// DNS, connect, timeout or body read failure.
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// HTTP status, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Network { source, .. } if source.is_timeout())
    }
}

/// A 2xx response whose body is not valid JSON.
#[derive(Debug, Error)]
#[error("invalid JSON from {url}: {source}")]
pub struct DecodeError {
    pub url: String,
    #[source]
    pub source: serde_json::Error,
}

/// Any failure of the remote asset loader.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Failure to read the local stylesheet.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("failed to read stylesheet {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StyleError {
    /// The underlying I/O error kind.
    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            StyleError::Io { source, .. } => source.kind(),
        }
    }
}
