//! Error types for registry operations.

use thiserror::Error;

/// How a single registry exchange went wrong.
///
/// Every failed operation is tagged with exactly one of these, wrapped
/// in [`Error::Fetch`] or [`Error::Write`] depending on the operation.
#[derive(Debug, Error)]
pub enum FailureKind {
    /// The registry answered without a response body.
    #[error("response body is empty")]
    EmptyBody,

    /// Non-2xx status; the message carries the response body text.
    #[error("{0}")]
    BadStatus(String),

    /// The call could not complete at all (DNS, connection refused,
    /// timeout, I/O error while reading the response).
    #[error(transparent)]
    Transport(reqwest::Error),
}

/// Errors raised by the registry client.
#[derive(Debug, Error)]
pub enum Error {
    /// A definition download failed.
    #[error("Failed to download API definition: {0}")]
    Fetch(FailureKind),

    /// A definition upload or default-version update failed.
    #[error("Failed to upload API definition: {0}")]
    Write(FailureKind),

    /// A request was built with missing or invalid coordinates.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The HTTP transport itself could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, Error>;
