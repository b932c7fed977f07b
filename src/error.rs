//! Error types for the datawedge library.

use thiserror::Error;

/// The main error type for datawedge operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The transport failed to deliver or subscribe.
    #[error("transport error: {message}")]
    Transport { message: String },

    /// A string did not name a known variant.
    #[error("unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },

    /// The result receiver task panicked or was aborted.
    #[error("result receiver failed: {0}")]
    Receiver(#[from] tokio::task::JoinError),
}

impl Error {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::UnknownValue {
            kind,
            value: value.to_owned(),
        }
    }
}

/// Result type alias for datawedge operations.
pub type Result<T> = std::result::Result<T, Error>;
