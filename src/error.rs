use thiserror::Error;

/// Errors produced while moving resources on and off the wire.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to decode resource: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode resource: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
