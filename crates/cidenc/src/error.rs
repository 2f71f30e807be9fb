//! Encoder selection and re-encoding errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodingError {
    /// The requested multibase name (or code character) is not in the
    /// registry.
    #[error("Unknown multibase encoding: '{0}'")]
    UnknownBase(String),

    /// The path holds no identifier segment to take a CID from.
    #[error("No CID found in path: '{0}'")]
    MissingCid(String),

    /// Shorter than any text form of a CID.
    #[error("CID too short")]
    CidTooShort,

    /// Looked like a CID but did not parse as one.
    #[error("Invalid CID: {0}")]
    InvalidCid(#[from] cid::Error),
}

/// Result type alias for encoder operations.
pub type Result<T> = std::result::Result<T, EncodingError>;
