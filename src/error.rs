// WiPose 📡 AGPL-3.0 License - https://github.com/wipose/wipose

//! Error types for the pose sensing library.

use std::fmt;

/// Result type alias for pose operations.
pub type Result<T> = std::result::Result<T, PoseError>;

/// Main error type for the pose sensing library.
#[derive(Debug)]
pub enum PoseError {
    /// A prediction violates the data-model invariants.
    InvalidResult(String),
    /// Error parsing or producing the JSON wire format.
    WireError(String),
    /// Error parsing a pose label.
    PoseParseError(String),
    /// Rejected upload (wrong file type, missing name).
    UploadError(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
}

impl fmt::Display for PoseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidResult(msg) => write!(f, "Invalid result: {msg}"),
            Self::WireError(msg) => write!(f, "Wire format error: {msg}"),
            Self::PoseParseError(msg) => write!(f, "Unknown pose: {msg}"),
            Self::UploadError(msg) => write!(f, "{msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for PoseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PoseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for PoseError {
    fn from(err: serde_json::Error) -> Self {
        Self::WireError(err.to_string())
    }
}
