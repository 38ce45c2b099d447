#![forbid(unsafe_code)]

//! Storage error types.

use std::fmt;

/// Errors that can occur while reading or writing the persistent slot.
#[derive(Debug)]
pub enum StoreError {
    /// I/O error during file operations.
    Io(std::io::Error),
    /// JSON encode/decode failure.
    Serialization(String),
    /// Backend is not usable (unwritable directory, poisoned lock).
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "I/O error: {e}"),
            StoreError::Serialization(msg) => write!(f, "serialization error: {msg}"),
            StoreError::Unavailable(msg) => write!(f, "storage unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Serialization(_) | StoreError::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

/// Result type for slot operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_covers_variants() {
        let io = StoreError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        assert!(io.to_string().contains("I/O error"));

        let ser = StoreError::Serialization("bad json".into());
        assert!(ser.to_string().contains("serialization"));

        let unavail = StoreError::Unavailable("read-only".into());
        assert!(unavail.to_string().contains("unavailable"));
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error;
        let err = StoreError::from(std::io::Error::other("boom"));
        assert!(err.source().is_some());
    }
}
