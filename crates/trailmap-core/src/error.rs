//! Error types for registry mutation and filesystem probing.
//!
//! "Not found" is never an error here: a missing file, a missing directory
//! and an exhausted list of fallbacks all surface as `Ok(None)` or an empty
//! listing. Only malformed input and genuine I/O failures become `PathError`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring a trail or probing the filesystem.
#[derive(Debug, Error)]
pub enum PathError {
    /// Malformed input to a mutation call. The registry is left unchanged.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A relative root could not be anchored to the working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDir(String),

    /// Any filesystem failure other than "does not exist".
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PathError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for malformed-input errors.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Result type for trail operations.
pub type PathResult<T> = Result<T, PathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_mentions_path() {
        let err = PathError::io(
            "/srv/assets",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/srv/assets"));
        assert!(msg.contains("denied"));
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn invalid_argument_is_flagged() {
        let err = PathError::invalid("extension cannot be empty");
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "Invalid argument: extension cannot be empty"
        );
    }
}
