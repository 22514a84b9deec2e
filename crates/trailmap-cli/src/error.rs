//! CLI-specific error types and mappings.
//!
//! Maps library errors onto exit codes and user-facing messages.

use thiserror::Error;
use trailmap_core::PathError;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Nothing matched; not a failure of the tool itself.
    #[error("No match for {0}")]
    NotFound(String),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (permission denied, unreadable directory, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: No match
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 74, 78: sysexits.h I/O and configuration errors
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::InvalidArgument(msg) => Self::Arguments(msg),
            PathError::CurrentDir(msg) => Self::Config(msg),
            io @ PathError::Io { .. } => Self::Io(io.to_string()),
        }
    }
}
