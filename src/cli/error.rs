//! CLI-level errors (wraps manifest and domain errors)

use thiserror::Error;

use crate::manifest::ManifestError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Manifest(#[from] ManifestError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Manifest(e) => match e {
                ManifestError::Io(_) => crate::exitcode::NOINPUT,
                ManifestError::Parse(_)
                | ManifestError::DuplicateLabel(_)
                | ManifestError::UnknownKind(_)
                | ManifestError::UnknownChild { .. }
                | ManifestError::UnknownRoot(_)
                | ManifestError::UnknownTubMachine { .. } => crate::exitcode::DATAERR,
                ManifestError::Graph(_) => crate::exitcode::SOFTWARE,
            },
        }
    }
}
