//! Error handling for the stencil application.
//! Defines the fatal error enum used across module boundaries as well as the
//! non-fatal per-file errors accumulated into a scaffold result.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors for stencil operations.
///
/// These abort the current call and propagate to the caller. Per-file
/// problems during copying or substitution are never represented here;
/// they are collected as [`FileError`] values in the scaffold result.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The templates root does not exist or cannot be read
    #[error("Templates root '{templates_root}' does not exist or is not readable.")]
    RepositoryUnavailable { templates_root: String },

    /// No template directory with the requested name exists
    #[error("Template '{template_name}' was not found.")]
    TemplateNotFound { template_name: String },

    /// The target directory already exists; scaffolding never merges or overwrites
    #[error("Target directory '{target_dir}' already exists.")]
    TargetAlreadyExists { target_dir: String },

    /// The target directory itself could not be created
    #[error("Cannot create target directory '{target_dir}': {source}.")]
    TargetCreationFailed { target_dir: String, source: io::Error },

    /// Represents errors in loading or parsing a substitution rules file
    #[error("Configuration error: {0}.")]
    ConfigError(String),
}

/// Convenience type alias for Results with stencil's fatal Error.
pub type Result<T> = std::result::Result<T, Error>;

/// A non-fatal problem affecting a single file during instancing.
///
/// Accumulated into `ScaffoldResult.errors`; never raised.
#[derive(Debug)]
pub struct FileError {
    /// Path relative to the target directory
    pub path: PathBuf,
    pub cause: FileErrorCause,
}

/// Cause taxonomy for per-file errors.
#[derive(Error, Debug)]
pub enum FileErrorCause {
    /// Copying the file (or creating its directory) from the template failed
    #[error("copy failed: {0}")]
    CopyFailed(io::Error),

    /// A substitution rule named a file that was never created
    #[error("substitution target was not created")]
    SubstitutionTargetMissing,

    /// Reading back or rewriting a file during substitution failed
    #[error("substitution write failed: {0}")]
    SubstitutionWriteFailed(io::Error),
}

impl FileError {
    pub fn new(path: impl Into<PathBuf>, cause: FileErrorCause) -> Self {
        Self { path: path.into(), cause }
    }
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}': {}", self.path.display(), self.cause)
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
