//! Error handling for create-yoshi-app.
//! Defines the error type and result alias used throughout the generator.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving, reading or materializing a template.
#[derive(Error, Debug)]
pub enum Error {
    /// Generic I/O failure not tied to a template or destination path
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Read, write or directory creation failure on a single path
    #[error("Cannot access '{}': {source}.", .path.display())]
    FileSystemError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failure while walking the template directory
    #[error("Template traversal error: {0}.")]
    WalkError(#[from] walkdir::Error),

    /// The resolved template directory does not exist. Unknown project types end up here too.
    #[error("Template directory '{template_dir}' does not exist.")]
    TemplateNotFound { template_dir: String },

    #[error("Unknown transpiler '{0}', expected 'babel' or 'typescript'.")]
    UnknownTranspiler(String),

    #[error("Invalid project: {0}.")]
    InvalidProjectSpec(String),

    /// Invalid pattern in the template's .gitignore
    #[error("Ignore file error: {0}.")]
    IgnoreError(String),

    /// Preloaded answers could not be parsed
    #[error("Answers error: {0}.")]
    AnswersError(String),

    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),
}

impl Error {
    /// Wraps an I/O error together with the path it happened on.
    pub fn file_system<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Error::FileSystemError { path: path.into(), source }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
