//! Error handling for the winthrop application.
//! Defines the error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Errors produced while validating options or executing the
/// scaffolding pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised by libgit2 operations
    #[error("Git error: {0}.")]
    GitError(#[from] git2::Error),

    /// Represents errors that occur while rendering a template
    #[error("Render error: {0}.")]
    RenderError(#[from] minijinja::Error),

    /// Represents errors that occur while serializing the manifest
    #[error("Serialization error: {0}.")]
    SerializeError(#[from] serde_json::Error),

    #[error("Documentation styles supported: docco, jsdoc3, none; got '{0}'.")]
    InvalidDocStyle(String),

    #[error("Testing frameworks supported: nodeunit, mocha, expresso, none; got '{0}'.")]
    InvalidTestFramework(String),

    #[error("A license is required, even 'Proprietary'; got '{0}'.")]
    InvalidLicense(String),

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("Cannot proceed: project directory '{0}' already exists.")]
    ProjectDirectoryExists(String),

    /// A repository operation was requested before the repository was
    /// initialized. The pipeline initializes the repository in its second
    /// step, so this indicates a misused workspace.
    #[error("Repository has not been initialized.")]
    RepositoryNotInitialized,

    #[error("No '{0}' found in the local git configuration.")]
    IdentityNotConfigured(String),
}

impl Error {
    /// Process exit code for this error. Each configuration error category
    /// carries its own code so callers can tell them apart; every runtime
    /// failure maps to the generic code 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidDocStyle(_) => 2,
            Error::InvalidTestFramework(_) => 3,
            Error::InvalidLicense(_) => 4,
            _ => 1,
        }
    }
}

/// Convenience type alias for Results with winthrop's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints a one-line message to stderr and exits with the error's code.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(err.exit_code());
}
