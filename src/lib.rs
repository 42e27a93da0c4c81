//! winthrop scaffolds a ready-to-commit npm module repository in one shot:
//! directory layout, templated files, initialized git history and an
//! optional orphan branch hosting a generated static site.

/// Pure construction of the generated artifacts (manifest, publish script,
/// readme)
pub mod artifacts;

/// Command-line interface module for the winthrop application
pub mod cli;

/// Validated generation options
pub mod config;

/// Common constants (branch and identity names, commit message)
pub mod constants;

/// Error types and handling for the winthrop application
pub mod error;

/// The ordered side-effecting scaffolding pipeline
pub mod pipeline;

/// Template rendering functionality
pub mod renderer;

/// Embedded template assets written into generated projects
pub mod templates;

/// Typed filesystem/version-control operations the pipeline executes
pub mod workspace;
