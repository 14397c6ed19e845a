//! create-yoshi-app scaffolds yoshi projects.
//! It copies the template directory matching a project type and transpiler
//! into a destination, substituting `{{placeholder}}` tokens in text files.

/// Answers collection from flags, answers files and prompts
pub mod answers;

/// Command-line interface module for the create-yoshi-app binary
pub mod cli;

pub mod constants;

/// Error types and handling
pub mod error;

/// Template materialization into a destination directory
pub mod generator;

/// `.gitignore` handling for template directories
pub mod ignore;

pub mod logger;

/// `{{placeholder}}` token substitution
pub mod placeholder;

/// Port allocation for parallel test workers
pub mod ports;

/// Per-file processing of template files
pub mod processor;

/// Project description and transpiler selection
pub mod project;

/// User input and interaction handling
pub mod prompt;

/// Template directory resolution and enumeration
pub mod template;

pub use error::{Error, Result};
pub use generator::{GenerationReport, Generator};
pub use project::{ProjectSpec, Transpiler};
