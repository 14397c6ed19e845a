//! Common constants used throughout create-yoshi-app.

/// Templates shipped with the crate
pub const DEFAULT_TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

/// Ignore file read from the root of a template directory
pub const IGNORE_FILE: &str = ".gitignore";

/// Suffix of the TypeScript variant of a template directory
pub const TYPESCRIPT_SUFFIX: &str = "-typescript";

/// Project name used when none can be derived from the destination directory
pub const FALLBACK_PROJECT_NAME: &str = "my-app";
