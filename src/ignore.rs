//! File and directory ignore pattern handling for templates.
//! The `.gitignore` at the root of a template directory excludes paths
//! from generation, following gitignore matching rules.

use crate::constants::IGNORE_FILE;
use crate::error::{Error, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use log::debug;
use std::io::ErrorKind;
use std::path::Path;

/// Compiled ignore patterns of one template.
///
/// Patterns are evaluated gitignore style: the last pattern matching a path
/// decides, and `!pattern` re-includes what earlier patterns excluded.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    globs: GlobSet,
    /// Flags of the glob at the same index
    kinds: Vec<GlobKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GlobKind {
    /// Came from a `!` pattern
    negated: bool,
    /// Only matches directories, e.g. `build` from `build/`
    dir_only: bool,
}

impl IgnoreRules {
    /// Rules that ignore nothing.
    pub fn empty() -> Self {
        Self { globs: GlobSet::empty(), kinds: Vec::new() }
    }

    /// Compiles the contents of a `.gitignore` file.
    ///
    /// # Errors
    /// * `Error::IgnoreError` if a pattern is not a valid glob
    pub fn parse(contents: &str) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        let mut kinds = Vec::new();

        for line in contents.lines() {
            let Some((negated, globs)) = translate_pattern(line) else {
                continue;
            };
            for (glob, dir_only) in globs {
                let compiled = GlobBuilder::new(&glob)
                    .literal_separator(true)
                    .build()
                    .map_err(|e| {
                        Error::IgnoreError(format!("invalid pattern '{}': {}", line.trim(), e))
                    })?;
                builder.add(compiled);
                kinds.push(GlobKind { negated, dir_only });
            }
        }

        let globs = builder
            .build()
            .map_err(|e| Error::IgnoreError(format!("{IGNORE_FILE} loading failed: {e}")))?;

        Ok(Self { globs, kinds })
    }

    /// Returns true if the file at `relative_path` (relative to the template root) is excluded.
    pub fn is_ignored<P: AsRef<Path>>(&self, relative_path: P) -> bool {
        self.decide(relative_path.as_ref(), false)
    }

    /// Returns true if the directory at `relative_path` is excluded.
    ///
    /// An excluded directory is not descended into, so nothing below it can
    /// be re-included by a later `!` pattern.
    pub fn is_ignored_dir<P: AsRef<Path>>(&self, relative_path: P) -> bool {
        self.decide(relative_path.as_ref(), true)
    }

    fn decide(&self, relative_path: &Path, is_dir: bool) -> bool {
        self.globs
            .matches(relative_path)
            .into_iter()
            .filter(|&index| is_dir || !self.kinds[index].dir_only)
            .max()
            .is_some_and(|index| !self.kinds[index].negated)
    }

    pub fn is_empty(&self) -> bool {
        self.globs.is_empty()
    }
}

impl Default for IgnoreRules {
    fn default() -> Self {
        IgnoreRules::empty()
    }
}

/// Reads the ignore file at the root of `template_dir`.
///
/// A missing ignore file yields rules that ignore nothing.
pub fn parse_ignore_file<P: AsRef<Path>>(template_dir: P) -> Result<IgnoreRules> {
    let ignore_path = template_dir.as_ref().join(IGNORE_FILE);
    match std::fs::read_to_string(&ignore_path) {
        Ok(contents) => {
            debug!("Loading ignore patterns from {}", ignore_path.display());
            IgnoreRules::parse(&contents)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{IGNORE_FILE} does not exist");
            Ok(IgnoreRules::empty())
        }
        Err(e) => Err(Error::file_system(ignore_path, e)),
    }
}

/// Turns one gitignore line into globs, or `None` for blanks and comments.
/// The first flag is true for `!` patterns. Each glob carries whether it
/// only applies to directories.
fn translate_pattern(line: &str) -> Option<(bool, Vec<(String, bool)>)> {
    let line = line.trim_end();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (is_negated, pattern) = match line.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, line),
    };
    let pattern = match pattern.strip_prefix('\\') {
        Some(rest) if rest.starts_with(['#', '!']) => rest,
        _ => pattern,
    };
    let (pattern, dir_only) = match pattern.strip_suffix('/') {
        Some(rest) => (rest, true),
        None => (pattern, false),
    };

    // A slash anywhere but the end anchors the pattern to the template root.
    let anchored = pattern.contains('/');
    let pattern = pattern.trim_start_matches('/');
    if pattern.is_empty() {
        return None;
    }

    let base = if anchored {
        pattern.to_string()
    } else {
        format!("**/{pattern}")
    };

    let mut globs = Vec::with_capacity(2);
    if base.ends_with("/**") {
        globs.push((base, false));
    } else {
        globs.push((format!("{base}/**"), false));
        globs.push((base, dir_only));
    }
    Some((is_negated, globs))
}
