//! Per-file processing: decides how each template file lands in the output.

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::placeholder::{placeholders, substitute};
use crate::project::ValuesMap;
use crate::template::TemplateFile;

/// What to do with one template file.
#[derive(Debug, PartialEq, Eq)]
pub enum FileOperation {
    /// Copy the source bytes unchanged
    Copy { target: PathBuf },
    /// Write substituted text
    Write { target: PathBuf, content: String },
}

impl FileOperation {
    pub fn target(&self) -> &Path {
        match self {
            FileOperation::Copy { target } | FileOperation::Write { target, .. } => target,
        }
    }

    pub fn action(&self) -> FileAction {
        match self {
            FileOperation::Copy { .. } => FileAction::Copied,
            FileOperation::Write { .. } => FileAction::Rendered,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Copied,
    Rendered,
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileAction::Copied => f.write_str("copied"),
            FileAction::Rendered => f.write_str("rendered"),
        }
    }
}

#[derive(Debug)]
pub struct ProcessResult {
    pub source: PathBuf,
    pub relative_path: PathBuf,
    pub operation: FileOperation,
}

/// Turns template files into file operations under `output_root`.
pub struct Processor<'a> {
    output_root: &'a Path,
    values: &'a ValuesMap,
}

impl<'a> Processor<'a> {
    pub fn new(output_root: &'a Path, values: &'a ValuesMap) -> Self {
        Self { output_root, values }
    }

    /// Reads `file` and plans its output.
    ///
    /// UTF-8 files whose content changes by substitution become [`FileOperation::Write`].
    /// Everything else, binary files included, becomes [`FileOperation::Copy`].
    pub fn process(&self, file: &TemplateFile) -> Result<ProcessResult> {
        let target = self.output_root.join(&file.relative_path);
        let bytes = fs::read(&file.source).map_err(|e| Error::file_system(&file.source, e))?;

        let operation = match std::str::from_utf8(&bytes) {
            Ok(text) => match substitute(text, self.values) {
                // Unknown placeholders are put back as is, leaving the text unchanged.
                Cow::Owned(content) if content == text => FileOperation::Copy { target },
                Cow::Borrowed(_) => FileOperation::Copy { target },
                Cow::Owned(content) => {
                    for name in placeholders(text) {
                        if !self.values.contains_key(name) {
                            debug!(
                                "Keeping unknown placeholder '{}' in {}",
                                name,
                                file.relative_path.display()
                            );
                        }
                    }
                    FileOperation::Write { target, content }
                }
            },
            Err(_) => {
                debug!("Copying binary file {}", file.relative_path.display());
                FileOperation::Copy { target }
            }
        };

        Ok(ProcessResult {
            source: file.source.clone(),
            relative_path: file.relative_path.clone(),
            operation,
        })
    }
}

/// Writes `content` to `dest_path`, creating parent directories first.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    create_parent_dirs(dest_path)?;
    fs::write(dest_path, content).map_err(|e| Error::file_system(dest_path, e))
}

/// Copies `source_path` to `dest_path` byte-for-byte, creating parent directories first.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(source_path: P, dest_path: Q) -> Result<()> {
    let dest_path = dest_path.as_ref();
    create_parent_dirs(dest_path)?;
    fs::copy(source_path.as_ref(), dest_path)
        .map(|_| ())
        .map_err(|e| Error::file_system(dest_path, e))
}

fn create_parent_dirs(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| Error::file_system(parent, e))
        }
        _ => Ok(()),
    }
}
