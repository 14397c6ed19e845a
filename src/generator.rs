//! Project generation: resolves a template and materializes it on disk.
//!
//! Files are streamed one at a time (read, substitute, write). Nothing is
//! rolled back on failure, files written before an error stay on disk.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::Result;
use crate::processor::{copy_file, write_file, FileAction, FileOperation, Processor};
use crate::project::ProjectSpec;
use crate::template::{available_project_types, resolve_template_dir, TemplateTree};

/// One file produced by a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the destination directory
    pub relative_path: PathBuf,
    pub action: FileAction,
}

/// Summary of a finished generation run.
#[derive(Debug)]
pub struct GenerationReport {
    template_dir: PathBuf,
    files: Vec<GeneratedFile>,
}

impl GenerationReport {
    /// Template directory the project was generated from.
    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    pub fn files(&self) -> &[GeneratedFile] {
        &self.files
    }

    /// Number of files whose content was rewritten by substitution.
    pub fn rendered_count(&self) -> usize {
        self.files.iter().filter(|f| f.action == FileAction::Rendered).count()
    }
}

/// Generates projects from the template directories under a templates root.
#[derive(Debug, Clone)]
pub struct Generator {
    templates_root: PathBuf,
}

impl Generator {
    pub fn new<P: Into<PathBuf>>(templates_root: P) -> Self {
        Self { templates_root: templates_root.into() }
    }

    pub fn templates_root(&self) -> &Path {
        &self.templates_root
    }

    /// Project types that can be generated from this templates root.
    pub fn project_types(&self) -> Result<Vec<String>> {
        available_project_types(&self.templates_root)
    }

    /// Materializes the template selected by `spec` under `destination`.
    ///
    /// `destination` and any intermediate directories are created on demand.
    /// Existing files at the same paths are overwritten.
    ///
    /// # Errors
    /// * `Error::InvalidProjectSpec` if the project name or type is empty
    /// * `Error::TemplateNotFound` if the template directory does not exist,
    ///   in which case nothing is written
    /// * `Error::FileSystemError` if a file cannot be read or written
    pub fn generate<P: AsRef<Path>>(&self, spec: &ProjectSpec, destination: P) -> Result<GenerationReport> {
        let destination = destination.as_ref();
        spec.validate()?;

        let template_dir = resolve_template_dir(&self.templates_root, spec)?;
        let tree = TemplateTree::load(&template_dir)?;
        info!(
            "Generating '{}' from {} ({} files)",
            spec.project_name,
            template_dir.display(),
            tree.len()
        );

        let values = spec.values();
        let processor = Processor::new(destination, &values);
        let mut files = Vec::with_capacity(tree.len());

        for template_file in &tree {
            let result = processor.process(template_file)?;
            let action = result.operation.action();
            match result.operation {
                FileOperation::Copy { target } => {
                    debug!("Copying file: {}", target.display());
                    copy_file(&result.source, &target)?;
                }
                FileOperation::Write { target, content } => {
                    debug!("Writing file: {}", target.display());
                    write_file(&content, &target)?;
                }
            }
            files.push(GeneratedFile { relative_path: result.relative_path, action });
        }

        Ok(GenerationReport { template_dir, files })
    }
}
