//! Template resolution and enumeration.
//! Maps a project type to its template directory and lists the files
//! that will be materialized from it.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::constants::TYPESCRIPT_SUFFIX;
use crate::error::{Error, Result};
use crate::ignore::{parse_ignore_file, IgnoreRules};
use crate::project::ProjectSpec;

/// A single file of a template directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Absolute (or templates-root relative) path of the source file
    pub source: PathBuf,
    /// Path relative to the template directory, reproduced in the output
    pub relative_path: PathBuf,
}

/// The files of one template directory, ignored paths excluded.
#[derive(Debug)]
pub struct TemplateTree {
    root: PathBuf,
    files: Vec<TemplateFile>,
}

impl TemplateTree {
    /// Enumerates `template_dir` recursively, dotfiles included, honoring its ignore file.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if `template_dir` is not a directory
    /// * `Error::IgnoreError` if the ignore file has an invalid pattern
    /// * `Error::WalkError` if a directory cannot be read
    pub fn load<P: AsRef<Path>>(template_dir: P) -> Result<Self> {
        let root = template_dir.as_ref();
        if !root.is_dir() {
            return Err(Error::TemplateNotFound { template_dir: root.display().to_string() });
        }
        let ignore_rules = parse_ignore_file(root)?;
        Self::load_with_rules(root, &ignore_rules)
    }

    /// Enumerates `template_dir` with explicit ignore rules.
    pub fn load_with_rules<P: AsRef<Path>>(template_dir: P, ignore_rules: &IgnoreRules) -> Result<Self> {
        let root = template_dir.as_ref();
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| match entry.path().strip_prefix(root) {
                Ok(relative) => {
                    let ignored = if entry.file_type().is_dir() {
                        ignore_rules.is_ignored_dir(relative)
                    } else {
                        ignore_rules.is_ignored(relative)
                    };
                    if ignored {
                        debug!("Skipping '{}' from ignore file", relative.display());
                    }
                    !ignored
                }
                Err(_) => true,
            });

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let source = entry.into_path();
            let Ok(relative_path) = source.strip_prefix(root).map(Path::to_path_buf) else {
                debug!("Skipping '{}' outside of template root", source.display());
                continue;
            };
            files.push(TemplateFile { source, relative_path });
        }

        Ok(Self { root: root.to_path_buf(), files })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> &[TemplateFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<'a> IntoIterator for &'a TemplateTree {
    type Item = &'a TemplateFile;
    type IntoIter = std::slice::Iter<'a, TemplateFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// Returns the template directory for `spec` under `templates_root`.
///
/// The directory name is the project type, suffixed with `-typescript` for
/// TypeScript projects. Names that are not a single plain path component
/// never resolve.
///
/// # Errors
/// * `Error::TemplateNotFound` if the directory does not exist
pub fn resolve_template_dir<P: AsRef<Path>>(templates_root: P, spec: &ProjectSpec) -> Result<PathBuf> {
    let template_name = spec.template_name();
    let template_dir = templates_root.as_ref().join(&template_name);

    let mut components = Path::new(&template_name).components();
    let is_plain_name = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    if !is_plain_name || !template_dir.is_dir() {
        return Err(Error::TemplateNotFound { template_dir: template_dir.display().to_string() });
    }

    debug!("Using template directory {}", template_dir.display());
    Ok(template_dir)
}

/// Lists the project types available under `templates_root`.
///
/// Variant suffixes are stripped, so `client` and `client-typescript`
/// both count as `client`. The result is sorted and deduplicated.
pub fn available_project_types<P: AsRef<Path>>(templates_root: P) -> Result<Vec<String>> {
    let templates_root = templates_root.as_ref();
    if !templates_root.is_dir() {
        return Err(Error::TemplateNotFound {
            template_dir: templates_root.display().to_string(),
        });
    }

    let entries = std::fs::read_dir(templates_root)
        .map_err(|e| Error::file_system(templates_root, e))?;

    let mut project_types = BTreeSet::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::file_system(templates_root, e))?;
        if !entry.path().is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        let project_type = name.strip_suffix(TYPESCRIPT_SUFFIX).unwrap_or(&name);
        if !project_type.is_empty() && !project_type.starts_with('.') {
            project_types.insert(project_type.to_string());
        }
    }

    Ok(project_types.into_iter().collect())
}
