//! Collects the answers that make up a [`ProjectSpec`].
//!
//! Answers come from command line flags, a JSON/YAML document (file or
//! stdin) and finally interactive prompts for whatever is still missing.

use std::io::Read;
use std::path::{Component, Path, PathBuf};

use cruet::Inflector;
use log::debug;
use serde::Deserialize;

use crate::constants::FALLBACK_PROJECT_NAME;
use crate::error::{Error, Result};
use crate::project::{ProjectSpec, Transpiler};
use crate::prompt::Prompter;

/// Partially known project answers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Answers {
    pub project_name: Option<String>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub organization: Option<String>,
    pub project_type: Option<String>,
    pub transpiler: Option<Transpiler>,
}

impl Answers {
    /// Fills the fields missing in `self` from `fallback`.
    pub fn or(self, fallback: Answers) -> Answers {
        Answers {
            project_name: self.project_name.or(fallback.project_name),
            author_name: self.author_name.or(fallback.author_name),
            author_email: self.author_email.or(fallback.author_email),
            organization: self.organization.or(fallback.organization),
            project_type: self.project_type.or(fallback.project_type),
            transpiler: self.transpiler.or(fallback.transpiler),
        }
    }
}

/// Preloaded answers as written on disk. Keys are camelCase, all optional.
///
/// The transpiler stays a plain string here so that an unsupported value is
/// reported as such rather than as a malformed document.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnswersDocument {
    project_name: Option<String>,
    author_name: Option<String>,
    author_email: Option<String>,
    organization: Option<String>,
    project_type: Option<String>,
    transpiler: Option<String>,
}

impl TryFrom<AnswersDocument> for Answers {
    type Error = Error;

    fn try_from(document: AnswersDocument) -> Result<Self> {
        Ok(Answers {
            project_name: document.project_name,
            author_name: document.author_name,
            author_email: document.author_email,
            organization: document.organization,
            project_type: document.project_type,
            transpiler: document.transpiler.as_deref().map(str::parse::<Transpiler>).transpose()?,
        })
    }
}

/// Parses preloaded answers. JSON is tried first, then YAML.
/// Empty input yields no answers.
///
/// # Errors
/// * `Error::AnswersError` if the content is neither valid JSON nor valid YAML
/// * `Error::UnknownTranspiler` if the transpiler is not `babel` or `typescript`
pub fn parse_answers(content: &str) -> Result<Answers> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(Answers::default());
    }

    let document: AnswersDocument = match serde_json::from_str(content) {
        Ok(document) => document,
        Err(json_err) => serde_yaml::from_str(content).map_err(|yaml_err| {
            Error::AnswersError(format!(
                "Failed to parse answers as JSON ({json_err}) or YAML ({yaml_err})"
            ))
        })?,
    };
    Answers::try_from(document)
}

pub fn load_answers_file<P: AsRef<Path>>(path: P) -> Result<Answers> {
    let path = path.as_ref();
    debug!("Loading answers from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| Error::file_system(path, e))?;
    parse_answers(&content)
}

pub fn load_answers_from_stdin() -> Result<Answers> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    parse_answers(&buffer)
}

/// Loads preloaded answers from stdin or a file, whichever was requested.
pub fn get_answers_from(take_from_stdin: bool, answers_file: Option<&Path>) -> Result<Answers> {
    match (take_from_stdin, answers_file) {
        (true, _) => load_answers_from_stdin(),
        (false, Some(path)) => load_answers_file(path),
        (false, None) => Ok(Answers::default()),
    }
}

/// Default project name: the destination directory's name in kebab-case.
pub fn default_project_name<P: AsRef<Path>>(destination: P) -> String {
    let destination = destination.as_ref();
    let absolute = if destination.is_absolute() {
        destination.to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_default().join(destination)
    };

    // `.` and `..` are resolved lexically so `app/..` names the parent.
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }

    normalized
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_kebab_case())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_PROJECT_NAME.to_string())
}

fn text_answer(
    prompter: Option<&dyn Prompter>,
    answer: Option<String>,
    question: &str,
    default: &str,
) -> Result<String> {
    match (answer, prompter) {
        (Some(value), _) => Ok(value),
        (None, Some(prompter)) => prompter.input(question, default),
        (None, None) => Ok(default.to_string()),
    }
}

/// Builds a complete [`ProjectSpec`] from `answers`.
///
/// Missing fields are asked through `prompter`. Without a prompter they take
/// their defaults, except the project type which has none.
///
/// # Errors
/// * `Error::InvalidProjectSpec` if the project type cannot be determined
///   or the resulting project name is empty
/// * `Error::PromptError` if the terminal interaction fails
pub fn complete_answers(
    answers: Answers,
    project_types: &[String],
    default_name: &str,
    prompter: Option<&dyn Prompter>,
) -> Result<ProjectSpec> {
    let project_name = text_answer(prompter, answers.project_name, "Project name", default_name)?;
    let author_name = text_answer(prompter, answers.author_name, "Author name", "")?;
    let author_email = text_answer(prompter, answers.author_email, "Author email", "")?;
    let organization = text_answer(prompter, answers.organization, "Organization", "")?;

    let project_type = match (answers.project_type, prompter) {
        (Some(project_type), _) => project_type,
        (None, Some(prompter)) if !project_types.is_empty() => {
            let index = prompter.select("Project type", project_types, 0)?;
            project_types.get(index).cloned().ok_or_else(|| {
                Error::InvalidProjectSpec(format!("no project type at index {index}"))
            })?
        }
        (None, _) => {
            return Err(Error::InvalidProjectSpec("project type is required".to_string()));
        }
    };

    let transpiler = match (answers.transpiler, prompter) {
        (Some(transpiler), _) => transpiler,
        (None, Some(prompter)) => {
            let choices: Vec<String> = Transpiler::ALL.iter().map(ToString::to_string).collect();
            let index = prompter.select("Transpiler", &choices, 0)?;
            Transpiler::ALL.get(index).copied().unwrap_or_default()
        }
        (None, None) => Transpiler::default(),
    };

    let spec = ProjectSpec {
        project_name,
        author_name,
        author_email,
        organization,
        project_type,
        transpiler,
    };
    spec.validate()?;
    Ok(spec)
}
