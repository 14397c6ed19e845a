//! Project description consumed by the generator.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::TYPESCRIPT_SUFFIX;
use crate::error::{Error, Result};

/// Substitution values, keyed by placeholder name.
pub type ValuesMap = IndexMap<String, String>;

/// Language flavour of a template set.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Transpiler {
    #[default]
    Babel,
    Typescript,
}

impl Transpiler {
    pub const ALL: [Transpiler; 2] = [Transpiler::Babel, Transpiler::Typescript];

    /// Suffix appended to the project type to find the template directory.
    pub fn template_suffix(self) -> &'static str {
        match self {
            Transpiler::Babel => "",
            Transpiler::Typescript => TYPESCRIPT_SUFFIX,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Transpiler::Babel => "babel",
            Transpiler::Typescript => "typescript",
        }
    }
}

impl fmt::Display for Transpiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transpiler {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "babel" => Ok(Transpiler::Babel),
            "typescript" => Ok(Transpiler::Typescript),
            other => Err(Error::UnknownTranspiler(other.to_string())),
        }
    }
}

/// Everything needed to generate one project.
///
/// `project_type` and `transpiler` only select the template, the remaining
/// fields are substituted into its files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSpec {
    pub project_name: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_email: String,
    #[serde(default)]
    pub organization: String,
    pub project_type: String,
    #[serde(default)]
    pub transpiler: Transpiler,
}

impl ProjectSpec {
    /// Name of the template directory this project is generated from.
    ///
    /// ```
    /// use create_yoshi_app::project::{ProjectSpec, Transpiler};
    ///
    /// let spec = ProjectSpec {
    ///     project_name: "demo".into(),
    ///     author_name: String::new(),
    ///     author_email: String::new(),
    ///     organization: String::new(),
    ///     project_type: "client".into(),
    ///     transpiler: Transpiler::Typescript,
    /// };
    /// assert_eq!(spec.template_name(), "client-typescript");
    /// ```
    pub fn template_name(&self) -> String {
        format!("{}{}", self.project_type, self.transpiler.template_suffix())
    }

    /// Placeholder values for this project, in a fixed order.
    pub fn values(&self) -> ValuesMap {
        IndexMap::from([
            ("projectName".to_string(), self.project_name.clone()),
            ("authorName".to_string(), self.author_name.clone()),
            ("authorEmail".to_string(), self.author_email.clone()),
            ("organization".to_string(), self.organization.clone()),
        ])
    }

    pub fn validate(&self) -> Result<()> {
        if self.project_name.trim().is_empty() {
            return Err(Error::InvalidProjectSpec("project name must not be empty".to_string()));
        }
        if self.project_type.trim().is_empty() {
            return Err(Error::InvalidProjectSpec("project type must not be empty".to_string()));
        }
        Ok(())
    }
}
