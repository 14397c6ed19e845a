//! Command-line interface implementation for create-yoshi-app.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::answers::Answers;
use crate::constants::DEFAULT_TEMPLATES_DIR;
use crate::project::Transpiler;

/// Command-line arguments structure for create-yoshi-app.
#[derive(Parser, Debug)]
#[command(author, version, about = "create-yoshi-app: scaffold a new yoshi project", long_about = None)]
pub struct Args {
    /// Directory where the project will be generated
    #[arg(value_name = "WORKING_DIR", default_value = ".")]
    pub working_dir: PathBuf,

    /// Project type, e.g. client or server
    #[arg(short = 't', long, value_name = "TYPE")]
    pub project_type: Option<String>,

    /// Transpiler used by the generated project
    #[arg(long, value_enum)]
    pub transpiler: Option<Transpiler>,

    /// Project name, defaults to the working directory name
    #[arg(short = 'n', long, value_name = "NAME")]
    pub project_name: Option<String>,

    #[arg(long, value_name = "NAME")]
    pub author_name: Option<String>,

    #[arg(long, value_name = "EMAIL")]
    pub author_email: Option<String>,

    #[arg(long, value_name = "ORG")]
    pub organization: Option<String>,

    /// Read answers from a JSON or YAML file
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdin")]
    pub answers: Option<PathBuf>,

    /// Read answers as JSON or YAML from stdin
    #[arg(short, long)]
    pub stdin: bool,

    /// Never prompt. Missing answers take their default values.
    #[arg(long)]
    pub no_input: bool,

    /// Directory containing the project templates
    #[arg(long, value_name = "DIR", default_value = DEFAULT_TEMPLATES_DIR)]
    pub templates_dir: PathBuf,

    /// List available project types and exit
    #[arg(short, long)]
    pub list: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Answers given directly as flags.
    pub fn flag_answers(&self) -> Answers {
        Answers {
            project_name: self.project_name.clone(),
            author_name: self.author_name.clone(),
            author_email: self.author_email.clone(),
            organization: self.organization.clone(),
            project_type: self.project_type.clone(),
            transpiler: self.transpiler,
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// Every argument has a default, so only malformed input fails. Clap then
/// prints the error and exits.
pub fn get_args() -> Args {
    Args::parse()
}
