//! create-yoshi-app entry point.
//! Collects the project answers and generates the project into the working directory.

use create_yoshi_app::{
    answers::{complete_answers, default_project_name, get_answers_from},
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    generator::Generator,
    logger::init_logger,
    prompt::{DialoguerPrompter, Prompter},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// # Flow
/// 1. Lists the available project types
/// 2. Merges flag answers with preloaded answers
/// 3. Prompts for whatever is still missing (unless `--no-input`)
/// 4. Generates the project
fn run(args: Args) -> Result<()> {
    let generator = Generator::new(&args.templates_dir);
    let project_types = generator.project_types()?;

    if args.list {
        for project_type in &project_types {
            println!("{project_type}");
        }
        return Ok(());
    }

    let preloaded_answers = get_answers_from(args.stdin, args.answers.as_deref())?;
    let answers = args.flag_answers().or(preloaded_answers);

    let terminal = DialoguerPrompter::new();
    let prompter: Option<&dyn Prompter> = if args.no_input { None } else { Some(&terminal) };
    let spec = complete_answers(
        answers,
        &project_types,
        &default_project_name(&args.working_dir),
        prompter,
    )?;
    log::debug!("Project answers: {spec:?}");

    let report = generator.generate(&spec, &args.working_dir)?;
    for file in report.files() {
        println!("{}: '{}'", file.action, args.working_dir.join(&file.relative_path).display());
    }

    println!(
        "Project '{}' generated successfully in {}.",
        spec.project_name,
        args.working_dir.display()
    );
    Ok(())
}
