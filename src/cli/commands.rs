//! CLI command implementations.

use super::GlobalOptions;
use crate::config::{Config, OutputFormat};
use crate::core::error::{Error, Result};
use crate::core::project::ProjectRoot;
use crate::core::reporter::{ConsoleReporter, JsonReporter, Reporter};
use crate::core::runner::Runner;
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;

/// Run checks.
pub fn run(options: &GlobalOptions) -> Result<ExitCode> {
    let root = match &options.root {
        Some(path) => ProjectRoot::open(path.clone())?,
        None => ProjectRoot::current_dir()?,
    };

    let config = load_config(options, root.path())?;
    let format = options.format.unwrap_or(config.output.format);
    let sections = config.sections();

    tracing::debug!(
        root = %root.path().display(),
        sections = sections.len(),
        ?format,
        "Starting run"
    );

    let mut reporter: Box<dyn Reporter> = match format {
        OutputFormat::Text => Box::new(ConsoleReporter::stdout(console::colors_enabled())),
        OutputFormat::Json => Box::new(JsonReporter::stdout()),
    };

    let runner = Runner::new(root);
    let summary = runner.run(&sections, reporter.as_mut());

    Ok(ExitCode::from(summary.exit_code()))
}

/// List the built-in sections and checks.
pub fn list(options: &GlobalOptions) -> Result<ExitCode> {
    let config = load_config(options, &root_path(options)?)?;

    for section in config.sections() {
        println!(
            "{} {}",
            style(section.id()).cyan().bold(),
            style(format!("({})", section.title())).dim()
        );
        for check in section.checks() {
            println!("  - {}", check.name());
        }
    }

    if !config.sections.skip.is_empty() {
        println!();
        println!(
            "{} {}",
            style("Skipped:").yellow(),
            config.sections.skip.join(", ")
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Validate configuration.
pub fn validate(options: &GlobalOptions) -> Result<ExitCode> {
    let path = match &options.config {
        Some(path) => path.clone(),
        None => match Config::find_config_file(&root_path(options)?) {
            Ok(path) => path,
            Err(Error::ConfigNotFound { path }) => {
                eprintln!(
                    "{} No configuration file found ({}), built-in defaults apply",
                    style("•").cyan(),
                    path.display()
                );
                return Ok(ExitCode::SUCCESS);
            },
            Err(e) => return Err(e),
        },
    };

    match Config::load_from(&path) {
        Ok(_) => {
            eprintln!(
                "{} Configuration is valid: {}",
                style("✓").green(),
                path.display()
            );
            Ok(ExitCode::SUCCESS)
        },
        Err(Error::ConfigNotFound { path }) => {
            eprintln!(
                "{} Configuration not found: {}",
                style("!").yellow(),
                path.display()
            );
            Ok(ExitCode::FAILURE)
        },
        Err(e) => {
            eprintln!("{} Configuration validation failed: {e}", style("✗").red());
            Ok(ExitCode::FAILURE)
        },
    }
}

/// Generate shell completions.
pub fn completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    clap_complete::generate(
        shell,
        &mut super::Cli::command(),
        "scaffold-check",
        &mut std::io::stdout(),
    );
}

/// Returns the directory configuration lookup starts from.
fn root_path(options: &GlobalOptions) -> Result<PathBuf> {
    match &options.root {
        Some(path) => Ok(path.clone()),
        None => std::env::current_dir().map_err(|e| Error::io("resolve current directory", e)),
    }
}

/// Loads the explicit configuration file, or searches upward from `start`.
fn load_config(options: &GlobalOptions, start: &std::path::Path) -> Result<Config> {
    match &options.config {
        Some(path) => Config::load_from(path),
        None => Config::load_for(start),
    }
}
