//! Command-line interface for scaffold-check.
//!
//! This module provides the `scaffold-check` CLI with subcommands for:
//! - `run`: Run the conformance checks (default)
//! - `list`: List the built-in sections and checks
//! - `validate`: Validate configuration
//! - `completions`: Generate shell completions

mod commands;

use crate::config::OutputFormat;
use crate::core::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Read-only conformance checks for a project's scaffolding.
#[derive(Debug, Parser)]
#[command(
    name = "scaffold-check",
    author,
    version,
    about = "Read-only conformance checks for a project's scaffolding",
    long_about = r#"
scaffold-check inspects a project tree and reports, check by check, whether
its layout, manifests and configuration match the expected scaffold.

Nothing is modified. Every check reports PASS, FAIL or WARN; warnings never
change the exit status.

Exit status:
  0   no check failed
  1   at least one check failed, or the run was aborted

Environment variables:
  SCAFFOLD_CHECK_ROOT   Project root to inspect
  RUST_LOG              Override the log filter
"#,
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Project root to inspect (defaults to the current directory).
    #[arg(long, global = true, env = "SCAFFOLD_CHECK_ROOT", value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Configuration file (defaults to searching upward from the root).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report format (overrides the configuration file).
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use color output.
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,
}

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Always use color.
    Always,
    /// Auto-detect color support.
    #[default]
    Auto,
    /// Never use color.
    Never,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run every check and print the report.
    #[command(visible_alias = "r")]
    Run,

    /// List the sections and checks without inspecting anything.
    #[command(visible_alias = "l")]
    List,

    /// Validate the configuration file.
    #[command(visible_alias = "v")]
    Validate,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Project root, if given.
    pub root: Option<PathBuf>,
    /// Explicit configuration file, if given.
    pub config: Option<PathBuf>,
    /// Report format override, if given.
    pub format: Option<OutputFormat>,
}

/// Runs the CLI.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);
    setup_color(cli.color);

    let options = GlobalOptions {
        root: cli.root,
        config: cli.config,
        format: cli.format,
    };

    // No subcommand runs the checks, same as `scaffold-check run`
    match cli.command {
        Some(Commands::Run) | None => commands::run(&options),
        Some(Commands::List) => commands::list(&options),
        Some(Commands::Validate) => commands::validate(&options),
        Some(Commands::Completions { shell }) => {
            commands::completions(shell);
            Ok(ExitCode::SUCCESS)
        },
    }
}

/// Sets up logging based on verbosity flags.
fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Sets up color output.
fn setup_color(choice: ColorChoice) {
    match choice {
        ColorChoice::Always => {
            console::set_colors_enabled(true);
            console::set_colors_enabled_stderr(true);
        },
        ColorChoice::Never => {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        },
        ColorChoice::Auto => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_help() {
        let cli = Cli::try_parse_from(["scaffold-check", "--help"]);
        // --help causes early exit, so this will be an error
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_version() {
        let cli = Cli::try_parse_from(["scaffold-check", "--version"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    // =========================================================================
    // Subcommand parsing tests
    // =========================================================================

    #[test]
    fn test_parse_no_subcommand() {
        let cli = Cli::try_parse_from(["scaffold-check"]).expect("parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_run() {
        let cli = Cli::try_parse_from(["scaffold-check", "run"]).expect("parse");
        assert!(matches!(cli.command, Some(Commands::Run)));
    }

    #[test]
    fn test_parse_run_alias() {
        let cli = Cli::try_parse_from(["scaffold-check", "r"]).expect("parse run alias");
        assert!(matches!(cli.command, Some(Commands::Run)));
    }

    #[test]
    fn test_parse_list() {
        let cli = Cli::try_parse_from(["scaffold-check", "list"]).expect("parse");
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn test_parse_validate_alias() {
        let cli = Cli::try_parse_from(["scaffold-check", "v"]).expect("parse validate alias");
        assert!(matches!(cli.command, Some(Commands::Validate)));
    }

    #[test]
    fn test_parse_completions() {
        for shell in ["bash", "zsh", "fish"] {
            let cli = Cli::try_parse_from(["scaffold-check", "completions", shell]);
            assert!(
                matches!(cli, Ok(Cli { command: Some(Commands::Completions { .. }), .. })),
                "Shell '{shell}' should be accepted"
            );
        }
    }

    #[test]
    fn test_parse_unknown_subcommand() {
        assert!(Cli::try_parse_from(["scaffold-check", "install"]).is_err());
    }

    // =========================================================================
    // Global flags tests
    // =========================================================================

    #[test]
    fn test_parse_root_and_config() {
        let cli = Cli::try_parse_from([
            "scaffold-check",
            "--root",
            "/tmp/project",
            "--config",
            "custom.toml",
            "list",
        ])
        .expect("parse");
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/project")));
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_parse_global_flag_after_subcommand() {
        let cli =
            Cli::try_parse_from(["scaffold-check", "run", "--format", "json"]).expect("parse");
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_parse_format_defaults_to_none() {
        let cli = Cli::try_parse_from(["scaffold-check"]).expect("parse");
        assert_eq!(cli.format, None);
    }

    #[test]
    fn test_parse_invalid_format() {
        assert!(Cli::try_parse_from(["scaffold-check", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_parse_verbose_and_quiet() {
        let cli = Cli::try_parse_from(["scaffold-check", "-v"]).expect("parse");
        assert!(cli.verbose);
        assert!(!cli.quiet);

        let cli = Cli::try_parse_from(["scaffold-check", "--quiet", "list"]).expect("parse");
        assert!(!cli.verbose);
        assert!(cli.quiet);
    }

    #[test]
    fn test_parse_color() {
        let cli = Cli::try_parse_from(["scaffold-check", "--color", "never"]).expect("parse");
        assert_eq!(cli.color, ColorChoice::Never);

        let cli = Cli::try_parse_from(["scaffold-check"]).expect("parse");
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn test_color_choice_default() {
        assert_eq!(ColorChoice::default(), ColorChoice::Auto);
    }
}
