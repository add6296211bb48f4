use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "RxForge Contributors",
    version,
    about = "RxForge CLI - Fabricate fictional drug compounds and put them through randomized trials.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output (command errors are still printed)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a compound from a base and modifiers, then run a simulated trial on it.
    Run(RunArgs),
    /// Inspect or clear the persisted session history.
    History(HistoryArgs),
    /// List the available base compounds and modifiers.
    Catalog(CatalogArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable report with a metrics chart
    #[default]
    Text,
    /// The exported JSON document
    Json,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    // --- Core Arguments ---
    /// Key of the base compound (e.g., 'aspirin-like'). See `rxforge catalog`.
    #[arg(short, long, required = true, value_name = "KEY")]
    pub base: String,

    /// Disease or condition the compound is targeted at.
    /// Falls back to the configured default disease when empty.
    #[arg(short, long, default_value = "", value_name = "TEXT")]
    pub disease: String,

    /// Comma-separated modifier list (e.g., 'anti-inflammatory, targeted').
    #[arg(short, long, default_value = "", value_name = "LIST")]
    pub modifiers: String,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the catalog of bases and modifiers with a TOML file.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    // --- Simulation Overrides ---
    /// Seed the random generator for a reproducible trial.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Override the artificial processing delay in milliseconds.
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Skip the artificial processing delay.
    #[arg(long, conflicts_with = "delay_ms")]
    pub no_delay: bool,

    // --- Output ---
    /// Also write the result as a JSON document to this path.
    #[arg(short, long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Do not append this run to the session history.
    #[arg(long)]
    pub no_history: bool,

    /// Output format for the result.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S criteria.efficacy-min=75
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `history` subcommand.
#[derive(Args, Debug)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: HistoryCommands,
}

/// Available commands for history management.
#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// Print every recorded trial, oldest first.
    List {
        /// Output format for the history.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Remove every recorded trial.
    Clear,
    /// Show the absolute path to the history file.
    Path,
}

/// Arguments for the `catalog` subcommand.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Path to a configuration file in TOML format (its `catalog-path` is honored).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// List the tables from this TOML catalog instead of the built-in one.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_parses_core_arguments() {
        let cli = Cli::parse_from([
            "rxforge",
            "-vv",
            "run",
            "-b",
            "aspirin-like",
            "-d",
            "chronic pain",
            "-m",
            "anti-inflammatory, targeted",
            "--seed",
            "42",
            "--no-delay",
            "-S",
            "criteria.efficacy-min=75",
        ]);

        assert_eq!(cli.verbose, 2);
        let Commands::Run(args) = cli.command else {
            panic!("Expected 'run' subcommand");
        };
        assert_eq!(args.base, "aspirin-like");
        assert_eq!(args.disease, "chronic pain");
        assert_eq!(args.modifiers, "anti-inflammatory, targeted");
        assert_eq!(args.seed, Some(42));
        assert!(args.no_delay);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.set_values, vec!["criteria.efficacy-min=75"]);
    }

    #[test]
    fn run_defaults_disease_and_modifiers_to_empty() {
        let cli = Cli::parse_from(["rxforge", "run", "--base", "custom"]);
        let Commands::Run(args) = cli.command else {
            panic!("Expected 'run' subcommand");
        };
        assert!(args.disease.is_empty());
        assert!(args.modifiers.is_empty());
        assert!(!args.no_history);
    }

    #[test]
    fn run_requires_a_base() {
        assert!(Cli::try_parse_from(["rxforge", "run", "-d", "fever"]).is_err());
    }

    #[test]
    fn no_delay_conflicts_with_delay_ms() {
        let result = Cli::try_parse_from([
            "rxforge",
            "run",
            "-b",
            "custom",
            "--no-delay",
            "--delay-ms",
            "10",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["rxforge", "-q", "-v", "history", "path"]).is_err());
    }

    #[test]
    fn history_list_accepts_json_format() {
        let cli = Cli::parse_from(["rxforge", "history", "list", "--format", "json"]);
        let Commands::History(HistoryArgs {
            command: HistoryCommands::List { format },
        }) = cli.command
        else {
            panic!("Expected 'history list' subcommand");
        };
        assert_eq!(format, OutputFormat::Json);
    }
}
