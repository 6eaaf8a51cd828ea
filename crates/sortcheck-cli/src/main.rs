//! sortcheck CLI.
//!
//! Generates a reverse-ordered sequence, sorts it in place, and verifies the
//! result is `0..n`.
//!
//! # Quick Start
//!
//! ```bash
//! # One calibrated variant (10, 1000 or 8192 elements)
//! sortcheck small
//!
//! # Any positive size
//! sortcheck run 4096 --algorithm anchored --sample tail:3
//!
//! # Every configured variant, with a summary table
//! sortcheck all
//! ```
//!
//! Exit status: 0 when every run verified, 1 when a sort failed
//! verification, 2 for a contract violation or a usage/config error.

mod commands;
mod style;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use sortcheck::{SamplePolicy, SizeVariant, SortAlgorithm};
use sortcheck_config::OutputFormat;
use tracing_subscriber::EnvFilter;

use crate::commands::Settings;

/// sortcheck - self-verifying in-place sort runs.
#[derive(Parser)]
#[command(name = "sortcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (overrides config).
    #[arg(long, global = true, value_enum)]
    format: Option<FormatArg>,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Log to stderr (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Directory holding sortcheck.toml (defaults to the current directory).
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort and verify 10 elements.
    Small,

    /// Sort and verify 1000 elements.
    Medium,

    /// Sort and verify 8192 elements.
    Large,

    /// Sort and verify any positive number of elements.
    Run {
        /// Number of elements (must be positive).
        #[arg(allow_negative_numbers = true)]
        size: i64,

        /// Sort algorithm (adjacent, anchored).
        #[arg(short, long, default_value = "adjacent")]
        algorithm: SortAlgorithm,

        /// Values to print on success (all, none, tail:K).
        #[arg(short, long, default_value = "none")]
        sample: SamplePolicy,
    },

    /// Run every configured variant in order.
    All,

    /// Configuration commands.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show version information.
    Version,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration.
    Show,

    /// Check that the configuration loads.
    Validate,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl FormatArg {
    fn into_output_format(self) -> OutputFormat {
        match self {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    // Commands that load settings refine this with the config file.
    style::set_no_color(!commands::color_allowed(true, cli.no_color));

    let format = cli.format.map(FormatArg::into_output_format);
    let settings = || Settings::load(cli.config_dir.as_deref(), format, cli.no_color);

    let result = match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(commands::RunStatus::Passed)
        }
        Commands::Small => {
            settings().and_then(|s| commands::run::variant(&s, SizeVariant::Small))
        }
        Commands::Medium => {
            settings().and_then(|s| commands::run::variant(&s, SizeVariant::Medium))
        }
        Commands::Large => {
            settings().and_then(|s| commands::run::variant(&s, SizeVariant::Large))
        }
        Commands::Run {
            size,
            algorithm,
            sample,
        } => settings().and_then(|s| commands::run::sized(&s, size, algorithm, sample)),
        Commands::All => settings().and_then(|s| commands::run::all(&s)),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::show(cli.config_dir.as_deref()),
            ConfigCommands::Validate => commands::config::validate(cli.config_dir.as_deref()),
        },
    };

    match result {
        Ok(status) => status.exit_code(),
        Err(e) => {
            style::print_error(&format!("{e:#}"));
            ExitCode::from(2)
        }
    }
}
