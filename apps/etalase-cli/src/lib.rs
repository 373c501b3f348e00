//! # etalase-cli
//!
//! Command-line host for the etalase pricing engine.
//!
//! ## Module Organization
//! ```text
//! etalase_cli/
//! ├── lib.rs          ◄─── You are here (logging, dispatch)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── config.rs       ◄─── Settings: defaults, config.toml, ETALASE_*
//! ├── render.rs       ◄─── Tables and Indonesian number formatting
//! ├── commands/
//! │   ├── quote.rs    ◄─── etalase quote
//! │   ├── prices.rs   ◄─── etalase prices
//! │   └── config.rs   ◄─── etalase config show|path
//! └── error.rs        ◄─── CliError (code + message)
//! ```
//!
//! ## Thin Host
//! The host owns everything the engine refuses to do: reading files and
//! environment, logging, formatting numbers. Pricing decisions live in
//! `etalase-core` only.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ConfigCommands, OutputFormat};
use config::Settings;
use error::CliError;

/// Runs the CLI and returns the process exit code.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Parse arguments (clap exits on --help / usage errors)              │
/// │  2. Initialize logging (stderr, RUST_LOG)                              │
/// │  3. Load settings (defaults → config.toml → ETALASE_*)                 │
/// │  4. Dispatch the subcommand                                            │
/// │  5. Print output to stdout, or the error to stderr / stdout (json)     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let format = cli.command.output_format();
    match execute(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(code = ?err.code, message = %err.message, "Command failed");
            match format {
                OutputFormat::Json => println!("{}", err.to_json()),
                OutputFormat::Table => eprintln!("error: {}", err),
            }
            ExitCode::from(err.exit_code())
        }
    }
}

/// Loads settings and dispatches the parsed command.
pub fn execute(cli: &Cli) -> Result<String, CliError> {
    if let Commands::Config {
        action: ConfigCommands::Path,
    } = &cli.command
    {
        return Ok(commands::config::path(cli.config.as_deref()));
    }

    let settings = Settings::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Quote(args) => commands::quote::execute(&settings, args),
        Commands::Prices { format } => commands::prices::execute(&settings, *format),
        Commands::Config { action } => match action {
            ConfigCommands::Show => commands::config::show(&settings),
            ConfigCommands::Path => Ok(commands::config::path(cli.config.as_deref())),
        },
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=etalase_cli=trace` - Trace for this crate only
/// - Default: warnings, plus info from this crate
///
/// Logs go to stderr so stdout stays clean for `--format json`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,etalase_cli=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
