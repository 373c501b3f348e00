use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::path::PathBuf;

use etalase_core::DimensionsInput;

#[derive(Parser, Debug)]
#[command(
    name = "etalase",
    version,
    about = "Price estimator for aluminium glass display cases"
)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "ETALASE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Price a display case
    Quote(QuoteArgs),

    /// Show the effective price list
    Prices {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration as TOML
    Show,

    /// Print the config file location
    Path,
}

/// Dimensions are taken as raw text so they go through the same coercion
/// as form and JSON input.
#[derive(Args, Debug, Clone, Default)]
pub struct QuoteArgs {
    /// Length in meters (default 1)
    #[arg(short, long, allow_hyphen_values = true)]
    pub length: Option<String>,

    /// Width in meters (default 1)
    #[arg(short, long, allow_hyphen_values = true)]
    pub width: Option<String>,

    /// Height in meters (default 1)
    #[arg(short = 'H', long, allow_hyphen_values = true)]
    pub height: Option<String>,

    /// Number of internal glass partitions (default 1)
    #[arg(short, long, allow_hyphen_values = true)]
    pub sections: Option<String>,

    /// Add castor wheels
    #[arg(long)]
    pub wheels: bool,

    /// Add the iron reinforcement frame
    #[arg(long)]
    pub iron_frame: bool,

    /// Read dimensions from a JSON file ("-" for stdin); flags override it
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Reject malformed dimensions instead of treating them as 0
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl QuoteArgs {
    /// Dimensions given on the command line. Unset flags stay unset so a
    /// `--input` file can supply them.
    pub fn to_input(&self) -> DimensionsInput {
        let text = |arg: &Option<String>| arg.clone().map(Value::String);

        DimensionsInput {
            length: text(&self.length),
            width: text(&self.width),
            height: text(&self.height),
            sections: text(&self.sections),
            use_wheels: self.wheels.then_some(Value::Bool(true)),
            use_iron_frame: self.iron_frame.then_some(Value::Bool(true)),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON document
    Json,
}

impl Commands {
    /// Output format the command renders in; errors follow it.
    pub fn output_format(&self) -> OutputFormat {
        match self {
            Commands::Quote(args) => args.format,
            Commands::Prices { format } => *format,
            Commands::Config { .. } => OutputFormat::Table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("etalase").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_quote_flags() {
        let cli = parse(&[
            "quote", "-l", "1.2", "-w", "0.5", "-H", "1", "-s", "2", "--wheels", "--format",
            "json",
        ]);

        let Commands::Quote(args) = cli.command else {
            panic!("expected quote");
        };
        assert_eq!(args.length.as_deref(), Some("1.2"));
        assert_eq!(args.height.as_deref(), Some("1"));
        assert!(args.wheels);
        assert!(!args.iron_frame);
        assert_eq!(args.format, OutputFormat::Json);

        let input = args.to_input();
        assert_eq!(input.width, Some(json!("0.5")));
        assert_eq!(input.sections, Some(json!("2")));
        assert_eq!(input.use_wheels, Some(json!(true)));
        assert_eq!(input.use_iron_frame, None);
    }

    #[test]
    fn test_negative_values_are_accepted_as_text() {
        let cli = parse(&["quote", "--length", "-2"]);
        let Commands::Quote(args) = cli.command else {
            panic!("expected quote");
        };
        assert_eq!(args.length.as_deref(), Some("-2"));
    }

    #[test]
    fn test_quote_defaults() {
        let cli = parse(&["quote"]);
        assert_eq!(cli.command.output_format(), OutputFormat::Table);

        let Commands::Quote(args) = cli.command else {
            panic!("expected quote");
        };
        assert_eq!(args.to_input(), DimensionsInput::default());
        assert!(!args.strict);
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = parse(&["prices", "--config", "prices.toml", "-f", "json"]);
        assert_eq!(cli.config, Some(PathBuf::from("prices.toml")));
        assert_eq!(cli.command.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_config_subcommands() {
        assert!(matches!(
            parse(&["config", "show"]).command,
            Commands::Config {
                action: ConfigCommands::Show
            }
        ));
        assert!(matches!(
            parse(&["config", "path"]).command,
            Commands::Config {
                action: ConfigCommands::Path
            }
        ));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["etalase", "quote", "--format", "xml"]).is_err());
    }
}
