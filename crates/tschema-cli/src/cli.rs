//! CLI argument definitions for `tschema`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tschema",
    version,
    about = "Validate CSV data against a table schema",
    long_about = "Validate CSV data against a table schema.\n\n\
                  Every data row is checked against the schema's field types and\n\
                  constraints, and every failing cell is reported."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a CSV file against a schema.
    Validate(ValidateArgs),

    /// Print a schema in canonical JSON form.
    Schema(SchemaArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the CSV file. The first row must be the header.
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Path to the table schema JSON file.
    #[arg(long = "schema", short = 's', value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Enforce every declared constraint, not just types and `required`.
    ///
    /// Adds pattern, enum, minLength, maxLength, min and max checks, and
    /// validates boolean and list fields.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Field delimiter of the CSV file.
    #[arg(long = "delimiter", default_value_t = ',')]
    pub delimiter: char,

    /// Item separator inside list cells.
    #[arg(long = "list-delimiter", default_value_t = ',')]
    pub list_delimiter: char,

    /// Output format for results.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Only report invalid rows in JSON output.
    ///
    /// The table output lists failing cells only, whatever this flag says.
    #[arg(long = "only-invalid")]
    pub only_invalid: bool,
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Schema file to normalize; prints the built-in sample when omitted.
    #[arg(value_name = "SCHEMA")]
    pub schema: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
