//! Table schema validator CLI.

use std::io::{self, IsTerminal};

use anyhow::{Result, bail};
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;
use tschema_cli::commands::{ValidateRequest, run_schema, run_validate};
use tschema_cli::logging::{LogConfig, LogFormat, init_logging};
use tschema_cli::summary::{render_json, render_table};
use tschema_validate::{ConstraintCoverage, ValidationOptions};

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, OutputFormatArg, ValidateArgs};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Validate(args) => match validate(&args) {
            Ok(valid) => {
                if valid { 0 } else { 1 }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Schema(args) => match run_schema(args.schema.as_deref()) {
            Ok(json) => {
                println!("{json}");
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Run a validation and print its report; returns whether every row passed.
fn validate(args: &ValidateArgs) -> Result<bool> {
    let request = validate_request(args)?;
    let outcome = run_validate(&request)?;
    match args.format {
        OutputFormatArg::Table => println!("{}", render_table(&outcome)),
        OutputFormatArg::Json => println!("{}", render_json(&outcome, args.only_invalid)?),
    }
    Ok(outcome.summary.is_valid())
}

fn validate_request(args: &ValidateArgs) -> Result<ValidateRequest> {
    let Ok(delimiter) = u8::try_from(args.delimiter) else {
        bail!("delimiter must be a single-byte character, got {:?}", args.delimiter);
    };
    let coverage = if args.strict {
        ConstraintCoverage::Full
    } else {
        ConstraintCoverage::Basic
    };
    Ok(ValidateRequest {
        schema_path: args.schema.clone(),
        data_path: args.data.clone(),
        delimiter,
        options: ValidationOptions::new()
            .with_coverage(coverage)
            .with_list_delimiter(args.list_delimiter),
    })
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
