//! Offer event cleaner CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use offer_cli::commands::run_clean;
use offer_cli::logging::{LogConfig, LogFormat, init_logging};
use offer_cli::summary::print_summary;
use offer_cli::types::CleanRequest;
use offer_model::CleaningOptions;
use offer_output::CsvOutputOptions;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let request = clean_request_from_cli(&cli);
    let exit_code = match run_clean(&request) {
        Ok(result) => {
            print_summary(&result);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn clean_request_from_cli(cli: &Cli) -> CleanRequest {
    let options = CleaningOptions::new()
        .with_profile(cli.profile)
        .with_log_data(cli.log_data);
    CleanRequest {
        input: cli.input.clone(),
        output: cli.output.clone(),
        options,
        csv: CsvOutputOptions {
            delimiter: cli.delimiter,
        },
        dry_run: cli.dry_run,
    }
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
