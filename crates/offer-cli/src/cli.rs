//! CLI argument definitions for the offer event cleaner.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use offer_ingest::DEFAULT_INPUT_PATH;
use offer_model::CleaningProfile;
use offer_output::DEFAULT_OUTPUT_PATH;

#[derive(Parser)]
#[command(
    name = "offer-clean",
    version,
    about = "Clean offer event tables",
    long_about = "Clean an offer event table and export it as CSV.\n\n\
                  Coerces column types, fills missing values, normalizes the\n\
                  action flag and removes duplicate rows."
)]
pub struct Cli {
    /// Input table (.parquet, .pq or .csv).
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Output CSV path.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Cleaning profile: `standard` (or `1`) types timestamps and normalizes
    /// only the action flag; `canonical` (or `2`) formats dates and times
    /// as text and normalizes the integer features too.
    #[arg(long, value_name = "PROFILE", default_value = "standard")]
    pub profile: CleaningProfile,

    /// Field delimiter for the output file.
    #[arg(long, value_name = "CHAR", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Run the pipeline and print the summary without writing output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

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

    /// Allow raw cell values in debug logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
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

fn parse_delimiter(value: &str) -> Result<u8, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii() => Ok(ch as u8),
        _ => Err(format!("delimiter must be a single ASCII character, got {value:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_legacy_run() {
        let cli = Cli::parse_from(["offer-clean"]);
        assert_eq!(cli.input, PathBuf::from("amex_offers_data.parquet"));
        assert_eq!(cli.output, PathBuf::from("temp.csv"));
        assert_eq!(cli.profile, CleaningProfile::Standard);
        assert_eq!(cli.delimiter, b',');
        assert!(!cli.dry_run);
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::parse_from([
            "offer-clean",
            "events.csv",
            "--output",
            "out/clean.csv",
            "--profile",
            "canonical",
            "--delimiter",
            ";",
            "--dry-run",
        ]);
        assert_eq!(cli.input, PathBuf::from("events.csv"));
        assert_eq!(cli.output, PathBuf::from("out/clean.csv"));
        assert_eq!(cli.profile, CleaningProfile::Canonical);
        assert_eq!(cli.delimiter, b';');
        assert!(cli.dry_run);
    }

    #[test]
    fn profile_accepts_variant_numbers() {
        let cli = Cli::parse_from(["offer-clean", "--profile", "2"]);
        assert_eq!(cli.profile, CleaningProfile::Canonical);
        assert!(Cli::try_parse_from(["offer-clean", "--profile", "fancy"]).is_err());
    }

    #[test]
    fn delimiter_must_be_one_ascii_char() {
        assert!(parse_delimiter("\t").is_ok());
        assert!(parse_delimiter("ab").is_err());
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter("§").is_err());
    }
}
