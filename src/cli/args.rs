//! Command-line argument definitions for METAR processor
//!
//! This module defines the complete CLI interface using the clap derive
//! API. The binary is a thin consumer of the parsing library: every
//! subcommand funnels report text into the same tokenize/classify pipeline.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the METAR report processor
///
/// Parses METAR aviation weather reports into structured fields or decodes
/// them into plain-language weather summaries.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "metar-processor",
    version,
    about = "Parse METAR aviation weather reports and decode them to plain language",
    long_about = "Parses coded METAR bulletins into discrete typed fields (observation time, \
                  wind, visibility, weather conditions, temperature, dew point, altimeter) and \
                  optionally renders them as a human-readable sentence. Extraction is \
                  best-effort: unrecognized tokens are dropped rather than rejected."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress logging; errors and results only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Resolve the tracing level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}

/// Available subcommands for the METAR processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse reports into structured fields
    Parse(ParseArgs),
    /// Decode reports into plain-language summaries
    Decode(DecodeArgs),
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: ReportInput,

    /// Output format for parsed fields
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Output format for parsed fields"
    )]
    pub format: OutputFormat,
}

/// Arguments for the decode command
#[derive(Debug, Clone, Parser)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub input: ReportInput,
}

/// Report text selection shared by all subcommands
///
/// Report text is taken from the positional argument when given, otherwise
/// from `--input` (one report per line), otherwise from stdin (also one
/// report per line). Blank input is rejected; blank lines within a batch
/// are skipped with a warning.
#[derive(Debug, Clone, clap::Args)]
pub struct ReportInput {
    /// ICAO code of the reporting airport (e.g. LDZA, EGLL)
    #[arg(value_name = "ICAO")]
    pub icao_code: String,

    /// Raw report text; reads from --input or stdin when omitted
    #[arg(value_name = "REPORT")]
    pub report: Option<String>,

    /// Input file with one report per line
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        conflicts_with = "report",
        help = "Input file with one report per line"
    )]
    pub input_path: Option<PathBuf>,
}

/// Output format options for the parse command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable field listing
    Text,
    /// JSON object per report, absent fields omitted
    Json,
}
