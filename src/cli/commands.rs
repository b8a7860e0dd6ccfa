//! Command implementations for METAR processor CLI
//!
//! This module contains the command execution logic: logging setup, report
//! batch processing for the parse and decode commands, and summary
//! statistics reporting.

use std::time::Instant;

use colored::*;
use tracing::{debug, info};

use crate::app::models::ParsedReport;
use crate::app::services::metar_parser::{decode, parse_report};
use crate::cli::args::{Args, Commands, DecodeArgs, OutputFormat, ParseArgs};
use crate::cli::input::{ReportBatch, collect_reports};
use crate::{Error, Result};

/// Processing statistics for reporting
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of reports parsed or decoded
    pub reports_processed: usize,
    /// Number of blank input lines skipped
    pub blank_lines_skipped: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

/// Main command runner for the METAR processor
///
/// Sets up logging, dispatches to the selected subcommand, and reports
/// batch statistics when more than one report was processed.
pub fn run(args: Args) -> Result<ProcessingStats> {
    setup_logging(&args)?;
    let start_time = Instant::now();

    let command = args
        .command
        .clone()
        .ok_or_else(|| Error::configuration("No command provided"))?;

    let mut stats = match command {
        Commands::Parse(parse_args) => run_parse(&parse_args)?,
        Commands::Decode(decode_args) => run_decode(&decode_args)?,
    };
    stats.processing_time = start_time.elapsed();

    if stats.reports_processed > 1 {
        info!(
            "Processed {} reports in {:.2?} ({} blank line(s) skipped)",
            stats.reports_processed, stats.processing_time, stats.blank_lines_skipped
        );
    }

    Ok(stats)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("metar_processor={}", log_level)));

    // Set up subscriber based on output format preference
    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Execute the parse command: structured field output per report
fn run_parse(args: &ParseArgs) -> Result<ProcessingStats> {
    let batch = collect_reports(&args.input)?;

    for raw in &batch.reports {
        debug!("Parsing report for {}", args.input.icao_code);
        let report = parse_report(&args.input.icao_code, raw);

        match args.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&report)
                    .map_err(|e| Error::serialization("Failed to render parsed report", e))?;
                println!("{}", json);
            }
            OutputFormat::Text => print_report_fields(&report),
        }
    }

    Ok(stats_for(&batch))
}

/// Execute the decode command: one plain-language summary per report
fn run_decode(args: &DecodeArgs) -> Result<ProcessingStats> {
    let batch = collect_reports(&args.input)?;

    for raw in &batch.reports {
        debug!("Decoding report for {}", args.input.icao_code);
        let report = parse_report(&args.input.icao_code, raw);
        println!("{}", decode(&report));
    }

    Ok(stats_for(&batch))
}

fn stats_for(batch: &ReportBatch) -> ProcessingStats {
    ProcessingStats {
        reports_processed: batch.reports.len(),
        blank_lines_skipped: batch.blank_lines_skipped,
        processing_time: std::time::Duration::default(),
    }
}

/// Print the extracted fields of one report in human-readable form
///
/// Absent fields are omitted entirely, so a sparse report prints only what
/// was actually observed.
fn print_report_fields(report: &ParsedReport) {
    println!("{}", report.icao_code.bold().cyan());
    print_field("Raw report", Some(report.raw_data.as_str()));
    print_field("Observation time", report.observation_time.as_deref());
    print_field("Wind direction", report.wind_direction.as_deref());
    print_field("Wind speed", report.wind_speed.as_deref());
    print_field("Visibility", report.visibility.as_deref());
    print_field(
        "Weather conditions",
        report.weather_conditions_text().as_deref(),
    );
    print_field("Temperature", report.temperature.as_deref());
    print_field("Dew point", report.dew_point.as_deref());
    print_field("Altimeter", report.altimeter.as_deref());
    println!();
}

fn print_field(label: &str, value: Option<&str>) {
    if let Some(value) = value {
        println!("  {:<20} {}", format!("{}:", label).bold(), value);
    }
}
