//! Report text acquisition for the CLI
//!
//! Collects raw report strings from the command line, an input file, or
//! stdin, and performs the blank-input validation the parsing core leaves
//! to its callers.

use std::io::Read;

use tracing::{debug, warn};

use crate::cli::args::ReportInput;
use crate::{Error, Result};

/// A batch of raw reports ready for parsing
#[derive(Debug, Clone, Default)]
pub struct ReportBatch {
    /// Report strings in input order, blank lines removed
    pub reports: Vec<String>,

    /// Number of blank lines skipped while reading a file or stdin
    pub blank_lines_skipped: usize,
}

/// Collect report texts according to the input selection.
///
/// A positional report argument yields a single-report batch and must be
/// non-blank. File and stdin input are read one report per line; blank
/// lines are skipped with a warning and counted, and a batch with no
/// non-blank lines at all is an error.
pub fn collect_reports(input: &ReportInput) -> Result<ReportBatch> {
    if let Some(report) = &input.report {
        if report.trim().is_empty() {
            return Err(Error::empty_report("command line argument"));
        }
        return Ok(ReportBatch {
            reports: vec![report.clone()],
            blank_lines_skipped: 0,
        });
    }

    let (text, origin) = match &input.input_path {
        Some(path) => {
            debug!("Reading reports from {}", path.display());
            let text = std::fs::read_to_string(path).map_err(|e| {
                Error::io(format!("Failed to read input file '{}'", path.display()), e)
            })?;
            (text, path.display().to_string())
        }
        None => {
            debug!("Reading reports from stdin");
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| Error::io("Failed to read stdin".to_string(), e))?;
            (text, "stdin".to_string())
        }
    };

    let batch = split_into_batch(&text);
    if batch.reports.is_empty() {
        return Err(Error::empty_report(origin));
    }
    if batch.blank_lines_skipped > 0 {
        warn!(
            "Skipped {} blank line(s) in {}",
            batch.blank_lines_skipped, origin
        );
    }

    Ok(batch)
}

/// Split multi-line input into one report per line, dropping blank lines.
fn split_into_batch(text: &str) -> ReportBatch {
    let mut batch = ReportBatch::default();

    for line in text.lines() {
        if line.trim().is_empty() {
            batch.blank_lines_skipped += 1;
        } else {
            batch.reports.push(line.to_string());
        }
    }

    batch
}
