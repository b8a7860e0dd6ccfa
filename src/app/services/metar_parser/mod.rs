//! METAR parser for coded aviation weather reports
//!
//! This module provides the full tokenize → classify → decode pipeline for
//! METAR bulletins. All three stages are pure, synchronous functions over
//! immutable inputs; concurrent invocations over distinct reports need no
//! synchronization.
//!
//! ## Architecture
//!
//! The parser is organized into leaf components:
//! - [`tokenizer`] - Prefix stripping and whitespace tokenization
//! - [`classifier`] - Ordered rule table and field extraction
//! - [`decoder`] - Plain-language rendering of parsed reports
//!
//! ## Usage
//!
//! ```rust
//! use metar_processor::app::services::metar_parser::{decode, parse_report};
//!
//! let report = parse_report("LDZA", "METAR LDZA 030700Z 00000KT 9999 NSW SCT040 15/10 Q1013");
//! assert_eq!(report.observation_time.as_deref(), Some("030700Z"));
//! assert_eq!(report.altimeter.as_deref(), Some("Q1013"));
//!
//! let summary = decode(&report);
//! assert!(summary.starts_with("Weather report for airport LDZA."));
//! ```

pub mod classifier;
pub mod decoder;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use classifier::classify;
pub use decoder::decode;
pub use tokenizer::{Token, tokenize};

use crate::app::models::ParsedReport;

/// Parse a raw report in one step: tokenize, then classify.
///
/// Equivalent to `classify(icao_code, raw_data, tokenize(raw_data))`.
/// Never fails; unrecognized input degrades to partial extraction.
pub fn parse_report(icao_code: &str, raw_data: &str) -> ParsedReport {
    classify(icao_code, raw_data, tokenize(raw_data))
}
