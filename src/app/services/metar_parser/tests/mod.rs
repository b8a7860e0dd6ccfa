//! Test fixtures and helpers for METAR parser testing
//!
//! Shared report fixtures and a parse helper used across the component
//! test modules.

use crate::app::models::ParsedReport;
use crate::app::services::metar_parser::{classify, tokenize};

mod decoder_tests;
mod tokenizer_tests;

/// Canonical bulletin: prefix, embedded station identifier, and a trailing
/// trend code that matches no rule.
pub const CANONICAL_REPORT: &str = "METAR LDZA 030700Z 00000KT 9999 NSW SCT040 15/10 Q1013 NOSIG";

/// The same bulletin without prefix, station identifier, or trend code.
pub const BARE_REPORT: &str = "030700Z 00000KT 9999 NSW SCT040 15/10 Q1013";

/// Run the full tokenize + classify pipeline the way a caller would.
pub fn parse(icao_code: &str, raw: &str) -> ParsedReport {
    classify(icao_code, raw, tokenize(raw))
}
