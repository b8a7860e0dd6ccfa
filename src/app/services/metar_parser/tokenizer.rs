//! Report tokenization for METAR bulletins
//!
//! Splits raw report text into whitespace-delimited tokens after stripping
//! an optional report-type prefix. Tokens borrow from the input buffer;
//! nothing is copied at this stage.

use crate::constants::REPORT_TYPE_PREFIX;

/// A whitespace-delimited fragment of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Original token text, borrowed from the input
    pub text: &'a str,

    /// Zero-based ordinal position within the report body, after prefix
    /// stripping. Diagnostic only; the classifier rules never consult it.
    pub position: usize,
}

/// Tokenize a raw report into an ordered sequence of tokens.
///
/// If the text begins with the exact prefix `"METAR "`, that prefix is
/// removed first. The remainder is split on runs of whitespace with empty
/// fragments discarded. Any input, including the empty string, yields a
/// (possibly empty) sequence; there is no failure mode.
///
/// The returned iterator is lazy and finite; calling `tokenize` again on
/// the same input restarts the sequence.
pub fn tokenize(raw: &str) -> impl Iterator<Item = Token<'_>> {
    strip_report_prefix(raw)
        .split_whitespace()
        .enumerate()
        .map(|(position, text)| Token { text, position })
}

/// Remove the report-type prefix when present.
///
/// Only the six-character `"METAR "` form counts; a bare `"METAR"` with no
/// trailing content is returned unchanged.
fn strip_report_prefix(raw: &str) -> &str {
    raw.strip_prefix(REPORT_TYPE_PREFIX).unwrap_or(raw)
}
