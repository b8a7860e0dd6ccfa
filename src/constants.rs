//! Application constants for METAR processor
//!
//! This module contains the report grammar constants: the report-type
//! prefix, the field rule patterns, and the plain-language substitution
//! table used by the decoder.

// =============================================================================
// Report Framing
// =============================================================================

/// Report-type prefix stripped by the tokenizer when present.
///
/// The check is deliberately narrow: only this exact six-character prefix is
/// recognized. A bare "METAR" with no trailing content is left alone, and
/// other report types (SPECI etc.) are not handled.
pub const REPORT_TYPE_PREFIX: &str = "METAR ";

/// Minimum length of a wind group before direction and speed are extracted.
///
/// Tokens that match the wind pattern but are shorter than this are consumed
/// without recording any field.
pub const WIND_TOKEN_MIN_LEN: usize = 6;

// =============================================================================
// Field Rule Patterns
// =============================================================================

/// Anchored patterns for the classifier rule table.
///
/// These are evaluated in the order listed in
/// [`classifier`](crate::app::services::metar_parser::classifier); the order
/// is load-bearing because later patterns overlap earlier ones (the broad
/// weather alternation would otherwise swallow most short tokens).
pub mod patterns {
    /// Observation time group, e.g. "301200Z"
    pub const OBSERVATION_TIME: &str = r"^\d{4,6}Z$";

    /// Wind group with unit suffix, e.g. "12008KT" or "00000KT"
    pub const WIND: &str = r"^(\d{3,5})(MPS|KT|KMH)$";

    /// Variable wind direction group, e.g. "090V150"
    pub const VARIABLE_WIND_DIRECTION: &str = r"^\d{3}V\d{3}$";

    /// Visibility group, e.g. "9999", "10SM", "M", or "P6000"
    pub const VISIBILITY: &str = r"^(\d{4}|\d{1,3}SM|M|P\d{4})$";

    /// Runway visual range group, e.g. "R04/P2000N"
    pub const RUNWAY_VISUAL_RANGE: &str = r"^R\d{2}[LRC]?/\S+$";

    /// Sky and weather phenomena, e.g. "NSW", "SCT040", "-RA".
    ///
    /// The trailing `[-+]?\w{2,4}` alternative is a catch-all and will also
    /// claim otherwise-unclassified short alphabetic tokens such as trend
    /// codes or an embedded station identifier.
    pub const WEATHER_CONDITION: &str =
        r"^(NSW|NCD|SKC|CLR|VV\d{3}|FEW\d{3}|SCT\d{3}|BKN\d{3}|OVC\d{3}|[-+]?\w{2,4})$";

    /// Temperature/dew point pair, e.g. "15/10" or "M01/M05"
    pub const TEMPERATURE_DEW_POINT: &str = r"^M?\d{1,2}/M?\d{1,2}$";

    /// Altimeter/QNH group, e.g. "Q1013" or "A2992"
    pub const ALTIMETER: &str = r"^[QA]\d{4}$";
}

// =============================================================================
// Decoder Substitutions
// =============================================================================

/// Ordered abbreviation substitutions for decoding weather conditions.
///
/// Applied sequentially and unconditionally: each replacement operates on
/// the output of the previous one, so the order matters. The single-letter
/// keys ("R", "Q", "A") can rewrite unrelated text that happens to contain
/// those letters; that collision behavior is part of the decoding contract
/// and is reproduced as-is.
pub const WEATHER_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("NSW", "no significant weather"),
    ("NCD", "nil cloud detected"),
    ("SKC", "sky clear"),
    ("CLR", "clear"),
    ("FEW", "few clouds at "),
    ("SCT", "scattered clouds at "),
    ("BKN", "broken clouds at "),
    ("OVC", "overcast at "),
    ("VV", "vertical visibility "),
    ("R", "runway "),
    ("/", " over "),
    ("KT", " knots"),
    ("MPS", " meters per second"),
    ("SM", " statute miles"),
    ("Q", "QNH "),
    ("A", "altimeter "),
];
