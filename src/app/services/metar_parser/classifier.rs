//! Ordered field classification for METAR tokens
//!
//! Each token is evaluated against a fixed rule table and committed to the
//! first rule that matches; later rules are never consulted for that token.
//! The table order is load-bearing: several later patterns would also match
//! tokens that belong to earlier rules (a 4-digit visibility group looks
//! like an observation time without its "Z" anchor, and the weather
//! alternation ends in a catch-all that claims most short alphabetic
//! tokens).
//!
//! Classification is best-effort extraction, not grammar validation: tokens
//! matching no rule are dropped, repeated scalar matches overwrite earlier
//! ones, and the component never returns an error.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::tokenizer::Token;
use crate::app::models::ParsedReport;
use crate::constants::{WIND_TOKEN_MIN_LEN, patterns};

// =============================================================================
// Rule Table
// =============================================================================

/// Field class assigned to a token by the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenClass {
    ObservationTime,
    Wind,
    VariableWindDirection,
    Visibility,
    RunwayVisualRange,
    WeatherCondition,
    TemperatureDewPoint,
    Altimeter,
}

static OBSERVATION_TIME_RE: LazyLock<Regex> = LazyLock::new(|| compile(patterns::OBSERVATION_TIME));
static WIND_RE: LazyLock<Regex> = LazyLock::new(|| compile(patterns::WIND));
static VARIABLE_WIND_DIRECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(patterns::VARIABLE_WIND_DIRECTION));
static VISIBILITY_RE: LazyLock<Regex> = LazyLock::new(|| compile(patterns::VISIBILITY));
static RUNWAY_VISUAL_RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(patterns::RUNWAY_VISUAL_RANGE));
static WEATHER_CONDITION_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(patterns::WEATHER_CONDITION));
static TEMPERATURE_DEW_POINT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(patterns::TEMPERATURE_DEW_POINT));
static ALTIMETER_RE: LazyLock<Regex> = LazyLock::new(|| compile(patterns::ALTIMETER));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("rule pattern is hard-coded and must compile")
}

/// The classification rules in priority order. First match wins.
static RULES: &[(TokenClass, &LazyLock<Regex>)] = &[
    (TokenClass::ObservationTime, &OBSERVATION_TIME_RE),
    (TokenClass::Wind, &WIND_RE),
    (TokenClass::VariableWindDirection, &VARIABLE_WIND_DIRECTION_RE),
    (TokenClass::Visibility, &VISIBILITY_RE),
    (TokenClass::RunwayVisualRange, &RUNWAY_VISUAL_RANGE_RE),
    (TokenClass::WeatherCondition, &WEATHER_CONDITION_RE),
    (TokenClass::TemperatureDewPoint, &TEMPERATURE_DEW_POINT_RE),
    (TokenClass::Altimeter, &ALTIMETER_RE),
];

/// Evaluate the rule table against a single token.
fn classify_token(text: &str) -> Option<TokenClass> {
    RULES
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(class, _)| *class)
}

// =============================================================================
// Report Classification
// =============================================================================

/// Classify a token sequence into a [`ParsedReport`].
///
/// `icao_code` and `raw_data` are supplied by the caller and stored
/// verbatim; they are not derived from the token stream. Classification
/// never fails — unrecognized tokens degrade to partial extraction.
pub fn classify<'a, I>(icao_code: &str, raw_data: &str, tokens: I) -> ParsedReport
where
    I: IntoIterator<Item = Token<'a>>,
{
    let mut report = ParsedReport::new(icao_code, raw_data);

    for token in tokens {
        match classify_token(token.text) {
            Some(TokenClass::ObservationTime) => {
                report.observation_time = Some(token.text.to_string());
            }
            Some(TokenClass::Wind) => {
                apply_wind(&mut report, token.text);
            }
            Some(TokenClass::VariableWindDirection) => {
                // Matched but not stored; no field exists for it yet.
                trace!(
                    position = token.position,
                    token = token.text,
                    "discarding variable wind direction group"
                );
            }
            Some(TokenClass::Visibility) => {
                report.visibility = Some(token.text.to_string());
            }
            Some(TokenClass::RunwayVisualRange) => {
                // Matched but not stored; no field exists for it yet.
                trace!(
                    position = token.position,
                    token = token.text,
                    "discarding runway visual range group"
                );
            }
            Some(TokenClass::WeatherCondition) => {
                report.push_weather_condition(token.text);
            }
            Some(TokenClass::TemperatureDewPoint) => {
                apply_temperature_dew_point(&mut report, token.text);
            }
            Some(TokenClass::Altimeter) => {
                report.altimeter = Some(token.text.to_string());
            }
            None => {
                trace!(
                    position = token.position,
                    token = token.text,
                    "token matched no field rule"
                );
            }
        }
    }

    report
}

/// Extract direction and speed from a wind group.
///
/// Tokens shorter than [`WIND_TOKEN_MIN_LEN`] are consumed without
/// recording anything. Direction is the first 3 characters; speed is the
/// remaining digit run with the unit suffix removed, which leaves an empty
/// string for a 3-digit group ("123KMH" stores direction "123" and speed
/// ""). Gust-suffixed groups never reach this point — the "G" breaks the
/// wind pattern and the token falls through unclassified.
fn apply_wind(report: &mut ParsedReport, text: &str) {
    if text.len() < WIND_TOKEN_MIN_LEN {
        trace!(token = text, "wind group too short, skipping extraction");
        return;
    }

    if let Some(captures) = WIND_RE.captures(text) {
        let digits = &captures[1];
        report.wind_direction = Some(digits[..3].to_string());
        report.wind_speed = Some(digits[3..].to_string());
    }
}

/// Split a temperature/dew point group on its "/" separator.
///
/// A leading "M" denotes a negative value and is preserved here; sign
/// conversion happens only in the decoder.
fn apply_temperature_dew_point(report: &mut ParsedReport, text: &str) {
    if let Some((temperature, dew_point)) = text.split_once('/') {
        report.temperature = Some(temperature.to_string());
        report.dew_point = Some(dew_point.to_string());
    }
}
