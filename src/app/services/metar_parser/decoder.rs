//! Plain-language decoding of parsed METAR reports
//!
//! Renders a [`ParsedReport`] into a sentence by conditionally appending
//! clauses in a fixed order. Weather abbreviations are expanded through the
//! ordered substitution table in [`constants`](crate::constants); unit
//! labels are fixed wording, not conversions — wind is always reported "in
//! knots" and visibility "in meters" regardless of the source units.

use crate::app::models::ParsedReport;
use crate::constants::WEATHER_SUBSTITUTIONS;

/// Decode a parsed report into a human-readable weather summary.
///
/// Reads the report without mutating it; decoding the same report twice
/// yields identical output. A report with no extracted fields decodes to
/// the airport clause alone.
pub fn decode(report: &ParsedReport) -> String {
    let mut decoded = String::new();

    decoded.push_str("Weather report for airport ");
    decoded.push_str(&report.icao_code);
    decoded.push_str(". ");

    if let Some(time) = non_empty(report.observation_time.as_deref()) {
        decoded.push_str("Observation time: ");
        decoded.push_str(time);
        decoded.push_str(". ");
    }

    // Both halves of the wind group are required; a wind group observed
    // with an empty speed suppresses the clause.
    if let (Some(direction), Some(speed)) = (
        non_empty(report.wind_direction.as_deref()),
        non_empty(report.wind_speed.as_deref()),
    ) {
        decoded.push_str("Wind: from ");
        decoded.push_str(direction);
        decoded.push_str(" degrees at ");
        decoded.push_str(speed);
        decoded.push_str(" knots. ");
    }

    if let Some(visibility) = non_empty(report.visibility.as_deref()) {
        decoded.push_str("Visibility: ");
        decoded.push_str(visibility);
        decoded.push_str(" meters. ");
    }

    if let Some(conditions) = report.weather_conditions_text() {
        decoded.push_str("Weather conditions: ");
        decoded.push_str(&decode_weather_conditions(&conditions));
        decoded.push_str(". ");
    }

    if let Some(temperature) = non_empty(report.temperature.as_deref()) {
        decoded.push_str("Temperature: ");
        decoded.push_str(&decode_signed_value(temperature));
        decoded.push_str(" degrees Celsius. ");
    }

    if let Some(dew_point) = non_empty(report.dew_point.as_deref()) {
        decoded.push_str("Dew point: ");
        decoded.push_str(&decode_signed_value(dew_point));
        decoded.push_str(" degrees Celsius. ");
    }

    if let Some(altimeter) = non_empty(report.altimeter.as_deref()) {
        decoded.push_str("Altimeter: ");
        decoded.push_str(altimeter);
        decoded.push_str(". ");
    }

    decoded.trim_end().to_string()
}

/// Expand weather abbreviations into natural language.
///
/// Substitutions are applied sequentially and unconditionally, each one
/// operating on the output of the previous. The single-letter entries can
/// rewrite unrelated text containing those letters; that collision is part
/// of the contract and is not corrected here.
fn decode_weather_conditions(conditions: &str) -> String {
    WEATHER_SUBSTITUTIONS
        .iter()
        .fold(conditions.to_string(), |text, (abbreviation, phrase)| {
            text.replace(abbreviation, phrase)
        })
}

/// Render a temperature-like value, converting a leading "M" to a minus sign.
fn decode_signed_value(value: &str) -> String {
    match value.strip_prefix('M') {
        Some(rest) => format!("-{rest}"),
        None => value.to_string(),
    }
}

/// Treat observed-but-empty values the same as absent for clause purposes.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
