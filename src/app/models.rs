//! Data models for METAR report processing
//!
//! This module contains the structured record produced by the field
//! classifier. Field values keep the original token text; interpretation
//! (sign conventions, unit wording) happens only in the decoder.

use serde::{Deserialize, Serialize};

// =============================================================================
// Parsed Report Structure
// =============================================================================

/// Structured record of the fields extracted from one METAR report.
///
/// Created once per raw input and immutable thereafter; the decoder only
/// reads it. Every parsed field is optional — `None` means the report did
/// not contain a matching token, which is distinct from a field that was
/// observed as an empty string (a 3-digit wind group with a unit suffix
/// yields an empty `wind_speed`, for example).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReport {
    /// ICAO code of the reporting airport, supplied by the caller
    pub icao_code: String,

    /// The full original report text, verbatim
    pub raw_data: String,

    /// Observation time group, e.g. "030700Z"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation_time: Option<String>,

    /// Wind direction in degrees, first 3 characters of the wind group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<String>,

    /// Wind speed digits with the unit suffix stripped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<String>,

    /// Visibility group, e.g. "9999" or "10SM"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,

    /// Sky and weather phenomena tokens in encounter order.
    ///
    /// Append-only during classification; joined with single spaces at the
    /// boundary by [`ParsedReport::weather_conditions_text`].
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub weather_conditions: Vec<String>,

    /// Temperature, left side of the temperature/dew point group. A leading
    /// "M" denotes a negative value and is preserved here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,

    /// Dew point, right side of the temperature/dew point group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dew_point: Option<String>,

    /// Altimeter/QNH group, e.g. "Q1013"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altimeter: Option<String>,
}

impl ParsedReport {
    /// Create an empty report for the given airport and raw text.
    ///
    /// `raw_data` is stored exactly as given, independent of how many
    /// fields are later extracted from it.
    pub fn new(icao_code: impl Into<String>, raw_data: impl Into<String>) -> Self {
        Self {
            icao_code: icao_code.into(),
            raw_data: raw_data.into(),
            observation_time: None,
            wind_direction: None,
            wind_speed: None,
            visibility: None,
            weather_conditions: Vec::new(),
            temperature: None,
            dew_point: None,
            altimeter: None,
        }
    }

    /// Append a weather condition token, preserving encounter order.
    pub fn push_weather_condition(&mut self, token: impl Into<String>) {
        self.weather_conditions.push(token.into());
    }

    /// Space-joined weather conditions, or `None` when none were observed.
    pub fn weather_conditions_text(&self) -> Option<String> {
        if self.weather_conditions.is_empty() {
            None
        } else {
            Some(self.weather_conditions.join(" "))
        }
    }
}
