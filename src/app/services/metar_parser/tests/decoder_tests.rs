//! Tests for plain-language decoding

use super::{BARE_REPORT, parse};
use crate::app::models::ParsedReport;
use crate::app::services::metar_parser::decode;

#[test]
fn test_full_report_decodes_with_fixed_clause_order() {
    let report = parse("LDZA", BARE_REPORT);
    assert_eq!(
        decode(&report),
        "Weather report for airport LDZA. \
         Observation time: 030700Z. \
         Wind: from 000 degrees at 00 knots. \
         Visibility: 9999 meters. \
         Weather conditions: no significant weather scattered clouds at 040. \
         Temperature: 15 degrees Celsius. \
         Dew point: 10 degrees Celsius. \
         Altimeter: Q1013."
    );
}

#[test]
fn test_report_with_no_fields_decodes_to_airport_clause_only() {
    let report = ParsedReport::new("LDZA", "");
    assert_eq!(decode(&report), "Weather report for airport LDZA.");
}

#[test]
fn test_decoding_is_idempotent() {
    let report = parse("LDZA", BARE_REPORT);
    assert_eq!(decode(&report), decode(&report));
}

#[test]
fn test_leading_m_renders_as_minus_sign() {
    let report = parse("ESSA", "M01/M05");
    let decoded = decode(&report);
    assert!(decoded.contains("Temperature: -01 degrees Celsius."));
    assert!(decoded.contains("Dew point: -05 degrees Celsius."));
}

#[test]
fn test_sign_conversion_only_applies_to_leading_m() {
    let mut report = ParsedReport::new("LDZA", "");
    report.temperature = Some("1M".to_string());
    assert!(decode(&report).contains("Temperature: 1M degrees Celsius."));
}

#[test]
fn test_wind_clause_requires_both_direction_and_speed() {
    // A 3-digit wind group observes an empty speed; the clause is omitted
    let report = parse("LDZA", "123KMH");
    assert_eq!(report.wind_direction.as_deref(), Some("123"));
    assert!(!decode(&report).contains("Wind:"));
}

#[test]
fn test_observed_empty_scalar_suppresses_its_clause() {
    let mut report = ParsedReport::new("LDZA", "");
    report.observation_time = Some(String::new());
    assert_eq!(decode(&report), "Weather report for airport LDZA.");
}

#[test]
fn test_visibility_unit_label_is_fixed_wording() {
    // Statute-mile form still renders with the "meters" label; the decoder
    // labels, it does not convert
    let report = parse("KJFK", "10SM");
    assert!(decode(&report).contains("Visibility: 10SM meters."));
}

#[test]
fn test_sky_cover_abbreviations_expand_with_heights() {
    let report = parse("LDZA", "BKN015 OVC040");
    assert!(
        decode(&report)
            .contains("Weather conditions: broken clouds at 015 overcast at 040.")
    );
}

#[test]
fn test_vertical_visibility_expands() {
    let report = parse("LDZA", "VV010");
    assert!(decode(&report).contains("Weather conditions: vertical visibility 010."));
}

#[test]
fn test_simple_condition_codes_expand() {
    assert!(decode(&parse("A1", "NCD")).contains("Weather conditions: nil cloud detected."));
    assert!(decode(&parse("A1", "SKC")).contains("Weather conditions: sky clear."));
    assert!(decode(&parse("A1", "CLR")).contains("Weather conditions: clear."));
}

#[test]
fn test_single_letter_substitutions_corrupt_overlapping_codes() {
    // "TSRA" is claimed by the weather catch-all; the ordered substitution
    // pass then rewrites its R and A. This collision is contractual.
    let mut report = ParsedReport::new("LDZA", "");
    report.push_weather_condition("TSRA");
    assert_eq!(
        decode(&report),
        "Weather report for airport LDZA. Weather conditions: TSrunway altimeter ."
    );
}

#[test]
fn test_altimeter_clause_uses_raw_token() {
    // Substitutions apply only to the weather conditions clause; the Q is
    // not rewritten here
    let report = parse("LDZA", "Q1013");
    assert!(decode(&report).contains("Altimeter: Q1013."));
}

#[test]
fn test_decoder_does_not_mutate_the_report() {
    let report = parse("LDZA", BARE_REPORT);
    let before = report.clone();
    let _ = decode(&report);
    assert_eq!(report, before);
}
