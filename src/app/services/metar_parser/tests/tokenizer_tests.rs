//! Tests for report tokenization

use crate::app::services::metar_parser::tokenizer::{Token, tokenize};

#[test]
fn test_prefix_is_stripped_before_splitting() {
    let tokens: Vec<&str> = tokenize("METAR LDZA 030700Z").map(|t| t.text).collect();
    assert_eq!(tokens, vec!["LDZA", "030700Z"]);
}

#[test]
fn test_bare_prefix_without_trailing_content_is_kept() {
    // Only the six-character "METAR " form is recognized
    let tokens: Vec<&str> = tokenize("METAR").map(|t| t.text).collect();
    assert_eq!(tokens, vec!["METAR"]);
}

#[test]
fn test_prefix_must_match_exactly() {
    let tokens: Vec<&str> = tokenize("SPECI LDZA 030700Z").map(|t| t.text).collect();
    assert_eq!(tokens, vec!["SPECI", "LDZA", "030700Z"]);
}

#[test]
fn test_prefix_only_input_yields_empty_sequence() {
    assert_eq!(tokenize("METAR ").count(), 0);
}

#[test]
fn test_empty_input_yields_empty_sequence() {
    assert_eq!(tokenize("").count(), 0);
}

#[test]
fn test_whitespace_only_input_yields_empty_sequence() {
    assert_eq!(tokenize("   \t  \n ").count(), 0);
}

#[test]
fn test_whitespace_runs_produce_no_empty_tokens() {
    let tokens: Vec<&str> = tokenize("030700Z   00000KT\t9999").map(|t| t.text).collect();
    assert_eq!(tokens, vec!["030700Z", "00000KT", "9999"]);
}

#[test]
fn test_positions_are_zero_based_and_ordered() {
    let tokens: Vec<Token> = tokenize("METAR 030700Z 9999 Q1013").collect();
    let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![0, 1, 2]);
    assert_eq!(tokens[0].text, "030700Z");
}

#[test]
fn test_sequence_is_restartable() {
    let raw = "030700Z 9999";
    let first: Vec<&str> = tokenize(raw).map(|t| t.text).collect();
    let second: Vec<&str> = tokenize(raw).map(|t| t.text).collect();
    assert_eq!(first, second);
}
