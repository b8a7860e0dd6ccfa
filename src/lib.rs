//! METAR Processor Library
//!
//! A Rust library for parsing METAR (Meteorological Terminal Aviation Routine
//! Weather Report) bulletins into structured fields and decoding them into
//! plain-language weather summaries.
//!
//! This library provides tools for:
//! - Tokenizing raw report text with report-type prefix handling
//! - Classifying tokens against an ordered table of field rules
//! - Accumulating sky and weather phenomena in encounter order
//! - Decoding structured reports into human-readable sentences
//! - Best-effort extraction that never fails on unrecognized input

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod metar_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::ParsedReport;
pub use app::services::metar_parser::{Token, classify, decode, parse_report, tokenize};

/// Result type alias for the METAR processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for METAR processing operations
///
/// The parsing core itself is infallible by contract: malformed input
/// degrades to a partially populated [`ParsedReport`]. These errors belong
/// to the surrounding boundary — input acquisition, validation, and output
/// serialization.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Report text was blank
    #[error("Report text is blank: {context}")]
    EmptyReport { context: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Output serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a blank-report error
    pub fn empty_report(context: impl Into<String>) -> Self {
        Self::EmptyReport {
            context: context.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an output serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "Serialization failed".to_string(),
            source: error,
        }
    }
}
