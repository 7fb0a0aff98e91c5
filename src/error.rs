//! Error types for NeuroSymbolic Risk
//!
//! Scoring itself never fails. These errors come from the boundaries:
//! JSON parsing, input validation, scenario lookup and report encoding.

use thiserror::Error;

/// Errors that can occur around an analysis
#[derive(Debug, Error)]
pub enum ComputeError {
    #[error("Failed to parse indicator payload: {0}")]
    ParseError(String),

    #[error("Indicator {name} out of range: {value}")]
    InvalidIndicator { name: String, value: f64 },

    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),

    #[error("Encoding error: {0}")]
    EncodingError(String),
}
