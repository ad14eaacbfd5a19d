//! Error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ForecastError {
    #[error("win probability {0} is outside 0..=100")]
    ProbabilityOutOfRange(f64),

    #[error("state row {line}: {reason}")]
    InvalidStateRow { line: u64, reason: String },

    #[error("invalid meter config: {0}")]
    InvalidConfig(String),
}
