use thiserror::Error;

use crate::models::ActivityKind;

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("Unknown activity kind: {0:?}")]
    UnknownActivityKind(String),

    #[error("Invalid parameters for {kind:?}: {reason}")]
    InvalidParameters { kind: ActivityKind, reason: String },

    #[error("Division by zero: {0} is zero")]
    DivisionByZero(&'static str),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WorkoutError {
    pub(crate) fn invalid(kind: ActivityKind, reason: impl Into<String>) -> Self {
        WorkoutError::InvalidParameters {
            kind,
            reason: reason.into(),
        }
    }
}
