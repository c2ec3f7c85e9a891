use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Need at least 2 candidates to compare, got {got}")]
    InsufficientCandidates { got: usize },

    #[error("Invalid input for {field}: {value} is outside {expected}")]
    InvalidInput {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ScoreResult<T> = Result<T, ScoreError>;
