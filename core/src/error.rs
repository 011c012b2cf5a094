use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchmarkError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("level must be either 'cm' or 'pgm', got '{0}'")]
    UnknownLevel(String),

    #[error("outcome must be either 'sb', 'ns' or 'os', got '{0}'")]
    UnknownOutcome(String),

    #[error("shift scope must be either 'global' or 'window', got '{0}'")]
    UnknownShiftScope(String),

    #[error("Step {step} out of range: must be in 1..={max}")]
    StepOutOfRange { step: usize, max: usize },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BenchmarkError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter { name, reason: reason.into() }
    }
}

pub type BenchmarkResult<T> = Result<T, BenchmarkError>;
