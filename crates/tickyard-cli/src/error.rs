use thiserror::Error;
use tickyard_core::CoreError;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] tickyard_core::ValidationError),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<CoreError> for CliError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(error) => Self::Validation(error),
            CoreError::NoDataForInstrument { symbol } => Self::NotFound(symbol),
            error @ CoreError::QuoteFetchFailed { .. } => Self::Upstream(error.to_string()),
            CoreError::Serialization(error) => Self::Serialization(error),
        }
    }
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::NotFound(_) => 3,
            Self::Serialization(_) => 4,
            Self::Upstream(_) => 6,
            Self::Io(_) => 10,
        }
    }
}
