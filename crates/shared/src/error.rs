use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure body returned by the prediction service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("unknown grade band '{0}'")]
    UnknownGradeBand(String),
    #[error("credits must be between 0 and 5, got {0}")]
    CreditsOutOfRange(u8),
    #[error("invalid credits value '{0}'")]
    InvalidCredits(String),
    #[error("unknown certificate category '{0}'")]
    UnknownCertificate(String),
}
