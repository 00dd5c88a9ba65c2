use shared::domain::MAX_CERTIFICATES;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Maximum of {limit} certificates allowed")]
    CertificateLimit { limit: usize },
}

impl FormError {
    pub fn certificate_limit() -> Self {
        Self::CertificateLimit {
            limit: MAX_CERTIFICATES,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("invalid prediction server url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("failed to reach prediction service: {0}")]
    Transport(#[source] reqwest::Error),
    /// Non-2xx response. `message` is the body's `error` field when readable.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("malformed prediction response: {0}")]
    MalformedResponse(#[source] serde_json::Error),
    #[error("form control missing: {0}")]
    MissingControls(&'static str),
}

impl SubmitError {
    pub fn status(&self) -> Option<u16> {
        match self {
            SubmitError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
