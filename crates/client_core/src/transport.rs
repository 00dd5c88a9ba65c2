use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::ErrorBody,
    protocol::{PredictionResult, StudentSubmission, PREDICT_ROUTE},
};
use tracing::{debug, info};
use url::Url;

use crate::{error::SubmitError, settings::ClientSettings};

/// One request/response exchange with the prediction endpoint.
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn predict(&self, submission: &StudentSubmission)
        -> Result<PredictionResult, SubmitError>;
}

pub struct HttpPredictionClient {
    http: Client,
    predict_url: Url,
}

impl HttpPredictionClient {
    pub fn new(server_url: &str, timeout: Duration) -> Result<Self, SubmitError> {
        let predict_url = predict_url(server_url)?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SubmitError::ClientBuild)?;
        Ok(Self { http, predict_url })
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, SubmitError> {
        Self::new(&settings.server_url, settings.request_timeout())
    }

    pub fn predict_url(&self) -> &Url {
        &self.predict_url
    }
}

#[async_trait]
impl PredictionService for HttpPredictionClient {
    async fn predict(
        &self,
        submission: &StudentSubmission,
    ) -> Result<PredictionResult, SubmitError> {
        debug!(url = %self.predict_url, "sending prediction request");
        let response = self
            .http
            .post(self.predict_url.clone())
            .json(submission)
            .send()
            .await
            .map_err(SubmitError::Transport)?;

        let status = response.status();
        info!(status = status.as_u16(), "prediction response received");

        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => format!("Network response was not ok: {}", status.as_u16()),
            };
            return Err(SubmitError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await.map_err(SubmitError::Transport)?;
        serde_json::from_slice(&body).map_err(SubmitError::MalformedResponse)
    }
}

/// Resolves the predict route against `server_url`, keeping any base path.
pub fn predict_url(server_url: &str) -> Result<Url, SubmitError> {
    let invalid = |source| SubmitError::InvalidUrl {
        url: server_url.to_string(),
        source,
    };
    let mut base = Url::parse(server_url.trim()).map_err(invalid)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(PREDICT_ROUTE.trim_start_matches('/'))
        .map_err(invalid)
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
