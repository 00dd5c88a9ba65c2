//! Client configuration: server address and request timeout.

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct ClientSettings {
    /// Base URL of the prediction service. Read from PREDICT_SERVER_URL.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Read from PREDICT_REQUEST_TIMEOUT_SECS.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientSettings {
    /// Loads `PREDICT_*` environment variables, layered over the file named by
    /// `PREDICT_CONFIG` when set.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    /// Same layering as [`ClientSettings::load`], reading variables from `env`.
    pub fn from_env_map(env: config::Map<String, String>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = env.get("PREDICT_CONFIG") {
            builder = builder.add_source(config::File::with_name(path));
        }
        builder = builder
            .add_source(config::Environment::with_prefix("PREDICT").source(Some(env)));
        builder.build()?.try_deserialize()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
