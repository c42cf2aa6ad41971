// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Inference endpoint settings

use std::fmt;
use std::time::Duration;

use super::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://serverless.roboflow.com";
pub const DEFAULT_MODEL: &str = "hold-detector-rnvkl";
pub const DEFAULT_MODEL_VERSION: &str = "2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Where and how to reach the hosted detection model
#[derive(Clone, PartialEq)]
pub struct DetectorConfig {
    pub api_key: String,
    pub model: String,
    pub model_version: String,
    pub base_url: String,
    /// Upper bound for each outbound call
    pub timeout: Duration,
}

impl DetectorConfig {
    /// Config with defaults for everything except the API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            model_version: DEFAULT_MODEL_VERSION.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::invalid("model", "must not be empty"));
        }
        if self.model_version.trim().is_empty() {
            return Err(ConfigError::invalid("model_version", "must not be empty"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::invalid(
                "base_url",
                format!("expected an http(s) URL, got '{}'", self.base_url),
            ));
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::invalid("timeout", "must be greater than zero"));
        }
        Ok(())
    }

    /// Full model URL: `{base_url}/{model}/{version}`
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.model_version
        )
    }
}

// Hand-written so the key never ends up in logs.
impl fmt::Debug for DetectorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetectorConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("model_version", &self.model_version)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
