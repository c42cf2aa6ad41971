// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use clap::Parser;
use std::time::Duration;

use crate::config::{
    ConfigError, DetectorConfig, ServerConfig, DEFAULT_BASE_URL, DEFAULT_HOST,
    DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_MODEL, DEFAULT_MODEL_VERSION, DEFAULT_PORT,
    DEFAULT_TIMEOUT_SECS,
};

/// ClimbLog hold detector proxy
#[derive(Parser, Debug, Clone)]
#[command(name = "hold-detector")]
#[command(version = crate::version::VERSION_NUMBER)]
#[command(about = "Proxies climbing-wall photos to a hosted hold-detection model", long_about = None)]
pub struct Cli {
    /// Inference API key
    #[arg(long, env = "ROBOFLOW_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model identifier
    #[arg(long, env = "ROBOFLOW_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Model version
    #[arg(long, env = "ROBOFLOW_VERSION", default_value = DEFAULT_MODEL_VERSION)]
    pub model_version: String,

    /// Inference service base URL
    #[arg(long, env = "ROBOFLOW_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Timeout for each inference call, in seconds
    #[arg(long, env = "ROBOFLOW_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Largest accepted request body, in bytes
    #[arg(long, env = "MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,
}

impl Cli {
    /// Split parsed arguments into validated detector and server configs
    pub fn into_configs(self) -> Result<(DetectorConfig, ServerConfig), ConfigError> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let detector = DetectorConfig {
            api_key,
            model: self.model,
            model_version: self.model_version,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(self.timeout_secs),
        };
        detector.validate()?;

        let server = ServerConfig {
            host: self.host,
            port: self.port,
            max_upload_bytes: self.max_upload_bytes,
        };
        server.validate()?;

        Ok((detector, server))
    }
}
