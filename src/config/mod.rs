// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Process configuration for the detector proxy
//!
//! Read once at startup and handed to the server and the inference client
//! explicitly. Nothing here is global.

pub mod detector;
pub mod server;

pub use detector::{
    DetectorConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_MODEL_VERSION, DEFAULT_TIMEOUT_SECS,
};
pub use server::{ServerConfig, DEFAULT_HOST, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PORT};

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing ROBOFLOW_API_KEY (set it in the environment or .env)")]
    MissingApiKey,
    #[error("Invalid value for {field}: {message}")]
    Invalid { field: String, message: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
