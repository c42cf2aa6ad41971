// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Seam between the HTTP handler and whatever runs the model

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Output the inference endpoint is asked to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Prediction document
    Json,
    /// Annotated PNG
    Image,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Image => "image",
        }
    }
}

/// Thresholds forwarded with every call. Already range-checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionParams {
    pub confidence: f64,
    pub overlap: f64,
}

#[derive(Debug, Error)]
pub enum InferenceError {
    /// Endpoint answered with a non-success status
    #[error("inference endpoint returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed inference response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for InferenceError {
    fn from(e: serde_json::Error) -> Self {
        InferenceError::Decode(e.to_string())
    }
}

/// One call to the detection model.
///
/// `image_b64` is the upload in standard base64. The returned bytes are the
/// raw success body: a JSON document for [`OutputFormat::Json`], image bytes
/// for [`OutputFormat::Image`].
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn infer(
        &self,
        image_b64: &str,
        format: OutputFormat,
        params: DetectionParams,
    ) -> Result<Bytes, InferenceError>;

    /// Model identifier, for diagnostics
    fn model_id(&self) -> String;
}
