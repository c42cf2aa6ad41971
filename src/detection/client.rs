// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Roboflow serverless client for hold detection

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde::Serialize;
use tracing::{debug, info};

use super::backend::{DetectionParams, InferenceBackend, InferenceError, OutputFormat};
use crate::config::DetectorConfig;

/// Labels are drawn on the annotated image
const RENDER_LABELS: bool = true;
/// Box stroke width on the annotated image
const STROKE_WIDTH: u32 = 3;
/// Label font size on the annotated image
const FONT_SIZE: f64 = 0.6;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Query string sent with every call. Only `format` differs between calls.
#[derive(Debug, Serialize)]
pub struct InferenceQuery<'a> {
    pub api_key: &'a str,
    pub format: &'static str,
    pub confidence: f64,
    pub overlap: f64,
    pub labels: bool,
    pub stroke: u32,
    pub font_size: f64,
}

/// Client for a hosted Roboflow detection model
pub struct RoboflowClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model_id: String,
}

impl RoboflowClient {
    /// Create a new RoboflowClient
    pub fn new(config: &DetectorConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        let endpoint = config.endpoint();
        let model_id = format!("{}/{}", config.model, config.model_version);
        info!(
            "Detection client configured: endpoint={}, timeout={}s",
            endpoint,
            config.timeout.as_secs()
        );

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
            model_id,
        })
    }

    /// Get the endpoint URL (without credentials)
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn query<'a>(&'a self, format: OutputFormat, params: DetectionParams) -> InferenceQuery<'a> {
        InferenceQuery {
            api_key: &self.api_key,
            format: format.as_str(),
            confidence: params.confidence,
            overlap: params.overlap,
            labels: RENDER_LABELS,
            stroke: STROKE_WIDTH,
            font_size: FONT_SIZE,
        }
    }
}

#[async_trait]
impl InferenceBackend for RoboflowClient {
    async fn infer(
        &self,
        image_b64: &str,
        format: OutputFormat,
        params: DetectionParams,
    ) -> Result<Bytes, InferenceError> {
        debug!(
            "Detection POST {} format={} ({} base64 chars)",
            self.endpoint,
            format.as_str(),
            image_b64.len()
        );

        // The request URL carries the api key, so errors are stripped of it.
        let response = self
            .client
            .post(&self.endpoint)
            .query(&self.query(format, params))
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(image_b64.to_owned())
            .send()
            .await
            .map_err(|e| InferenceError::Transport(e.without_url()))?;

        // Anything but 200 is a refusal, including other 2xx codes
        if response.status() != StatusCode::OK {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Upstream { status, body });
        }

        response
            .bytes()
            .await
            .map_err(|e| InferenceError::Transport(e.without_url()))
    }

    fn model_id(&self) -> String {
        self.model_id.clone()
    }
}
