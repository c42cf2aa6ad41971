// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Detect request types and validation

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::api::errors::ApiError;
use crate::detection::DetectionParams;

pub const MIN_CONFIDENCE: f64 = 0.0;
pub const MAX_CONFIDENCE: f64 = 0.99;
pub const MIN_OVERLAP: f64 = 0.0;
pub const MAX_OVERLAP: f64 = 1.0;

/// Multipart field carrying the image
pub const FILE_FIELD: &str = "file";

fn default_confidence() -> f64 {
    0.35
}

fn default_overlap() -> f64 {
    0.30
}

fn default_mode() -> String {
    "both".to_string()
}

/// What `/detect` sends back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectMode {
    /// Prediction document, passed through
    Json,
    /// Annotated image only
    Image,
    /// Predictions, class summary and annotated image
    Both,
}

impl FromStr for DetectMode {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(DetectMode::Json),
            "image" => Ok(DetectMode::Image),
            "both" => Ok(DetectMode::Both),
            other => Err(ApiError::validation(
                "mode",
                format!("mode must be one of json, image, both; got '{}'", other),
            )),
        }
    }
}

/// Query string of `POST /detect`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectQuery {
    /// Minimum prediction confidence (0.0-0.99)
    #[serde(default = "default_confidence")]
    pub confidence: f64,

    /// NMS overlap threshold (0.0-1.0)
    #[serde(default = "default_overlap")]
    pub overlap: f64,

    /// json, image or both
    #[serde(default = "default_mode")]
    pub mode: String,
}

impl Default for DetectQuery {
    fn default() -> Self {
        Self {
            confidence: default_confidence(),
            overlap: default_overlap(),
            mode: default_mode(),
        }
    }
}

/// Validated query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectRequest {
    pub params: DetectionParams,
    pub mode: DetectMode,
}

impl DetectQuery {
    pub fn validate(&self) -> Result<DetectRequest, ApiError> {
        // NaN fails both comparisons, so it is rejected too
        if !(MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&self.confidence) {
            return Err(ApiError::validation(
                "confidence",
                format!(
                    "confidence must be between {} and {}, got {}",
                    MIN_CONFIDENCE, MAX_CONFIDENCE, self.confidence
                ),
            ));
        }

        if !(MIN_OVERLAP..=MAX_OVERLAP).contains(&self.overlap) {
            return Err(ApiError::validation(
                "overlap",
                format!(
                    "overlap must be between {} and {}, got {}",
                    MIN_OVERLAP, MAX_OVERLAP, self.overlap
                ),
            ));
        }

        let mode = self.mode.parse::<DetectMode>()?;

        Ok(DetectRequest {
            params: DetectionParams {
                confidence: self.confidence,
                overlap: self.overlap,
            },
            mode,
        })
    }
}
