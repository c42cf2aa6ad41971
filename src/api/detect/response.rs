// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Detect response types

use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::detection::DetectionSummary;

const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Encode annotated image bytes as a PNG data URI
pub fn png_data_uri(image: &[u8]) -> String {
    format!("{}{}", PNG_DATA_URI_PREFIX, STANDARD.encode(image))
}

/// `mode=image`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedResponse {
    pub annotated: String,
}

/// `mode=both`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullDetectResponse {
    /// Predictions exactly as the model reported them
    pub predictions: Vec<Value>,
    pub summary: DetectionSummary,
    pub annotated: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetectResponse {
    /// `mode=json`: the model's JSON body, byte for byte
    Predictions(Bytes),
    Annotated(AnnotatedResponse),
    Full(FullDetectResponse),
}

impl DetectResponse {
    /// Prediction count, when this response carries predictions we looked at
    pub fn prediction_count(&self) -> Option<usize> {
        match self {
            DetectResponse::Full(full) => Some(full.summary.total),
            _ => None,
        }
    }
}

impl IntoResponse for DetectResponse {
    fn into_response(self) -> Response {
        match self {
            DetectResponse::Predictions(body) => {
                ([(header::CONTENT_TYPE, "application/json")], body).into_response()
            }
            DetectResponse::Annotated(annotated) => Json(annotated).into_response(),
            DetectResponse::Full(full) => Json(full).into_response(),
        }
    }
}
