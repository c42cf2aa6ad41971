// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Detect endpoint handler

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
};
use axum_extra::extract::{
    multipart::{MultipartError, MultipartRejection},
    Multipart,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::request::{DetectMode, DetectQuery, DetectRequest, FILE_FIELD};
use super::response::{png_data_uri, AnnotatedResponse, DetectResponse, FullDetectResponse};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::detection::{summarize, InferenceBackend, OutputFormat, PredictionDocument};

/// POST /detect - Detect climbing holds in an uploaded photo
///
/// Multipart upload (field `file`) plus query parameters:
/// - `confidence`: 0.0-0.99, default 0.35
/// - `overlap`: 0.0-1.0, default 0.30
/// - `mode`: `json` | `image` | `both`, default `both`
///
/// # Errors
/// - 400 Bad Request: empty or missing file, out-of-range parameter, unknown mode
/// - 413 Payload Too Large: upload above the configured limit
/// - upstream status: the inference endpoint refused, its body is the detail
/// - 500 Internal Server Error: transport failure or malformed model output
pub async fn detect_handler(
    State(state): State<AppState>,
    query: Result<Query<DetectQuery>, QueryRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<DetectResponse, ApiError> {
    let start = Instant::now();

    let Query(query) = query.map_err(|e| {
        warn!("Detect query rejected: {}", e.body_text());
        ApiError::InvalidRequest(e.body_text())
    })?;

    let request = query.validate().map_err(|e| {
        warn!("Detect validation failed: {}", e);
        e
    })?;

    let mut multipart = multipart.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let image = read_upload(&mut multipart).await.map_err(|e| {
        warn!("Detect upload rejected: {}", e);
        e
    })?;

    debug!(
        "Detect request: mode={:?}, confidence={}, overlap={}, {} bytes",
        request.mode,
        request.params.confidence,
        request.params.overlap,
        image.len()
    );

    let response = run_detection(state.backend.as_ref(), &image, request)
        .await
        .map_err(|e| {
            warn!("Detect failed: {}", e);
            e
        })?;

    match response.prediction_count() {
        Some(count) => info!(
            "Detect complete: mode={:?}, {} predictions, {}ms",
            request.mode,
            count,
            start.elapsed().as_millis()
        ),
        None => info!(
            "Detect complete: mode={:?}, {}ms",
            request.mode,
            start.elapsed().as_millis()
        ),
    }

    Ok(response)
}

/// Pull the non-empty `file` field out of the form
pub async fn read_upload(multipart: &mut Multipart) -> Result<Bytes, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let data = field.bytes().await.map_err(multipart_error)?;
        if data.is_empty() {
            return Err(ApiError::validation(FILE_FIELD, "Empty file"));
        }
        return Ok(data);
    }

    Err(ApiError::validation(FILE_FIELD, "file is required"))
}

fn multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(e.body_text())
    } else {
        ApiError::InvalidRequest(e.body_text())
    }
}

/// Run the inference call(s) a mode needs and shape the result.
///
/// `both` issues the prediction call first and stops there if it fails.
pub async fn run_detection(
    backend: &dyn InferenceBackend,
    image: &[u8],
    request: DetectRequest,
) -> Result<DetectResponse, ApiError> {
    let image_b64 = STANDARD.encode(image);
    let params = request.params;

    match request.mode {
        DetectMode::Json => {
            let body = backend.infer(&image_b64, OutputFormat::Json, params).await?;
            let document = PredictionDocument::parse(body)?;
            Ok(DetectResponse::Predictions(document.raw().clone()))
        }
        DetectMode::Image => {
            let annotated = backend.infer(&image_b64, OutputFormat::Image, params).await?;
            Ok(DetectResponse::Annotated(AnnotatedResponse {
                annotated: png_data_uri(&annotated),
            }))
        }
        DetectMode::Both => {
            let body = backend.infer(&image_b64, OutputFormat::Json, params).await?;
            let document = PredictionDocument::parse(body)?;
            let predictions = document.predictions()?.to_vec();

            let annotated = backend.infer(&image_b64, OutputFormat::Image, params).await?;

            Ok(DetectResponse::Full(FullDetectResponse {
                summary: summarize(&predictions),
                predictions,
                annotated: png_data_uri(&annotated),
            }))
        }
    }
}
