// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::http_server::AppState;
use crate::version;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// `{model}/{version}` of the hosted detector
    pub model: String,
    pub features: Vec<String>,
}

/// GET /health - Liveness; never touches the inference endpoint
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: version::VERSION_NUMBER.to_string(),
        model: state.backend.model_id(),
        features: version::FEATURES.iter().map(|f| f.to_string()).collect(),
    })
}
