// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod config;
pub mod detection;
pub mod version;

pub use api::{create_app, start_server, ApiError, AppState};
pub use config::{ConfigError, DetectorConfig, ServerConfig};
pub use detection::{InferenceBackend, RoboflowClient};
