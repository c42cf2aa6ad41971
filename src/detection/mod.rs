// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Hold detection via a hosted inference endpoint

pub mod backend;
pub mod client;
pub mod prediction;
pub mod summary;

pub use backend::{DetectionParams, InferenceBackend, InferenceError, OutputFormat};
pub use client::RoboflowClient;
pub use prediction::{class_label, PredictionDocument, UNKNOWN_CLASS};
pub use summary::{summarize, DetectionSummary};
