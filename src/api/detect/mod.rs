// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Detect API endpoint module
//!
//! Provides POST /detect for finding holds in a wall photo.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{detect_handler, read_upload, run_detection};
pub use request::{DetectMode, DetectQuery, DetectRequest};
pub use response::{png_data_uri, AnnotatedResponse, DetectResponse, FullDetectResponse};
