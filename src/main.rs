// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Parser;
use climblog_hold_detector::{
    api::{start_server, AppState},
    cli::Cli,
    detection::RoboflowClient,
    version,
};
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up ROBOFLOW_* from a local .env before anything reads the environment
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    tracing::info!("Starting hold detector proxy {}", version::get_version_info());

    let (detector, server) = Cli::parse().into_configs()?;
    tracing::info!(
        "Using model {}/{} via {}",
        detector.model,
        detector.model_version,
        detector.base_url
    );

    let client = RoboflowClient::new(&detector)?;
    let state = AppState::new(Arc::new(client));

    start_server(state, &server).await
}
