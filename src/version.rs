// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the hold detector proxy

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-hold-detector-proxy-2025-10-19";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2025-10-19";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "detect-json",
    "detect-image",
    "detect-both",
    "class-summary",
    "cors-any-origin",
];

pub fn get_version_info() -> String {
    format!("{} ({})", VERSION, BUILD_DATE)
}
