// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Loosely typed view of the prediction document
//!
//! The inference endpoint's JSON is passed through mostly untouched; only the
//! `predictions` array and each entry's `class` field are ever read.

use bytes::Bytes;
use serde_json::Value;

use super::backend::InferenceError;

/// Label used when a prediction carries no string `class`
pub const UNKNOWN_CLASS: &str = "unknown";

/// A parsed prediction document that keeps its original bytes
#[derive(Debug, Clone)]
pub struct PredictionDocument {
    raw: Bytes,
    value: Value,
}

impl PredictionDocument {
    /// Parse a success body. Fails on anything that is not valid JSON.
    pub fn parse(raw: Bytes) -> Result<Self, InferenceError> {
        let value = serde_json::from_slice(&raw)?;
        Ok(Self { raw, value })
    }

    /// Body exactly as received
    pub fn raw(&self) -> &Bytes {
        &self.raw
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The `predictions` array; empty when the field is absent.
    pub fn predictions(&self) -> Result<&[Value], InferenceError> {
        let object = self.value.as_object().ok_or_else(|| {
            InferenceError::Decode("expected a JSON object".to_string())
        })?;

        match object.get("predictions") {
            None | Some(Value::Null) => Ok(&[][..]),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(_) => Err(InferenceError::Decode(
                "`predictions` is not an array".to_string(),
            )),
        }
    }
}

/// Class label of a single prediction
pub fn class_label(prediction: &Value) -> &str {
    prediction
        .get("class")
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_CLASS)
}
