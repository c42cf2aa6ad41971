// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::prediction::class_label;

/// Per-class counts for one prediction list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionSummary {
    pub total: usize,
    /// `(label, count)`, most frequent first; ties keep first-seen order
    pub by_class: Vec<(String, usize)>,
}

pub fn summarize(predictions: &[Value]) -> DetectionSummary {
    let mut by_class: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for prediction in predictions {
        let label = class_label(prediction);
        match index.get(label).copied() {
            Some(i) => by_class[i].1 += 1,
            None => {
                index.insert(label, by_class.len());
                by_class.push((label.to_string(), 1));
            }
        }
    }

    // sort_by is stable
    by_class.sort_by(|a, b| b.1.cmp(&a.1));

    DetectionSummary {
        total: predictions.len(),
        by_class,
    }
}
