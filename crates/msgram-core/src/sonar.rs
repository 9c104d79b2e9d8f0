//! Sonar metrics export validation
//!
//! A Sonar export has exactly three top-level attributes, in order:
//! `paging`, `baseComponent`, `components`. The `baseComponent` object has
//! exactly `id`, `key`, `name`, `qualifier`, `measures`, in that order.
//!
//! Object order comes from the parser (`serde_json` with `preserve_order`),
//! so the position-sensitive check sees keys as they appear in the file.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::config::KeyOrder;
use crate::error::{MsgramError, Result};

/// Expected top-level attributes, in order
pub const SONAR_ATTRIBUTES: [&str; 3] = ["paging", "baseComponent", "components"];

/// Expected `baseComponent` attributes, in order
pub const BASE_COMPONENT_ATTRIBUTES: [&str; 5] = ["id", "key", "name", "qualifier", "measures"];

/// Metrics the scoring pipeline knows how to read from a Sonar export
pub const METRICS_SONAR: [&str; 12] = [
    "files",
    "functions",
    "complexity",
    "comment_lines_density",
    "duplicated_lines_density",
    "coverage",
    "ncloc",
    "tests",
    "test_errors",
    "test_failures",
    "test_execution_time",
    "security_rating",
];

/// Whether `metric` is part of [`METRICS_SONAR`]
pub fn is_catalog_metric(metric: &str) -> bool {
    METRICS_SONAR.contains(&metric)
}

#[derive(Debug, PartialEq, Eq)]
enum AttributeMismatch {
    Count { found: usize },
    Names { found: Vec<String> },
}

impl AttributeMismatch {
    fn describe(&self, expected: &[&str]) -> String {
        match self {
            AttributeMismatch::Count { found } => format!(
                "invalid number of attributes (expected {}, found {found})",
                expected.len()
            ),
            AttributeMismatch::Names { found } => format!(
                "incorrect attributes (expected [{}], found [{}])",
                expected.join(", "),
                found.join(", ")
            ),
        }
    }
}

fn check_attributes(
    object: &Map<String, Value>,
    expected: &[&str],
    key_order: KeyOrder,
) -> std::result::Result<(), AttributeMismatch> {
    if object.len() != expected.len() {
        return Err(AttributeMismatch::Count {
            found: object.len(),
        });
    }

    let matches = match key_order {
        KeyOrder::Strict => object.keys().map(String::as_str).eq(expected.iter().copied()),
        KeyOrder::Any => expected.iter().all(|key| object.contains_key(*key)),
    };

    if matches {
        Ok(())
    } else {
        Err(AttributeMismatch::Names {
            found: object.keys().cloned().collect(),
        })
    }
}

/// Check the fixed shape of a Sonar export.
///
/// Top-level violations are reported before `baseComponent` is looked at.
pub fn validate_sonar_format(document: &Value, key_order: KeyOrder) -> Result<()> {
    let object = document.as_object().ok_or_else(|| {
        MsgramError::InvalidSonarFileAttributes("document is not a JSON object".to_string())
    })?;

    check_attributes(object, &SONAR_ATTRIBUTES, key_order)
        .map_err(|m| MsgramError::InvalidSonarFileAttributes(m.describe(&SONAR_ATTRIBUTES)))?;

    let base_component = object
        .get("baseComponent")
        .and_then(Value::as_object)
        .ok_or_else(|| MsgramError::InvalidBaseComponent("not a JSON object".to_string()))?;

    check_attributes(base_component, &BASE_COMPONENT_ATTRIBUTES, key_order).map_err(|m| {
        MsgramError::InvalidBaseComponent(m.describe(&BASE_COMPONENT_ATTRIBUTES))
    })?;

    Ok(())
}

/// The `components` list of an already validated export
pub fn components_of(document: &Value) -> Result<&[Value]> {
    document
        .get("components")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| {
            MsgramError::InvalidSonarFileAttributes("components is not a list".to_string())
        })
}

/// Metric names used by `components` that are not in [`METRICS_SONAR`], sorted
pub fn unknown_metrics(components: &[Value]) -> Vec<String> {
    let unknown: BTreeSet<&str> = components
        .iter()
        .filter_map(|component| component.get("measures").and_then(Value::as_array))
        .flatten()
        .filter_map(|measure| measure.get("metric").and_then(Value::as_str))
        .filter(|metric| !is_catalog_metric(metric))
        .collect();

    unknown.into_iter().map(str::to_string).collect()
}
