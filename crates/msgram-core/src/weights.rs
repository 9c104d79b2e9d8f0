//! Weight validation for the characteristic hierarchy
//!
//! Weights are percentages. A single weight must lie in `0..=100`, and every
//! sibling group must sum to exactly [`WEIGHT_SUM_TARGET`]. Sums are taken
//! over integer-truncated weights.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lowest accepted weight
pub const MIN_WEIGHT: f64 = 0.0;

/// Highest accepted weight
pub const MAX_WEIGHT: f64 = 100.0;

/// Required sum of every sibling group
pub const WEIGHT_SUM_TARGET: u32 = 100;

/// Name to truncated weight mapping for one hierarchy level.
///
/// Keys keep the order they were first inserted in, so a serialized record
/// lists weights in document order. Re-inserting a name updates its weight in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightMap(Map<String, Value>);

impl WeightMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weight of `name`, keeping its original position if present
    pub fn insert(&mut self, name: impl Into<String>, weight: u32) {
        self.0.insert(name.into(), Value::from(weight));
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.0
            .get(name)
            .and_then(Value::as_u64)
            .and_then(|w| u32::try_from(w).ok())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Weights in insertion order
    pub fn weights(&self) -> impl Iterator<Item = u32> + '_ {
        self.0
            .values()
            .filter_map(Value::as_u64)
            .filter_map(|w| u32::try_from(w).ok())
    }
}

impl FromIterator<(String, u32)> for WeightMap {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, weight) in iter {
            map.insert(name, weight);
        }
        map
    }
}

/// Returns true iff `MIN_WEIGHT <= weight <= MAX_WEIGHT`. NaN is rejected.
pub fn validate_weight_value(weight: f64) -> bool {
    (MIN_WEIGHT..=MAX_WEIGHT).contains(&weight)
}

/// Truncate an already range-checked weight for storage in a [`WeightMap`].
pub fn truncate_weight(weight: f64) -> u32 {
    weight.trunc() as u32
}

/// Returns true iff every mapping in `groups` sums to [`WEIGHT_SUM_TARGET`].
///
/// An empty mapping sums to zero and therefore fails.
pub fn validate_weight_sum(groups: &[&WeightMap]) -> bool {
    groups
        .iter()
        .all(|group| weight_sum(group) == u64::from(WEIGHT_SUM_TARGET))
}

/// Sum of the weights in one mapping
pub fn weight_sum(group: &WeightMap) -> u64 {
    group.weights().map(u64::from).sum()
}
