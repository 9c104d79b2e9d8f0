//! Pre-configuration data types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MsgramError;
use crate::weights::WeightMap;

/// A level of the characteristic hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Characteristic,
    Subcharacteristic,
    Measure,
}

impl Level {
    /// Singular label used in messages
    pub fn label(self) -> &'static str {
        match self {
            Level::Characteristic => "characteristic",
            Level::Subcharacteristic => "subcharacteristic",
            Level::Measure => "measure",
        }
    }

    /// Level of the nodes held under this one
    pub fn child(self) -> Option<Level> {
        match self {
            Level::Characteristic => Some(Level::Subcharacteristic),
            Level::Subcharacteristic => Some(Level::Measure),
            Level::Measure => None,
        }
    }

    /// Document key holding this level's nodes under their parent
    pub fn collection_key(self) -> &'static str {
        match self {
            Level::Characteristic => "characteristics",
            Level::Subcharacteristic => "subcharacteristics",
            Level::Measure => "measures",
        }
    }

    /// Error of this level's kind
    pub fn error(self, reason: impl Into<String>) -> MsgramError {
        let reason = reason.into();
        match self {
            Level::Characteristic => MsgramError::InvalidCharacteristic(reason),
            Level::Subcharacteristic => MsgramError::InvalidSubcharacteristic(reason),
            Level::Measure => MsgramError::InvalidMeasure(reason),
        }
    }
}

/// A validated entry of the hierarchy, borrowed from the raw document.
#[derive(Debug, Clone, Copy)]
pub struct WeightedNode<'a> {
    pub name: &'a str,
    /// Integer-truncated weight
    pub weight: u32,
    /// Non-empty child entries; always empty for measures
    pub children: &'a [Value],
}

/// Names and weights collected for one level.
///
/// Names keep first-seen order and may repeat when the same name appears under
/// different parents. The weight mapping keeps the last weight seen for a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelIndex {
    pub names: Vec<String>,
    pub weights: WeightMap,
}

impl LevelIndex {
    /// Record a node in this index
    pub fn record(&mut self, node: &WeightedNode<'_>) {
        self.names.push(node.name.to_string());
        self.weights.insert(node.name, node.weight);
    }
}

/// Normalized pre-configuration handed to the scoring stage.
///
/// Weight mappings are wrapped in single-element lists, which is the shape the
/// scoring service expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preconfiguration {
    pub name: String,
    pub characteristics: Vec<String>,
    pub subcharacteristics: Vec<String>,
    pub measures: Vec<String>,
    pub characteristics_weights: Vec<WeightMap>,
    pub subcharacteristics_weights: Vec<WeightMap>,
    pub measures_weights: Vec<WeightMap>,
}

impl Preconfiguration {
    /// Build the record from the pre-configuration name and the three level indexes
    pub fn from_levels(
        name: String,
        characteristics: LevelIndex,
        subcharacteristics: LevelIndex,
        measures: LevelIndex,
    ) -> Self {
        Self {
            name,
            characteristics: characteristics.names,
            subcharacteristics: subcharacteristics.names,
            measures: measures.names,
            characteristics_weights: vec![characteristics.weights],
            subcharacteristics_weights: vec![subcharacteristics.weights],
            measures_weights: vec![measures.weights],
        }
    }

    /// Weight of a characteristic, if present
    pub fn characteristic_weight(&self, name: &str) -> Option<u32> {
        lookup(&self.characteristics_weights, name)
    }

    /// Weight of a subcharacteristic, if present
    pub fn subcharacteristic_weight(&self, name: &str) -> Option<u32> {
        lookup(&self.subcharacteristics_weights, name)
    }

    /// Weight of a measure, if present
    pub fn measure_weight(&self, name: &str) -> Option<u32> {
        lookup(&self.measures_weights, name)
    }
}

fn lookup(maps: &[WeightMap], name: &str) -> Option<u32> {
    maps.iter().find_map(|m| m.get(name))
}
