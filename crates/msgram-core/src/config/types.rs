//! Configuration type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MsgramError;

/// How sibling weight sums are checked for nested levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightSumMode {
    /// Each sibling group is summed on its own
    #[default]
    PerGroup,
    /// The mapping accumulated over every group seen so far at that level is
    /// summed after each group
    Cumulative,
}

impl FromStr for WeightSumMode {
    type Err = MsgramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "per_group" | "per-group" => Ok(WeightSumMode::PerGroup),
            "cumulative" => Ok(WeightSumMode::Cumulative),
            other => Err(MsgramError::invalid_value("weight sum mode", other)),
        }
    }
}

impl fmt::Display for WeightSumMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightSumMode::PerGroup => write!(f, "per_group"),
            WeightSumMode::Cumulative => write!(f, "cumulative"),
        }
    }
}

/// How object attribute order is treated by the Sonar shape check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyOrder {
    /// Attributes must appear exactly in the expected positions
    #[default]
    Strict,
    /// Attributes must match as a set; position is ignored
    Any,
}

impl FromStr for KeyOrder {
    type Err = MsgramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(KeyOrder::Strict),
            "any" => Ok(KeyOrder::Any),
            other => Err(MsgramError::invalid_value("key order", other)),
        }
    }
}

impl fmt::Display for KeyOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyOrder::Strict => write!(f, "strict"),
            KeyOrder::Any => write!(f, "any"),
        }
    }
}

/// Reader configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Sum check strategy for subcharacteristic and measure groups
    #[serde(default)]
    pub weight_sum_mode: WeightSumMode,

    /// Attribute order policy for Sonar exports
    #[serde(default)]
    pub key_order: KeyOrder,
}
