//! Pre-configuration reading
//!
//! A pre-configuration defines the weighted characteristic, subcharacteristic
//! and measure hierarchy used for scoring. [`assemble_preconfig`] validates a
//! parsed document and flattens it into a [`Preconfiguration`] record.

pub mod extract;
pub mod types;

use serde_json::Value;

use crate::config::ReaderConfig;
use crate::error::{MsgramError, Result};

pub use extract::{extract_characteristics, extract_measures, extract_subcharacteristics};
pub use types::{Level, LevelIndex, Preconfiguration, WeightedNode};

/// Document key holding the pre-configuration name
pub const NAME_FIELD: &str = "pre_config_name";

/// Validate a parsed pre-configuration document and build its record.
///
/// The name is read first, then each extraction pass runs from the document
/// root. The first failure aborts assembly.
pub fn assemble_preconfig(document: &Value, config: &ReaderConfig) -> Result<Preconfiguration> {
    let name = match document.get(NAME_FIELD) {
        Some(Value::String(name)) => name.clone(),
        Some(other) => return Err(MsgramError::invalid_field(NAME_FIELD, "a string", other)),
        None => return Err(MsgramError::missing_field(NAME_FIELD)),
    };

    let characteristics = extract_characteristics(document)?;
    let subcharacteristics = extract_subcharacteristics(document, config.weight_sum_mode)?;
    let measures = extract_measures(document, config.weight_sum_mode)?;

    tracing::debug!(
        name = %name,
        characteristics = characteristics.names.len(),
        subcharacteristics = subcharacteristics.names.len(),
        measures = measures.names.len(),
        "preconfig_assembled"
    );

    Ok(Preconfiguration::from_levels(
        name,
        characteristics,
        subcharacteristics,
        measures,
    ))
}
