//! Hierarchy extraction passes
//!
//! Each pass walks the raw document from the root, validates the nodes of its
//! level and checks the sibling sum-to-100 invariant once per sibling group,
//! after the whole group has been collected.

use serde_json::Value;

use super::types::{Level, LevelIndex, WeightedNode};
use crate::config::WeightSumMode;
use crate::error::{MsgramError, Result};
use crate::weights::{
    truncate_weight, validate_weight_sum, validate_weight_value, weight_sum, WeightMap,
    WEIGHT_SUM_TARGET,
};

/// Owner label used when the top-level characteristic group fails its sum
const ROOT_OWNER: &str = "the pre-configuration";

/// Top-level `characteristics` array of a pre-configuration document
pub fn characteristics_of(document: &Value) -> Result<&[Value]> {
    document
        .get(Level::Characteristic.collection_key())
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| MsgramError::missing_field(Level::Characteristic.collection_key()))
}

/// Validate the fields of one entry.
///
/// Checks run in order: name, weight presence, weight range, then (for
/// characteristics and subcharacteristics) presence and non-emptiness of the
/// child collection.
pub fn validate_node(level: Level, entry: &Value) -> Result<WeightedNode<'_>> {
    let name = entry
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| level.error(format!("expected {} name field", level.label())))?;

    let Some(raw_weight) = entry.get("weight") else {
        return Err(level.error(format!("{name} does not have weight field defined")));
    };

    let weight = raw_weight
        .as_f64()
        .filter(|w| validate_weight_value(*w))
        .ok_or_else(|| {
            level.error(format!(
                "{name} does not have weight value inside parameters (0 to 100)"
            ))
        })?;

    let children = match level.child() {
        None => &[][..],
        Some(child) => {
            let key = child.collection_key();
            let Some(raw_children) = entry.get(key) else {
                return Err(level.error(format!("{name} does not have {key} field defined")));
            };
            match raw_children.as_array() {
                Some(items) if !items.is_empty() => items.as_slice(),
                _ => {
                    return Err(level.error(format!(
                        "{name} needs to have at least one {} defined",
                        child.label()
                    )))
                }
            }
        }
    };

    Ok(WeightedNode {
        name,
        weight: truncate_weight(weight),
        children,
    })
}

/// Validate one sibling group, record it into `index` and check its sum.
fn collect_group<'a>(
    level: Level,
    owner: &str,
    entries: &'a [Value],
    mode: WeightSumMode,
    index: &mut LevelIndex,
) -> Result<Vec<WeightedNode<'a>>> {
    let mut group = WeightMap::new();
    let mut nodes = Vec::with_capacity(entries.len());

    for entry in entries {
        let node = validate_node(level, entry)?;
        group.insert(node.name, node.weight);
        index.record(&node);
        nodes.push(node);
    }

    let checked = match mode {
        WeightSumMode::PerGroup => &group,
        WeightSumMode::Cumulative => &index.weights,
    };

    if !validate_weight_sum(&[checked]) {
        return Err(level.error(format!(
            "{} weights of {owner} do not sum to {WEIGHT_SUM_TARGET} (sum is {})",
            level.label(),
            weight_sum(checked)
        )));
    }

    Ok(nodes)
}

/// Extract characteristic names and weights.
pub fn extract_characteristics(document: &Value) -> Result<LevelIndex> {
    let mut index = LevelIndex::default();
    collect_group(
        Level::Characteristic,
        ROOT_OWNER,
        characteristics_of(document)?,
        WeightSumMode::PerGroup,
        &mut index,
    )?;

    tracing::debug!(count = index.names.len(), "characteristics_extracted");
    Ok(index)
}

/// Extract subcharacteristic names and weights, checking one sum per characteristic.
pub fn extract_subcharacteristics(document: &Value, mode: WeightSumMode) -> Result<LevelIndex> {
    let mut index = LevelIndex::default();

    for entry in characteristics_of(document)? {
        let characteristic = validate_node(Level::Characteristic, entry)?;
        collect_group(
            Level::Subcharacteristic,
            characteristic.name,
            characteristic.children,
            mode,
            &mut index,
        )?;
    }

    tracing::debug!(count = index.names.len(), mode = %mode, "subcharacteristics_extracted");
    Ok(index)
}

/// Extract measure names and weights, checking one sum per subcharacteristic.
pub fn extract_measures(document: &Value, mode: WeightSumMode) -> Result<LevelIndex> {
    let mut index = LevelIndex::default();

    for entry in characteristics_of(document)? {
        let characteristic = validate_node(Level::Characteristic, entry)?;
        for sub_entry in characteristic.children {
            let subcharacteristic = validate_node(Level::Subcharacteristic, sub_entry)?;
            collect_group(
                Level::Measure,
                subcharacteristic.name,
                subcharacteristic.children,
                mode,
                &mut index,
            )?;
        }
    }

    tracing::debug!(count = index.names.len(), mode = %mode, "measures_extracted");
    Ok(index)
}
