//! `msgram components` command - validate a Sonar export

use std::path::Path;

use msgram_core::config::ReaderConfig;
use msgram_core::error::{MsgramError, Result};
use msgram_core::loader::read_components;
use msgram_core::records::{records_header, weighted_line};
use msgram_core::sonar::unknown_metrics;
use serde_json::Value;

use crate::cli::Cli;
use crate::output_by_format_result;

/// Execute the components command
pub fn execute(cli: &Cli, config: &ReaderConfig, path: &Path) -> Result<()> {
    let components = read_components(path, config)?;

    let unknown = unknown_metrics(&components);
    if !unknown.is_empty() {
        tracing::warn!(
            metrics = %unknown.join(","),
            "components reference metrics outside the catalog"
        );
    }

    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&components)?);
            Ok::<(), MsgramError>(())
        },
        human => {
            if !cli.quiet {
                println!("{} component(s) in {}", components.len(), path.display());
                for component in &components {
                    println!(
                        "  {} {} ({} measure(s))",
                        field(component, "qualifier"),
                        component_label(component),
                        measure_count(component)
                    );
                }
            }
        },
        records => {
            println!(
                "{}",
                records_header("components", &[("count", components.len().to_string())])
            );
            for component in &components {
                println!(
                    "{} qualifier={} measures={}",
                    weighted_line('X', component_label(component), None),
                    field(component, "qualifier"),
                    measure_count(component)
                );
            }
        }
    )
}

fn field<'a>(component: &'a Value, key: &str) -> &'a str {
    component.get(key).and_then(Value::as_str).unwrap_or("-")
}

/// Path when present, since file names repeat across directories
fn component_label(component: &Value) -> &str {
    component
        .get("path")
        .and_then(Value::as_str)
        .unwrap_or_else(|| field(component, "name"))
}

fn measure_count(component: &Value) -> usize {
    component
        .get("measures")
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}
