//! `msgram preconfig` command - validate a pre-configuration file

use std::path::Path;

use msgram_core::config::ReaderConfig;
use msgram_core::error::{MsgramError, Result};
use msgram_core::loader::read_preconfig;
use msgram_core::preconfig::Preconfiguration;
use msgram_core::records::{escape_quotes, records_header, weighted_line};

use crate::cli::Cli;
use crate::output_by_format_result;

/// Execute the preconfig command
pub fn execute(cli: &Cli, config: &ReaderConfig, path: &Path) -> Result<()> {
    let record = read_preconfig(path, config)?;

    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok::<(), MsgramError>(())
        },
        human => {
            if !cli.quiet {
                for line in human_lines(&record) {
                    println!("{}", line);
                }
            }
        },
        records => {
            for line in records_lines(&record) {
                println!("{}", line);
            }
        }
    )
}

fn section(
    title: &str,
    names: &[String],
    weight_of: impl Fn(&str) -> Option<u32>,
    lines: &mut Vec<String>,
) {
    lines.push(format!("{} ({}):", title, names.len()));
    for name in names {
        match weight_of(name.as_str()) {
            Some(weight) => lines.push(format!("  {} [{}]", name, weight)),
            None => lines.push(format!("  {}", name)),
        }
    }
}

fn human_lines(record: &Preconfiguration) -> Vec<String> {
    let mut lines = vec![format!("Pre-configuration: {}", record.name)];
    section(
        "Characteristics",
        &record.characteristics,
        |n| record.characteristic_weight(n),
        &mut lines,
    );
    section(
        "Subcharacteristics",
        &record.subcharacteristics,
        |n| record.subcharacteristic_weight(n),
        &mut lines,
    );
    section(
        "Measures",
        &record.measures,
        |n| record.measure_weight(n),
        &mut lines,
    );
    lines
}

fn records_lines(record: &Preconfiguration) -> Vec<String> {
    let mut lines = vec![records_header(
        "preconfig",
        &[
            ("name", format!("\"{}\"", escape_quotes(&record.name))),
            ("characteristics", record.characteristics.len().to_string()),
            (
                "subcharacteristics",
                record.subcharacteristics.len().to_string(),
            ),
            ("measures", record.measures.len().to_string()),
        ],
    )];

    lines.extend(
        record
            .characteristics
            .iter()
            .map(|n| weighted_line('C', n, record.characteristic_weight(n))),
    );
    lines.extend(
        record
            .subcharacteristics
            .iter()
            .map(|n| weighted_line('S', n, record.subcharacteristic_weight(n))),
    );
    lines.extend(
        record
            .measures
            .iter()
            .map(|n| weighted_line('M', n, record.measure_weight(n))),
    );
    lines
}
