//! `msgram response` command - show the reply of a metrics upload

use std::path::Path;

use msgram_core::error::{MsgramError, Result};
use msgram_core::loader::load_json;
use msgram_core::records::{escape_quotes, records_header};
use msgram_core::response::{render_metrics_post, STATUS_CREATED};
use msgram_core::{bail_invalid, bail_usage};
use serde_json::{Map, Value};

use crate::cli::Cli;
use crate::output_by_format_result;

/// Execute the response command
pub fn execute(cli: &Cli, status: u16, body: Option<&Path>) -> Result<()> {
    if !(100..=599).contains(&status) {
        bail_invalid!("HTTP status", status);
    }

    let body = match body {
        Some(path) => load_body(path)?,
        None => Map::new(),
    };
    let saved = status == STATUS_CREATED;
    let lines = render_metrics_post(status, &body);

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "status": status,
                "saved": saved,
                "lines": lines,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), MsgramError>(())
        },
        human => {
            print!("{}", human_text(saved, &lines));
        },
        records => {
            println!(
                "{}",
                records_header(
                    "response",
                    &[("status", status.to_string()), ("saved", saved.to_string())]
                )
            );
            for line in lines.iter().skip(1) {
                println!("D \"{}\"", escape_quotes(line));
            }
        }
    )
}

fn load_body(path: &Path) -> Result<Map<String, Value>> {
    match load_json(path)? {
        Value::Object(map) => Ok(map),
        _ => bail_usage!(format!(
            "response body in {} must be a JSON object",
            path.display()
        )),
    }
}

/// Status line framed by blank lines, then one tab-indented line per field.
///
/// The blank line after the header only appears for a failed upload.
fn human_text(saved: bool, lines: &[String]) -> String {
    let mut text = String::from("\n");
    let mut lines = lines.iter();
    if let Some(header) = lines.next() {
        text.push_str(header);
        text.push('\n');
    }
    if !saved {
        text.push('\n');
    }
    for line in lines {
        text.push('\t');
        text.push_str(line);
        text.push('\n');
    }
    text
}
