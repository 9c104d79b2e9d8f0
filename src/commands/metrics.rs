//! `msgram metrics` command - list the Sonar metric catalog

use msgram_core::error::{MsgramError, Result};
use msgram_core::records::{records_header, weighted_line};
use msgram_core::sonar::METRICS_SONAR;

use crate::cli::Cli;
use crate::output_by_format_result;

/// Execute the metrics command
pub fn execute(cli: &Cli) -> Result<()> {
    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&METRICS_SONAR)?);
            Ok::<(), MsgramError>(())
        },
        human => {
            for metric in METRICS_SONAR {
                println!("{}", metric);
            }
        },
        records => {
            println!(
                "{}",
                records_header("metrics", &[("count", METRICS_SONAR.len().to_string())])
            );
            for metric in METRICS_SONAR {
                println!("{}", weighted_line('T', metric, None));
            }
        }
    )
}
