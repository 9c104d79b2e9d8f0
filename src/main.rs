//! msgram - MeasureSoftGram reader CLI
//!
//! Validates weighted quality pre-configurations and Sonar metric exports
//! before they are handed to the scoring service.
//!
//! Every failure leaves through [`report`], so the exit code always follows
//! the error class: 1 generic, 2 usage, 3 bad document.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use msgram_core::error::{ExitCode as MsgramExitCode, MsgramError};
use msgram_core::logging;
use msgram_core::records::error_line;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let code = match commands::dispatch::run(&cli, start) {
        Ok(()) => MsgramExitCode::Success,
        Err(e) => report(cli.format, cli.quiet, &e),
    };

    tracing::debug!(elapsed = ?start.elapsed(), exit_code = code as u8, "finished");
    ExitCode::from(code as u8)
}

/// Handle a clap failure before `Cli` exists.
///
/// Help and version requests print and succeed. Everything else becomes an
/// [`MsgramError`] reported in the format named on the command line. Human
/// output keeps clap's own rendering, which carries the usage hint.
fn parse_failure(err: clap::Error) -> ExitCode {
    let Some(error) = usage_error(&err) else {
        // Nothing useful can be done if stdout is already closed.
        let _ = err.print();
        return ExitCode::from(MsgramExitCode::Success as u8);
    };

    let format = requested_format(env::args().skip(1));
    let code = if format == OutputFormat::Human {
        let _ = err.print();
        error.exit_code()
    } else {
        report(format, false, &error)
    };
    ExitCode::from(code as u8)
}

/// The msgram error for a clap failure, or `None` for help and version output
fn usage_error(err: &clap::Error) -> Option<MsgramError> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        | ErrorKind::ArgumentConflict
        | ErrorKind::TooManyValues
        | ErrorKind::TooFewValues
        | ErrorKind::WrongNumberOfValues
        | ErrorKind::NoEquals => Some(MsgramError::UsageError(
            err.to_string().trim_end().to_string(),
        )),
        _ => Some(MsgramError::Other(err.to_string())),
    }
}

/// Output format named in raw arguments, falling back to human.
///
/// The last valid `--format` wins. Used only when clap rejected the command
/// line, so an unparseable value is ignored rather than reported twice.
fn requested_format(args: impl IntoIterator<Item = String>) -> OutputFormat {
    let mut format = OutputFormat::Human;
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let value = match arg.strip_prefix("--format") {
            Some("") => args.next(),
            Some(rest) => rest.strip_prefix('=').map(str::to_string),
            None => None,
        };
        if let Some(parsed) = value.and_then(|v| v.parse().ok()) {
            format = parsed;
        }
    }
    format
}

/// Write `error` to stderr in `format` and return its exit code.
///
/// Structured formats always report, since scripts read them. `--quiet` only
/// silences the human message.
fn report(format: OutputFormat, quiet: bool, error: &MsgramError) -> MsgramExitCode {
    let code = error.exit_code();
    match format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Records => eprintln!(
            "{}",
            error_line(code as u8, error.error_type(), &error.to_string())
        ),
        OutputFormat::Human if !quiet => eprintln!("error: {}", error),
        OutputFormat::Human => {}
    }
    code
}
