use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use envelope_core::report;
use envelope_core::{DataOutcome, ERROR_MESSAGE, Outcome, SUCCESS_MESSAGE, StatusCode};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// Build a result envelope from flags and print it as JSON.
#[derive(Debug, Parser)]
#[command(name = "envelope-cli", version, about)]
struct Args {
    /// Build a failure envelope instead of a success one.
    #[arg(long)]
    fail: bool,

    /// Custom status message.
    #[arg(long)]
    message: Option<String>,

    /// Numeric status code, e.g. 404.
    #[arg(long)]
    code: Option<StatusCode>,

    /// Payload as a JSON document.
    #[arg(long)]
    data: Option<String>,

    /// Pretty-print the envelope.
    #[arg(long)]
    pretty: bool,
}

/// Picks the constructor matching the given flags.
fn build(args: &Args) -> Result<DataOutcome<Value>> {
    let data = args
        .data
        .as_deref()
        .map(serde_json::from_str::<Value>)
        .transpose()
        .context("--data is not valid JSON")?;
    let message = args.message.clone();

    let outcome = match (args.fail, data, message, args.code) {
        (false, None, None, None) => DataOutcome::success(),
        (false, Some(d), None, None) => DataOutcome::success_data(d),
        (false, None, Some(m), None) => DataOutcome::success_message(m),
        (false, Some(d), Some(m), None) => DataOutcome::success_data_message(d, m),
        (false, d, m, Some(code)) => {
            let m = m.unwrap_or_else(|| SUCCESS_MESSAGE.to_string());
            match d {
                Some(d) => DataOutcome::success_data_with(d, m, code),
                None => Outcome::success_with(m, code).into(),
            }
        }
        (true, None, None, None) => DataOutcome::error(),
        (true, Some(d), None, None) => DataOutcome::error_data(d),
        (true, d, m, code) => {
            let m = m.unwrap_or_else(|| ERROR_MESSAGE.to_string());
            let code = code.unwrap_or(StatusCode::BadRequest);
            match d {
                Some(d) => DataOutcome::error_data_with(d, m, code),
                None => DataOutcome::error_with(m, code),
            }
        }
    };
    Ok(outcome)
}

/// `0` for a successful envelope, `1` otherwise. Only the flag counts.
fn exit_status<T>(outcome: &DataOutcome<T>) -> u8 {
    if outcome.is_successful() { 0 } else { 1 }
}

fn render(outcome: &DataOutcome<Value>, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(outcome)?
    } else {
        serde_json::to_string(outcome)?
    };
    Ok(rendered)
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let outcome = build(&args)?;
    report::record_data("envelope-cli", &outcome);

    println!("{}", render(&outcome, args.pretty)?);

    Ok(ExitCode::from(exit_status(&outcome)))
}
