//! Application entry point.
//!
//! Reads raw arguments, loads launcher configuration, delegates composition
//! to [`launch::run`], and writes the serialized command to stdout for the
//! wrapper script to execute.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use spark_launch::config::LauncherConfig;
use spark_launch::launch::{self, RenderedCommand};
use spark_launch::platform::Platform;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .init();

    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    let platform = Platform::detect();

    let config = match LauncherConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let rendered = match launch::run(raw_args, platform, &config) {
        Ok(rendered) => rendered,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match emit(rendered) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Write the authoritative command stream to stdout.
fn emit(rendered: RenderedCommand) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match rendered {
        RenderedCommand::Batch(line) => {
            writeln!(out, "{line}").context("writing batch command line")?;
        }
        RenderedCommand::ArgVector(tokens) => {
            for token in &tokens {
                out.write_all(token.as_bytes())
                    .and_then(|()| out.write_all(&[0]))
                    .context("writing command token stream")?;
            }
        }
    }
    out.flush().context("flushing command stream")
}
