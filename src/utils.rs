use anyhow::{Context, Result};
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

use crate::stats::ActivityResult;

/// Installs the process-wide file logger. Each run gets its own file, named
/// after its start time, under `log_dir`. `RUST_LOG` overrides the level.
pub fn setup_logging(verbose: bool, log_dir: &Path) -> Result<PathBuf> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {:?}", log_dir))?;

    let log_path = log_dir.join(log_file_name());
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let timer = LocalTime::new(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_timer(timer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    Ok(log_path)
}

fn log_file_name() -> String {
    format!("{}.log", Local::now().format("%Y-%m-%d_%H-%M-%S"))
}

/// Writes the winners one per line under a `=` rule as wide as the first
/// cookie, or a notice when nothing was active on the date.
pub fn print_results(result: &ActivityResult, out: &mut impl Write) -> io::Result<()> {
    let Some(first) = result.cookies.first() else {
        return writeln!(out, "No active cookies found for date: {}", result.date);
    };

    writeln!(out, "{}", "=".repeat(first.len()))?;
    for cookie in &result.cookies {
        writeln!(out, "{}", cookie)?;
    }
    Ok(())
}
