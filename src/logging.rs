//! Diagnostic logging setup.
//!
//! Stdout belongs to the TUI, so all diagnostics go to a log file via a
//! non-blocking writer. The filter honors `RUST_LOG` and defaults to
//! `info`, which captures every key event the input dispatcher reports.

use std::fs::File;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber writing to `path`.
///
/// Returns the writer guard; dropping it flushes buffered log lines, so
/// the caller must keep it alive for the session. Fails if called twice
/// or if the log file cannot be created.
pub fn init(path: &Path) -> Result<WorkerGuard> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))?;

    Ok(guard)
}
