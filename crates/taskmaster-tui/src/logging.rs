#![forbid(unsafe_code)]

//! Tracing subscriber setup.
//!
//! The UI owns the terminal, so log output must never reach stdout or
//! stderr while the program runs. Logging is therefore off unless a log
//! file is configured, in which case a `fmt` layer appends plain-text
//! events there.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Install a file-backed subscriber, or do nothing when `log_file` is
/// `None`.
///
/// The filter comes from `TASKMASTER_LOG_FILTER` and defaults to `info`.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_env("TASKMASTER_LOG_FILTER")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_log_file_is_a_noop() {
        init(None).unwrap();
    }
}
