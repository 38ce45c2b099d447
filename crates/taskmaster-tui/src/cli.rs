#![forbid(unsafe_code)]

//! Command-line argument parsing.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via the `TASKMASTER_*` prefix;
//! explicit flags win over the environment.

use std::env;
use std::path::PathBuf;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
taskmaster - a terminal task list

USAGE:
    taskmaster [OPTIONS]

OPTIONS:
    --store=PATH         Snapshot file (default: $XDG_STATE_HOME/taskmaster/tasks.json)
    --log-file=PATH      Append tracing output to PATH (off by default)
    --help, -h           Show this help message
    --version, -V        Show version

KEYBINDINGS:
    type + Enter    Add the typed task
    Up / Down       Move the selection
    Tab             Toggle the selected task
    Ctrl+D, Delete  Remove the selected task
    Esc / Ctrl+C    Quit

ENVIRONMENT VARIABLES:
    TASKMASTER_STORE       Override --store
    TASKMASTER_LOG         Override --log-file
    TASKMASTER_LOG_FILTER  Tracing filter when logging is on (default: info)";

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Opts {
    /// Snapshot file override. `None` means the default state-dir location.
    pub store: Option<PathBuf>,
    /// Log file. `None` disables logging entirely.
    pub log_file: Option<PathBuf>,
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        // Apply environment variable defaults first.
        if let Ok(val) = env::var("TASKMASTER_STORE") {
            opts.store = Some(PathBuf::from(val));
        }
        if let Ok(val) = env::var("TASKMASTER_LOG") {
            opts.log_file = Some(PathBuf::from(val));
        }

        // Parse command-line args (override env vars).
        for arg in env::args().skip(1) {
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("taskmaster {VERSION}");
                    process::exit(0);
                }
                other => {
                    if let Some(val) = other.strip_prefix("--store=") {
                        opts.store = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--log-file=") {
                        opts.log_file = Some(PathBuf::from(val));
                    } else {
                        eprintln!("Unknown argument: {other}");
                        eprintln!("Run with --help for usage information.");
                        process::exit(1);
                    }
                }
            }
        }

        opts
    }
}
