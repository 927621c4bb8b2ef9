//! Diagnostics on stderr using **tracing**.
//!
//! Stdout carries only the summary line; warnings about skipped files and
//! debug detail go through the subscriber installed here.
//!
//! # Environment Variables
//! - `RUST_LOG`: overrides the level picked from `--verbose`
//!   (e.g. `RUST_LOG=dead_keys=trace`)

use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Install the global stderr subscriber.
///
/// Defaults to `info`, or `debug` when `verbose` is set. Calling it twice is a
/// no-op, so library users and tests can install their own subscriber first.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(false)
        .with_writer(std::io::stderr) // keeps stdout clean for the summary
        .try_init();
}
