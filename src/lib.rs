// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod presentation;

use anyhow::{Context, Result};
use std::io::Write;
use tag_depth_core::{ScanSummary, read_source, scan};
use tracing::{debug, info};

use crate::config::Config;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan `config.path` and write the selected transitions to `out`.
///
/// The file is read completely before anything is written, so a read failure
/// leaves `out` untouched.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded, or if writing to
/// `out` fails.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<ScanSummary> {
    let windows = config.effective_windows();
    info!(path = %config.path.display(), windows = %windows, "scanning");

    let text = read_source(&config.path)
        .with_context(|| format!("cannot scan '{}'", config.path.display()))?;

    let mut scanner = scan(&text, &windows);
    let printed = presentation::write_transitions(out, scanner.by_ref())
        .context("failed to write output")?;
    out.flush().context("failed to write output")?;

    let summary = ScanSummary {
        lines: scanner.lines_seen(),
        final_depth: scanner.depth(),
        printed,
    };
    debug!(
        lines = summary.lines,
        final_depth = summary.final_depth,
        printed = summary.printed,
        "scan finished"
    );
    Ok(summary)
}
