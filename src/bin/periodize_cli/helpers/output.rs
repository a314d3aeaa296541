// ABOUTME: Output helpers for periodize-cli
// ABOUTME: Writes command results to stdout as compact or pretty JSON

use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;

/// How results are rendered
pub struct OutputOptions {
    /// Pretty-print JSON
    pub pretty: bool,
}

/// Write `value` to stdout as JSON followed by a newline
pub fn emit<T: Serialize>(options: &OutputOptions, value: &T) -> Result<()> {
    let rendered = if options.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize output")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}").context("Failed to write output")?;
    Ok(())
}
