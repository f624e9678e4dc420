//! Helpers for consistent error, warning and prompt output.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Writes `msg` without a newline and flushes so the prompt shows before input.
pub fn prompt(out: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    write!(out, "{}", msg)?;
    out.flush()
}
