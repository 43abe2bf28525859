//! Output formatting for REPL suggestions.

use std::collections::BTreeSet;
use std::io::Write;

use crate::cli::args::OutputFormat;
use crate::error::Result;

/// Write the suggestions for one input line in the requested format.
pub fn write_suggestions<W: Write>(
    writer: &mut W,
    suggestions: &BTreeSet<String>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Human => output_human(writer, suggestions),
        OutputFormat::Json => output_json(writer, suggestions),
    }
}

/// One suggestion per line, in sorted order. Nothing at all when empty.
fn output_human<W: Write>(writer: &mut W, suggestions: &BTreeSet<String>) -> Result<()> {
    for suggestion in suggestions {
        writeln!(writer, "{suggestion}")?;
    }
    Ok(())
}

/// A single JSON array per input line, `[]` when empty.
fn output_json<W: Write>(writer: &mut W, suggestions: &BTreeSet<String>) -> Result<()> {
    serde_json::to_writer(&mut *writer, suggestions)?;
    writeln!(writer)?;
    Ok(())
}
