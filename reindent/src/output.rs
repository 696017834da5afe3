//! Terminal output for completed rewrites.

use std::io::Write;

use colored::Colorize;

use crate::rewrite::RewriteSummary;
use crate::utils::normalize_display_path;

/// Prints the one-line summary, plus a note when lines were truncated.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_summary(writer: &mut impl Write, summary: &RewriteSummary) -> std::io::Result<()> {
    writeln!(
        writer,
        "{} {} ({} lines, {} changed)",
        "Reindented".green(),
        normalize_display_path(&summary.path),
        summary.lines,
        summary.changed
    )?;

    if !summary.misaligned.is_empty() {
        let list = summary
            .misaligned
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            writer,
            "  {} misaligned indentation truncated on line(s) {}",
            "Note:".yellow(),
            list.dimmed()
        )?;
    }
    Ok(())
}
