//! In-place file rewriting.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::lines::Lines;
use crate::error::ReindentError;
use crate::indent::{measure_indent, rewrite_line, try_rewrite_line, IndentWidth};
use crate::utils::normalize_display_path;

/// Outcome of [`rewrite_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteSummary {
    /// File that was rewritten.
    pub path: PathBuf,
    /// Lines read, which is also the number written.
    pub lines: usize,
    /// Lines whose text differs after the rewrite.
    pub changed: usize,
    /// 1-based numbers of non-blank lines whose indentation was truncated.
    pub misaligned: Vec<usize>,
}

/// Transformed contents held between the read and write phases.
#[derive(Debug, Default)]
struct Rewritten {
    lines: Vec<String>,
    changed: usize,
    misaligned: Vec<usize>,
}

/// Rewrites the indentation of every line of `source` from `old` to `new` width.
///
/// Line semantics match [`rewrite_file`]; this is the in-memory counterpart.
#[must_use]
pub fn rewrite_source(source: &str, old: IndentWidth, new: IndentWidth) -> String {
    source
        .split_inclusive('\n')
        .map(|line| rewrite_line(line, old, new))
        .collect()
}

/// Rewrites the indentation of the file at `path` in place.
///
/// The whole file is read and transformed before it is truncated, so access
/// and encoding errors leave it untouched. A failure during the write phase
/// can leave it partially written; there is no backup.
///
/// # Errors
///
/// [`ReindentError::Access`] if the file cannot be opened, read, or written.
/// [`ReindentError::NotUtf8`] if it is not UTF-8 text.
/// [`ReindentError::IndentTooLarge`] if a rewritten line would not fit in memory.
pub fn rewrite_file(
    path: &Path,
    old: IndentWidth,
    new: IndentWidth,
) -> Result<RewriteSummary, ReindentError> {
    debug!(
        path = %normalize_display_path(path),
        old_width = old.get(),
        new_width = new.get(),
        "rewriting indentation"
    );

    let rewritten = read_rewritten(path, old, new)?;
    write_lines(path, &rewritten.lines)?;

    debug!(
        path = %normalize_display_path(path),
        lines = rewritten.lines.len(),
        changed = rewritten.changed,
        "rewrote file"
    );

    Ok(RewriteSummary {
        path: path.to_path_buf(),
        lines: rewritten.lines.len(),
        changed: rewritten.changed,
        misaligned: rewritten.misaligned,
    })
}

/// Read phase. The read handle is dropped when this returns.
fn read_rewritten(
    path: &Path,
    old: IndentWidth,
    new: IndentWidth,
) -> Result<Rewritten, ReindentError> {
    let file = File::open(path).map_err(|e| ReindentError::access(path, e))?;
    let mut rewritten = Rewritten::default();

    for (index, line) in Lines::new(BufReader::new(file)).enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|e| ReindentError::from_read(path, line_number, e))?;

        let measure = measure_indent(&line, old);
        if measure.is_misaligned() {
            warn!(
                path = %normalize_display_path(path),
                line = line_number,
                leading = measure.leading,
                old_width = old.get(),
                "indentation is not a multiple of the old width, truncating to {} level(s)",
                measure.depth
            );
            rewritten.misaligned.push(line_number);
        }

        let new_line = try_rewrite_line(&line, old, new).ok_or_else(|| {
            ReindentError::IndentTooLarge {
                path: path.to_path_buf(),
                line: line_number,
            }
        })?;
        if new_line != line {
            rewritten.changed += 1;
        }
        rewritten.lines.push(new_line);
    }

    Ok(rewritten)
}

/// Write phase: truncate, then write every line in order.
fn write_lines(path: &Path, lines: &[String]) -> Result<(), ReindentError> {
    let file = File::create(path).map_err(|e| ReindentError::access(path, e))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer
            .write_all(line.as_bytes())
            .map_err(|e| ReindentError::access(path, e))?;
    }
    writer.flush().map_err(|e| ReindentError::access(path, e))
}
