//! Path display helpers.

use std::path::Path;

/// Normalizes a path for log and terminal output.
///
/// Backslashes become forward slashes, and a leading `./` (or `.\`) and the
/// Windows extended-length prefix are dropped.
///
/// ```
/// use std::path::Path;
/// use reindent::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new("./src/lib.rs")), "src/lib.rs");
/// assert_eq!(normalize_display_path(Path::new(".\\docs\\notes.txt")), "docs/notes.txt");
/// ```
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let normalized = raw.trim_start_matches(r"\\?\").replace('\\', "/");
    match normalized.strip_prefix("./") {
        Some(rest) => rest.to_owned(),
        None => normalized,
    }
}
