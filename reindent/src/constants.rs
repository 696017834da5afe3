//! Shared constants.

/// Program name used for argument parsing and help output.
pub const PROGRAM_NAME: &str = "reindent";

/// What every whitespace-only line becomes.
pub const BLANK_LINE: &str = "\n";

/// Widest accepted indentation level, in characters.
pub const MAX_INDENT_WIDTH: usize = 256;

/// Log filter when neither `--verbose` nor `RUST_LOG` is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter for `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "debug";
