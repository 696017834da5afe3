//! Single-line indentation measurement and rewriting.
//!
//! Leading whitespace is counted in characters, so a tab is one unit and
//! multi-byte whitespace such as U+3000 counts once. Depth is the floor of
//! that count divided by the old width; any remainder is dropped.
//!
//! ```
//! use reindent::{rewrite_line, IndentWidth};
//!
//! let old = IndentWidth::new(2).unwrap();
//! let new = IndentWidth::new(4).unwrap();
//! assert_eq!(rewrite_line("  foo\n", old, new), "    foo\n");
//! ```

use std::fmt;
use std::num::{IntErrorKind, NonZeroUsize};
use std::str::FromStr;

use crate::constants::{BLANK_LINE, MAX_INDENT_WIDTH};
use crate::error::ReindentError;

/// Number of characters making up one indentation level.
///
/// Always between 1 and [`MAX_INDENT_WIDTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndentWidth(NonZeroUsize);

impl IndentWidth {
    /// Validates a width.
    ///
    /// # Errors
    ///
    /// Returns [`ReindentError::InvalidWidth`] when `width` is zero or larger
    /// than [`MAX_INDENT_WIDTH`].
    pub fn new(width: usize) -> Result<Self, ReindentError> {
        let invalid = |reason| ReindentError::InvalidWidth {
            value: width.to_string(),
            reason,
        };
        if width > MAX_INDENT_WIDTH {
            return Err(invalid(TOO_LARGE));
        }
        NonZeroUsize::new(width)
            .map(Self)
            .ok_or_else(|| invalid(NOT_POSITIVE))
    }

    /// The width as a plain integer.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl FromStr for IndentWidth {
    type Err = ReindentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| ReindentError::InvalidWidth {
            value: value.to_owned(),
            reason,
        };
        match value.parse::<usize>() {
            Ok(width) => Self::new(width).map_err(|e| match e {
                ReindentError::InvalidWidth { reason, .. } => invalid(reason),
                other => other,
            }),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err(invalid(TOO_LARGE)),
            // Distinguish "-4" from "four" so the message says what to fix.
            Err(_) if is_negative_integer(value) => Err(invalid(NOT_POSITIVE)),
            Err(_) => Err(invalid("not a whole number")),
        }
    }
}

const NOT_POSITIVE: &str = "must be greater than zero";
const TOO_LARGE: &str = "is too large (maximum 256)";

fn is_negative_integer(value: &str) -> bool {
    value
        .strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

impl fmt::Display for IndentWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Leading-whitespace measurement of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentMeasure {
    /// Whitespace characters before the content.
    pub leading: usize,
    /// Whole indentation levels in `leading`.
    pub depth: usize,
    /// Characters left over after `depth` whole levels.
    pub remainder: usize,
    /// The line holds nothing but whitespace.
    pub blank: bool,
}

impl IndentMeasure {
    /// A non-blank line whose indentation is not a whole number of levels.
    #[must_use]
    pub const fn is_misaligned(&self) -> bool {
        !self.blank && self.remainder != 0
    }

    /// Spaces needed for `depth` levels of `new` width, `None` on overflow.
    #[must_use]
    pub const fn rewritten_leading(&self, new: IndentWidth) -> Option<usize> {
        self.depth.checked_mul(new.get())
    }
}

/// Measures the leading whitespace of `line` in units of `old`.
#[must_use]
pub fn measure_indent(line: &str, old: IndentWidth) -> IndentMeasure {
    let content = line.trim_start();
    let leading = line[..line.len() - content.len()].chars().count();
    IndentMeasure {
        leading,
        depth: leading / old.get(),
        remainder: leading % old.get(),
        blank: content.is_empty(),
    }
}

/// Rewrites the indentation of a single line from `old` to `new` width.
///
/// Whitespace-only lines become a bare `"\n"`. Every other line gets
/// `depth * new` spaces followed by its content, terminator included.
///
/// Returns `None` if the new indentation cannot be represented or allocated.
#[must_use]
pub fn try_rewrite_line(line: &str, old: IndentWidth, new: IndentWidth) -> Option<String> {
    let measure = measure_indent(line, old);
    if measure.blank {
        return Some(BLANK_LINE.to_owned());
    }

    let content = line.trim_start();
    let leading = measure.rewritten_leading(new)?;
    let mut rewritten = String::new();
    rewritten
        .try_reserve_exact(leading.checked_add(content.len())?)
        .ok()?;
    rewritten.extend(std::iter::repeat_n(' ', leading));
    rewritten.push_str(content);
    Some(rewritten)
}

/// Rewrites the indentation of a single line from `old` to `new` width.
///
/// Same as [`try_rewrite_line`], except that a line whose new indentation
/// does not fit in memory is returned unchanged. [`crate::rewrite_file`]
/// rejects such lines before anything is written.
#[must_use]
pub fn rewrite_line(line: &str, old: IndentWidth, new: IndentWidth) -> String {
    try_rewrite_line(line, old, new).unwrap_or_else(|| line.to_owned())
}
