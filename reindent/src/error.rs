//! Error types for indentation rewriting.

use std::io;
use std::path::{Path, PathBuf};

/// Errors that stop a rewrite.
///
/// Misaligned indentation is deliberately absent: it is normalized, not rejected.
#[derive(Debug, thiserror::Error)]
pub enum ReindentError {
    /// The target file could not be opened, read, created, or written.
    #[error("cannot access {}: {source}", .path.display())]
    Access {
        /// File that was being accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// An indentation width was zero, negative, or not a number.
    #[error("invalid indentation width '{value}': {reason}")]
    InvalidWidth {
        /// The rejected input, as given.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The target file is not UTF-8 text.
    #[error("{} is not valid UTF-8 text (line {line})", .path.display())]
    NotUtf8 {
        /// File that was being read.
        path: PathBuf,
        /// 1-based line on which decoding failed.
        line: usize,
    },

    /// A line's rewritten indentation does not fit in memory.
    #[error("{}: rewritten indentation on line {line} is too large", .path.display())]
    IndentTooLarge {
        /// File that was being rewritten.
        path: PathBuf,
        /// 1-based line that could not be rewritten.
        line: usize,
    },
}

impl ReindentError {
    pub(crate) fn access(path: &Path, source: io::Error) -> Self {
        Self::Access {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Classifies a failure hit while reading `line` of `path`.
    ///
    /// `BufRead::read_line` reports undecodable bytes as `InvalidData`.
    pub(crate) fn from_read(path: &Path, line: usize, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::InvalidData {
            Self::NotUtf8 {
                path: path.to_path_buf(),
                line,
            }
        } else {
            Self::access(path, source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_access_error_display_and_source() {
        let err = ReindentError::access(
            Path::new("/tmp/missing.txt"),
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        let display = err.to_string();
        assert!(display.contains("/tmp/missing.txt"));
        assert!(display.contains("not found"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_width_display() {
        let err = ReindentError::InvalidWidth {
            value: "0".to_owned(),
            reason: "must be greater than zero",
        };
        assert_eq!(
            err.to_string(),
            "invalid indentation width '0': must be greater than zero"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_indent_too_large_display() {
        let err = ReindentError::IndentTooLarge {
            path: PathBuf::from("deep.txt"),
            line: 4,
        };
        assert_eq!(
            err.to_string(),
            "deep.txt: rewritten indentation on line 4 is too large"
        );
    }

    #[test]
    fn test_read_error_invalid_data_is_not_utf8() {
        let err = ReindentError::from_read(
            Path::new("data.bin"),
            3,
            io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        );
        match err {
            ReindentError::NotUtf8 { path, line } => {
                assert_eq!(path, PathBuf::from("data.bin"));
                assert_eq!(line, 3);
            }
            other => panic!("Expected NotUtf8, got {other:?}"),
        }
    }

    #[test]
    fn test_read_error_other_kind_is_access() {
        let err = ReindentError::from_read(
            Path::new("data.txt"),
            1,
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, ReindentError::Access { .. }));
    }
}
