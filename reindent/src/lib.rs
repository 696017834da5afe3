//! Core library for the `reindent` indentation rewriter.
//!
//! The library rewrites leading whitespace from one indentation width to
//! another, either for a single line ([`rewrite_line`]), an in-memory string
//! ([`rewrite_source`]), or a file in place ([`rewrite_file`]).

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

/// Module defining the command-line interface arguments.
pub mod cli;

/// Module containing shared constants.
pub mod constants;

/// Module defining the entry point logic shared by all binaries.
pub mod entry_point;

/// Module defining the error type.
pub mod error;

/// Module for measuring and rewriting the indentation of a single line.
pub mod indent;

/// Module for logging setup.
pub mod logging;

/// Module for terminal output.
pub mod output;

/// Module for rewriting whole files.
pub mod rewrite;

/// Module containing utility functions.
pub mod utils;

pub use error::ReindentError;
pub use indent::{measure_indent, rewrite_line, try_rewrite_line, IndentMeasure, IndentWidth};
pub use rewrite::{rewrite_file, rewrite_source, RewriteSummary};
