//! Whole-file indentation rewriting.
//!
//! Files are read completely and transformed in memory, then truncated and
//! written back. See [`rewrite_file`].

mod lines;
mod rewriter;

pub use lines::Lines;
pub use rewriter::{rewrite_file, rewrite_source, RewriteSummary};
