//! Terminator-preserving line iteration.
//!
//! `BufRead::lines` strips `\n` and `\r\n`, which would lose the original
//! terminators. [`Lines`] keeps them, so concatenating its output reproduces
//! the input byte for byte.

use std::io::{self, BufRead};

/// Single-pass iterator over the lines of a reader, terminators included.
///
/// The final line is yielded without a terminator if the input does not end
/// in one. Iteration stops after the first error.
#[derive(Debug)]
pub struct Lines<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> Lines<R> {
    /// Wraps `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => Some(Ok(line)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for Lines<R> {}
