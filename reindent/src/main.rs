//! Main binary entry point for `reindent`.
//!
//! This binary delegates to the shared `entry_point::run_with_args()` function
//! so every binary behaves the same.

use anyhow::Result;

fn main() -> Result<()> {
    let code = reindent::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
