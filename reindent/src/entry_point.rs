use crate::cli::Cli;
use crate::constants::PROGRAM_NAME;
use crate::logging::init_logging;
use crate::output::print_summary;
use crate::rewrite::rewrite_file;
use crate::utils::normalize_display_path;

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use tracing::debug;

/// Runs `reindent` with the given arguments (program name excluded).
///
/// # Errors
///
/// Returns an error only if writing the summary to stdout fails. Invalid
/// arguments and rewrite failures are reported on stderr and turned into
/// exit code 1.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run `reindent` with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn run_with_args_to<W: Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec![PROGRAM_NAME.to_owned()];
    program_args.extend(args);
    let cli = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    // Widths are validated here, before the file is opened.
                    eprint!("{e}");
                    return Ok(1);
                }
            }
        }
    };

    init_logging(cli.verbose);
    debug!(
        version = env!("CARGO_PKG_VERSION"),
        file = %normalize_display_path(&cli.file),
        "starting"
    );

    match rewrite_file(&cli.file, cli.old_width, cli.new_width) {
        Ok(summary) => {
            print_summary(writer, &summary)?;
            writer.flush()?;
            Ok(0)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            Ok(1)
        }
    }
}
