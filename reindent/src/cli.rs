use clap::Parser;
use std::path::PathBuf;

use crate::error::ReindentError;
use crate::indent::IndentWidth;

/// Extra text shown at the bottom of --help.
const AFTER_HELP: &str = "\
EXAMPLES:
  reindent src/app.py 2 4      Double the indentation of a 2-space file
  reindent notes.txt 1 4       Expand one tab (or space) per level to 4 spaces

The file is overwritten in place with no backup. Indentation that is not a
whole number of OLD_WIDTH levels is rounded down. Whitespace-only lines
become empty lines.
";

/// Command-line arguments for `reindent`.
#[derive(Parser, Debug)]
#[command(
    name = "reindent",
    version,
    about = "Rewrite a file's leading indentation from one width to another",
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Text file to rewrite in place.
    pub file: PathBuf,

    /// Characters per indentation level in the file now.
    #[arg(value_parser = parse_width, allow_negative_numbers = true)]
    pub old_width: IndentWidth,

    /// Characters per indentation level to write.
    #[arg(value_parser = parse_width, allow_negative_numbers = true)]
    pub new_width: IndentWidth,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_width(value: &str) -> Result<IndentWidth, ReindentError> {
    value.parse()
}
