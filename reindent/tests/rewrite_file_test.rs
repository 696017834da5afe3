//! Tests for whole-file rewriting through the public library API.
#![allow(clippy::unwrap_used)]

use reindent::{rewrite_file, rewrite_line, rewrite_source, IndentWidth, ReindentError};
use std::fs;
use tempfile::TempDir;

fn width(n: usize) -> IndentWidth {
    IndentWidth::new(n).unwrap()
}

const NESTED: &str = "\
fn main() {
  if ready {
    go();
  }

  done();
}
";

// =============================================================================
// Line and order invariants
// =============================================================================

#[test]
fn test_five_lines_in_five_lines_out_in_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("five.txt");
    fs::write(&path, "one\n  two\n    three\n  four\nfive\n").unwrap();

    let summary = rewrite_file(&path, width(2), width(3)).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(summary.lines, 5);
    assert_eq!(
        lines,
        vec!["one", "   two", "      three", "   four", "five"]
    );
}

#[test]
fn test_line_count_preserved_with_blank_and_unterminated_lines() {
    let input = "a\n \n\n  b\n\t\n  c";
    let output = rewrite_source(input, width(2), width(8));
    assert_eq!(
        output.split_inclusive('\n').count(),
        input.split_inclusive('\n').count()
    );
}

#[test]
fn test_nested_block_doubles() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("main.rs");
    fs::write(&path, NESTED).unwrap();

    rewrite_file(&path, width(2), width(4)).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "fn main() {\n    if ready {\n        go();\n    }\n\n    done();\n}\n"
    );
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_every_line_matches_floor_formula() {
    let input = "x\n y\n  z\n\t\u{3000} w\n    v\n \u{a0}\u{2003}\t u\n";
    let (old, new) = (width(2), width(3));
    for line in input.split_inclusive('\n') {
        let content = line.trim_start();
        let leading = line[..line.len() - content.len()].chars().count();
        let expected = format!("{}{}", " ".repeat(leading / 2 * 3), content);
        assert_eq!(rewrite_line(line, old, new), expected);
    }
}

#[test]
fn test_second_pass_with_equal_widths_is_noop() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("twice.txt");
    fs::write(&path, "a\n   b\n\t\tc\n  \n      d").unwrap();

    rewrite_file(&path, width(2), width(4)).unwrap();
    let first = fs::read_to_string(&path).unwrap();

    let summary = rewrite_file(&path, width(4), width(4)).unwrap();
    let second = fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
    assert_eq!(summary.changed, 0);
    assert!(summary.misaligned.is_empty());
}

#[test]
fn test_rewrite_source_and_rewrite_file_agree() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("agree.txt");
    let input = "top\n   odd\n\tx\r\n    \n  tail";
    fs::write(&path, input).unwrap();

    rewrite_file(&path, width(2), width(5)).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        rewrite_source(input, width(2), width(5))
    );
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.txt");

    let err = rewrite_file(&path, width(2), width(4)).unwrap_err();

    assert!(matches!(err, ReindentError::Access { .. }));
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn test_directory_is_access_error() {
    let dir = TempDir::new().unwrap();
    let err = rewrite_file(dir.path(), width(2), width(4)).unwrap_err();
    assert!(matches!(err, ReindentError::Access { .. }));
}
