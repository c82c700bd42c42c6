//! Result presentation for fixed-width terminals.

use crate::textutil::{visible_width, wrap_words};
use std::io::{self, Write};

/// Width of the `=` rules framing the banner and the result.
pub const RULE_WIDTH: usize = 60;

/// Lines at or under `width` characters pass through untouched; longer ones
/// are re-wrapped on word boundaries, keeping their indentation and inner
/// spacing (see [`wrap_words`]).
pub fn format_result(result: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in result.lines() {
        if visible_width(line) <= width {
            out.push(line.to_string());
        } else {
            out.extend(wrap_words(line, width));
        }
    }
    out
}

/// Write the framed analysis result.
pub fn write_result<W: Write>(out: &mut W, result: &str, width: usize) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "  ANALYSIS RESULT")?;
    writeln!(out, "{rule}\n")?;
    for line in format_result(result, width) {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "\n{rule}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words_line(len: usize) -> String {
        // "aaaa bbbb ..." padded with `x` to exactly `len` characters.
        let mut line = String::new();
        let mut next = b'a';
        while line.len() + 5 <= len {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&(next as char).to_string().repeat(4));
            next = if next == b'z' { b'a' } else { next + 1 };
        }
        while line.len() < len {
            line.push('x');
        }
        line
    }

    #[test]
    fn line_of_exactly_width_is_unchanged() {
        let line = words_line(100);
        assert_eq!(line.len(), 100);
        assert_eq!(format_result(&line, 100), vec![line]);
    }

    #[test]
    fn line_over_width_is_rewrapped_preserving_words() {
        let line = words_line(101);
        assert_eq!(line.len(), 101);
        let rows = format_result(&line, 100);
        assert!(rows.len() > 1, "expected re-wrap, got {rows:?}");
        assert!(rows.iter().all(|row| row.chars().count() <= 100));
        let original: Vec<&str> = line.split_whitespace().collect();
        let rewrapped: Vec<&str> = rows.iter().flat_map(|r| r.split_whitespace()).collect();
        assert_eq!(original, rewrapped);
    }

    #[test]
    fn nested_bullet_keeps_its_indent_when_rewrapped() {
        let line = format!("    - {}", ["word"; 25].join(" "));
        assert!(line.len() > 100);
        let rows = format_result(&format!("- top\n{line}"), 100);
        assert_eq!(rows[0], "- top");
        assert!(rows[1].starts_with("    - word word"), "got {rows:?}");
        assert!(rows.iter().all(|row| row.chars().count() <= 100));
        let words: Vec<&str> = rows[1..].iter().flat_map(|r| r.split_whitespace()).collect();
        assert_eq!(words, line.split_whitespace().collect::<Vec<_>>());
    }

    #[test]
    fn rewrapped_line_keeps_double_spaces() {
        let line = format!("a  b {}", "c".repeat(120));
        let rows = format_result(&line, 100);
        assert_eq!(rows[0], format!("a  b {}", "c".repeat(95)));
        assert_eq!(rows[1], "c".repeat(25));
    }

    #[test]
    fn short_lines_keep_their_spacing() {
        let text = "### 1. CORE EMOTION\n\n>   **Core emotion:** 100 - Fear";
        assert_eq!(
            format_result(text, 100),
            vec![
                "### 1. CORE EMOTION",
                "",
                ">   **Core emotion:** 100 - Fear"
            ]
        );
    }

    #[test]
    fn write_result_frames_the_text() {
        let mut out = Vec::new();
        write_result(&mut out, "body line", 100).unwrap();
        let text = String::from_utf8(out).unwrap();
        let rule = "=".repeat(RULE_WIDTH);
        assert_eq!(
            text,
            format!("\n{rule}\n  ANALYSIS RESULT\n{rule}\n\nbody line\n\n{rule}\n")
        );
    }
}
