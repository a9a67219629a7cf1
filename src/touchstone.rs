//! Port-declaration rewriting over a terminator-preserving line model
//!
//! Touchstone headers carry comment lines of the form `! Port[<k>] = <label>`.
//! Only those lines are rewritten; every other line passes through
//! byte-for-byte, including its original terminator (`\n`, `\r\n`, or none
//! on the final line). No full touchstone grammar is needed for this.

use std::path::Path;

use crate::error::{RenameError, Result};

/// Marker that identifies a port-declaration comment after trimming.
pub const PORT_MARKER: &str = "! Port[";

/// One physical line: content without its terminator, plus the terminator
/// itself (empty on an unterminated final line).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub content: &'a str,
    pub terminator: &'a str,
}

/// Split text into lines, keeping each line's original terminator.
pub fn split_lines(text: &str) -> Vec<Line<'_>> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;

    for i in 0..bytes.len() {
        if bytes[i] == b'\n' {
            let term_start = if i > start && bytes[i - 1] == b'\r' {
                i - 1
            } else {
                i
            };
            lines.push(Line {
                content: &text[start..term_start],
                terminator: &text[term_start..=i],
            });
            start = i + 1;
        }
    }
    if start < bytes.len() {
        lines.push(Line {
            content: &text[start..],
            terminator: "",
        });
    }
    lines
}

/// Check whether a line is a port declaration.
pub fn is_port_declaration(content: &str) -> bool {
    content.trim().starts_with(PORT_MARKER)
}

/// Rewrite a port-declaration line with the case identifier.
///
/// Splits on the first `=` only, so labels that themselves contain `=`
/// survive intact. The left segment is kept verbatim including its
/// whitespace before `=`; the right segment is trimmed and prefixed.
/// Returns `None` when the line has no `=` delimiter.
pub fn rewrite_port_line(content: &str, case_id: &str) -> Option<String> {
    let (left, right) = content.split_once('=')?;
    Some(format!("{left}= {case_id}_{}", right.trim()))
}

/// Rewrite every port-declaration line in a file body, passing all other
/// lines through unchanged.
pub fn rewrite_contents(text: &str, case_id: &str, path: &Path) -> Result<String> {
    let mut out = String::with_capacity(text.len() + 64);

    for (index, line) in split_lines(text).iter().enumerate() {
        if is_port_declaration(line.content) {
            let rewritten =
                rewrite_port_line(line.content, case_id).ok_or_else(|| RenameError::Format {
                    path: path.to_path_buf(),
                    line: index + 1,
                })?;
            out.push_str(&rewritten);
        } else {
            out.push_str(line.content);
        }
        out.push_str(line.terminator);
    }

    Ok(out)
}
