//! Documentation normalizer.
//!
//! Turns raw comment text into clean lines and decides which comment
//! siblings form a node's leading doc group and which one is its trailing
//! comment. Grouping works purely on sibling order and row positions: a
//! comment belongs to the doc group only when nothing but other comments and
//! no blank line separate it from the node.

use ast_grep_core::{Doc, Node};

/// Strip one layer of comment markers from a single raw line.
///
/// A carriage return left over from CRLF input is dropped first. Then one
/// leading `// ` (preferred over a bare `//`) or `/*` is removed, then one
/// trailing `*/`, then surrounding spaces and newlines.
#[must_use]
pub fn clean_line(raw: &str) -> String {
    let raw = raw.trim_end_matches('\r');
    let body = raw
        .strip_prefix("// ")
        .or_else(|| raw.strip_prefix("//"))
        .or_else(|| raw.strip_prefix("/*"))
        .unwrap_or(raw);
    let body = body.strip_suffix("*/").unwrap_or(body);
    body.trim_matches(' ').trim_matches(['\n', '\r']).to_string()
}

/// Normalize a comment group into doc lines.
///
/// Every comment is split into its lines, each line is cleaned, and blank
/// lines at either end of the result are dropped. Blank lines in the middle
/// are kept as empty entries.
#[must_use]
pub fn clean_block<I, S>(comments: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines: Vec<String> = comments
        .into_iter()
        .flat_map(|comment| {
            comment
                .as_ref()
                .lines()
                .map(|line| clean_line(line.trim_start_matches('\t')))
                .collect::<Vec<_>>()
        })
        .collect();

    let Some(last) = lines.iter().rposition(|l| !l.is_empty()) else {
        return Vec::new();
    };
    lines.truncate(last + 1);
    let first = lines.iter().position(|l| !l.is_empty()).unwrap_or_default();
    lines.drain(..first);
    lines
}

// ── Grouping ──────────────────────────────────────────────────────

/// Statement terminators the grammar emits as their own sibling nodes.
fn is_terminator(kind: &str) -> bool {
    matches!(kind, "\n" | ";")
}

/// A comment that sits after code on the same row belongs to that code.
fn is_trailing<D: Doc>(comment: &Node<D>) -> bool {
    let row = comment.start_pos().line();
    let mut current = comment.prev();
    while let Some(sibling) = current {
        let kind = sibling.kind();
        if kind.as_ref() != "comment" && !is_terminator(&kind) {
            return sibling.end_pos().line() == row;
        }
        current = sibling.prev();
    }
    false
}

/// The contiguous comment siblings directly above `node`, in source order.
///
/// The walk stops at the first non-comment sibling, at a blank line, or at a
/// comment that trails code on its own row.
pub(super) fn leading_comments<'r, D: Doc>(node: &Node<'r, D>) -> Vec<Node<'r, D>> {
    let mut group = Vec::new();
    let mut first_row = node.start_pos().line();
    let mut current = node.prev();
    while let Some(sibling) = current {
        let kind = sibling.kind();
        if is_terminator(&kind) {
            current = sibling.prev();
            continue;
        }
        if kind.as_ref() != "comment"
            || sibling.end_pos().line() + 1 < first_row
            || is_trailing(&sibling)
        {
            break;
        }
        first_row = sibling.start_pos().line();
        current = sibling.prev();
        group.push(sibling);
    }
    group.reverse();
    group
}

/// Cleaned doc lines of the comment group directly above `node`.
pub(super) fn leading_docs<D: Doc>(node: &Node<D>) -> Vec<String> {
    clean_block(leading_comments(node).iter().map(|c| c.text()))
}

/// Comments starting on the row where `node` ends, cleaned and joined with
/// a space. Empty when there are none.
pub(super) fn trailing_comment<D: Doc>(node: &Node<D>) -> String {
    let row = node.end_pos().line();
    let mut parts = Vec::new();
    let mut current = node.next();
    while let Some(sibling) = current {
        if sibling.start_pos().line() != row {
            break;
        }
        let kind = sibling.kind();
        if kind.as_ref() == "comment" {
            let text = clean_block([sibling.text()]).join(" ");
            if !text.is_empty() {
                parts.push(text);
            }
        } else if !is_terminator(&kind) {
            break;
        }
        current = sibling.next();
    }
    parts.join(" ")
}
