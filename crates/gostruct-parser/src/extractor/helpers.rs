//! Small node accessors shared by the resolver and the binder.

use ast_grep_core::{Doc, Node};

use crate::error::ParserError;

/// 1-based line of the node's first character.
pub(super) fn line_of<D: Doc>(node: &Node<D>) -> usize {
    node.start_pos().line() + 1
}

/// A named field the grammar guarantees; its absence means the tree is not
/// what a conforming parser produces.
pub(super) fn expect_field<'r, D: Doc>(
    node: &Node<'r, D>,
    field: &str,
) -> Result<Node<'r, D>, ParserError> {
    node.field(field)
        .ok_or_else(|| ParserError::MalformedDeclaration {
            line: line_of(node),
            reason: format!("`{}` node has no `{field}`", node.kind()),
        })
}

/// Direct children of the given kind, in source order.
pub(super) fn children_of_kind<'r, D: Doc>(node: &Node<'r, D>, kind: &str) -> Vec<Node<'r, D>> {
    node.children()
        .filter(|c| c.kind().as_ref() == kind)
        .collect()
}

/// Text of every direct `identifier` child: the declared names of a
/// parameter, constant or variable spec.
pub(super) fn declared_names<D: Doc>(node: &Node<D>) -> Vec<String> {
    children_of_kind(node, "identifier")
        .iter()
        .map(|n| n.text().to_string())
        .collect()
}

/// Strip string literal delimiters: backticks or double quotes.
pub(super) fn unquote(literal: &str) -> String {
    literal
        .strip_prefix('`')
        .and_then(|s| s.strip_suffix('`'))
        .or_else(|| literal.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
        .unwrap_or(literal)
        .to_string()
}

/// Nodes that never carry a value: punctuation and comments.
pub(super) fn is_separator(kind: &str) -> bool {
    matches!(kind, "," | "(" | ")" | "[" | "]" | "comment")
}
