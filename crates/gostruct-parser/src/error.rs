//! Parser error types for gostruct-parser.

use std::path::PathBuf;

/// Errors that abort an extraction pass.
///
/// Every variant is fatal for the call that produced it: no partial package
/// output is returned once one of these is raised.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    /// A type node whose kind has no resolution rule.
    #[error("unsupported type shape `{kind}` at line {line}: {text}")]
    UnsupportedTypeShape {
        kind: String,
        text: String,
        line: usize,
    },

    /// A fixed-size array whose bound is not an integer literal.
    #[error("array length is not a literal at line {line}: {text}")]
    MalformedArrayLength { text: String, line: usize },

    /// The syntax tree does not have the shape a conforming parser produces.
    #[error("malformed declaration at line {line}: {reason}")]
    MalformedDeclaration { line: usize, reason: String },

    #[error("parse failed for {path} at line {line}: {message}")]
    ParseFailed {
        path: String,
        line: usize,
        message: String,
    },

    #[error("no package clause in {path}")]
    MissingPackageClause { path: String },

    #[error("IO error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("walk failed: {0}")]
    Walk(#[from] ignore::Error),
}
