//! ast-grep wrapper: parsing Go sources and grouping them into packages.

use std::path::{Path, PathBuf};

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_core::{Doc, Node};
use ast_grep_language::SupportLang;

use crate::error::ParserError;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Whether `path` names a Go source file.
#[must_use]
pub fn is_go_source(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "go")
}

/// Whether `path` names a Go test file (`*_test.go`).
#[must_use]
pub fn is_go_test_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with("_test.go"))
}

/// Parse Go source code into an ast-grep tree.
#[must_use]
pub fn parse_source(source: &str) -> AstTree {
    use ast_grep_language::LanguageExt;
    SupportLang::Go.ast_grep(source)
}

/// One parsed Go file.
pub struct ParsedFile {
    pub path: PathBuf,
    pub tree: AstTree,
}

impl ParsedFile {
    /// Parse `source`, rejecting trees that contain parser error nodes.
    ///
    /// # Errors
    /// Returns `ParserError::ParseFailed` pointing at the first error node.
    pub fn parse(path: impl Into<PathBuf>, source: &str) -> Result<Self, ParserError> {
        let path = path.into();
        let tree = parse_source(source);
        if let Some((line, message)) = first_error(&tree.root()) {
            return Err(ParserError::ParseFailed {
                path: path.display().to_string(),
                line,
                message,
            });
        }
        Ok(Self { path, tree })
    }

    /// Name from the file's `package` clause.
    #[must_use]
    pub fn package_name(&self) -> Option<String> {
        self.tree
            .root()
            .children()
            .find(|c| c.kind().as_ref() == "package_clause")?
            .children()
            .find(|c| c.kind().as_ref() == "package_identifier")
            .map(|n| n.text().to_string())
    }
}

impl std::fmt::Debug for ParsedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedFile")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// The files of one Go package, in the order they are walked.
#[derive(Debug)]
pub struct ParsedPackage {
    pub name: String,
    pub files: Vec<ParsedFile>,
}

impl ParsedPackage {
    /// A package consisting of a single file, named by its package clause.
    ///
    /// # Errors
    /// Returns `ParserError::MissingPackageClause` when the file has none.
    pub fn from_file(file: ParsedFile) -> Result<Self, ParserError> {
        let name = file
            .package_name()
            .ok_or_else(|| ParserError::MissingPackageClause {
                path: file.path.display().to_string(),
            })?;
        Ok(Self {
            name,
            files: vec![file],
        })
    }
}

/// 1-based line and description of the first `ERROR` node or zero-width
/// `MISSING` token the parser inserted to recover, depth first.
fn first_error<D: Doc>(node: &Node<D>) -> Option<(usize, String)> {
    let line = node.start_pos().line() + 1;
    if node.is_missing() {
        return Some((line, format!("missing `{}`", node.kind())));
    }
    if node.is_error() {
        return Some((line, format!("unexpected `{}`", first_line(&node.text()))));
    }
    node.children().find_map(|child| first_error(&child))
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default().trim()
}
