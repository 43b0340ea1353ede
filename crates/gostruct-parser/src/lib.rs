//! # gostruct-parser
//!
//! ast-grep-based extraction of Go declarations into a serializable package
//! model.
//!
//! Go sources are parsed with the tree-sitter Go grammar, then each package
//! is walked to produce structs with their fields and bound methods,
//! interfaces, free functions, package-level variables and constants, and
//! imports:
//!
//! - [`extract`] / [`extract_single`]: the pure core over parsed trees.
//! - [`parse_path`] / [`extract_path`]: directory loading on top of it.
//! - [`PackageIndex`]: by-name lookups over an extracted package.

pub mod error;
pub mod extractor;
pub mod index;
pub mod loader;
pub mod parser;
pub mod types;

pub use error::ParserError;
pub use extractor::docs::{clean_block, clean_line};
pub use extractor::resolve::{ChanDir, TypeRef, TypeShape};
pub use extractor::{ExtractOptions, extract, extract_single};
pub use index::{PackageIndex, StructIndex};
pub use loader::{FileFilter, LoadOptions, extract_path, parse_path};
pub use parser::{AstTree, ParsedFile, ParsedPackage, parse_source};
pub use types::{
    Constant, Field, Function, Interface, Method, Output, Package, Param, Struct, Variable,
};
