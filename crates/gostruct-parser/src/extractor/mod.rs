//! Declaration extraction: parsed Go packages → [`Output`].
//!
//! Each file is bound independently (`binder`), then the per-file records of
//! a package are merged and methods are attached to their structs
//! (`assemble`). Any resolution failure aborts the whole call.

mod assemble;
mod binder;
pub mod docs;
mod helpers;
pub mod resolve;

use crate::error::ParserError;
use crate::parser::{ParsedFile, ParsedPackage};
use crate::types::Output;

use binder::{FileDeclarations, bind_file};

/// Knobs for one extraction call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Capture function and method bodies as raw source text.
    pub include_bodies: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            include_bodies: true,
        }
    }
}

// ── Entry points ──────────────────────────────────────────────────

/// Extract every package, in the order given.
///
/// # Errors
/// Returns the first fatal `ParserError`; no partial output is produced.
pub fn extract(
    packages: &[ParsedPackage],
    options: &ExtractOptions,
) -> Result<Output, ParserError> {
    let mut output = Output::default();
    for package in packages {
        let mut decls = FileDeclarations::default();
        for file in &package.files {
            tracing::trace!(package = %package.name, path = %file.path.display(), "binding file");
            decls.absorb(bind_file(&file.tree.root(), options)?);
        }
        output.packages.push(assemble::assemble(&package.name, decls));
    }
    Ok(output)
}

/// Parse one source text and extract it as a single package.
///
/// # Errors
/// `ParseFailed` or `MissingPackageClause` for unusable input, otherwise as
/// [`extract`].
pub fn extract_single(source: &str) -> Result<Output, ParserError> {
    let file = ParsedFile::parse("<source>", source)?;
    let package = ParsedPackage::from_file(file)?;
    extract(&[package], &ExtractOptions::default())
}

#[cfg(test)]
mod tests;
