//! Source loading: Go files and directories → parsed packages.
//!
//! Directory discovery uses the `ignore` crate, so `.gitignore` rules apply
//! unless disabled. Names starting with `.` or `_` and `testdata`
//! directories are skipped, matching what the Go toolchain builds.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;

use crate::error::ParserError;
use crate::extractor::{ExtractOptions, extract};
use crate::parser::{ParsedFile, ParsedPackage, is_go_source, is_go_test_file};
use crate::types::Output;

/// Caller-supplied predicate deciding whether a discovered file is parsed.
pub type FileFilter = Arc<dyn Fn(&Path) -> bool + Send + Sync>;

/// How a directory is turned into packages.
#[derive(Clone)]
pub struct LoadOptions {
    /// Descend into sub-directories; each directory forms its own packages.
    pub recursive: bool,
    /// Keep `_test.go` files.
    pub include_tests: bool,
    /// Apply `.gitignore`, `.ignore` and global git excludes.
    pub respect_gitignore: bool,
    /// Glob patterns, relative to the walk root, that are never parsed.
    pub exclude: Vec<String>,
    pub filter: Option<FileFilter>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            recursive: false,
            include_tests: true,
            respect_gitignore: true,
            exclude: Vec::new(),
            filter: None,
        }
    }
}

impl LoadOptions {
    /// Only parse files for which `filter` returns true.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Fn(&Path) -> bool + Send + Sync + 'static) -> Self {
        self.filter = Some(Arc::new(filter));
        self
    }
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("recursive", &self.recursive)
            .field("include_tests", &self.include_tests)
            .field("respect_gitignore", &self.respect_gitignore)
            .field("exclude", &self.exclude)
            .field("filter", &self.filter.is_some())
            .finish()
    }
}

/// Parse a Go file or directory into packages.
///
/// A regular file becomes a one-file package regardless of the filters.
/// Directory files are grouped by (directory, package clause), so an
/// external `_test` package sits next to the package it tests. Packages are
/// ordered by directory then name, files by path.
///
/// # Errors
/// `Io` for unreadable paths, `Walk` for traversal or glob failures, and any
/// parse error of a discovered file.
pub fn parse_path(path: &Path, options: &LoadOptions) -> Result<Vec<ParsedPackage>, ParserError> {
    let metadata = fs::metadata(path).map_err(|source| ParserError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.is_file() {
        return Ok(vec![ParsedPackage::from_file(parse_file(path)?)?]);
    }

    let mut groups: BTreeMap<(PathBuf, String), Vec<ParsedFile>> = BTreeMap::new();
    for source_path in collect_sources(path, options)? {
        let file = parse_file(&source_path)?;
        let name = file
            .package_name()
            .ok_or_else(|| ParserError::MissingPackageClause {
                path: source_path.display().to_string(),
            })?;
        let dir = source_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        groups.entry((dir, name)).or_default().push(file);
    }

    tracing::debug!(root = %path.display(), packages = groups.len(), "loaded go packages");
    Ok(groups
        .into_iter()
        .map(|((_, name), files)| ParsedPackage { name, files })
        .collect())
}

/// [`parse_path`] followed by [`extract`].
///
/// # Errors
/// Any loading or extraction failure.
pub fn extract_path(
    path: &Path,
    load: &LoadOptions,
    options: &ExtractOptions,
) -> Result<Output, ParserError> {
    let packages = parse_path(path, load)?;
    extract(&packages, options)
}

fn parse_file(path: &Path) -> Result<ParsedFile, ParserError> {
    let source = fs::read_to_string(path).map_err(|source| ParserError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ParsedFile::parse(path, &source)
}

/// Names the Go toolchain never builds.
fn is_skipped_name(name: &str, is_dir: bool) -> bool {
    name.starts_with('.') || name.starts_with('_') || (is_dir && name == "testdata")
}

fn collect_sources(root: &Path, options: &LoadOptions) -> Result<Vec<PathBuf>, ParserError> {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(options.respect_gitignore)
        .hidden(false)
        .require_git(false);
    if !options.recursive {
        builder.max_depth(Some(1));
    }
    if !options.exclude.is_empty() {
        let mut overrides = OverrideBuilder::new(root);
        for glob in &options.exclude {
            overrides.add(&format!("!{glob}"))?;
        }
        builder.overrides(overrides.build()?);
    }
    builder.filter_entry(|entry| {
        entry.depth() == 0
            || !is_skipped_name(
                &entry.file_name().to_string_lossy(),
                entry.file_type().is_some_and(|ft| ft.is_dir()),
            )
    });

    let mut paths = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_some_and(|ft| ft.is_file()) || !is_go_source(path) {
            continue;
        }
        if !options.include_tests && is_go_test_file(path) {
            tracing::trace!(path = %path.display(), "skipping test file");
            continue;
        }
        if options.filter.as_ref().is_some_and(|keep| !(**keep)(path)) {
            tracing::trace!(path = %path.display(), "filtered out");
            continue;
        }
        paths.push(path.to_path_buf());
    }
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("mkdir should succeed");
        }
        fs::write(path, content).expect("write should succeed");
    }

    fn create_fixture(root: &Path) {
        write(root, "a.go", "package shop\n\ntype Cart struct{}\n");
        write(root, "b.go", "package shop\n\nfunc (c *Cart) Total() int { return 0 }\n");
        write(root, "b_test.go", "package shop\n\ntype cartFixture struct{}\n");
        write(root, "ext_test.go", "package shop_test\n\ntype External struct{}\n");
        write(root, "README.md", "# shop\n");
        write(root, "_draft.go", "package shop\n\ntype Draft struct{}\n");
        write(root, ".hidden.go", "package shop\n\ntype Hidden struct{}\n");
        write(root, "billing/invoice.go", "package billing\n\ntype Invoice struct{}\n");
        write(root, "testdata/sample.go", "package sample\n\ntype Sample struct{}\n");
        write(root, "generated/gen.go", "package generated\n\ntype Gen struct{}\n");
    }

    fn package_names(packages: &[ParsedPackage]) -> Vec<&str> {
        packages.iter().map(|p| p.name.as_str()).collect()
    }

    fn file_names(package: &ParsedPackage) -> Vec<String> {
        package
            .files
            .iter()
            .filter_map(|f| f.path.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn directory_groups_files_by_package_clause() {
        let tmp = tempfile::tempdir().expect("tempdir");
        create_fixture(tmp.path());

        let packages = parse_path(tmp.path(), &LoadOptions::default()).expect("load");
        assert_eq!(package_names(&packages), vec!["shop", "shop_test"]);
        assert_eq!(file_names(&packages[0]), vec!["a.go", "b.go", "b_test.go"]);
    }

    #[test]
    fn test_files_can_be_excluded() {
        let tmp = tempfile::tempdir().expect("tempdir");
        create_fixture(tmp.path());

        let options = LoadOptions {
            include_tests: false,
            ..Default::default()
        };
        let packages = parse_path(tmp.path(), &options).expect("load");
        assert_eq!(package_names(&packages), vec!["shop"]);
        assert_eq!(file_names(&packages[0]), vec!["a.go", "b.go"]);
    }

    #[test]
    fn recursive_walk_skips_testdata_and_underscore_names() {
        let tmp = tempfile::tempdir().expect("tempdir");
        create_fixture(tmp.path());

        let options = LoadOptions {
            recursive: true,
            ..Default::default()
        };
        let packages = parse_path(tmp.path(), &options).expect("load");
        assert_eq!(
            package_names(&packages),
            vec!["shop", "shop_test", "billing", "generated"]
        );
    }

    #[test]
    fn exclude_globs_remove_paths() {
        let tmp = tempfile::tempdir().expect("tempdir");
        create_fixture(tmp.path());

        let options = LoadOptions {
            recursive: true,
            exclude: vec!["generated/".to_string(), "*_test.go".to_string()],
            ..Default::default()
        };
        let packages = parse_path(tmp.path(), &options).expect("load");
        assert_eq!(package_names(&packages), vec!["shop", "billing"]);
    }

    #[test]
    fn gitignore_is_respected_unless_disabled() {
        let tmp = tempfile::tempdir().expect("tempdir");
        create_fixture(tmp.path());
        write(tmp.path(), ".gitignore", "billing/\n");

        let options = LoadOptions {
            recursive: true,
            ..Default::default()
        };
        let packages = parse_path(tmp.path(), &options).expect("load");
        assert!(!package_names(&packages).contains(&"billing"));

        let options = LoadOptions {
            recursive: true,
            respect_gitignore: false,
            ..Default::default()
        };
        let packages = parse_path(tmp.path(), &options).expect("load");
        assert!(package_names(&packages).contains(&"billing"));
    }

    #[test]
    fn custom_filter_is_applied() {
        let tmp = tempfile::tempdir().expect("tempdir");
        create_fixture(tmp.path());

        let options = LoadOptions::default()
            .with_filter(|path| path.file_name().is_some_and(|name| name != "b.go"));
        let packages = parse_path(tmp.path(), &options).expect("load");
        assert_eq!(file_names(&packages[0]), vec!["a.go", "b_test.go"]);
    }

    #[test]
    fn single_file_path_is_one_package() {
        let tmp = tempfile::tempdir().expect("tempdir");
        create_fixture(tmp.path());

        let packages =
            parse_path(&tmp.path().join("billing/invoice.go"), &LoadOptions::default())
                .expect("load");
        assert_eq!(package_names(&packages), vec!["billing"]);
    }

    #[test]
    fn missing_path_is_io_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let err = parse_path(&tmp.path().join("absent"), &LoadOptions::default())
            .expect_err("missing path");
        assert!(matches!(err, ParserError::Io { .. }), "{err}");
    }

    #[test]
    fn broken_file_aborts_loading() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write(tmp.path(), "ok.go", "package shop\n");
        write(tmp.path(), "broken.go", "package shop\n\n@@@\n");
        let err = parse_path(tmp.path(), &LoadOptions::default()).expect_err("broken");
        assert!(matches!(err, ParserError::ParseFailed { .. }), "{err}");
    }

    #[test]
    fn extract_path_binds_methods_across_files() {
        let tmp = tempfile::tempdir().expect("tempdir");
        create_fixture(tmp.path());

        let output = extract_path(
            tmp.path(),
            &LoadOptions::default(),
            &ExtractOptions::default(),
        )
        .expect("extract");
        let shop = output.package("shop").expect("shop package");
        let cart = shop
            .structs
            .iter()
            .find(|s| s.name == "Cart")
            .expect("Cart struct");
        assert_eq!(cart.methods.len(), 1);
        assert_eq!(cart.methods[0].signature, "Total() (int)");
    }
}
