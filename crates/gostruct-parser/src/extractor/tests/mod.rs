use pretty_assertions::assert_eq;

use super::*;
pub(super) use crate::types::{Field, Function, Interface, Method, Package, Param, Struct};

mod constants_vars;

const INVENTORY: &str = include_str!("../../../tests/fixtures/inventory.go");
const API: &str = include_str!("../../../tests/fixtures/api.go");

fn parse_and_extract(source: &str) -> Package {
    let mut output = extract_single(source).expect("extraction should succeed");
    assert_eq!(output.packages.len(), 1);
    output.packages.remove(0)
}

/// Both fixture files as one package, in path order.
fn fixture_package() -> Package {
    let files = vec![
        ParsedFile::parse("api.go", API).expect("api.go parses"),
        ParsedFile::parse("inventory.go", INVENTORY).expect("inventory.go parses"),
    ];
    let package = ParsedPackage {
        name: "inventory".to_string(),
        files,
    };
    let mut output = extract(&[package], &ExtractOptions::default()).expect("extraction");
    output.packages.remove(0)
}

fn find_struct<'a>(package: &'a Package, name: &str) -> &'a Struct {
    package
        .structs
        .iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("should find struct named '{name}'"))
}

fn find_field<'a>(record: &'a Struct, name: &str) -> &'a Field {
    record
        .fields
        .iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| panic!("should find field named '{name}' in '{}'", record.name))
}

fn find_function<'a>(package: &'a Package, name: &str) -> &'a Function {
    package
        .functions
        .iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| panic!("should find function named '{name}'"))
}

fn find_interface<'a>(package: &'a Package, name: &str) -> &'a Interface {
    package
        .interfaces
        .iter()
        .find(|i| i.name == name)
        .unwrap_or_else(|| panic!("should find interface named '{name}'"))
}

fn find_method<'a>(methods: &'a [Method], name: &str) -> &'a Method {
    methods
        .iter()
        .find(|m| m.name == name)
        .unwrap_or_else(|| panic!("should find method named '{name}'"))
}

// ── Whole-package shape ────────────────────────────────────────

#[test]
fn fixture_package_lists_records_in_discovery_order() {
    let package = fixture_package();
    let structs: Vec<_> = package.structs.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        structs,
        vec!["Registry", "Ledger", "Left", "Right", "Crate", "Pallet"]
    );
    let functions: Vec<_> = package.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(functions, vec!["Add", "Reset", "Tally", "helper"]);
    assert_eq!(package.interfaces.len(), 1);
}

#[test]
fn extraction_is_repeatable() {
    assert_eq!(fixture_package(), fixture_package());
}

#[test]
fn empty_package_has_empty_lists() {
    let package = parse_and_extract("package empty\n");
    assert_eq!(package.name, "empty");
    assert!(package.imports.is_empty());
    assert!(package.structs.is_empty());
    assert!(package.functions.is_empty());
    assert!(package.variables.is_empty());
    assert!(package.constants.is_empty());
    assert!(package.interfaces.is_empty());
}

#[test]
fn packages_keep_input_order() {
    let first = ParsedPackage::from_file(
        ParsedFile::parse("b.go", "package beta\n").expect("parse"),
    )
    .expect("package");
    let second = ParsedPackage::from_file(
        ParsedFile::parse("a.go", "package alpha\n").expect("parse"),
    )
    .expect("package");
    let output = extract(&[first, second], &ExtractOptions::default()).expect("extract");
    let names: Vec<_> = output.packages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["beta", "alpha"]);
}

#[test]
fn output_serializes_contract_keys() {
    let package = parse_and_extract("package demo\n\ntype T struct {\n\tV int\n}\n");
    let value = serde_json::to_value(&package).expect("serialize");
    for key in [
        "name",
        "imports",
        "structs",
        "functions",
        "variables",
        "constants",
        "interfaces",
    ] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    let field = &value["structs"][0]["fields"][0];
    for key in ["name", "type", "tag", "private", "pointer", "slice", "docs"] {
        assert!(field.get(key).is_some(), "missing field key {key}");
    }
}
