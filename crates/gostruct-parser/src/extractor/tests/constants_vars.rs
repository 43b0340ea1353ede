use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use crate::types::{Constant, Variable};

fn find_constant<'a>(package: &'a Package, name: &str) -> &'a Constant {
    package
        .constants
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| panic!("should find constant named '{name}'"))
}

fn find_variable<'a>(package: &'a Package, name: &str) -> &'a Variable {
    package
        .variables
        .iter()
        .find(|v| v.name == name)
        .unwrap_or_else(|| panic!("should find variable named '{name}'"))
}

#[rstest]
#[case("MaxCrates", "12")]
#[case("Service", "\"inventory\"")]
#[case("Timeout", "30 * Second")]
#[case("Raw", "`raw text`")]
#[case("Ratio", "2.5")]
#[case("Initial", "'a'")]
#[case("Enabled", "true")]
#[case("Mask", "uint8(255)")]
#[case("Big", "100")]
#[case("Small", "1")]
#[case("Low", "iota")]
#[case("Second", "1")]
fn constant_values_render(#[case] name: &str, #[case] value: &str) {
    let package = parse_and_extract(API);
    assert_eq!(find_constant(&package, name).value, value);
}

#[rstest]
#[case("Nested")]
#[case("Remote")]
#[case("Mid")]
#[case("High")]
fn unrenderable_or_missing_values_are_empty(#[case] name: &str) {
    let package = parse_and_extract(API);
    assert_eq!(find_constant(&package, name).value, "");
}

#[test]
fn constant_docs_fall_back_to_declaration() {
    let package = parse_and_extract(API);
    assert_eq!(
        find_constant(&package, "MaxCrates").docs,
        vec!["MaxCrates limits a pallet.".to_string()]
    );
    assert_eq!(
        find_constant(&package, "Service").docs,
        vec!["Name of the service.".to_string()]
    );
    assert!(find_constant(&package, "Timeout").docs.is_empty());
}

#[test]
fn constants_keep_source_order() {
    let package = parse_and_extract("package demo\n\nconst (\n\tA = 1\n\tB, C = 2, 3\n)\n");
    let names: Vec<_> = package.constants.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn binary_expression_with_unrenderable_side_is_empty() {
    let package = parse_and_extract("package demo\n\nconst D = 2 * time.Second\n");
    assert_eq!(find_constant(&package, "D").value, "");
}

#[test]
fn call_with_two_arguments_is_empty() {
    let package = parse_and_extract("package demo\n\nconst M = max(1, 2)\n");
    assert_eq!(find_constant(&package, "M").value, "");
}

#[test]
fn nested_binary_expressions_render_recursively() {
    let package = parse_and_extract("package demo\n\nconst Mask = 1 << 4 | 2\n");
    assert_eq!(find_constant(&package, "Mask").value, "1 << 4 | 2");
}

#[test]
fn variable_types_are_resolved_or_empty() {
    let package = parse_and_extract(API);
    let vars: Vec<_> = package
        .variables
        .iter()
        .map(|v| (v.name.as_str(), v.ty.as_str()))
        .collect();
    assert_eq!(
        vars,
        vec![
            ("ErrMissing", ""),
            ("defaultStore", "Store"),
            ("counts", "map[string]int"),
            ("names", "[]string"),
            ("tags", "[]string"),
            ("inferred", ""),
        ]
    );
}

#[test]
fn variable_docs() {
    let package = parse_and_extract(API);
    assert_eq!(
        find_variable(&package, "ErrMissing").docs,
        vec!["ErrMissing is returned when a crate is absent.".to_string()]
    );
    assert_eq!(
        find_variable(&package, "defaultStore").docs,
        vec!["Default store.".to_string()]
    );
    assert!(find_variable(&package, "counts").docs.is_empty());
}
