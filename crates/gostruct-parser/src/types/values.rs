use serde::{Deserialize, Serialize};

/// A package-level variable. `ty` is empty when the type is inferred.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub docs: Vec<String>,
}

/// A package-level constant.
///
/// `value` is advisory: initializers outside the rendered subset (literals,
/// identifiers, binary expressions, one-argument calls) leave it empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constant {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub docs: Vec<String>,
}
