use serde::{Deserialize, Serialize};

use super::{Constant, Function, Interface, Struct, Variable};

/// Everything extracted from one Go package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    #[serde(alias = "package")]
    pub name: String,
    /// De-duplicated import paths, sorted.
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub structs: Vec<Struct>,
    #[serde(default)]
    pub functions: Vec<Function>,
    #[serde(default)]
    pub variables: Vec<Variable>,
    #[serde(default)]
    pub constants: Vec<Constant>,
    #[serde(default)]
    pub interfaces: Vec<Interface>,
}

/// The document produced by one extraction call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub packages: Vec<Package>,
}

impl Output {
    /// First package with the given name.
    #[must_use]
    pub fn package(&self, name: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.name == name)
    }
}
