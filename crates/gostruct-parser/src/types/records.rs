use serde::{Deserialize, Serialize};

use super::{Field, Method};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Struct {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Methods in the order they were discovered.
    #[serde(default)]
    pub methods: Vec<Method>,
    #[serde(default)]
    pub docs: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<Method>,
    #[serde(default)]
    pub docs: Vec<String>,
}
