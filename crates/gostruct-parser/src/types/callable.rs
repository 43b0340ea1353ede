use std::fmt;

use serde::{Deserialize, Serialize};

/// A parameter or a result of a callable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Empty for unnamed parameters and results.
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    pub fn unnamed(ty: impl Into<String>) -> Self {
        Self::new(String::new(), ty)
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.ty)
        } else {
            write!(f, "{} {}", self.name, self.ty)
        }
    }
}

/// Render `Name(p1 T1, T2) (r1 R1, R2)`.
///
/// The result parentheses are always present, even with no results.
#[must_use]
pub fn render_signature(name: &str, params: &[Param], returns: &[Param]) -> String {
    format!("{name}({}) ({})", join(params), join(returns))
}

fn join(params: &[Param]) -> String {
    params
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A method bound to a receiver, or a method signature of an interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    /// Receiver type text, keeping a leading `*`. Empty for interface methods.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub receiver: String,
    pub name: String,
    #[serde(default)]
    pub params: Vec<Param>,
    #[serde(default)]
    pub returns: Vec<Param>,
    #[serde(default)]
    pub docs: Vec<String>,
    pub signature: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Method {
    /// The struct name this method binds to: one leading `*` and any type
    /// argument list removed.
    #[must_use]
    pub fn receiver_base_name(&self) -> &str {
        let name = self.receiver.strip_prefix('*').unwrap_or(&self.receiver);
        name.split_once('[').map_or(name, |(base, _)| base)
    }
}

/// A free function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub params: Vec<Param>,
    #[serde(default)]
    pub returns: Vec<Param>,
    #[serde(default)]
    pub docs: Vec<String>,
    pub signature: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}
