use serde::{Deserialize, Serialize};

/// One member of a struct literal.
///
/// `pointer` and `slice` describe only the outermost wrapper of the type:
/// `*[]string` is a pointer, `[]*string` is a slice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Empty for embedded fields.
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    /// Raw tag text with its delimiters removed.
    #[serde(default)]
    pub tag: String,
    pub private: bool,
    pub pointer: bool,
    pub slice: bool,
    #[serde(default)]
    pub docs: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl Field {
    /// Go visibility: a name whose first character is unchanged by
    /// lowercasing is unexported. Embedded fields have no name and count as
    /// exported.
    #[must_use]
    pub fn is_private_name(name: &str) -> bool {
        name.chars()
            .next()
            .is_some_and(|first| first.to_lowercase().eq(std::iter::once(first)))
    }
}
