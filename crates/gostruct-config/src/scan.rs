//! Source discovery and extraction settings.

use globset::Glob;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Walk sub-directories; each directory yields its own packages.
    #[serde(default)]
    pub recursive: bool,

    /// Parse `_test.go` files.
    #[serde(default = "default_true")]
    pub include_tests: bool,

    /// Honor `.gitignore` and `.ignore` files while walking.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,

    /// Glob patterns, relative to the scanned directory, to skip.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Capture function and method bodies as source text.
    #[serde(default = "default_true")]
    pub include_bodies: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            recursive: false,
            include_tests: default_true(),
            respect_gitignore: default_true(),
            exclude: Vec::new(),
            include_bodies: default_true(),
        }
    }
}

impl ScanConfig {
    /// Reject exclude patterns that are not valid globs.
    ///
    /// # Errors
    /// `ConfigError::InvalidValue` naming the first bad pattern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for pattern in &self.exclude {
            Glob::new(pattern).map_err(|e| ConfigError::InvalidValue {
                field: "scan.exclude".to_string(),
                reason: format!("{pattern:?}: {e}"),
            })?;
        }
        Ok(())
    }
}
