//! Output configuration.

use serde::{Deserialize, Serialize};
use sheetdown_core::OutputFormat;

/// Output configuration: which tag vocabulary to emit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputConfig {
    /// The output format: `"html"` or `"markdown"`.
    /// Default: html
    #[serde(default)]
    pub format: OutputFormat,
}

impl OutputConfig {
    /// Merge another OutputConfig into this one.
    pub fn merge(&mut self, other: &OutputConfig) {
        self.format = other.format;
    }
}
