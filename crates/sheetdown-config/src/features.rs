//! Feature flags configuration.
//!
//! This module contains the `FeaturesConfig` struct which holds the
//! behavior variants the renderer supports.

use serde::{Deserialize, Serialize};

/// Feature flags configuration.
///
/// Both flags select between observed variants of the legacy behavior; the
/// defaults are the permissive, well-formed-output choices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesConfig {
    /// Close any list, table, or section still open after the last row.
    /// Default: true
    #[serde(default = "default_true")]
    pub flush_trailing: bool,

    /// Render a heading row's trailing third cell as body text after the
    /// heading. When false, a heading row renders its heading only.
    /// Default: true
    #[serde(default = "default_true")]
    pub heading_body: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            flush_trailing: true,
            heading_body: true,
        }
    }
}

impl FeaturesConfig {
    /// Merge another FeaturesConfig into this one.
    ///
    /// All fields are copied from `other`; the override file only needs the
    /// values the user wants to change because missing keys deserialize to
    /// the defaults.
    pub fn merge(&mut self, other: &FeaturesConfig) {
        self.flush_trailing = other.flush_trailing;
        self.heading_body = other.heading_body;
    }
}

fn default_true() -> bool {
    true
}
