//! Shared enums for sheetdown.
//!
//! These enums are used across the classifier, renderer, and configuration
//! layers to name the output vocabulary and the block constructs that carry
//! state across rows.

use serde::{Deserialize, Serialize};

/// The concrete tag vocabulary used for output.
///
/// The two modes share the same classification state machine; they differ
/// only in the literal markup the renderer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML tags (`<h1>`, `<ul>`, `<table>`, ...)
    #[default]
    Html,
    /// Markdown markers (`#`, `-`, `| ... |`, ...)
    Markdown,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!("unknown output format `{}`", other)),
        }
    }
}

/// A multi-line markup construct that stays open across consecutive lines
/// (and potentially rows) until explicitly closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Block {
    /// A bulleted list (`-` prefixed lines)
    List,
    /// A pipe-delimited table (`" | "` separated lines)
    Table,
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Block::List => write!(f, "list"),
            Block::Table => write!(f, "table"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Html.to_string(), "html");
        assert_eq!(OutputFormat::Markdown.to_string(), "markdown");
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("html".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("HTML".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!(
            "markdown".parse::<OutputFormat>().unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert!("latex".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Html);
    }

    #[test]
    fn test_block_display() {
        assert_eq!(Block::List.to_string(), "list");
        assert_eq!(Block::Table.to_string(), "table");
    }
}
