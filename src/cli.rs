//! Command-line interface for Sheetdown.

use clap::Parser;
use sheetdown_core::OutputFormat;
use std::path::PathBuf;

/// Sheetdown - render spreadsheet rows as HTML or Markdown documents.
///
/// Reads a rows payload (a Sheets-API-shaped `values` object or a bare
/// array of rows) and renders it as a structured document.
#[derive(Parser, Debug)]
#[command(
    name = "shd",
    author = "Sheetdown Contributors",
    version,
    about = "Render spreadsheet rows as HTML or Markdown documents",
    after_help = "Repository: https://github.com/sheetdown/sheetdown\n\n\
                  Examples:\n  \
                  shd values.json\n  \
                  curl -s \"$SHEET_VALUES_URL\" | shd -f markdown\n  \
                  shd -c custom.toml --strict-headings values.json"
)]
pub struct Cli {
    /// Input files with a rows payload (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Output format: html or markdown (overrides config and SHEETDOWN_FORMAT)
    #[arg(short = 'f', long = "format")]
    pub format: Option<OutputFormat>,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Leave blocks open at end of input instead of closing them
    #[arg(long = "no-flush")]
    pub no_flush: bool,

    /// Render heading rows without their trailing body cell
    #[arg(long = "strict-headings")]
    pub strict_headings: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Show paths information.
pub fn show_paths() {
    use sheetdown_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
