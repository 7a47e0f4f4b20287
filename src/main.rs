//! Sheetdown - render spreadsheet rows as HTML or Markdown documents.
//!
//! This binary wires the pipeline together: it ingests a rows payload from
//! files or stdin, runs the row-to-markup transducer over it, and writes the
//! rendered document to stdout. Fetching the payload from the spreadsheet
//! service (and the OAuth dance that entails) is left to external tooling.

mod cli;
mod ingest;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, warn, LevelFilter};
use sheetdown_config::Config;
use sheetdown_core::{OutputFormat, Result, Row};
use sheetdown_parser::Transducer;
use sheetdown_render::Renderer;
use std::fs::File;
use std::io::{self, BufReader, Write};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    // Set up logging
    setup_logging(&cli.log_level);
    info!("Sheetdown v{}", env!("CARGO_PKG_VERSION"));

    // Run the main application
    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli);
    debug!("Loaded config: {:?}", config);

    let format = cli.format.unwrap_or(config.output.format);
    let heading_body = config.features.heading_body && !cli.strict_headings;
    let flush_trailing = config.features.flush_trailing && !cli.no_flush;

    let rows = read_input(cli)?;
    if rows.is_empty() {
        println!("No data found.");
        return Ok(());
    }
    debug!("Read {} rows", rows.len());

    render_rows(
        &rows,
        format,
        heading_body,
        flush_trailing,
        io::stdout().lock(),
    )
}

/// Load configuration with optional overrides.
///
/// A broken config file is logged and replaced by the defaults; it never
/// stops a run.
fn load_config(cli: &Cli) -> Config {
    let mut config = match Config::load_with_override(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config: {}", e);
            Config::default()
        }
    };

    if let Err(e) = config.apply_env() {
        error!("Ignoring {}: {}", sheetdown_config::FORMAT_ENV_VAR, e);
    }

    config
}

/// Read the rows payload from the CLI's input files, or stdin.
fn read_input(cli: &Cli) -> Result<Vec<Row>> {
    if cli.should_read_stdin() {
        info!("Reading rows from stdin");
        return ingest::read_rows(io::stdin().lock());
    }

    let mut rows = Vec::new();
    for path in &cli.files {
        info!("Reading rows from {}", path.display());
        let file = File::open(path)?;
        rows.extend(ingest::read_rows(BufReader::new(file))?);
    }
    Ok(rows)
}

/// Run the transducer over the rows and write the rendered document.
fn render_rows<W: Write>(
    rows: &[Row],
    format: OutputFormat,
    heading_body: bool,
    flush_trailing: bool,
    writer: W,
) -> Result<()> {
    let mut transducer = Transducer::new();
    transducer.set_heading_body(heading_body);
    let mut renderer = Renderer::new(writer, format);

    for (idx, row) in rows.iter().enumerate() {
        let events = transducer.process_row(idx, row);
        renderer.render(&events)?;
    }

    if flush_trailing {
        let events = transducer.finalize();
        renderer.render(&events)?;
    }

    let diagnostics = transducer.diagnostics();
    if !diagnostics.is_empty() {
        warn!("{} row(s) had classification problems", diagnostics.len());
    }

    Ok(())
}
