//! Markdown mode example: same rows, the other tag vocabulary.
//!
//! Run with: `cargo run --example markdown_mode`

use sheetdown_core::{OutputFormat, Row};
use sheetdown_parser::Transducer;
use sheetdown_render::Renderer;

fn main() {
    let rows = vec![
        Row::from(vec!["1", "Release Notes", ""]),
        Row::from(vec!["", "Highlights", "- faster ingest\n- **stricter** diagnostics"]),
        Row::from(vec!["", "Compatibility", "N/A"]),
        Row::from(vec!["1", "Known Issues", ""]),
        Row::from(vec!["", "", "None so far."]),
    ];

    let mut transducer = Transducer::new();
    let events = transducer.process_rows(&rows);

    let mut output = Vec::new();
    Renderer::new(&mut output, OutputFormat::Markdown)
        .render(&events)
        .unwrap();

    print!("{}", String::from_utf8(output).unwrap());

    for diagnostic in transducer.diagnostics() {
        eprintln!("-- {}", diagnostic);
    }
}
