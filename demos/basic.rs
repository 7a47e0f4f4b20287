//! Basic example: Render a small row payload as HTML.
//!
//! Run with: `cargo run --example basic`

use sheetdown_core::{OutputFormat, Row};
use sheetdown_parser::Transducer;
use sheetdown_render::Renderer;

fn main() {
    let rows = vec![
        Row::from(vec!["1", "Welcome to Sheetdown", ""]),
        Row::from(vec!["", "Summary", "Turns **spreadsheet** rows into documents."]),
        Row::from(vec!["", "Features", "- row classification\n- pipe tables\n- bold spans"]),
        Row::from(vec!["", "Status", "stage | state\nparser | done\nrender | done"]),
        Row::from(vec!["x", "internal note", "not rendered"]),
    ];

    // Create output buffer
    let mut output = Vec::new();

    // Create transducer and renderer
    let mut transducer = Transducer::new();

    {
        let mut renderer = Renderer::new(&mut output, OutputFormat::Html);

        // Process and render each row
        for (idx, row) in rows.iter().enumerate() {
            let events = transducer.process_row(idx, row);
            renderer.render(&events).unwrap();
        }

        // Close whatever the last row left open
        let events = transducer.finalize();
        renderer.render(&events).unwrap();
    }

    // Print the rendered output
    print!("{}", String::from_utf8(output).unwrap());
}
