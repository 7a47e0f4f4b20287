//! Integration tests for sheetdown.
//!
//! These tests drive the full pipeline — rows payload in, rendered document
//! out — through the same pieces the binary wires together.

use sheetdown_core::{OutputFormat, Row, ValueRange};
use sheetdown_parser::{RenderEvent, Transducer};
use sheetdown_render::Renderer;

/// Helper to build rows from a JSON payload.
fn rows_from_json(payload: &str) -> Vec<Row> {
    let range: ValueRange = serde_json::from_str(payload).unwrap();
    range.into_rows()
}

/// Helper to run the transducer over rows and render to a string.
fn render_to_string(rows: &[Row], format: OutputFormat) -> String {
    let mut output = Vec::new();
    let mut transducer = Transducer::new();

    {
        let mut renderer = Renderer::new(&mut output, format);
        for (idx, row) in rows.iter().enumerate() {
            let events = transducer.process_row(idx, row);
            renderer.render(&events).unwrap();
        }
        let events = transducer.finalize();
        renderer.render(&events).unwrap();
    }

    String::from_utf8(output).unwrap()
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[test]
fn test_single_heading_row() {
    let rows = vec![Row::from(vec!["1", "Intro", ""])];
    let out = render_to_string(&rows, OutputFormat::Html);
    assert_eq!(
        out,
        "<div class=\"jt-Wrap--widthSpacer jt-Wrap--stylized\">\n\n<h1>Intro</h1>\n</div>\n"
    );
    // No separator before the very first top-level heading.
    assert!(!out.contains("<br />"));
}

#[test]
fn test_two_sections_get_one_break() {
    let rows = vec![
        Row::from(vec!["1", "First", ""]),
        Row::from(vec!["1", "Second", ""]),
    ];
    let out = render_to_string(&rows, OutputFormat::Html);
    assert_eq!(out.matches("</div><br />").count(), 1);
    assert_eq!(
        out.matches("<div class=\"jt-Wrap--widthSpacer jt-Wrap--stylized\">")
            .count(),
        2
    );
    // The flush closes the second section exactly once.
    assert!(out.ends_with("</div>\n"));
}

#[test]
fn test_list_row_then_paragraph() {
    let rows = vec![Row::from(vec!["", "", "- a\n- b\nc"])];
    let out = render_to_string(&rows, OutputFormat::Html);
    assert_eq!(out, "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n\n<p>c</p>\n");
}

#[test]
fn test_not_applicable_row_renders_nothing() {
    let rows = vec![Row::from(vec!["", "Label", "N/A"])];
    assert_eq!(render_to_string(&rows, OutputFormat::Html), "");
    assert_eq!(render_to_string(&rows, OutputFormat::Markdown), "");
}

#[test]
fn test_marker_row_renders_nothing() {
    let rows = vec![Row::from(vec!["x", "Label", "Body"])];
    assert_eq!(render_to_string(&rows, OutputFormat::Html), "");
}

#[test]
fn test_labeled_body_row() {
    let rows = vec![Row::from(vec!["", "Label", "Body text"])];
    assert_eq!(
        render_to_string(&rows, OutputFormat::Html),
        "<h4>Label</h4>\n\n<p>Body text</p>\n"
    );
    assert_eq!(
        render_to_string(&rows, OutputFormat::Markdown),
        "#### Label\n\nBody text\n"
    );
}

#[test]
fn test_table_across_lines() {
    let rows = vec![Row::from(vec!["", "", "name | role\nana | dev\nbob | ops\nafter"])];
    let out = render_to_string(&rows, OutputFormat::Html);
    assert_eq!(out.matches("<table>").count(), 1);
    assert_eq!(out.matches("</table>").count(), 1);
    assert_eq!(out.matches("<th>").count(), 2);
    assert_eq!(out.matches("<td>").count(), 4);
    assert!(out.contains("<p>after</p>"));
}

#[test]
fn test_table_left_open_is_closed_by_flush() {
    let rows = vec![Row::from(vec!["", "", "a | b\n1 | 2"])];
    let out = render_to_string(&rows, OutputFormat::Html);
    assert!(out.ends_with("</table>\n"));
}

#[test]
fn test_markdown_table() {
    let rows = vec![Row::from(vec!["", "", "name | role\nana | dev"])];
    assert_eq!(
        render_to_string(&rows, OutputFormat::Markdown),
        "| name | role |\n| --- | --- |\n| ana | dev |\n"
    );
}

#[test]
fn test_bold_spans_round_trip() {
    let rows = vec![Row::from(vec!["", "", "plain **bold** plain"])];
    assert_eq!(
        render_to_string(&rows, OutputFormat::Html),
        "<p>plain <strong>bold</strong> plain</p>\n"
    );
    assert_eq!(
        render_to_string(&rows, OutputFormat::Markdown),
        "plain **bold** plain\n"
    );
}

#[test]
fn test_nested_headings_in_body() {
    let rows = vec![Row::from(vec!["", "", "### Example\n# A"])];
    let out = render_to_string(&rows, OutputFormat::Html);
    assert!(out.contains("<h3>Example</h3>"));
    assert!(out.contains("<h1>A</h1>"));
    // The level-1 body heading opens a section, closed by the flush.
    assert!(out.contains("<div class=\"jt-Wrap--widthSpacer jt-Wrap--stylized\">"));
    assert!(out.ends_with("</div>\n"));
}

#[test]
fn test_full_document() {
    let payload = r#"{
        "range": "Doc!A1:C7",
        "majorDimension": "ROWS",
        "values": [
            ["1", "Guide", ""],
            ["", "Summary", "A **short** overview."],
            ["x", "draft", "do not publish"],
            ["", "Steps", "- install\n- configure\n- run"],
            ["", "Matrix", "os | status\nlinux | ok"],
            ["", "Appendix", "N/A"],
            ["1", "Changelog", ""]
        ]
    }"#;
    let rows = rows_from_json(payload);
    let out = render_to_string(&rows, OutputFormat::Html);

    // Suppressed rows leave no trace.
    assert!(!out.contains("draft"));
    assert!(!out.contains("Appendix"));

    // Two sections, one break between them, flush closes the last.
    assert_eq!(out.matches("</div><br />").count(), 1);
    assert!(out.ends_with("</div>\n"));

    // Each block opens and closes exactly once.
    assert_eq!(out.matches("<ul>").count(), 1);
    assert_eq!(out.matches("</ul>").count(), 1);
    assert_eq!(out.matches("<table>").count(), 1);
    assert_eq!(out.matches("</table>").count(), 1);

    assert!(out.contains("<strong>short</strong>"));
}

#[test]
fn test_markdown_full_document_shape() {
    let rows = vec![
        Row::from(vec!["1", "Guide", ""]),
        Row::from(vec!["", "Steps", "- install\n- run"]),
        Row::from(vec!["1", "Changelog", ""]),
    ];
    let out = render_to_string(&rows, OutputFormat::Markdown);
    assert_eq!(
        out,
        "# Guide\n\n#### Steps\n\n- install\n- run\n\n---\n\n# Changelog\n"
    );
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn test_diagnostics_do_not_stop_the_run() {
    let rows = vec![
        Row::from(vec!["intro", "Title", ""]),
        Row::from(vec!["", "short row"]),
        Row::from(vec!["", "Label", "Body"]),
    ];
    let mut transducer = Transducer::new();
    let events = transducer.process_rows(&rows);

    // The malformed rows are reported, the good row still renders.
    assert_eq!(transducer.diagnostics().len(), 2);
    assert!(events.iter().any(|e| matches!(
        e, RenderEvent::Heading { level: 4, text } if text == "Label"
    )));
}

#[test]
fn test_bad_level_renders_with_fallback() {
    let rows = vec![Row::from(vec!["intro", "Title", ""])];
    let out = render_to_string(&rows, OutputFormat::Html);
    assert!(out.contains("<h0>Title</h0>"));
}
