//! The Markdown tag vocabulary.
//!
//! Same event stream as HTML mode, different literals: `#` headings,
//! `**bold**`, `-` list items, and pipe tables with a `| --- |` separator
//! line after the header row. Sections have no wrapper; the break between
//! them is a thematic break.

use sheetdown_parser::Span;

/// Thematic break between top-level sections.
pub const SECTION_BREAK: &str = "---";

/// Render inline spans, delimiting strong spans with `**`.
pub fn render_spans(spans: &[Span]) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            Span::Text(s) => out.push_str(s),
            Span::Strong(s) => {
                out.push_str("**");
                out.push_str(s);
                out.push_str("**");
            }
        }
    }
    out
}

/// Render a heading of the given level.
///
/// Level 0 (a classifier fallback) has no marker; the text stands alone.
pub fn render_heading(level: u8, text: &str) -> String {
    if level == 0 {
        return text.to_string();
    }
    format!("{} {}", "#".repeat(level as usize), text)
}

/// Render a paragraph line.
pub fn render_paragraph(spans: &[Span]) -> String {
    render_spans(spans)
}

/// Render one list item.
pub fn render_list_item(spans: &[Span]) -> String {
    format!("- {}", render_spans(spans))
}

/// Render a table row as lines.
///
/// A header row is followed by the column separator line.
pub fn render_table_row(header: bool, cells: &[Vec<Span>]) -> Vec<String> {
    let rendered: Vec<String> = cells.iter().map(|cell| render_spans(cell)).collect();
    let mut lines = vec![format!("| {} |", rendered.join(" | "))];
    if header {
        lines.push(table_separator(cells.len()));
    }
    lines
}

/// The `| --- | --- |` separator line for `columns` columns.
fn table_separator(columns: usize) -> String {
    let dashes = vec!["---"; columns];
    format!("| {} |", dashes.join(" | "))
}
