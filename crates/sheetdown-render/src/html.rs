//! The HTML tag vocabulary.
//!
//! Reproduces the legacy output exactly: wrapping `div` sections around
//! top-level headings, `<strong>` bold spans, `<ul>`/`<li>` lists, and
//! `<th>`/`<td>` tables. Cell text passes through verbatim.

use sheetdown_parser::Span;

/// Opens the wrapping container of a top-level section.
pub const SECTION_OPEN: &str = r#"<div class="jt-Wrap--widthSpacer jt-Wrap--stylized">"#;

/// Closes the previous section and breaks before the next one.
pub const SECTION_BREAK: &str = "</div><br />";

/// Closes the last section at end of output.
pub const SECTION_CLOSE: &str = "</div>";

/// Opening tag of a bulleted list.
pub const LIST_OPEN: &str = "<ul>";

/// Closing tag of a bulleted list.
pub const LIST_CLOSE: &str = "</ul>";

/// Opening tag of a table.
pub const TABLE_OPEN: &str = "<table>";

/// Closing tag of a table.
pub const TABLE_CLOSE: &str = "</table>";

/// Render inline spans, wrapping strong spans in `<strong>`.
pub fn render_spans(spans: &[Span]) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            Span::Text(s) => out.push_str(s),
            Span::Strong(s) => {
                out.push_str("<strong>");
                out.push_str(s);
                out.push_str("</strong>");
            }
        }
    }
    out
}

/// Render a heading of the given level.
pub fn render_heading(level: u8, text: &str) -> String {
    format!("<h{level}>{text}</h{level}>")
}

/// Render a paragraph line.
pub fn render_paragraph(spans: &[Span]) -> String {
    format!("<p>{}</p>", render_spans(spans))
}

/// Render one list item.
pub fn render_list_item(spans: &[Span]) -> String {
    format!("<li>{}</li>", render_spans(spans))
}

/// Render a table row as lines: `<tr>`, one cell tag per cell, `</tr>`.
///
/// Header rows use `<th>` cells, data rows `<td>`.
pub fn render_table_row(header: bool, cells: &[Vec<Span>]) -> Vec<String> {
    let (open, close) = if header {
        ("<th>", "</th>")
    } else {
        ("<td>", "</td>")
    };

    let mut lines = Vec::with_capacity(cells.len() + 2);
    lines.push("<tr>".to_string());
    for cell in cells {
        lines.push(format!("{}{}{}", open, render_spans(cell), close));
    }
    lines.push("</tr>".to_string());
    lines
}
