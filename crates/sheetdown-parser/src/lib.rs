//! Sheetdown Parser
//!
//! The row-to-markup transducer. This crate turns an ordered sequence of
//! spreadsheet rows into a stream of [`RenderEvent`]s, carrying open-list and
//! open-table state across rows and inline-parsing cell text for bold spans,
//! pipe-delimited tables, bulleted lists, and heading markers.
//!
//! # Overview
//!
//! Two stages compose the transducer:
//!
//! - the **row classifier** inspects a row's first cells and decides whether
//!   the row is a heading, body text, suppressed, or malformed;
//! - the **line scanner** walks the body cell's text line by line, opening
//!   and closing list/table blocks as the line shapes change.
//!
//! The transducer performs no I/O; the renderer maps the event stream to a
//! concrete tag vocabulary.
//!
//! # Example
//!
//! ```
//! use sheetdown_core::Row;
//! use sheetdown_parser::{RenderEvent, Transducer};
//!
//! let mut transducer = Transducer::new();
//! let events = transducer.process_row(0, &Row::from(vec!["1", "Intro", ""]));
//! assert!(events.iter().any(|e| matches!(
//!     e, RenderEvent::Heading { level: 1, text } if text == "Intro"
//! )));
//! ```

pub mod inline;

pub use inline::{parse_spans, Span, STRONG_DELIMITER};

use regex::Regex;
use sheetdown_core::{Diagnostic, DiagnosticKind, RenderState, Row};
use std::sync::LazyLock;

// =============================================================================
// Sentinels and tokens
// =============================================================================

/// First-cell marker that suppresses the whole row.
pub const SKIP_MARKER: &str = "x";

/// Body-cell sentinel that suppresses a labeled row.
pub const NOT_APPLICABLE: &str = "N/A";

/// The exact token that splits a line into table cells.
pub const CELL_SEPARATOR: &str = " | ";

/// Heading level used for a labeled body row's label.
const LABEL_HEADING_LEVEL: u8 = 4;

/// Regex for list items: a `-` prefix with the following spaces stripped
static LIST_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-\s*(.*)$").unwrap());

/// Regex for nested headings: level = length of the leading `#` run
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#+)\s*(.*)$").unwrap());

// =============================================================================
// Types
// =============================================================================

/// How a row should be rendered, decided from its first cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// Entirely suppressed: marker in the first cell, or `N/A` body
    Skip,
    /// Heading row: explicit level and title, optionally trailing body text
    Heading {
        level: u8,
        title: String,
        body: Option<String>,
    },
    /// Body text with an empty label cell
    Continuation { text: String },
    /// Labeled body row: the label renders as a level-4 heading
    Labeled { label: String, text: String },
    /// Too short for its rendering path; reported, not rendered
    Malformed,
}

/// Events emitted by the transducer, in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    /// Closes the previous top-level section before a new one opens
    SectionBreak,
    /// Opens the wrapping container of a top-level section
    SectionStart,
    /// Closes the last top-level section (emitted by finalize)
    SectionEnd,
    /// A heading of the given level
    Heading { level: u8, text: String },
    /// A paragraph of inline spans
    Paragraph(Vec<Span>),
    /// Opens a bulleted list
    ListStart,
    /// One list item
    ListItem(Vec<Span>),
    /// Closes the open list
    ListEnd,
    /// Opens a table
    TableStart,
    /// The table's header cells (the first pipe-delimited line)
    TableHeader(Vec<Vec<Span>>),
    /// A table data row
    TableRow(Vec<Vec<Span>>),
    /// Closes the open table
    TableEnd,
}

// =============================================================================
// Transducer
// =============================================================================

/// The row-to-markup transducer.
///
/// Owns the carry-state for one run. Feed rows in input order with
/// [`process_row`](Transducer::process_row), then call
/// [`finalize`](Transducer::finalize) to close whatever the last row left
/// open. Classification problems are collected as [`Diagnostic`]s and never
/// abort the run.
#[derive(Debug)]
pub struct Transducer {
    state: RenderState,
    /// Render a heading row's trailing third cell as body text
    heading_body: bool,
    events: Vec<RenderEvent>,
    diagnostics: Vec<Diagnostic>,
}

impl Default for Transducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Transducer {
    /// Create a transducer with fresh state.
    pub fn new() -> Self {
        Self {
            state: RenderState::new(),
            heading_body: true,
            events: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Select the strict heading-row variant: when disabled, a heading row's
    /// trailing third cell is ignored instead of rendered as body text.
    pub fn set_heading_body(&mut self, enabled: bool) {
        self.heading_body = enabled;
    }

    /// The current carry-state.
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// Diagnostics collected so far, in row order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Process one row and return its events.
    ///
    /// Any list or table block left open by the previous row is closed first;
    /// block state never spans a classification boundary implicitly.
    pub fn process_row(&mut self, idx: usize, row: &Row) -> Vec<RenderEvent> {
        self.events.clear();

        // Close whatever the previous row left open. The scanner never has
        // both blocks open at once.
        if self.state.in_list {
            self.events.push(RenderEvent::ListEnd);
            self.state.close_list();
        } else if self.state.in_table {
            self.events.push(RenderEvent::TableEnd);
            self.state.close_table();
        }

        match self.classify(idx, row) {
            RowKind::Skip | RowKind::Malformed => {}
            RowKind::Heading { level, title, body } => {
                self.title(level, &title);
                if let Some(body) = body {
                    self.text(&body);
                }
            }
            RowKind::Continuation { text } => self.text(&text),
            RowKind::Labeled { label, text } => {
                self.title(LABEL_HEADING_LEVEL, &label);
                self.text(&text);
            }
        }

        self.take_events()
    }

    /// Process a whole row sequence, including the trailing flush.
    pub fn process_rows(&mut self, rows: &[Row]) -> Vec<RenderEvent> {
        let mut all_events = Vec::new();
        for (idx, row) in rows.iter().enumerate() {
            all_events.extend(self.process_row(idx, row));
        }
        all_events.extend(self.finalize());
        all_events
    }

    /// Close any block and section still open after the last row.
    ///
    /// Closing is idempotent: with nothing open this emits nothing.
    pub fn finalize(&mut self) -> Vec<RenderEvent> {
        self.events.clear();

        if self.state.in_list {
            self.events.push(RenderEvent::ListEnd);
            self.state.close_list();
        }
        if self.state.in_table {
            self.events.push(RenderEvent::TableEnd);
            self.state.close_table();
        }
        if self.state.in_section {
            self.events.push(RenderEvent::SectionEnd);
            self.state.in_section = false;
        }

        self.take_events()
    }

    /// Reset to initial state, ready for a new run.
    pub fn reset(&mut self) {
        self.state.reset();
        self.events.clear();
        self.diagnostics.clear();
    }

    // =========================================================================
    // Row classification
    // =========================================================================

    /// Decide how `row` should be rendered.
    ///
    /// The decision ladder, in order: skip marker, heading row (non-empty
    /// first cell), short row, continuation (empty label), not-applicable
    /// body, labeled body row. Recoverable problems (unparseable heading
    /// level, missing cells, untextual values) are recorded as diagnostics.
    pub fn classify(&mut self, idx: usize, row: &Row) -> RowKind {
        let first = self.cell_text(idx, row, 0).unwrap_or("");
        if first == SKIP_MARKER {
            return RowKind::Skip;
        }

        if !first.is_empty() {
            let level = match first.parse::<u8>() {
                Ok(level) => level,
                Err(_) => {
                    self.report(Diagnostic::new(
                        idx,
                        0,
                        DiagnosticKind::BadHeadingLevel,
                        first,
                    ));
                    0
                }
            };
            let Some(title) = self.cell_text(idx, row, 1) else {
                self.report(Diagnostic::new(idx, 1, DiagnosticKind::MissingCell, ""));
                return RowKind::Malformed;
            };
            let title = title.to_string();
            let body = if self.heading_body {
                self.cell_text(idx, row, 2).map(str::to_string)
            } else {
                None
            };
            return RowKind::Heading { level, title, body };
        }

        if row.len() < 3 {
            self.report(Diagnostic::new(idx, 2, DiagnosticKind::MissingCell, ""));
            return RowKind::Malformed;
        }

        let label = self.cell_text(idx, row, 1).unwrap_or("").to_string();
        let text = self.cell_text(idx, row, 2).unwrap_or("").to_string();
        if label.is_empty() {
            return RowKind::Continuation { text };
        }
        if text == NOT_APPLICABLE {
            return RowKind::Skip;
        }
        RowKind::Labeled { label, text }
    }

    /// Typed cell access: `None` for an absent cell; an untextual cell is
    /// reported and reads as empty.
    fn cell_text<'r>(&mut self, idx: usize, row: &'r Row, col: usize) -> Option<&'r str> {
        let cell = row.get(col)?;
        match cell.as_text() {
            Some(text) => Some(text),
            None => {
                let detail = match cell {
                    sheetdown_core::Cell::Unsupported(kind) => *kind,
                    _ => "unknown",
                };
                self.report(Diagnostic::new(
                    idx,
                    col,
                    DiagnosticKind::UnsupportedCell,
                    detail,
                ));
                Some("")
            }
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    // =========================================================================
    // Inline rendering
    // =========================================================================

    /// Emit a heading of the given level.
    ///
    /// Level-1 headings manage the wrapping section: no separator before the
    /// first one of the run, a closing break before every later one.
    fn title(&mut self, level: u8, text: &str) {
        if level == 1 {
            if !self.state.take_first_heading() {
                self.events.push(RenderEvent::SectionBreak);
            }
            self.events.push(RenderEvent::SectionStart);
            self.state.in_section = true;
        }
        self.events.push(RenderEvent::Heading {
            level,
            text: text.to_string(),
        });
    }

    /// Scan a body cell's text line by line.
    fn text(&mut self, value: &str) {
        for line in value.split('\n') {
            if line.is_empty() {
                continue;
            }
            self.scan_line(line);
        }
    }

    /// Apply the line rules in order: table row, list item, nested heading,
    /// plain paragraph.
    fn scan_line(&mut self, line: &str) {
        if line.contains(CELL_SEPARATOR) {
            if self.state.in_list {
                self.events.push(RenderEvent::ListEnd);
                self.state.close_list();
            }
            let cells: Vec<Vec<Span>> = line.split(CELL_SEPARATOR).map(parse_spans).collect();
            if !self.state.in_table {
                self.events.push(RenderEvent::TableStart);
                self.events.push(RenderEvent::TableHeader(cells));
                self.state.open_table();
            } else {
                self.events.push(RenderEvent::TableRow(cells));
            }
            return;
        }
        if self.state.in_table {
            self.events.push(RenderEvent::TableEnd);
            self.state.close_table();
        }

        if let Some(caps) = LIST_ITEM_RE.captures(line) {
            let content = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            if !self.state.in_list {
                self.events.push(RenderEvent::ListStart);
                self.state.open_list();
            }
            self.events.push(RenderEvent::ListItem(parse_spans(content)));
            return;
        }
        if self.state.in_list {
            self.events.push(RenderEvent::ListEnd);
            self.state.close_list();
        }

        if let Some(caps) = HEADING_RE.captures(line) {
            let hashes = caps.get(1).map(|m| m.as_str()).unwrap_or("#");
            let content = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            let level = hashes.len().min(u8::MAX as usize) as u8;
            self.title(level, content);
            return;
        }

        self.events.push(RenderEvent::Paragraph(parse_spans(line)));
    }

    fn take_events(&mut self) -> Vec<RenderEvent> {
        std::mem::take(&mut self.events)
    }
}

// =============================================================================
// Tests
// =============================================================================
