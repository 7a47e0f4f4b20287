//! The tabular data model and diagnostic types.
//!
//! Rows arrive from an external data-retrieval collaborator (a spreadsheet
//! read API) as arrays of loosely typed JSON values. Everything here converts
//! that input into typed cells up front, so the classifier never performs an
//! unchecked cast: cell access goes through [`Row::text`], and values that do
//! not convert to text surface as recoverable [`Diagnostic`]s instead of
//! panics.

use serde::{Deserialize, Serialize};

/// A single typed cell value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Textual content (scalars are stringified at ingest)
    Text(String),
    /// Absent or null content
    Empty,
    /// A JSON value with no sensible text form; the payload names its type
    Unsupported(&'static str),
}

impl Cell {
    /// Convert a raw JSON value into a typed cell.
    ///
    /// Strings pass through; numbers and booleans are stringified the way the
    /// spreadsheet service displays them; null becomes [`Cell::Empty`];
    /// arrays and objects become [`Cell::Unsupported`].
    pub fn from_value(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::String(s) => Cell::Text(s),
            Value::Number(n) => Cell::Text(n.to_string()),
            Value::Bool(b) => Cell::Text(b.to_string()),
            Value::Null => Cell::Empty,
            Value::Array(_) => Cell::Unsupported("array"),
            Value::Object(_) => Cell::Unsupported("object"),
        }
    }

    /// The cell's text, if it has one.
    ///
    /// [`Cell::Empty`] reads as `""`; [`Cell::Unsupported`] reads as `None`,
    /// which callers report as an [`DiagnosticKind::UnsupportedCell`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            Cell::Empty => Some(""),
            Cell::Unsupported(_) => None,
        }
    }

    /// Whether the cell has no content.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty) || matches!(self, Cell::Text(s) if s.is_empty())
    }
}

/// One record from the tabular data source: an ordered sequence of cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Create a row from typed cells.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Create a row from raw JSON values.
    pub fn from_values(values: Vec<serde_json::Value>) -> Self {
        Self {
            cells: values.into_iter().map(Cell::from_value).collect(),
        }
    }

    /// Number of cells in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at `col`, or `None` past the end of the row.
    ///
    /// Absence (a short row) and emptiness (a present but empty cell) carry
    /// distinct meaning to the classifier, so this does not default.
    pub fn get(&self, col: usize) -> Option<&Cell> {
        self.cells.get(col)
    }

    /// The text of the cell at `col`.
    ///
    /// `None` means the cell is absent or has no text form.
    pub fn text(&self, col: usize) -> Option<&str> {
        self.get(col).and_then(Cell::as_text)
    }
}

impl From<Vec<&str>> for Row {
    fn from(cells: Vec<&str>) -> Self {
        Self {
            cells: cells.into_iter().map(|s| Cell::Text(s.to_string())).collect(),
        }
    }
}

/// The read payload shape of the external spreadsheet service.
///
/// Matches the `values.get` response of the Sheets API, so a saved payload
/// can be fed to the renderer directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValueRange {
    /// The A1-notation range the values were read from
    pub range: Option<String>,
    /// `ROWS` or `COLUMNS`; this renderer assumes rows
    pub major_dimension: Option<String>,
    /// The cell values, outer dimension = rows
    pub values: Vec<Vec<serde_json::Value>>,
}

impl ValueRange {
    /// Convert the payload into typed rows.
    pub fn into_rows(self) -> Vec<Row> {
        self.values.into_iter().map(Row::from_values).collect()
    }
}

/// What went wrong while classifying a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// The heading-level cell did not parse as an integer
    BadHeadingLevel,
    /// The row is shorter than the selected rendering path requires
    MissingCell,
    /// A cell value has no text form (array or object)
    UnsupportedCell,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticKind::BadHeadingLevel => write!(f, "bad heading level"),
            DiagnosticKind::MissingCell => write!(f, "missing value"),
            DiagnosticKind::UnsupportedCell => write!(f, "unsupported cell value"),
        }
    }
}

/// A non-fatal classification problem, keyed by row index and column.
///
/// Diagnostics never abort a run; the transducer records them and continues
/// with the remaining rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Zero-based index of the offending row in the input sequence
    pub row: usize,
    /// Zero-based column of the offending cell
    pub column: usize,
    /// What kind of problem this is
    pub kind: DiagnosticKind,
    /// The raw value involved, where there is one
    pub detail: String,
}

impl Diagnostic {
    /// Create a diagnostic for `kind` at `row`/`column`.
    pub fn new(row: usize, column: usize, kind: DiagnosticKind, detail: impl Into<String>) -> Self {
        Self {
            row,
            column,
            kind,
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            DiagnosticKind::BadHeadingLevel => write!(
                f,
                "unexpected title level value at row {}, column {} (found `{}`)",
                self.row, self.column, self.detail
            ),
            DiagnosticKind::MissingCell => write!(
                f,
                "unexpected missing value at row {}, column {}",
                self.row, self.column
            ),
            DiagnosticKind::UnsupportedCell => write!(
                f,
                "unsupported cell value at row {}, column {} ({})",
                self.row, self.column, self.detail
            ),
        }
    }
}
