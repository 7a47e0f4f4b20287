//! Rows payload ingestion.
//!
//! Decodes the JSON the external spreadsheet service hands back — either a
//! full `values` object or a bare array of rows — into typed [`Row`]s. This
//! is the only place raw JSON enters the pipeline.

use sheetdown_core::{Result, Row, SheetdownError, ValueRange};
use serde_json::Value;
use std::io::Read;

/// Read a rows payload from a reader.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Row>> {
    let value: Value = serde_json::from_reader(reader)
        .map_err(|e| SheetdownError::Ingest(format!("invalid JSON payload: {}", e)))?;
    rows_from_value(value)
}

/// Convert a decoded payload into rows.
///
/// Accepts either the service's `values` object or a bare `[[...], ...]`
/// array.
pub fn rows_from_value(value: Value) -> Result<Vec<Row>> {
    match value {
        Value::Array(rows) => rows.into_iter().map(row_from_value).collect(),
        Value::Object(_) => {
            let range: ValueRange = serde_json::from_value(value)
                .map_err(|e| SheetdownError::Ingest(format!("invalid values payload: {}", e)))?;
            Ok(range.into_rows())
        }
        other => Err(SheetdownError::Ingest(format!(
            "expected an array of rows or a values object, found {}",
            json_type(&other)
        ))),
    }
}

fn row_from_value(value: Value) -> Result<Row> {
    match value {
        Value::Array(cells) => Ok(Row::from_values(cells)),
        other => Err(SheetdownError::Ingest(format!(
            "expected a row array, found {}",
            json_type(&other)
        ))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
