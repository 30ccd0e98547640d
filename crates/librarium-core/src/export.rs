//! Generic tabular CSV encoder shared by every export endpoint.
//!
//! Rows are serialized to JSON objects and flattened column-by-column.
//! Values containing a comma, quote, or newline get minimal RFC 4180
//! quoting; everything else is emitted verbatim.

use serde::Serialize;
use serde_json::Value;

use crate::error::AppError;
use crate::result::AppResult;

/// Encode an ordered sequence of records into CSV text.
///
/// The header row lists `columns` in order; each data row emits the
/// stringified field value per column, with `null`/absent fields becoming
/// empty strings. An empty row set yields an empty string with no header.
pub fn to_csv<T: Serialize>(rows: &[T], columns: &[&str]) -> AppResult<String> {
    if rows.is_empty() {
        return Ok(String::new());
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(columns.join(","));

    for row in rows {
        let value = serde_json::to_value(row)?;
        let object = value
            .as_object()
            .ok_or_else(|| AppError::internal("CSV rows must serialize to objects"))?;
        let fields: Vec<String> = columns
            .iter()
            .map(|column| escape_field(field_text(object.get(*column))))
            .collect();
        lines.push(fields.join(","));
    }

    Ok(lines.join("\n"))
}

/// Stringify one field value. `null` and absent fields become empty strings.
fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Quote a field only when it contains a separator, quote, or newline.
fn escape_field(field: String) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field
    }
}
