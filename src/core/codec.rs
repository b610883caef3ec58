//! Line format: `field=value` pairs joined by `|`, fields in schema order.

use crate::core::{Record, Schema};
use crate::utils::error::{RecordError, Result};

pub const DELIMITER: char = '|';

/// Builds a record from `key=value` command-line items.
///
/// Every schema field is present in the result; fields not given are empty.
/// A repeated key keeps its last value.
pub fn parse_items<S: AsRef<str>>(schema: &Schema, items: &[S]) -> Result<Record> {
    let mut record = Record::new();

    for item in items {
        let item = item.as_ref();
        let (key, value) = item.split_once('=').ok_or_else(|| RecordError::InvalidItem {
            item: item.to_string(),
        })?;

        if !schema.is_known(key) {
            return Err(RecordError::UnknownField {
                field: key.to_string(),
            });
        }
        if value.contains(DELIMITER) {
            return Err(RecordError::DelimiterInValue {
                field: key.to_string(),
                value: value.to_string(),
            });
        }
        if value.contains(['\n', '\r']) {
            return Err(RecordError::LineBreakInValue {
                field: key.to_string(),
                value: value.to_string(),
            });
        }

        record.set(key, value);
    }

    for field in &schema.fields {
        record.values.entry(field.clone()).or_default();
    }

    Ok(record)
}

pub fn format_record(schema: &Schema, record: &Record) -> String {
    schema
        .fields
        .iter()
        .map(|field| format!("{}={}", field, record.get(field)))
        .collect::<Vec<_>>()
        .join(&DELIMITER.to_string())
}

/// Parses one stored line. Keys are taken as written; they are not checked against the schema.
/// Only the line terminator is stripped, so whitespace at either end belongs to a value.
pub fn parse_line(line: &str) -> Result<Record> {
    let mut record = Record::new();

    for part in line.trim_end_matches(['\r', '\n']).split(DELIMITER) {
        if part.is_empty() {
            continue;
        }
        let (key, value) = part.split_once('=').ok_or_else(|| RecordError::MalformedLine {
            part: part.to_string(),
        })?;
        record.set(key, value);
    }

    Ok(record)
}
