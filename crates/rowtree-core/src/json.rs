//! Loosely typed JSON ingest.
//!
//! Data sources usually hand over arrays of JSON objects. Each object's
//! `id` key becomes the raw identifier, the configured children field (see
//! [`ColumnConfig::children_field`]) holds nested rows, and every other key
//! is a column. A children field that is absent, `null`, or an empty array
//! all mean "leaf".
//!
//! Column names are not checked here. Normalization rejects columns named
//! after a structural field (see [`STRUCTURAL_FIELDS`](crate::row::STRUCTURAL_FIELDS)).

use serde_json::Value as Json;

use crate::config::ColumnConfig;
use crate::error::{TreeError, TreeResult};
use crate::row::RawRow;
use crate::value::Value;

/// Key holding a raw row's identifier.
pub const ID_FIELD: &str = "id";

/// Parse a JSON array of row objects.
pub fn raw_rows_from_json(json: &Json, config: &ColumnConfig) -> TreeResult<Vec<RawRow>> {
    let mut path = Vec::new();
    parse_rows(json, config, &mut path)
}

impl RawRow {
    /// Parse a single JSON row object (and its nested children).
    pub fn from_json(json: &Json, config: &ColumnConfig) -> TreeResult<RawRow> {
        let mut path = Vec::new();
        parse_row(json, config, &mut path)
    }
}

fn parse_rows(json: &Json, config: &ColumnConfig, path: &mut Vec<usize>) -> TreeResult<Vec<RawRow>> {
    let Json::Array(items) = json else {
        return Err(TreeError::InvalidRow {
            path: path.clone(),
            reason: format!("expected an array of rows, found {}", kind(json)),
        });
    };

    let mut rows = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        path.push(i);
        rows.push(parse_row(item, config, path)?);
        path.pop();
    }
    Ok(rows)
}

fn parse_row(json: &Json, config: &ColumnConfig, path: &mut Vec<usize>) -> TreeResult<RawRow> {
    let Json::Object(object) = json else {
        return Err(TreeError::InvalidRow {
            path: path.clone(),
            reason: format!("expected an object, found {}", kind(json)),
        });
    };

    let mut row = RawRow::anonymous();
    for (key, value) in object {
        if key == ID_FIELD {
            row.id = match value {
                Json::Null => None,
                Json::String(s) => Some(s.clone()),
                other => Some(Value::from_json(other).to_string()),
            };
        } else if *key == config.children_field {
            row.children = match value {
                Json::Null => Vec::new(),
                other => parse_rows(other, config, path)?,
            };
        } else {
            row.fields.insert(key.clone(), Value::from_json(value));
        }
    }
    Ok(row)
}

fn kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}
