//! Reading rows to render.

use crate::error::{OkdataError, Result};
use okdata_output::Row;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Rows read from one input source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowInput {
    pub rows: Vec<Row>,
    /// The source held one bare object rather than an array.
    pub single: bool,
}

/// Reads rows from `source`: `-` is stdin, anything else a file path.
pub fn read_rows(source: &str) -> Result<RowInput> {
    let text = if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        let path = Path::new(source);
        if !path.is_file() {
            return Err(OkdataError::Input(format!("no such file: {}", source)));
        }
        fs::read_to_string(path)?
    };
    parse_rows(&text)
}

/// Accepts a JSON array of objects or a single object.
pub fn parse_rows(text: &str) -> Result<RowInput> {
    let value: Value = serde_json::from_str(text)?;
    match value {
        Value::Object(row) => Ok(RowInput {
            rows: vec![row],
            single: true,
        }),
        Value::Array(items) => {
            let rows = items
                .into_iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::Object(row) => Ok(row),
                    other => Err(OkdataError::Input(format!(
                        "element {} is not an object: {}",
                        index, other
                    ))),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(RowInput {
                rows,
                single: false,
            })
        }
        other => Err(OkdataError::Input(format!(
            "expected a JSON object or array, got {}",
            other
        ))),
    }
}
