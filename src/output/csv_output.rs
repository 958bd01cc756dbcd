use crate::cell::display_value;
use crate::error::{OutputError, Result};
use crate::project::{project, Row};
use crate::schema::OutputConfig;
use crate::Output;
use csv::{Terminator, WriterBuilder};
use serde_json::{Map, Value};
use std::io;

/// CSV output keyed by source key.
///
/// The header comes from the config, so an output without rows still renders its header line.
#[derive(Debug, Clone)]
pub struct CsvOutput {
    config: OutputConfig,
    out: Vec<Map<String, Value>>,
}

impl CsvOutput {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            config,
            out: Vec::new(),
        }
    }

    /// Projected rows in insertion order, before CSV field conversion.
    pub fn rows(&self) -> &[Map<String, Value>] {
        &self.out
    }
}

impl Output for CsvOutput {
    fn add_row(&mut self, row: &Row) {
        let projected = project(row, &self.config).into_object();
        tracing::debug!(columns = projected.len(), "csv row added");
        self.out.push(projected);
    }

    fn render(&self) -> Result<String> {
        let header = self.config.source_keys();
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(&header)?;
        for row in &self.out {
            let record: Vec<String> = header
                .iter()
                .map(|key| row.get(key).map(csv_field).unwrap_or_default())
                .collect();
            writer.write_record(&record)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))?;
        let text = String::from_utf8(bytes)
            .map_err(|e| OutputError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        Ok(text.trim_end_matches('\n').to_string())
    }
}

/// Strings lose embedded newlines, lists are `;`-joined, `null` is an empty field.
fn csv_field(value: &Value) -> String {
    match value {
        Value::String(text) => text.replace('\n', ""),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(";"),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
