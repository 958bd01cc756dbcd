use crate::error::Result;
use crate::project::{project, Row};
use crate::schema::OutputConfig;
use crate::Output;
use serde_json::{Map, Value};

/// JSON output keyed by source key.
///
/// Extracted sub-fields stay nested objects. With [`singular_object`](Self::singular_object)
/// set and exactly one row added, the row is emitted as a bare object so that it can be piped
/// straight into `jq`; otherwise the result is always an array.
#[derive(Debug, Clone)]
pub struct JsonOutput {
    config: OutputConfig,
    out: Vec<Map<String, Value>>,
    singular_object: bool,
}

impl JsonOutput {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            config,
            out: Vec::new(),
            singular_object: false,
        }
    }

    pub fn singular_object(&self) -> bool {
        self.singular_object
    }

    /// Projected rows in insertion order.
    pub fn rows(&self) -> &[Map<String, Value>] {
        &self.out
    }

    fn document(&self) -> Value {
        match self.out.as_slice() {
            [only] if self.singular_object => Value::Object(only.clone()),
            rows => Value::Array(rows.iter().cloned().map(Value::Object).collect()),
        }
    }
}

impl Output for JsonOutput {
    fn add_row(&mut self, row: &Row) {
        let projected = project(row, &self.config).into_object();
        tracing::debug!(columns = projected.len(), "json row added");
        self.out.push(projected);
    }

    fn set_singular_object(&mut self, singular: bool) {
        self.singular_object = singular;
    }

    fn render(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.document())?)
    }
}
