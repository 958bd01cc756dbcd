use crate::error::OutputError;
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

/// How one column is filled from a row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldMapping {
    /// Column header shown in table output.
    pub name: String,

    /// Key looked up in each row. JSON and CSV output are keyed by this, not by `name`.
    pub key: String,

    /// Sub-fields to keep when the value is a nested object.
    #[serde(default)]
    pub fields: Option<Vec<String>>,

    /// Table-only wrap width.
    #[serde(default)]
    pub wrap: Option<NonZeroUsize>,
}

impl FieldMapping {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            fields: None,
            wrap: None,
        }
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the wrap width. Zero clears it.
    pub fn with_wrap(mut self, width: usize) -> Self {
        self.wrap = NonZeroUsize::new(width);
        self
    }
}

/// An ordered set of column mappings, loaded from one output schema file.
///
/// Iteration order is the declaration order of the schema and therefore the column order of
/// every renderer built from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    columns: Vec<(String, FieldMapping)>,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column, returning the config for chaining.
    ///
    /// An existing column with the same id is replaced in place.
    pub fn column(mut self, id: impl Into<String>, mapping: FieldMapping) -> Self {
        let id = id.into();
        match self.columns.iter_mut().find(|(existing, _)| *existing == id) {
            Some(slot) => slot.1 = mapping,
            None => self.columns.push((id, mapping)),
        }
        self
    }

    /// Parses the schema file format: a JSON object of `{"name", "key", "fields"?, "wrap"?}`
    /// entries whose key order is significant.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        let entries: Map<String, Value> = serde_json::from_str(text)?;
        let mut columns = Vec::with_capacity(entries.len());
        for (id, entry) in entries {
            let mapping = FieldMapping::deserialize(entry).map_err(|e| {
                serde_json::Error::custom(format!("column `{}`: {}", id, e))
            })?;
            columns.push((id, mapping));
        }
        Ok(Self { columns })
    }

    /// Reads a schema file. The file name is used as the schema id in parse errors.
    pub fn from_path(path: impl AsRef<Path>) -> crate::error::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text).map_err(|source| OutputError::SchemaParse {
            schema: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            source,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldMapping)> {
        self.columns
            .iter()
            .map(|(id, mapping)| (id.as_str(), mapping))
    }

    pub fn mappings(&self) -> impl Iterator<Item = &FieldMapping> {
        self.columns.iter().map(|(_, mapping)| mapping)
    }

    /// Column headers for table output.
    pub fn headers(&self) -> Vec<String> {
        self.mappings().map(|m| m.name.clone()).collect()
    }

    /// Source keys in column order; a key mapped twice is listed once, at its first position.
    pub fn source_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = Vec::with_capacity(self.columns.len());
        for mapping in self.mappings() {
            if !keys.contains(&mapping.key) {
                keys.push(mapping.key.clone());
            }
        }
        keys
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
