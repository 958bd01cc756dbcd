//! Row projection shared by every renderer.
//!
//! A projection has exactly one value per configured column, in config order, regardless of
//! which keys the row carries or in which order.

use crate::schema::{FieldMapping, OutputConfig};
use serde_json::{Map, Value};

/// Placeholder for a configured key that the row does not have.
pub const NOT_AVAILABLE: &str = "N/A";

/// One API entity.
pub type Row = Map<String, Value>;

fn not_available() -> Value {
    Value::String(NOT_AVAILABLE.to_string())
}

/// The projected values of one row, paired with the mapping that produced each.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<'a> {
    fields: Vec<(&'a FieldMapping, Value)>,
}

impl<'a> Projection<'a> {
    pub fn iter(&self) -> impl Iterator<Item = (&'a FieldMapping, &Value)> {
        self.fields.iter().map(|(mapping, value)| (*mapping, value))
    }

    /// Values keyed by column header.
    pub fn by_display_name(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|(mapping, value)| (mapping.name.clone(), value.clone()))
            .collect()
    }

    /// Values keyed by source key, the shape used for JSON and CSV output.
    pub fn into_object(self) -> Map<String, Value> {
        self.fields
            .into_iter()
            .map(|(mapping, value)| (mapping.key.clone(), value))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Projects `row` against every column of `config`.
pub fn project<'a>(row: &Row, config: &'a OutputConfig) -> Projection<'a> {
    let fields = config
        .mappings()
        .map(|mapping| (mapping, project_field(row, mapping)))
        .collect();
    Projection { fields }
}

/// Resolves a single column.
///
/// With `fields` set and an object value, only the named sub-fields are kept, each defaulting
/// to [`NOT_AVAILABLE`]. Any other value, including a scalar where an object was expected,
/// is passed through unchanged.
pub fn project_field(row: &Row, mapping: &FieldMapping) -> Value {
    let Some(value) = row.get(&mapping.key) else {
        return not_available();
    };

    match (&mapping.fields, value) {
        (Some(fields), Value::Object(nested)) => Value::Object(extract_fields(nested, fields)),
        _ => value.clone(),
    }
}

fn extract_fields(nested: &Map<String, Value>, fields: &[String]) -> Map<String, Value> {
    fields
        .iter()
        .map(|field| {
            let value = nested.get(field).cloned().unwrap_or_else(not_available);
            (field.clone(), value)
        })
        .collect()
}
