//! # okdata-output - Schema-driven rendering of API responses
//!
//! Every okdata command ends the same way: it holds a list of JSON objects returned by the
//! platform API and needs to show them to a human (a table) or to another program (JSON or
//! CSV). This crate does that projection and nothing else. It never fetches, caches,
//! paginates or validates data.
//!
//! ## Output schemas
//!
//! Which fields are shown, and under which column name, is declared per command in a small
//! JSON file:
//!
//! ```json
//! {
//!     "id": {"name": "ID", "key": "Id"},
//!     "contact": {"name": "Contact", "key": "contactPoint", "fields": ["name", "email"]},
//!     "keywords": {"name": "Keywords", "key": "keywords", "wrap": 30}
//! }
//! ```
//!
//! Key order in the file is the column order. `fields` extracts only the named sub-fields of
//! a nested object, and `wrap` is a line-wrap hint used by the table output.
//!
//! ## Rendering
//!
//! 1. Load an [`OutputConfig`] through a [`SchemaStore`]
//! 2. Pick a [`Renderer`] with [`create_output`] (`"json"`, `"csv"`, anything else is a table)
//! 3. Feed rows with [`Output::add_row`] / [`Output::add_rows`]
//! 4. Call [`Output::render`] once
//!
//! ```rust
//! use okdata_output::{FieldMapping, Output, OutputConfig, OutputFormat, Renderer};
//! use serde_json::json;
//!
//! let config = OutputConfig::new().column("id", FieldMapping::new("ID", "id"));
//! let mut out = Renderer::new(OutputFormat::Json, config);
//!
//! let row = json!({"id": "a", "ignored": true});
//! out.add_row(row.as_object().unwrap());
//! assert_eq!(out.render().unwrap(), r#"[{"id":"a"}]"#);
//! ```
//!
//! A configured key that is missing from a row is rendered as [`NOT_AVAILABLE`] (`"N/A"`),
//! never as an error.

mod cell;
mod csv_output;
mod error;
mod factory;
mod json;
mod project;
mod schema;
mod store;
mod table;

pub use cell::format_cell;
pub use csv_output::CsvOutput;
pub use error::{OutputError, Result};
pub use factory::{create_output, OutputFormat, Renderer};
pub use json::JsonOutput;
pub use project::{project, project_field, Projection, Row, NOT_AVAILABLE};
pub use schema::{FieldMapping, OutputConfig};
pub use store::{SchemaEntry, SchemaSource, SchemaStore};
pub use table::TableOutput;

/// An accumulating renderer.
///
/// Rows go in with [`add_row`](Output::add_row); the finished text comes out of
/// [`render`](Output::render). Implementations are write-then-read: adding rows after
/// rendering is not supported.
pub trait Output {
    /// Projects one row against the renderer's config and appends it.
    fn add_row(&mut self, row: &Row);

    /// Appends rows in order.
    fn add_rows<'a, I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = &'a Row>,
    {
        for row in rows {
            self.add_row(row);
        }
    }

    /// Asks for a bare object instead of a one-element array when exactly one row was added.
    ///
    /// Only JSON output honours this; the default ignores it.
    fn set_singular_object(&mut self, _singular: bool) {}

    /// Produces the final text, without a trailing newline.
    fn render(&self) -> Result<String>;
}
