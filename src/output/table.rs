//! Bordered text tables.
//!
//! ```text
//! +----+-------+
//! | ID | Title |
//! +----+-------+
//! | a  | First |
//! | b  | N/A   |
//! +----+-------+
//! ```
//!
//! Drawing is left to `comfy-table`; this module only decides what goes in each cell.

use crate::cell::{format_cell, join_sub_fields};
use crate::error::Result;
use crate::project::{project, Row};
use crate::schema::{FieldMapping, OutputConfig};
use crate::Output;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Table, TableComponent};
use console::Term;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone)]
pub struct TableOutput {
    config: OutputConfig,
    table: Table,
    use_color: bool,
}

impl TableOutput {
    /// Creates an empty table whose headers are the config's display names.
    ///
    /// Columns start centred. Header styling follows stdout's colour support; see
    /// [`with_color`](Self::with_color).
    pub fn new(config: OutputConfig) -> Self {
        let mut table = Table::new();
        table
            .load_preset(ASCII_FULL)
            .set_style(TableComponent::HeaderLines, '-')
            .set_style(TableComponent::MiddleHeaderIntersections, '+')
            .remove_style(TableComponent::HorizontalLines)
            .remove_style(TableComponent::MiddleIntersections)
            .remove_style(TableComponent::LeftBorderIntersections)
            .remove_style(TableComponent::RightBorderIntersections);

        let mut out = Self {
            config,
            table,
            use_color: false,
        };
        out.set_header();
        out.set_alignment(CellAlignment::Center);
        out.with_color(Term::stdout().features().colors_supported())
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        if use_color {
            self.table.enforce_styling();
        } else {
            self.table.force_no_tty();
        }
        self.set_header();
        self
    }

    pub fn headers(&self) -> Vec<String> {
        self.config.headers()
    }

    /// Formatted cells, one inner vector per added row.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.table
            .row_iter()
            .map(|row| row.cell_iter().map(Cell::content).collect())
            .collect()
    }

    fn set_header(&mut self) {
        let bold = self.use_color;
        let cells: Vec<Cell> = self
            .config
            .headers()
            .into_iter()
            .map(|name| {
                let cell = Cell::new(name);
                if bold {
                    cell.add_attribute(Attribute::Bold)
                } else {
                    cell
                }
            })
            .collect();
        self.table.set_header(cells);
    }

    fn set_alignment(&mut self, alignment: CellAlignment) {
        for column in self.table.column_iter_mut() {
            column.set_cell_alignment(alignment);
        }
    }
}

impl Output for TableOutput {
    fn add_row(&mut self, row: &Row) {
        let cells: Vec<Cell> = project(row, &self.config)
            .iter()
            .map(|(mapping, value)| Cell::new(table_cell(mapping, value)))
            .collect();
        tracing::debug!(columns = cells.len(), "table row added");
        self.table.add_row(cells);
        self.set_alignment(CellAlignment::Left);
    }

    fn render(&self) -> Result<String> {
        Ok(self.to_string())
    }
}

impl fmt::Display for TableOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.config.is_empty() {
            return Ok(());
        }
        write!(f, "{}", self.table)
    }
}

/// Turns a projected value into cell text; extracted sub-fields go one per line.
fn table_cell(mapping: &FieldMapping, value: &Value) -> String {
    match (&mapping.fields, value) {
        (Some(_), Value::Object(fields)) => {
            format_cell(&Value::String(join_sub_fields(fields)), mapping.wrap)
        }
        _ => format_cell(value, mapping.wrap),
    }
}
