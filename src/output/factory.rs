use crate::csv_output::CsvOutput;
use crate::error::Result;
use crate::json::JsonOutput;
use crate::project::Row;
use crate::schema::OutputConfig;
use crate::store::SchemaStore;
use crate::table::TableOutput;
use crate::Output;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    /// `"json"` and `"csv"` select those formats; anything else, or nothing, is a table.
    pub fn from_hint(hint: Option<&str>) -> Self {
        match hint {
            Some("json") => OutputFormat::Json,
            Some("csv") => OutputFormat::Csv,
            _ => OutputFormat::Table,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three renderers, chosen by format.
#[derive(Debug, Clone)]
pub enum Renderer {
    Table(TableOutput),
    Json(JsonOutput),
    Csv(CsvOutput),
}

impl Renderer {
    pub fn new(format: OutputFormat, config: OutputConfig) -> Self {
        match format {
            OutputFormat::Table => Renderer::Table(TableOutput::new(config)),
            OutputFormat::Json => Renderer::Json(JsonOutput::new(config)),
            OutputFormat::Csv => Renderer::Csv(CsvOutput::new(config)),
        }
    }

    pub fn format(&self) -> OutputFormat {
        match self {
            Renderer::Table(_) => OutputFormat::Table,
            Renderer::Json(_) => OutputFormat::Json,
            Renderer::Csv(_) => OutputFormat::Csv,
        }
    }

    /// Overrides colour detection for table headers. JSON and CSV are never styled.
    pub fn with_color(self, use_color: bool) -> Self {
        match self {
            Renderer::Table(table) => Renderer::Table(table.with_color(use_color)),
            other => other,
        }
    }
}

impl Output for Renderer {
    fn add_row(&mut self, row: &Row) {
        match self {
            Renderer::Table(out) => out.add_row(row),
            Renderer::Json(out) => out.add_row(row),
            Renderer::Csv(out) => out.add_row(row),
        }
    }

    fn set_singular_object(&mut self, singular: bool) {
        match self {
            Renderer::Table(out) => out.set_singular_object(singular),
            Renderer::Json(out) => out.set_singular_object(singular),
            Renderer::Csv(out) => out.set_singular_object(singular),
        }
    }

    fn render(&self) -> Result<String> {
        match self {
            Renderer::Table(out) => out.render(),
            Renderer::Json(out) => out.render(),
            Renderer::Csv(out) => out.render(),
        }
    }
}

/// Loads `schema_id` from `store` and builds the renderer for `format_hint` around it.
pub fn create_output(
    format_hint: Option<&str>,
    schema_id: &str,
    store: &SchemaStore,
) -> Result<Renderer> {
    let config = store.load(format_hint, schema_id)?;
    Ok(Renderer::new(OutputFormat::from_hint(format_hint), config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OutputError;
    use crate::schema::FieldMapping;
    use serde_json::{json, Value};

    fn rows() -> Vec<Row> {
        vec![
            json!({"id": "a"}).as_object().cloned().unwrap(),
            json!({"id": "b"}).as_object().cloned().unwrap(),
        ]
    }

    fn id_config() -> OutputConfig {
        OutputConfig::new().column("id", FieldMapping::new("ID", "id"))
    }

    #[test]
    fn test_format_from_hint() {
        assert_eq!(OutputFormat::from_hint(Some("json")), OutputFormat::Json);
        assert_eq!(OutputFormat::from_hint(Some("csv")), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_hint(Some("table")), OutputFormat::Table);
        assert_eq!(OutputFormat::from_hint(Some("JSON")), OutputFormat::Table);
        assert_eq!(OutputFormat::from_hint(Some("yaml")), OutputFormat::Table);
        assert_eq!(OutputFormat::from_hint(None), OutputFormat::Table);
    }

    #[test]
    fn test_renderer_matches_format() {
        for format in [OutputFormat::Table, OutputFormat::Json, OutputFormat::Csv] {
            assert_eq!(Renderer::new(format, id_config()).format(), format);
        }
    }

    #[test]
    fn test_same_rows_three_ways() {
        let mut table = Renderer::new(OutputFormat::Table, id_config()).with_color(false);
        let mut json = Renderer::new(OutputFormat::Json, id_config());
        let mut csv = Renderer::new(OutputFormat::Csv, id_config());
        for out in [&mut table, &mut json, &mut csv] {
            out.add_rows(&rows());
        }

        let table_text = table.render().unwrap();
        assert!(table_text.contains("| ID |"));
        assert!(table_text.contains("| a  |"));
        assert!(table_text.contains("| b  |"));

        let parsed: Value = serde_json::from_str(&json.render().unwrap()).unwrap();
        assert_eq!(parsed, json!([{"id": "a"}, {"id": "b"}]));

        assert_eq!(csv.render().unwrap(), "id\na\nb");
    }

    #[test]
    fn test_sub_field_end_to_end() {
        let config = OutputConfig::new().column(
            "contact",
            FieldMapping::new("Contact", "contact").with_fields(["email"]),
        );
        let row = json!({"contact": {"email": "x@y.z"}}).as_object().cloned().unwrap();

        let mut table = Renderer::new(OutputFormat::Table, config.clone()).with_color(false);
        table.add_row(&row);
        assert!(table.render().unwrap().contains("| x@y.z   |"));

        let mut json = Renderer::new(OutputFormat::Json, config);
        json.add_row(&row);
        let parsed: Value = serde_json::from_str(&json.render().unwrap()).unwrap();
        assert_eq!(parsed, json!([{"contact": {"email": "x@y.z"}}]));
    }

    #[test]
    fn test_singular_flag_only_affects_json() {
        let row = rows().remove(0);

        let mut json = Renderer::new(OutputFormat::Json, id_config());
        json.set_singular_object(true);
        json.add_row(&row);
        assert_eq!(json.render().unwrap(), r#"{"id":"a"}"#);

        let mut csv = Renderer::new(OutputFormat::Csv, id_config());
        csv.set_singular_object(true);
        csv.add_row(&row);
        assert_eq!(csv.render().unwrap(), "id\na");
    }

    #[test]
    fn test_create_output_from_builtin_schema() {
        let store = SchemaStore::builtin();
        let out = create_output(Some("csv"), "teams_config.json", &store).unwrap();
        assert_eq!(out.format(), OutputFormat::Csv);
    }

    #[test]
    fn test_create_output_unknown_schema_fails() {
        let store = SchemaStore::builtin();
        let err = create_output(None, "nope_config.json", &store).unwrap_err();
        assert!(matches!(err, OutputError::SchemaNotFound(_)));
    }
}
