use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Output schema not found: {0}")]
    SchemaNotFound(String),

    #[error("Invalid output schema {schema}: {source}")]
    SchemaParse {
        schema: String,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, OutputError>;
