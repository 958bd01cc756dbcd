//! Where output schemas come from.
//!
//! Schemas ship embedded in the binary. A directory can be layered on top: a file there with
//! the same id shadows the built-in one, and new ids become available.

use crate::error::{OutputError, Result};
use crate::schema::OutputConfig;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const SCHEMA_EXTENSION: &str = ".json";

macro_rules! builtin {
    ($($name:literal),* $(,)?) => {
        &[$(($name, include_str!(concat!("data/output-format/", $name)))),*]
    };
}

const BUILTIN_SCHEMAS: &[(&str, &str)] = builtin![
    "datasets_config.json",
    "datasets_dataset_config.json",
    "datasets_dataset_versions_config.json",
    "my_permissions_config.json",
    "pipelines_config.json",
    "schemas_config.json",
    "status_config.json",
    "team_members_config.json",
    "teams_config.json",
    "webhook_token_list_config.json",
    "webhooks_token_config.json",
    "webhooks_token_delete_config.json",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for SchemaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaSource::Builtin => f.write_str("builtin"),
            SchemaSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A schema known to the store, as reported by [`SchemaStore::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry {
    pub id: String,
    pub source: SchemaSource,
    pub config: OutputConfig,
}

#[derive(Debug, Clone, Default)]
pub struct SchemaStore {
    dir: Option<PathBuf>,
}

impl SchemaStore {
    /// A store with only the embedded schemas.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// A store that checks `dir` before the embedded schemas.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Loads the schema for one command invocation.
    ///
    /// `schema_id` is a file name such as `teams_config.json`; the extension may be left off.
    /// A missing or malformed schema is an error for the caller to propagate, never a reason
    /// to fall back to some other output.
    pub fn load(&self, format_hint: Option<&str>, schema_id: &str) -> Result<OutputConfig> {
        let id = normalize_id(schema_id)?;
        let (source, config) = self.read(&id)?;
        info!(
            format = format_hint.unwrap_or("table"),
            schema = %id,
            source = %source,
            "Creating output format"
        );
        Ok(config)
    }

    /// Every schema id the store can load, sorted, with directory entries shadowing built-ins.
    pub fn list(&self) -> Result<Vec<SchemaEntry>> {
        let mut entries: Vec<SchemaEntry> = Vec::new();

        if let Some(dir) = self.dir.as_deref().filter(|d| d.is_dir()) {
            for dir_entry in fs::read_dir(dir)? {
                let path = dir_entry?.path();
                let Some(id) = path.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                if !path.is_file() || !id.ends_with(SCHEMA_EXTENSION) {
                    continue;
                }
                entries.push(SchemaEntry {
                    id: id.to_string(),
                    config: OutputConfig::from_path(&path)?,
                    source: SchemaSource::File(path),
                });
            }
        }

        for (id, text) in BUILTIN_SCHEMAS {
            if entries.iter().any(|e| e.id == *id) {
                continue;
            }
            entries.push(SchemaEntry {
                id: id.to_string(),
                source: SchemaSource::Builtin,
                config: parse(id, text)?,
            });
        }

        entries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(entries)
    }

    fn read(&self, id: &str) -> Result<(SchemaSource, OutputConfig)> {
        if let Some(dir) = &self.dir {
            let path = dir.join(id);
            if path.is_file() {
                debug!(path = %path.display(), "reading output schema from disk");
                let config = OutputConfig::from_path(&path)?;
                return Ok((SchemaSource::File(path), config));
            }
        }

        let (_, text) = BUILTIN_SCHEMAS
            .iter()
            .find(|(name, _)| *name == id)
            .ok_or_else(|| OutputError::SchemaNotFound(id.to_string()))?;
        Ok((SchemaSource::Builtin, parse(id, text)?))
    }
}

fn normalize_id(schema_id: &str) -> Result<String> {
    let id = schema_id.trim();
    if id.is_empty() || id.contains(['/', '\\']) || id.starts_with('.') {
        return Err(OutputError::SchemaNotFound(schema_id.to_string()));
    }
    if id.ends_with(SCHEMA_EXTENSION) {
        Ok(id.to_string())
    } else {
        Ok(format!("{}{}", id, SCHEMA_EXTENSION))
    }
}

fn parse(id: &str, text: &str) -> Result<OutputConfig> {
    OutputConfig::from_json_str(text).map_err(|source| OutputError::SchemaParse {
        schema: id.to_string(),
        source,
    })
}
