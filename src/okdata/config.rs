use crate::error::{OkdataError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Overrides the directory holding `config.json`.
pub const CONFIG_DIR_ENV: &str = "OKDATA_CONFIG_DIR";

/// Directory of output schemas layered over the built-in ones.
pub const OUTPUT_FORMAT_DIR_ENV: &str = "OKDATA_OUTPUT_FORMAT_DIR";

/// User configuration, stored as `config.json` in the platform config directory.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct OkdataConfig {
    /// Output format used when `--format` is not given (`table`, `json` or `csv`).
    #[serde(default)]
    pub format: Option<String>,

    /// Directory of output schema files that shadow the built-in ones.
    #[serde(default)]
    pub output_format_dir: Option<PathBuf>,
}

impl OkdataConfig {
    /// Resolves the config directory: `OKDATA_CONFIG_DIR` if set, else the platform default.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        ProjectDirs::from("no", "okdata", "okdata")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| OkdataError::Config("could not determine config directory".into()))
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        serde_json::from_str(&content).map_err(|e| {
            OkdataError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    /// Picks the schema override directory: flag, then environment, then this config.
    pub fn resolve_output_format_dir(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| {
            std::env::var_os(OUTPUT_FORMAT_DIR_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| self.output_format_dir.clone())
    }

    /// Picks the output format: flag, then this config. `None` means table.
    pub fn resolve_format(&self, flag: Option<String>) -> Option<String> {
        flag.or_else(|| self.format.clone())
    }
}
