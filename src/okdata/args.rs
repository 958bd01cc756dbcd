use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "okdata")]
#[command(about = "Render okdata API responses as tables, JSON or CSV", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, csv or table (default)
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Directory of output schemas that shadow the built-in ones
    #[arg(long, global = true, value_name = "DIR")]
    pub schema_dir: Option<PathBuf>,

    /// Never style table headers
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render JSON rows with an output schema
    Render {
        /// Schema id, e.g. teams_config.json (extension optional)
        schema: String,

        /// JSON file holding an array of objects or one object; `-` reads stdin
        #[arg(default_value = "-")]
        file: String,

        /// Emit a lone row as an object instead of a one-element array (JSON only)
        #[arg(long)]
        singular: bool,

        /// Line printed above the output (not for JSON)
        #[arg(short, long)]
        message: Option<String>,
    },

    /// List the available output schemas
    #[command(alias = "ls")]
    Schemas,
}
