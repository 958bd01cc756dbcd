use clap::Parser;
use console::Term;
use okdata::config::OkdataConfig;
use okdata::error::Result;
use okdata::input::read_rows;
use okdata::logging;
use okdata::print::print;
use okdata_output::{create_output, Output, SchemaStore};
use serde_json::json;
use tracing::debug;

mod args;
use args::{Cli, Commands};

const SCHEMAS_SCHEMA: &str = "schemas_config.json";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    store: SchemaStore,
    format: Option<String>,
    use_color: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug);
    let ctx = init_context(&cli)?;

    match cli.command {
        Commands::Render {
            schema,
            file,
            singular,
            message,
        } => handle_render(&ctx, &schema, &file, singular, message.as_deref()),
        Commands::Schemas => handle_schemas(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = OkdataConfig::config_dir()?;
    let config = OkdataConfig::load(&config_dir)?;
    debug!(config_dir = %config_dir.display(), "loaded configuration");

    let store = match config.resolve_output_format_dir(cli.schema_dir.clone()) {
        Some(dir) => SchemaStore::with_dir(dir),
        None => SchemaStore::builtin(),
    };

    Ok(AppContext {
        store,
        format: config.resolve_format(cli.format.clone()),
        use_color: !cli.no_color && Term::stdout().features().colors_supported(),
    })
}

fn handle_render(
    ctx: &AppContext,
    schema: &str,
    file: &str,
    singular: bool,
    message: Option<&str>,
) -> Result<()> {
    let input = read_rows(file)?;
    let mut out =
        create_output(ctx.format.as_deref(), schema, &ctx.store)?.with_color(ctx.use_color);
    out.set_singular_object(singular || input.single);
    out.add_rows(&input.rows);
    print(message, &out)
}

fn handle_schemas(ctx: &AppContext) -> Result<()> {
    let entries = ctx.store.list()?;
    let mut out =
        create_output(ctx.format.as_deref(), SCHEMAS_SCHEMA, &ctx.store)?.with_color(ctx.use_color);

    for entry in &entries {
        let row = json!({
            "id": entry.id,
            "source": entry.source.to_string(),
            "columns": entry.config.headers(),
        });
        if let Some(row) = row.as_object() {
            out.add_row(row);
        }
    }
    print(None, &out)
}
