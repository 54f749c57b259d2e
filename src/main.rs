use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use quill::config::Config;
use quill::db;
use quill::db::sqlite::SqliteCatalog;
use quill::db::traits::AuthorCatalog;
use quill::dna::{extract, matcher};
use quill::output::terminal;

/// Quill: stylometric fingerprinting and literary author matching.
///
/// Analyzes a writing sample's style — vocabulary, complexity, pacing,
/// abstraction — and finds the catalog author whose fingerprint it most
/// resembles.
#[derive(Parser)]
#[command(name = "quill", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database
    Init,

    /// Import a catalog seed bundle (JSON)
    Seed {
        /// Path to the seed file
        file: PathBuf,
    },

    /// Analyze a writing sample and find the closest authors
    Analyze {
        /// Read the text from a file (default: stdin)
        file: Option<PathBuf>,

        /// Also report the best match within each era
        #[arg(long)]
        by_era: bool,
    },

    /// List the author catalog with stored fingerprints
    Authors,

    /// Show system status (DB path, table and row counts)
    Status,

    /// Start the web API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "5000")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quill=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            info!("Initializing quill database...");
            let config = Config::load()?;
            let catalog = init_catalog(&config)?;
            let table_count = catalog.table_count().await?;
            println!("Database initialized at: {}", config.db_path);
            println!("Tables created: {table_count}");
            println!("\nQuill is ready. Next step: import a catalog bundle:");
            println!("  quill seed authors.json");
        }

        Commands::Seed { file } => {
            let config = Config::load()?;
            let catalog = open_catalog(&config)?;

            let json = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read seed file {}", file.display()))?;
            let bundle = db::seed::parse(&json)?;

            let report = catalog.import_catalog(&bundle).await?;
            info!(
                eras = report.eras,
                authors = report.authors,
                works = report.works,
                connections = report.connections,
                events = report.events,
                "Imported catalog bundle"
            );
            println!(
                "Imported {} eras, {} authors, {} works, {} connections, {} events.",
                report.eras, report.authors, report.works, report.connections, report.events
            );
        }

        Commands::Analyze { file, by_era } => {
            let config = Config::load()?;
            let catalog = open_catalog(&config)?;

            let text = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read text from stdin")?;
                    buf
                }
            };

            // Input floor is the calling layer's job — the core itself
            // degrades gracefully on anything.
            config.require_text(&text)?;

            let query = extract::extract(&text);

            let authors = catalog.list_authors().await?;
            let eras = if by_era {
                Some(catalog.list_eras().await?)
            } else {
                None
            };

            let outcome = matcher::rank(&query, &authors, eras.as_deref());
            info!(
                candidates = authors.len(),
                score = outcome.score,
                best = outcome
                    .best
                    .as_ref()
                    .map(|b| b.author.name.as_str())
                    .unwrap_or("-"),
                "Ranked writing sample"
            );

            terminal::display_match(&outcome);
        }

        Commands::Authors => {
            let config = Config::load()?;
            let catalog = open_catalog(&config)?;
            let authors = catalog.list_authors().await?;
            terminal::display_authors(&authors);
        }

        Commands::Status => {
            let config = Config::load()?;
            let catalog = open_catalog(&config)?;
            let table_count = catalog.table_count().await?;
            let counts = catalog.counts().await?;

            println!("\n{}", "=== Quill Status ===".bold());
            println!("  Database: {}", config.db_path);
            println!("  Tables: {table_count}");
            println!(
                "  Catalog: {} authors, {} eras, {} works, {} connections, {} events",
                counts.authors, counts.eras, counts.works, counts.connections, counts.events
            );
            println!();
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            let catalog: Arc<dyn AuthorCatalog> = Arc::new(SqliteCatalog::new(db::initialize(
                &config.db_path,
            )?));
            quill::web::run_server(config, catalog, port, &bind).await?;
        }
    }

    Ok(())
}

/// Create (or open) the database and wrap it in the catalog trait object.
fn init_catalog(config: &Config) -> Result<Arc<dyn AuthorCatalog>> {
    let conn = db::initialize(&config.db_path)?;
    Ok(Arc::new(SqliteCatalog::new(conn)))
}

/// Open an existing database; fails with a hint when `init` hasn't run.
fn open_catalog(config: &Config) -> Result<Arc<dyn AuthorCatalog>> {
    let conn = db::open(&config.db_path)?;
    Ok(Arc::new(SqliteCatalog::new(conn)))
}
