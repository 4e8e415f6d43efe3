//! Product API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use product_api::api::{self, ApiError, Config};
use product_api::db::{Database, DbError, SqliteDatabase, resolve_db_path};
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(product_api::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(product_api::binary::io))]
    Io(#[from] std::io::Error),

    #[error("API server error: {0}")]
    #[diagnostic(code(product_api::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "product-api")]
#[command(author, version, about = "Product CRUD API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Database file path (defaults to PRODUCT_API_DB, then ./products.db)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Serve OpenAPI documentation at /docs
    #[arg(long)]
    docs: bool,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    serve(cli).await?;
    Ok(())
}

async fn serve(cli: Cli) -> Result<(), BinaryError> {
    let db_path = resolve_db_path(cli.db);

    println!("Opening database at {:?}", db_path);

    // Ensure parent directory exists
    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteDatabase::open(&db_path).await?;
    db.init_schema().await?;

    println!("Listening on http://{}:{}", cli.host, cli.port);
    println!("Press Ctrl+C to quit");

    api::run(
        Config {
            host: cli.host,
            port: cli.port,
            verbosity: cli.verbose,
            enable_docs: cli.docs,
        },
        db,
    )
    .await?;

    Ok(())
}
