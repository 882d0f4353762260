//! todo-server binary entry point

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use todo_server::db::{self, migrations};
use todo_server::http::{run_server, ServerConfig};

/// Arguments for the server
#[derive(Parser, Debug)]
#[command(name = "todo-server", about = "HTTP CRUD service for a todo list")]
struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    bind: SocketAddr,

    /// Database file path (created if missing)
    #[arg(long, env = "TODO_DB_PATH", default_value = "todos.db")]
    db_path: PathBuf,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    cors_permissive: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let args = ServeArgs::parse();
    tracing::info!("Opening database at {}", args.db_path.display());

    let pool = db::create_pool(&args.db_path)
        .await
        .context("Failed to open database")?;

    migrations::run(&pool)
        .await
        .context("Schema initialization failed")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
