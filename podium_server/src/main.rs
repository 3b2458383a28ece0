//! Tournament points server over a PostgreSQL document store.
//!
//! Wires the `podium` library to an axum HTTP API: loads configuration,
//! connects the store, and serves until Ctrl+C.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Error;
use pico_args::Arguments;
use podium::db::{Database, PgTournamentStore, TournamentStore};
use podium::tournament::TournamentManager;
use tracing::info;

use podium_server::api::{self, AppState};
use podium_server::config::ServerConfig;
use podium_server::{logging, metrics};

const HELP: &str = "\
Run a tournament points server

USAGE:
  podium_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:8080]
  --db-url     URL         Database connection string  [default: env DATABASE_URL or postgres://postgres@localhost/podium_db]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  DATABASE_URL             PostgreSQL connection string
  METRICS_BIND             Prometheus exporter bind address (disabled when unset)
  DB_MAX_CONNECTIONS       Connection pool upper bound  [default: 100]
  DB_MIN_CONNECTIONS       Connection pool lower bound  [default: 5]
  DB_CONNECTION_TIMEOUT_SECS  Pool acquire timeout      [default: 5]
  DB_IDLE_TIMEOUT_SECS     Idle connection timeout      [default: 300]
  DB_MAX_LIFETIME_SECS     Connection max lifetime      [default: 1800]
  (See .env file for all configuration options)
";

struct Args {
    bind: Option<SocketAddr>,
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        bind: pargs.opt_value_from_str("--bind")?,
        database_url: pargs.opt_value_from_str("--db-url")?,
    };

    logging::init();

    let config = ServerConfig::from_env(args.bind, args.database_url)?;
    config.validate()?;

    if let Some(metrics_bind) = config.metrics_bind {
        metrics::init_metrics(metrics_bind)
            .map_err(|e| anyhow::anyhow!("Failed to start metrics exporter: {}", e))?;
        info!("Metrics exporter listening on {}", metrics_bind);
    }

    info!("Connecting to database...");
    let db = Database::new(&config.database)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database: {}", e))?;

    PgTournamentStore::ensure_schema(db.pool())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to prepare schema: {}", e))?;

    info!("Database connected successfully");

    let store: Arc<dyn TournamentStore> = Arc::new(PgTournamentStore::new(db.pool().clone()));
    let manager = TournamentManager::new(store.clone());

    let state = AppState { manager, store };
    let app = api::create_router(state);

    info!("Starting HTTP server on {}", config.bind);
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.bind, e))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
}
