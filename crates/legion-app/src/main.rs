//! # LEGION OS - Archivist Kernel
//!
//! Entry point that wires everything together.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                            │
//! │    ├── Loads:   the JSON dataset, once (DatasetLoader)          │
//! │    ├── Creates: InMemoryRosterRepository (adapter)              │
//! │    ├── Creates: AppState + router (HTTP controller)             │
//! │    └── Serves:  until the process is stopped                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod config;

use clap::Parser;
use legion_adapter::{routes, AppState, DatasetLoader, InMemoryRosterRepository};
use legion_domain::RosterRepository;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

const DEFAULT_LOG_FILTER: &str = "legion=info,legion_adapter=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::parse();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        dataset = %config.dataset.display(),
        "LEGION OS: Archivist Kernel starting"
    );

    // ========================================
    // Load the roster - once, before serving
    // ========================================

    let roster = InMemoryRosterRepository::new(DatasetLoader::new(&config.dataset).load());

    let unnamed = roster.unnamed_count();
    if unnamed > 0 {
        debug!(unnamed, "records without a usable name cannot be analyzed");
    }
    info!(database_size = roster.count()?, "roster ready");

    // ========================================
    // Serve
    // ========================================

    let app = routes(AppState::new(roster));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
