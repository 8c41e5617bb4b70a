//! aliasd-server: HTTP alias registry
//!
//! Lists aliases and creates or updates them by name, persisting to
//! PostgreSQL through an injected [`db::AliasStore`].

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod state;

use std::sync::Arc;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;

use db::{create_pool_with_options, ensure_schema, PgAliasStore};
use http::{shutdown_signal, Server};

/// Start the HTTP server and block until it has shut down.
///
/// Connects to the database, ensures the schema, binds the listener and
/// serves until Ctrl+C or SIGTERM. Every error returned is fatal.
pub async fn serve(config: Config) -> Result<()> {
    let pool = create_pool_with_options(&config.database_url, config.max_connections)
        .await
        .map_err(Error::Config)?;

    ensure_schema(&pool).await.map_err(Error::Schema)?;

    let state = AppState::new(Arc::new(PgAliasStore::new(pool)));
    let server = Server::bind(config.bind_addr, state, config.drain_timeout).await?;

    server.run_until(shutdown_signal()).await
}
