//! Server configuration

use std::net::SocketAddr;
use std::time::Duration;

use crate::db::pool::DEFAULT_MAX_CONNECTIONS;
use crate::http::server::DRAIN_TIMEOUT;

pub const DEFAULT_PORT: u16 = 8080;

/// Placeholder connection string; operators are expected to override it.
pub const DEFAULT_DATABASE_URL: &str =
    "postgres://your_username@localhost/your_database?sslmode=disable";

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind to (default: 0.0.0.0:8080)
    pub bind_addr: SocketAddr,

    /// PostgreSQL connection string
    pub database_url: String,

    /// Maximum connections in the backend pool
    pub max_connections: u32,

    /// Budget for in-flight requests once shutdown starts
    pub drain_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            drain_timeout: DRAIN_TIMEOUT,
        }
    }
}
