//! Error types for aliasd-server
//!
//! Everything here is fatal to the process. Per-request failures are
//! handled at the handler boundary by `http::ApiError` instead.

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Backend could not be opened at startup
    #[error("failed to connect to database: {0}")]
    Config(#[source] sqlx::Error),

    /// Aliases table could not be created at startup
    #[error("failed to create aliases table: {0}")]
    Schema(#[source] sqlx::Error),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] io::Error),

    /// In-flight requests outlived the drain budget
    #[error("server shutdown error: requests still in flight after {0:?}")]
    ShutdownTimeout(Duration),

    #[error("server task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::ShutdownTimeout(Duration::from_secs(10));
        assert_eq!(
            err.to_string(),
            "server shutdown error: requests still in flight after 10s"
        );
    }

    #[test]
    fn bind_error_names_address() {
        let err = Error::Bind {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            source: io::Error::from(io::ErrorKind::AddrInUse),
        };
        assert!(err.to_string().starts_with("failed to bind 0.0.0.0:8080: "));
    }
}
