//! HTTP server layer
//!
//! Axum server with:
//! - a single `/aliases` resource
//! - request tracing
//! - graceful shutdown with a bounded drain
//! - plain-text error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, shutdown_signal, Phase, Server, DRAIN_TIMEOUT};
