//! Database layer - connection pool, schema and alias stores
//!
//! # Design Principles
//!
//! - One shared connection pool, injected into the store at startup
//! - Rely on the unique name index, handle conflicts - no check-then-insert
//! - Transactions for writes

pub mod memory;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;

pub use memory::MemoryAliasStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::PgAliasStore;
pub use schema::ensure_schema;
pub use store::{AliasStore, StoreError};
