//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Handles conflicts via ON CONFLICT (no check-then-insert)
//! - Uses transactions for writes

pub mod aliases;

pub use aliases::PgAliasStore;
