//! Alias store contract shared by the Postgres and in-memory backends

use async_trait::async_trait;

use crate::models::Alias;

/// Store error type
///
/// Every backend failure surfaces here unchanged; stores never retry.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence for aliases.
///
/// Handlers only see this trait, so the HTTP layer can run against a test
/// double as easily as against Postgres.
#[async_trait]
pub trait AliasStore: Send + Sync + 'static {
    /// All aliases. An empty store yields an empty vec, not an error.
    async fn list(&self) -> Result<Vec<Alias>, StoreError>;

    /// Insert `name` with `text`, or replace the text of the alias already
    /// holding that name. The `id` of an existing alias never changes.
    ///
    /// Runs as one transaction: on failure nothing is visible to later reads.
    async fn upsert(&self, name: &str, text: &str) -> Result<Alias, StoreError>;
}
