//! Alias repository backed by PostgreSQL
//!
//! - list: single SELECT, ordered by id
//! - upsert: INSERT with ON CONFLICT on the unique name index, inside a
//!   transaction (no check-then-insert)

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::store::{AliasStore, StoreError};
use crate::models::Alias;

/// Postgres-backed alias store.
///
/// Cloning is cheap; all clones share the same pool.
#[derive(Debug, Clone)]
pub struct PgAliasStore {
    pool: PgPool,
}

impl PgAliasStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AliasStore for PgAliasStore {
    async fn list(&self) -> Result<Vec<Alias>, StoreError> {
        let aliases = sqlx::query_as::<_, Alias>(
            "SELECT id, name, COALESCE(text, '') AS text FROM aliases ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(aliases)
    }

    async fn upsert(&self, name: &str, text: &str) -> Result<Alias, StoreError> {
        // Dropping the transaction without commit rolls it back.
        let mut tx = self.pool.begin().await?;

        let alias = sqlx::query_as::<_, Alias>(
            r#"
            INSERT INTO aliases (name, text) VALUES ($1, $2)
            ON CONFLICT (name) DO UPDATE SET text = EXCLUDED.text
            RETURNING id, name, COALESCE(text, '') AS text
            "#,
        )
        .bind(name)
        .bind(text)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(alias)
    }
}
