//! In-process alias store
//!
//! Holds aliases in insertion order behind a single lock, assigning ids
//! from 1 the way a fresh SERIAL column would. Used as the store for
//! router and lifecycle tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::store::{AliasStore, StoreError};
use crate::models::Alias;

#[derive(Debug, Default)]
pub struct MemoryAliasStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    aliases: Vec<Alias>,
    last_id: i32,
}

impl MemoryAliasStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AliasStore for MemoryAliasStore {
    async fn list(&self) -> Result<Vec<Alias>, StoreError> {
        Ok(self.inner.read().await.aliases.clone())
    }

    async fn upsert(&self, name: &str, text: &str) -> Result<Alias, StoreError> {
        let mut inner = self.inner.write().await;

        if let Some(existing) = inner.aliases.iter_mut().find(|a| a.name == name) {
            existing.text = text.to_owned();
            return Ok(existing.clone());
        }

        inner.last_id += 1;
        let alias = Alias {
            id: inner.last_id,
            name: name.to_owned(),
            text: text.to_owned(),
        };
        inner.aliases.push(alias.clone());
        Ok(alias)
    }
}
