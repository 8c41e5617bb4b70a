//! Application state shared across handlers

use std::sync::Arc;

use crate::db::AliasStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn AliasStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn AliasStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store }),
        }
    }

    pub fn store(&self) -> &dyn AliasStore {
        self.inner.store.as_ref()
    }
}
