//! Composition utilities for building the key-value store.
//!
//! Construction only; no domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use voxmcp_core::KeyValueStore;

use crate::repositories::SqliteKeyValueStore;

/// Factory for `SQLite`-backed port implementations.
pub struct StoreFactory;

impl StoreFactory {
    /// Build the key-value store from a pool returned by `setup_database()`.
    pub fn build_store(pool: SqlitePool) -> Arc<dyn KeyValueStore> {
        Arc::new(SqliteKeyValueStore::new(pool))
    }
}
