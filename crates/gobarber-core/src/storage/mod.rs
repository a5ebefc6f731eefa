//! Persisted key-value storage — string keys to string values.
//!
//! The session manager only talks to the [`KeyValueStore`] trait. Batched
//! operations (`multi_*`) are the unit of atomicity: a pair written with
//! `multi_set` is either fully visible or not at all.
//!
//! - [`MemoryStore`] — process-local, for tests and throwaway sessions
//! - [`FileStore`] — a JSON object file under `~/.gobarber/`

pub mod file;
pub mod memory;

use async_trait::async_trait;

use crate::error::StorageError;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Async string storage surviving process restarts.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read several keys at once. The result has one slot per key, in order.
    async fn multi_get(&self, keys: &[&str]) -> Result<Vec<Option<String>>, StorageError>;

    /// Write several entries as one batch.
    async fn multi_set(&self, entries: &[(&str, &str)]) -> Result<(), StorageError>;

    /// Remove several keys as one batch. Missing keys are ignored.
    async fn multi_remove(&self, keys: &[&str]) -> Result<(), StorageError>;

    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.multi_get(&[key]).await?.pop().flatten())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.multi_set(&[(key, value)]).await
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.multi_remove(&[key]).await
    }
}
