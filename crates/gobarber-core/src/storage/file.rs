//! File-backed store.
//!
//! File format: a single JSON object of string values, e.g.
//! `{"@GoBarber:token":"eyJ...","@GoBarber:user":"{\"id\":...}"}`
//!
//! The file is loaded once on first access and rewritten in full on every
//! batch through a sibling temp file + rename. The temp name carries the
//! process id so concurrent `gobarber` processes never share one.
//!
//! A file that does not parse is a read error. A write batch replaces it
//! with a fresh object instead, so signing in or out recovers the store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::KeyValueStore;
use crate::error::StorageError;

type Entries = BTreeMap<String, String>;

/// A [`KeyValueStore`] persisted as a JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    /// `None` until the file has been read.
    cache: Mutex<Option<Entries>>,
}

impl FileStore {
    /// Open a store at `path`. Nothing is read until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    /// Open the store at the default location (`~/.gobarber/storage.json`).
    pub fn open_default() -> Self {
        Self::new(crate::utils::get_storage_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Entries, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(Entries::new()),
            Ok(content) => {
                let entries: Entries = serde_json::from_str(&content)?;
                debug!(
                    path = %self.path.display(),
                    entries = entries.len(),
                    "loaded key-value store"
                );
                Ok(entries)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Sibling temp path, e.g. `.storage.json.4242.tmp`.
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "storage.json".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
    }

    async fn persist(&self, entries: &Entries) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.temp_path();
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!(
            path = %self.path.display(),
            entries = entries.len(),
            "saved key-value store"
        );
        Ok(())
    }

    /// Apply `edit` to a copy of the entries, persist it, then commit it to the cache.
    ///
    /// The cache only changes if the write succeeded.
    async fn update<F>(&self, edit: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut Entries) + Send,
    {
        let mut cache = self.cache.lock().await;
        let mut next = match cache.as_ref() {
            Some(entries) => entries.clone(),
            None => match self.load().await {
                Ok(entries) => entries,
                Err(StorageError::Corrupt(e)) => {
                    warn!(
                        path = %self.path.display(),
                        error = %e,
                        "store file is unreadable, replacing it"
                    );
                    Entries::new()
                }
                Err(e) => return Err(e),
            },
        };
        edit(&mut next);
        self.persist(&next).await?;
        *cache = Some(next);
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn multi_get(&self, keys: &[&str]) -> Result<Vec<Option<String>>, StorageError> {
        let mut cache = self.cache.lock().await;
        if cache.is_none() {
            *cache = Some(self.load().await?);
        }
        let entries = cache.get_or_insert_with(Entries::new);
        Ok(keys.iter().map(|k| entries.get(*k).cloned()).collect())
    }

    async fn multi_set(&self, pairs: &[(&str, &str)]) -> Result<(), StorageError> {
        self.update(|entries| {
            for (k, v) in pairs {
                entries.insert((*k).to_string(), (*v).to_string());
            }
        })
        .await
    }

    async fn multi_remove(&self, keys: &[&str]) -> Result<(), StorageError> {
        self.update(|entries| {
            for k in keys {
                entries.remove(*k);
            }
        })
        .await
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
