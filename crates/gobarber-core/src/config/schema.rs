//! Configuration schema.
//!
//! Hierarchy: `Config` → `ApiConfig`, `StorageConfig`.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.

use serde::{Deserialize, Serialize};

/// Root configuration — loaded from `~/.gobarber/config.json` + env vars.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

// ─────────────────────────────────────────────
// API
// ─────────────────────────────────────────────

/// Remote API settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiConfig {
    /// Base URL of the GoBarber backend.
    pub base_url: String,
    /// Per-request deadline in seconds. `None` means requests never time out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3333".to_string(),
            timeout_secs: None,
        }
    }
}

// ─────────────────────────────────────────────
// Storage
// ─────────────────────────────────────────────

/// Where the persisted session lives.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageConfig {
    /// Key-value store file. `~` is expanded.
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "~/.gobarber/storage.json".to_string(),
        }
    }
}

impl StorageConfig {
    /// The store path with `~` expanded.
    pub fn resolved_path(&self) -> std::path::PathBuf {
        crate::utils::expand_home(&self.path)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
