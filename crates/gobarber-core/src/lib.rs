//! Core of the GoBarber client.
//!
//! # Architecture
//!
//! - [`session::SessionManager`] — owns the authenticated session (token + user)
//! - [`storage::KeyValueStore`] — persisted string storage the session survives in
//! - [`session::AuthGateway`] — the HTTP-side seam the session manager drives
//! - [`config`] — `~/.gobarber/config.json` + env overrides
//! - [`validation`] — form checks the screens run before calling the API
//! - [`schedule`] — availability grouping and appointment date formatting

pub mod config;
pub mod error;
pub mod schedule;
pub mod session;
pub mod storage;
pub mod types;
pub mod utils;
pub mod validation;

pub use error::{ApiError, SessionError, StorageError};
pub use session::{AuthGateway, SessionManager, SessionProvider};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use types::{User, UserUpdate};
