//! Session manager — the authenticated user, persisted across restarts.
//!
//! # Storage format
//!
//! Two independent entries in the [`KeyValueStore`](crate::storage::KeyValueStore):
//! - `@GoBarber:token` — the bearer token string
//! - `@GoBarber:user` — the user record as JSON, e.g. `{"id":"..","name":"..","email":"..","avatar_url":null}`
//!
//! Both are written and removed as one batch; profile updates rewrite only the user entry.

pub mod gateway;
pub mod manager;
pub mod provider;

pub use gateway::AuthGateway;
pub use manager::{SessionManager, SessionState, TOKEN_KEY, USER_KEY};
pub use provider::SessionProvider;
