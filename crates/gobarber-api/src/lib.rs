//! HTTP client for the GoBarber backend.
//!
//! # Architecture
//!
//! - [`client::ApiClient`] — reqwest client, base URL, and the default bearer header
//! - [`users`] — `POST /users`, `PUT /profile`, `PATCH /users/avatar`
//! - [`appointments`] — `GET /providers`, day availability, `POST /appointments`
//!
//! `ApiClient` implements [`gobarber_core::AuthGateway`], which is how the
//! session manager exchanges credentials and keeps the bearer header current.

pub mod appointments;
pub mod client;
pub mod users;

pub use client::ApiClient;
