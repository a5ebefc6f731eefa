//! Error types shared by the session manager, the store, and the HTTP client.

use thiserror::Error;

/// Failure reading or writing the persisted key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying file I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store file exists but is not a JSON object of strings.
    #[error("storage file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Failure talking to the remote API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS, timeout, or any other transport-level failure.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// A value could not be turned into a header (e.g. a token with newlines).
    #[error("invalid header value: {0}")]
    InvalidHeader(String),
}

/// Errors surfaced by [`SessionManager`](crate::session::SessionManager).
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// The persisted user record could not be decoded.
    #[error("persisted user record is unreadable: {0}")]
    CorruptRecord(#[source] serde_json::Error),

    /// The sign-in response decoded but carried unusable values.
    #[error("invalid session response: {0}")]
    InvalidResponse(String),

    /// The operation needs a signed-in user.
    #[error("no user is signed in")]
    NotAuthenticated,

    /// Session state was requested while no manager is mounted.
    #[error("session accessed outside of a mounted SessionProvider")]
    OutsideProvider,
}

impl SessionError {
    /// Whether the remote API rejected the request (as opposed to a local failure).
    pub fn is_rejected(&self) -> bool {
        matches!(self, SessionError::Api(ApiError::Status { .. }))
    }
}
