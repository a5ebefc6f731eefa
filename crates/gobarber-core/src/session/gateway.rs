//! The HTTP-side seam of the session manager.
//!
//! `gobarber-api`'s `ApiClient` is the real implementation. The manager is the
//! only caller of [`AuthGateway::set_bearer_token`], which keeps the default
//! `authorization` header in step with the session.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::types::{SessionResponse, SignInCredentials};

#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a token (`POST /sessions`).
    async fn create_session(
        &self,
        credentials: &SignInCredentials,
    ) -> Result<SessionResponse, ApiError>;

    /// Set (`Some`) or clear (`None`) the bearer token sent on every later request.
    fn set_bearer_token(&self, token: Option<&str>) -> Result<(), ApiError>;

    /// The token currently sent as `authorization: Bearer <token>`, if any.
    fn bearer_token(&self) -> Option<String>;
}
