//! The shared HTTP client and the session endpoint.
//!
//! The default `authorization` header is a field of [`ApiClient`] rather than
//! global state. Only [`AuthGateway::set_bearer_token`] changes it, and every
//! request built through [`ApiClient::request`] carries it.

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use gobarber_core::config::ApiConfig;
use gobarber_core::error::ApiError;
use gobarber_core::session::AuthGateway;
use gobarber_core::types::{SessionResponse, SignInCredentials};

// ─────────────────────────────────────────────
// ApiClient
// ─────────────────────────────────────────────

/// HTTP client for the GoBarber API.
pub struct ApiClient {
    /// HTTP client (shared, connection-pooled).
    client: reqwest::Client,
    /// API base URL (e.g. `"http://localhost:3333"`).
    base_url: String,
    /// `Bearer <token>` sent on every request, if signed in.
    authorization: RwLock<Option<HeaderValue>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.bearer_token().is_some())
            .finish()
    }
}

impl ApiClient {
    /// Build a client from the `api` config section.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(transport)?;

        Ok(ApiClient {
            client,
            base_url: config.base_url.clone(),
            authorization: RwLock::new(None),
        })
    }

    /// Build a client for `base_url` with no timeout.
    pub fn with_base_url(base_url: &str) -> Result<Self, ApiError> {
        Self::new(&ApiConfig {
            base_url: base_url.to_string(),
            timeout_secs: None,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL and an endpoint path.
    pub(crate) fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Start a request carrying the default headers.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        let authorization = self
            .authorization
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match authorization {
            Some(value) => builder.header(AUTHORIZATION, value),
            None => builder,
        }
    }

    /// Send a request, check the status, and decode the JSON body as `T`.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                error!(endpoint, error = %e, "HTTP request failed");
                return Err(transport(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            warn!(endpoint, status = %status, body = %body, "API error");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(transport)?;
        match serde_json::from_slice::<T>(&bytes) {
            Ok(value) => {
                debug!(endpoint, status = %status, bytes = bytes.len(), "API response received");
                Ok(value)
            }
            Err(e) => {
                error!(endpoint, error = %e, "Failed to parse API response");
                Err(ApiError::Decode(e.to_string()))
            }
        }
    }
}

pub(crate) fn transport(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

// ─────────────────────────────────────────────
// Session endpoint
// ─────────────────────────────────────────────

#[async_trait]
impl AuthGateway for ApiClient {
    async fn create_session(
        &self,
        credentials: &SignInCredentials,
    ) -> Result<SessionResponse, ApiError> {
        debug!(email = %credentials.email, "creating session");
        let request = self.request(Method::POST, "sessions").json(credentials);
        self.send("POST /sessions", request).await
    }

    fn set_bearer_token(&self, token: Option<&str>) -> Result<(), ApiError> {
        let value = match token {
            Some(token) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|e| ApiError::InvalidHeader(e.to_string()))?;
                value.set_sensitive(true);
                Some(value)
            }
            None => None,
        };

        let mut authorization = self
            .authorization
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *authorization = value;
        debug!(authenticated = authorization.is_some(), "bearer header updated");
        Ok(())
    }

    fn bearer_token(&self) -> Option<String> {
        self.authorization
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(String::from)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
