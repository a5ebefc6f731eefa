//! Account endpoints: registration, profile, and avatar upload.

use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, info};

use gobarber_core::error::ApiError;
use gobarber_core::types::{ProfileUpdate, SignUpRequest, User};

use crate::client::ApiClient;

/// `POST /users` answers with the new account, which we only acknowledge.
#[derive(Debug, Deserialize)]
struct CreatedUser {
    id: String,
}

impl ApiClient {
    /// Register a new account. Returns the new user's id.
    pub async fn create_user(&self, request: &SignUpRequest) -> Result<String, ApiError> {
        let builder = self.request(Method::POST, "users").json(request);
        let created: CreatedUser = self.send("POST /users", builder).await?;
        info!(user_id = %created.id, "account created");
        Ok(created.id)
    }

    /// Update name, email, and optionally the password of the signed-in user.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        debug!(
            changing_password = update.password_change.is_some(),
            "updating profile"
        );
        let builder = self.request(Method::PUT, "profile").json(update);
        self.send("PUT /profile", builder).await
    }

    /// Upload a JPEG avatar for `user_id`.
    pub async fn update_avatar(&self, user_id: &str, image: Vec<u8>) -> Result<User, ApiError> {
        debug!(user_id, bytes = image.len(), "uploading avatar");
        let part = reqwest::multipart::Part::bytes(image)
            .file_name(format!("{user_id}.jpg"))
            .mime_str("image/jpeg")
            .map_err(|e| ApiError::InvalidHeader(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("avatar", part);

        let builder = self.request(Method::PATCH, "users/avatar").multipart(form);
        self.send("PATCH /users/avatar", builder).await
    }
}
