//! Typed request and response contracts for the GoBarber API.
//!
//! Every body crossing the HTTP boundary is decoded into one of these structs,
//! so a shape mismatch fails at decode time instead of leaking into session state.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────

/// A user profile as returned by the API and persisted under the user key.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Absolute URL of the avatar image, `null` until one is uploaded.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    /// Return a copy with every field present in `update` overwritten.
    pub fn merged(&self, update: &UserUpdate) -> User {
        User {
            id: update.id.clone().unwrap_or_else(|| self.id.clone()),
            name: update.name.clone().unwrap_or_else(|| self.name.clone()),
            email: update.email.clone().unwrap_or_else(|| self.email.clone()),
            avatar_url: match &update.avatar_url {
                Some(avatar) => avatar.clone(),
                None => self.avatar_url.clone(),
            },
        }
    }

    /// First name, used for greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// A partial user record.
///
/// `None` means "keep the current value". For `avatar_url`, `Some(None)`
/// explicitly clears the avatar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<Option<String>>,
}

impl UserUpdate {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }

    pub fn avatar_url(url: impl Into<String>) -> Self {
        Self {
            avatar_url: Some(Some(url.into())),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == UserUpdate::default()
    }
}

/// A full record from the server overwrites every field.
impl From<User> for UserUpdate {
    fn from(user: User) -> Self {
        UserUpdate {
            id: Some(user.id),
            name: Some(user.name),
            email: Some(user.email),
            avatar_url: Some(user.avatar_url),
        }
    }
}

// ─────────────────────────────────────────────
// Sessions
// ─────────────────────────────────────────────

/// Body of `POST /sessions`.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct SignInCredentials {
    pub email: String,
    pub password: String,
}

impl SignInCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for SignInCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignInCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Response of `POST /sessions`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SessionResponse {
    pub token: String,
    pub user: User,
}

impl SessionResponse {
    /// Reject responses that decoded but cannot back a session.
    pub fn validate(&self) -> Result<(), String> {
        if self.token.trim().is_empty() {
            return Err("token is empty".to_string());
        }
        if self.token.chars().any(char::is_control) {
            return Err("token contains control characters".to_string());
        }
        if self.user.id.trim().is_empty() {
            return Err("user id is empty".to_string());
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────
// Registration and profile
// ─────────────────────────────────────────────

/// Body of `POST /users`.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `PUT /profile`.
///
/// Password fields are only serialized when a password change was requested.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub password_change: Option<PasswordChange>,
}

/// The optional password-change part of a profile update.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct PasswordChange {
    pub old_password: String,
    pub password: String,
    pub password_confirmation: String,
}

impl std::fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordChange(<redacted>)")
    }
}

// ─────────────────────────────────────────────
// Providers and appointments
// ─────────────────────────────────────────────

/// A barber that can be booked.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Provider {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// One hour slot of a provider's day.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct HourAvailability {
    pub hour: u32,
    pub available: bool,
}

/// Body of `POST /appointments`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct AppointmentRequest {
    pub provider_id: String,
    /// `"{year}-{month}-{day} {hour}:00:00"`, see [`crate::schedule::appointment_date`].
    pub date: String,
}

/// A created appointment.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Appointment {
    pub id: String,
    pub provider_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub date: String,
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
