//! Form validation for the sign-in, sign-up, and profile screens.
//!
//! Every rule runs; failures are collected per field (first message wins),
//! so a screen can flag all bad fields at once.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::types::{PasswordChange, ProfileUpdate, SignInCredentials, SignUpRequest};

/// Minimum password length on sign-up.
pub const MIN_PASSWORD_LEN: usize = 6;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// Whether `email` looks like an address.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email.trim())
}

// ─────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────

/// Field name → message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    fn add(&mut self, field: &'static str, message: &str) {
        self.fields
            .entry(field)
            .or_insert_with(|| message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|(field, msg)| format!("{field}: {msg}"))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

// ─────────────────────────────────────────────
// Forms
// ─────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn validate(self) -> Result<SignInCredentials, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if is_blank(&self.email) {
            errors.add("email", "Email is required");
        }
        if self.password.is_empty() {
            errors.add("password", "Password is required");
        }
        errors.into_result(SignInCredentials::new(self.email.trim(), self.password))
    }
}

#[derive(Clone, Debug, Default)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignUpForm {
    pub fn validate(self) -> Result<SignUpRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if is_blank(&self.name) {
            errors.add("name", "Name is required");
        }
        if is_blank(&self.email) {
            errors.add("email", "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.add("email", "Enter a valid email");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.add("password", "At least 6 characters");
        }
        errors.into_result(SignUpRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
        })
    }
}

/// The profile screen. Password fields only matter when `old_password` is filled.
#[derive(Clone, Debug, Default)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub old_password: String,
    pub password: String,
    pub password_confirmation: String,
}

impl ProfileForm {
    pub fn validate(self) -> Result<ProfileUpdate, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if is_blank(&self.name) {
            errors.add("name", "Name is required");
        }
        if is_blank(&self.email) {
            errors.add("email", "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.add("email", "Enter a valid email");
        }

        let changing_password = !self.old_password.is_empty();
        if changing_password {
            if self.password.is_empty() {
                errors.add("password", "Field is required");
            }
            if self.password_confirmation.is_empty() {
                errors.add("password_confirmation", "Field is required");
            }
        }
        if self.password_confirmation != self.password {
            errors.add("password_confirmation", "Confirmation does not match");
        }

        let password_change = changing_password.then(|| PasswordChange {
            old_password: self.old_password,
            password: self.password,
            password_confirmation: self.password_confirmation,
        });
        errors.into_result(ProfileUpdate {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password_change,
        })
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
