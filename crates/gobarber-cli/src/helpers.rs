//! Shared CLI helpers — prompts, path expansion, and user-facing messages.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::Completer;
use rustyline::config::Configurer;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{ColorMode, DefaultEditor, Editor, Helper};
use tracing::debug;

use gobarber_core::error::{ApiError, SessionError};
use gobarber_core::utils::get_history_path;
use gobarber_core::validation::ValidationErrors;
use gobarber_core::User;

/// Expand `~` at the start of a path to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs_next::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs_next::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

// ─────────────────────────────────────────────
// Prompts
// ─────────────────────────────────────────────

/// Renders every typed character as `*`.
pub struct MaskingHelper;

impl Highlighter for MaskingHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.is_empty() {
            Borrowed(line)
        } else {
            Owned("*".repeat(line.chars().count()))
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, kind: CmdKind) -> bool {
        kind != CmdKind::MoveCursor
    }
}

impl Completer for MaskingHelper {
    type Candidate = String;
}

impl Hinter for MaskingHelper {
    type Hint = String;
}

impl Validator for MaskingHelper {}

impl Helper for MaskingHelper {}

/// Line editors for form fields. Plain answers go to the shared history;
/// secrets are masked and never recorded.
pub struct Prompter {
    editor: Editor<(), DefaultHistory>,
    secret: Editor<MaskingHelper, DefaultHistory>,
}

impl Prompter {
    pub fn new() -> Result<Self> {
        let mut editor = DefaultEditor::new()?;
        editor.set_max_history_size(200)?;

        let history_path = get_history_path();
        if history_path.exists() {
            let _ = editor.load_history(&history_path);
            debug!("loaded prompt history from {}", history_path.display());
        }

        let mut secret = Editor::<MaskingHelper, DefaultHistory>::new()?;
        secret.set_helper(Some(MaskingHelper));
        // Masking goes through the highlighter, which only runs with color on
        secret.set_color_mode(ColorMode::Forced);
        secret.set_auto_add_history(false);

        Ok(Prompter { editor, secret })
    }

    /// Return `value` if given, otherwise ask for it.
    pub fn fill(&mut self, value: Option<String>, label: &str) -> Result<String> {
        match value {
            Some(v) => Ok(v),
            None => self.ask(label),
        }
    }

    pub fn ask(&mut self, label: &str) -> Result<String> {
        let line = self.editor.readline(&format!("{label}: "))?;
        let line = line.trim().to_string();
        if !line.is_empty() {
            let _ = self.editor.add_history_entry(&line);
        }
        Ok(line)
    }

    /// Ask with a pre-filled answer the user can edit.
    pub fn ask_with_initial(&mut self, label: &str, initial: &str) -> Result<String> {
        let line = self
            .editor
            .readline_with_initial(&format!("{label}: "), (initial, ""))?;
        Ok(line.trim().to_string())
    }

    /// Ask for a password. Input is masked and kept out of history.
    pub fn ask_secret(&mut self, label: &str) -> Result<String> {
        let line = self.secret.readline(&format!("{label}: "))?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Drop for Prompter {
    fn drop(&mut self) {
        let path = get_history_path();
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = self.editor.save_history(&path) {
            debug!("failed to save history: {e}");
        }
    }
}

// ─────────────────────────────────────────────
// Output
// ─────────────────────────────────────────────

pub fn print_header(title: &str) {
    println!();
    println!("{}", format!("✂ {title}").cyan().bold());
    println!();
}

pub fn print_user(user: &User) {
    println!("  {:<10} {}", "Name:".bold(), user.name);
    println!("  {:<10} {}", "Email:".bold(), user.email);
    println!(
        "  {:<10} {}",
        "Avatar:".bold(),
        user.avatar_url
            .as_deref()
            .map(|url| url.normal())
            .unwrap_or_else(|| "(none)".dimmed())
    );
}

pub fn print_success(message: &str) {
    println!("  {} {}", "✓".green(), message);
}

/// Print each failing form field.
pub fn print_validation_errors(errors: &ValidationErrors) {
    for (field, message) in errors.iter() {
        eprintln!("  {} {}: {}", "✗".red(), field.bold(), message);
    }
}

/// Show the failing fields and turn them into the command's error.
pub fn invalid_form(errors: ValidationErrors) -> anyhow::Error {
    print_validation_errors(&errors);
    anyhow::Error::new(errors).context("form has invalid fields")
}

// ─────────────────────────────────────────────
// Error translation
// ─────────────────────────────────────────────

/// A message the user can act on, from an API failure.
pub fn describe_api_error(err: &ApiError) -> String {
    match err {
        ApiError::Status { status: 401, .. } => {
            "check your email and password (or sign in again)".to_string()
        }
        ApiError::Status { status, body } => {
            server_message(body).unwrap_or_else(|| format!("the server answered {status}"))
        }
        ApiError::Transport(_) => "could not reach the GoBarber server".to_string(),
        ApiError::Decode(_) => "the server sent a response we could not read".to_string(),
        ApiError::InvalidHeader(_) => "the saved session token is unusable".to_string(),
    }
}

pub fn describe_session_error(err: &SessionError) -> String {
    match err {
        SessionError::Api(api) => describe_api_error(api),
        SessionError::NotAuthenticated => "not signed in".to_string(),
        other => other.to_string(),
    }
}

/// The `message` field of the backend's `{ "status": "error", "message": ... }` body.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(String::from)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
