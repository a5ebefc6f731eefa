//! `gobarber sign-up | sign-in | sign-out | whoami`.

use anyhow::{anyhow, Result};
use colored::Colorize;
use tracing::info;

use gobarber_core::validation::{SignInForm, SignUpForm};
use gobarber_core::User;

use crate::app::App;
use crate::helpers::{self, describe_api_error, describe_session_error, invalid_form, Prompter};

pub async fn sign_up(app: &App, name: Option<String>, email: Option<String>) -> Result<()> {
    helpers::print_header("Create your account");
    let form = {
        let mut prompter = Prompter::new()?;
        SignUpForm {
            name: prompter.fill(name, "Name")?,
            email: prompter.fill(email, "Email")?,
            password: prompter.ask_secret("Password")?,
        }
    };

    submit_sign_up(app, form).await?;
    helpers::print_success("Account created. Run `gobarber sign-in` to start booking.");
    Ok(())
}

pub async fn sign_in(app: &App, email: Option<String>) -> Result<()> {
    helpers::print_header("Sign in");
    let form = {
        let mut prompter = Prompter::new()?;
        SignInForm {
            email: prompter.fill(email, "Email")?,
            password: prompter.ask_secret("Password")?,
        }
    };

    let user = submit_sign_in(app, form).await?;
    helpers::print_success(&format!("Welcome, {}!", user.first_name()));
    Ok(())
}

pub async fn sign_out(app: &App) -> Result<()> {
    let session = app.session()?;
    let was_signed_in = session.is_authenticated();
    session
        .sign_out()
        .await
        .map_err(|e| anyhow!("sign-out failed: {}", describe_session_error(&e)))?;

    if was_signed_in {
        helpers::print_success("Signed out.");
    } else {
        println!("  {}", "No session to sign out of.".dimmed());
    }
    Ok(())
}

pub fn whoami(app: &App) -> Result<()> {
    let user = app.require_user()?;
    helpers::print_header(&format!("Hello, {}", user.first_name()));
    helpers::print_user(&user);
    println!();
    Ok(())
}

// ─────────────────────────────────────────────
// Form submission
// ─────────────────────────────────────────────

/// Validate and register. Does not sign in.
pub(crate) async fn submit_sign_up(app: &App, form: SignUpForm) -> Result<String> {
    let request = form.validate().map_err(invalid_form)?;
    let id = app
        .client
        .create_user(&request)
        .await
        .map_err(|e| anyhow!("sign-up failed: {}", describe_api_error(&e)))?;
    info!(user_id = %id, "signed up");
    Ok(id)
}

pub(crate) async fn submit_sign_in(app: &App, form: SignInForm) -> Result<User> {
    let credentials = form.validate().map_err(invalid_form)?;
    app.session()?
        .sign_in(&credentials.email, &credentials.password)
        .await
        .map_err(|e| anyhow!("sign-in failed: {}", describe_session_error(&e)))
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
