//! `gobarber profile` — edit the signed-in user's profile and avatar.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::Subcommand;

use gobarber_core::validation::ProfileForm;
use gobarber_core::User;

use crate::app::App;
use crate::helpers::{self, describe_api_error, describe_session_error, invalid_form, Prompter};

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Change name, email, or password
    Update {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        /// Also change the password (prompts for current and new)
        #[arg(long, default_value_t = false)]
        change_password: bool,
    },

    /// Upload a new avatar (JPEG)
    Avatar {
        /// Image file
        path: String,
    },
}

pub async fn dispatch(app: &App, action: ProfileCommands) -> Result<()> {
    match action {
        ProfileCommands::Update {
            name,
            email,
            change_password,
        } => update(app, name, email, change_password).await,
        ProfileCommands::Avatar { path } => avatar(app, &helpers::expand_tilde(&path)).await,
    }
}

async fn update(
    app: &App,
    name: Option<String>,
    email: Option<String>,
    change_password: bool,
) -> Result<()> {
    let user = app.require_user()?;
    helpers::print_header("My profile");

    let form = {
        let mut prompter = Prompter::new()?;
        let name = match name {
            Some(name) => name,
            None => prompter.ask_with_initial("Name", &user.name)?,
        };
        let email = match email {
            Some(email) => email,
            None => prompter.ask_with_initial("Email", &user.email)?,
        };
        let mut form = ProfileForm {
            name,
            email,
            ..Default::default()
        };
        if change_password {
            form.old_password = prompter.ask_secret("Current password")?;
            form.password = prompter.ask_secret("New password")?;
            form.password_confirmation = prompter.ask_secret("Confirm password")?;
        }
        form
    };

    let updated = submit_profile(app, form).await?;
    helpers::print_success("Profile updated.");
    helpers::print_user(&updated);
    println!();
    Ok(())
}

async fn avatar(app: &App, path: &Path) -> Result<()> {
    let user = app.require_user()?;
    let image = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read image: {}", path.display()))?;

    let updated = submit_avatar(app, &user, image).await?;
    helpers::print_success("Avatar updated.");
    helpers::print_user(&updated);
    println!();
    Ok(())
}

// ─────────────────────────────────────────────
// Form submission
// ─────────────────────────────────────────────

/// Validate, send, and replace the session's user with the server's copy.
pub(crate) async fn submit_profile(app: &App, form: ProfileForm) -> Result<User> {
    let update = form.validate().map_err(invalid_form)?;
    let user = app
        .client
        .update_profile(&update)
        .await
        .map_err(|e| anyhow!("profile update failed: {}", describe_api_error(&e)))?;
    remember(app, user).await
}

pub(crate) async fn submit_avatar(app: &App, user: &User, image: Vec<u8>) -> Result<User> {
    let updated = app
        .client
        .update_avatar(&user.id, image)
        .await
        .map_err(|e| anyhow!("avatar upload failed: {}", describe_api_error(&e)))?;
    remember(app, updated).await
}

async fn remember(app: &App, user: User) -> Result<User> {
    app.session()?
        .update_user(user)
        .await
        .map_err(|e| anyhow!("could not save the updated profile: {}", describe_session_error(&e)))
}
