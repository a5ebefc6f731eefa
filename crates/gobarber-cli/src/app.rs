//! Wiring: config → store + HTTP client → mounted session.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use tracing::{debug, warn};

use gobarber_api::ApiClient;
use gobarber_core::config::Config;
use gobarber_core::{FileStore, SessionManager, SessionProvider, User};

/// Everything a command needs.
pub struct App {
    pub client: Arc<ApiClient>,
    provider: SessionProvider,
}

impl App {
    /// Build the client and store from `config`, then mount and restore the session.
    ///
    /// A session that cannot be restored is reported and the command continues
    /// signed out.
    pub async fn start(config: Config) -> Result<Self> {
        let store_path = config.storage.resolved_path();
        debug!(path = %store_path.display(), "opening session store");
        let store = Arc::new(FileStore::new(store_path));
        let client = Arc::new(
            ApiClient::new(&config.api).context("failed to create HTTP client")?,
        );
        let manager = Arc::new(SessionManager::new(store, client.clone()));

        let provider = SessionProvider::new();
        if let Err(e) = provider.mount(manager).await {
            warn!(error = %e, "session restore failed");
            eprintln!(
                "{} could not restore the saved session ({e}); continuing signed out",
                "!".yellow()
            );
        }

        Ok(App {
            client,
            provider,
        })
    }

    pub fn session(&self) -> Result<Arc<SessionManager>> {
        Ok(self.provider.session()?)
    }

    /// The signed-in user, or an error telling the user to sign in.
    pub fn require_user(&self) -> Result<User> {
        match self.session()?.user() {
            Some(user) => Ok(user),
            None => bail!("not signed in, run `gobarber sign-in` first"),
        }
    }
}
