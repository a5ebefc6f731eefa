//! A mount point for the session manager.
//!
//! Dependents that cannot be handed the manager directly look it up here.
//! Looking it up while nothing is mounted is a usage error, never an empty session.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use super::manager::SessionManager;
use crate::error::SessionError;

#[derive(Debug, Default)]
pub struct SessionProvider {
    slot: RwLock<Option<Arc<SessionManager>>>,
}

impl SessionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount `manager` and run its startup restore.
    ///
    /// The manager is visible (with `loading == true`) while the restore runs.
    /// A restore failure is returned but the manager stays mounted.
    pub async fn mount(&self, manager: Arc<SessionManager>) -> Result<Arc<SessionManager>, SessionError> {
        {
            let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
            *slot = Some(manager.clone());
        }
        debug!("session provider mounted");
        manager.restore().await?;
        Ok(manager)
    }

    /// Unmount the current manager, returning it.
    pub fn unmount(&self) -> Option<Arc<SessionManager>> {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        let previous = slot.take();
        if previous.is_some() {
            debug!("session provider unmounted");
        }
        previous
    }

    pub fn is_mounted(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// The mounted manager, or [`SessionError::OutsideProvider`].
    pub fn session(&self) -> Result<Arc<SessionManager>, SessionError> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(SessionError::OutsideProvider)
    }
}
