//! localStorage-backed session store

use crate::config::FrontendConfig;
use coursedesk_core::{CoreError, CoreResult, SessionStore, StudentId};
use web_sys::Storage;

/// Keeps the student identifier in `localStorage` as plain text, so it
/// survives reloads and is shared by every tab of the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserSessionStore {
    key: String,
}

impl BrowserSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> CoreResult<Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| CoreError::storage("localStorage is not available"))
    }
}

impl Default for BrowserSessionStore {
    fn default() -> Self {
        Self::new(FrontendConfig::client_config().session_key)
    }
}

impl SessionStore for BrowserSessionStore {
    fn student_id(&self) -> Option<StudentId> {
        let stored = Self::storage().ok()?.get_item(&self.key).ok().flatten()?;
        let stored = stored.trim();
        (!stored.is_empty()).then(|| StudentId::new(stored))
    }

    fn set_student_id(&self, id: &StudentId) -> CoreResult<()> {
        Self::storage()?
            .set_item(&self.key, id.as_str())
            .map_err(|e| CoreError::storage(format!("{e:?}")))
    }

    fn clear(&self) -> CoreResult<()> {
        Self::storage()?
            .remove_item(&self.key)
            .map_err(|e| CoreError::storage(format!("{e:?}")))
    }
}
