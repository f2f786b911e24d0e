//! Session store for the CLI: a small JSON file in the data directory

use coursedesk_core::{CoreError, CoreResult, SessionStore, StudentId};
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const SESSION_FILE_NAME: &str = "session.json";

/// Keeps the identifier as `{"<key>": <id>}` in a JSON file
pub struct FileSessionStore {
    path: PathBuf,
    key: String,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn in_data_dir(data_dir: &Path, key: &str) -> Self {
        Self::new(data_dir.join(SESSION_FILE_NAME), key)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn student_id(&self) -> Option<StudentId> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Failed to read {}: {e}", self.path.display());
                return None;
            }
        };

        let mut entries = match serde_json::from_str::<Map<String, Value>>(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring unreadable session file {}: {e}", self.path.display());
                return None;
            }
        };

        let value = entries.remove(&self.key)?;
        match serde_json::from_value::<StudentId>(value) {
            Ok(id) => Some(id),
            Err(e) => {
                warn!("Ignoring bad '{}' entry in {}: {e}", self.key, self.path.display());
                None
            }
        }
    }

    fn set_student_id(&self, id: &StudentId) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut entries = Map::new();
        entries.insert(self.key.clone(), serde_json::to_value(id)?);
        let content = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn clear(&self) -> CoreResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::from(e)),
        }
    }
}
