use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stay_core::entities::SubmissionResult;

use crate::{SessionError, SessionStore};

const SESSION_DIR_NAME: &str = ".stay";
const SESSION_FILE_NAME: &str = "session.json";

/// On-disk envelope. `payload` is the backend response, byte-for-byte the
/// value handed to [`SessionStore::set`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub stored_at: DateTime<Utc>,
    pub payload: SubmissionResult,
}

/// Session store persisted as JSON so the confirmation view can read it from
/// a later process.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store at an explicit path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<home>/.stay/session.json`.
    #[must_use]
    pub fn in_home(home: &Path) -> Self {
        Self::at(home.join(SESSION_DIR_NAME).join(SESSION_FILE_NAME))
    }

    /// Store at `~/.stay/session.json`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::HomeNotFound`] if no home directory exists.
    pub fn default_location() -> Result<Self, SessionError> {
        dirs::home_dir()
            .map(|home| Self::in_home(&home))
            .ok_or(SessionError::HomeNotFound)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full envelope including the time it was written.
    ///
    /// Missing, empty, or unreadable files read as `None`.
    #[must_use]
    pub fn load(&self) -> Option<StoredSession> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return None,
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "session file unreadable");
                return None;
            }
        };
        if raw.trim().is_empty() {
            return None;
        }

        match serde_json::from_str(&raw) {
            Ok(stored) => Some(stored),
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "ignoring corrupt session file");
                None
            }
        }
    }

    fn write(&self, stored: &StoredSession) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| SessionError::Io(format!("mkdir {}: {e}", parent.display())))?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }

        let body = serde_json::to_string_pretty(stored)?;
        fs::write(&self.path, body)
            .map_err(|e| SessionError::Io(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                SessionError::Io(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<SubmissionResult> {
        self.load().map(|stored| stored.payload)
    }

    fn set(&mut self, value: SubmissionResult) -> Result<(), SessionError> {
        self.write(&StoredSession {
            stored_at: Utc::now(),
            payload: value,
        })
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                SessionError::Io(format!("failed to delete {}: {e}", self.path.display()))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileSessionStore {
        FileSessionStore::at(dir.path().join("nested").join(SESSION_FILE_NAME))
    }

    #[test]
    fn home_location_is_dot_stay_session_json() {
        let store = FileSessionStore::in_home(Path::new("/home/alice"));
        assert_eq!(store.path(), Path::new("/home/alice/.stay/session.json"));
    }

    #[test]
    fn missing_file_reads_as_none() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        assert!(store_in(&tmp).get().is_none());
    }

    #[test]
    fn set_get_clear_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let mut store = store_in(&tmp);

        store
            .set(SubmissionResult::new(json!({"id": "enq-1"})))
            .expect("set");
        assert_eq!(store.get(), Some(SubmissionResult::new(json!({"id": "enq-1"}))));

        store.clear().expect("clear");
        assert!(store.get().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn set_replaces_previous_payload_entirely() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let mut store = store_in(&tmp);

        store
            .set(SubmissionResult::new(json!({"id": "enq-0", "extra": 1})))
            .expect("first set");
        store
            .set(SubmissionResult::new(json!({"id": "enq-1"})))
            .expect("second set");

        assert_eq!(store.get(), Some(SubmissionResult::new(json!({"id": "enq-1"}))));
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let mut store = store_in(&tmp);
        store.set(SubmissionResult::new(json!(1))).expect("set");

        let mode = fs::metadata(store.path())
            .expect("metadata")
            .permissions()
            .mode()
            & 0o777;
        assert_eq!(mode, 0o600, "session file should be 0600");
    }

    #[test]
    fn corrupt_or_blank_file_reads_as_none() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join(SESSION_FILE_NAME);
        let store = FileSessionStore::at(&path);

        fs::write(&path, "   \n").expect("write");
        assert!(store.get().is_none());

        fs::write(&path, "{not json").expect("write");
        assert!(store.get().is_none());
    }

    #[test]
    fn envelope_records_write_time() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let mut store = store_in(&tmp);
        let before = Utc::now();
        store.set(SubmissionResult::new(json!("ok"))).expect("set");

        let stored = store.load().expect("stored");
        assert!(stored.stored_at >= before);
        assert_eq!(stored.payload.as_value(), &json!("ok"));
    }
}
