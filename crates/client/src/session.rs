use std::path::{Path, PathBuf};

use domain::{Role, Session};
use tokio::sync::RwLock;

use crate::errors::Error;

/// Persistent session store, the client-side stand-in for the browser's
/// three storage keys (`access`, `refresh`, `role`).
///
/// All mutation goes through [`SessionStore::set`] and
/// [`SessionStore::clear`], so screens never touch storage directly. A
/// file-backed store survives process restarts; corrupt or unreadable
/// files are treated as no session.
pub struct SessionStore {
    inner: RwLock<Option<Session>>,
    path: Option<PathBuf>,
}

impl SessionStore {
    /// Store without persistence, for tests and one-shot tools.
    pub fn in_memory() -> Self {
        Self {
            inner: RwLock::new(None),
            path: None,
        }
    }

    /// Store backed by a JSON file, loading any session already there.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let existing = load_session(&path);
        Self {
            inner: RwLock::new(existing),
            path: Some(path),
        }
    }

    /// The conventional per-user session file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".medical-portal").join("session.json"))
    }

    /// Store at the conventional path, in-memory when no home directory
    /// can be resolved.
    pub fn open_default() -> Self {
        match Self::default_path() {
            Some(path) => Self::at_path(path),
            None => Self::in_memory(),
        }
    }

    pub async fn get(&self) -> Option<Session> {
        self.inner.read().await.clone()
    }

    pub async fn access_token(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .as_ref()
            .map(|session| session.access.clone())
    }

    pub async fn role(&self) -> Option<Role> {
        self.inner.read().await.as_ref().map(|session| session.role)
    }

    /// Replaces the session and persists it.
    pub async fn set(&self, session: Session) -> Result<(), Error> {
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, serde_json::to_string_pretty(&session)?)?;
        }
        *self.inner.write().await = Some(session);
        Ok(())
    }

    /// Drops the session and deletes the backing file.
    pub async fn clear(&self) -> Result<(), Error> {
        if let Some(path) = &self.path {
            if path.exists() {
                std::fs::remove_file(path)?;
            }
        }
        *self.inner.write().await = None;
        Ok(())
    }
}

fn load_session(path: &Path) -> Option<Session> {
    let content = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(session) => Some(session),
        Err(error) => {
            tracing::warn!("Ignoring unreadable session file {}: {error}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new("access-token", "refresh-token", Role::Patient)
    }

    #[tokio::test]
    async fn in_memory_set_get_clear() {
        let store = SessionStore::in_memory();
        assert!(store.get().await.is_none());

        store.set(session()).await.unwrap();
        assert_eq!(store.role().await, Some(Role::Patient));
        assert_eq!(store.access_token().await.as_deref(), Some("access-token"));

        store.clear().await.unwrap();
        assert!(store.get().await.is_none());
    }

    #[tokio::test]
    async fn file_backed_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = SessionStore::at_path(&path);
        store.set(session()).await.unwrap();
        drop(store);

        let reopened = SessionStore::at_path(&path);
        assert_eq!(reopened.get().await, Some(session()));

        reopened.clear().await.unwrap();
        assert!(!path.exists());
        assert!(SessionStore::at_path(&path).get().await.is_none());
    }

    #[tokio::test]
    async fn corrupt_file_reads_as_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = SessionStore::at_path(&path);
        assert!(store.get().await.is_none());
    }
}
