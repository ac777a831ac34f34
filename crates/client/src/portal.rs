use std::path::PathBuf;
use std::sync::Arc;

use domain::Session;

use crate::errors::Error;
use crate::http::{Api, HttpTransport};
use crate::session::SessionStore;
use crate::transport::Transport;

/// Handle to the portal backend. Cheap to share; endpoint methods live in
/// the `auth` and `endpoints` modules.
pub struct Portal {
    pub(crate) api: Api,
    pub(crate) session: Arc<SessionStore>,
}

impl Portal {
    /// Production client with the per-user session file.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::with_session(base_url, Arc::new(SessionStore::open_default()))
    }

    /// Production client with a caller-chosen session file.
    pub fn with_session_file(base_url: &str, path: impl Into<PathBuf>) -> Result<Self, Error> {
        Self::with_session(base_url, Arc::new(SessionStore::at_path(path)))
    }

    fn with_session(base_url: &str, session: Arc<SessionStore>) -> Result<Self, Error> {
        let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(base_url)?);
        Ok(Self::with_transport(transport, session))
    }

    /// Client over an arbitrary transport; tests inject a scripted one.
    pub fn with_transport(transport: Arc<dyn Transport>, session: Arc<SessionStore>) -> Self {
        Self {
            api: Api::new(transport, Arc::clone(&session)),
            session,
        }
    }

    pub fn session_store(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub async fn current_session(&self) -> Option<Session> {
        self.session.get().await
    }
}
