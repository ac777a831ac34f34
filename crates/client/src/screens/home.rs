use domain::Role;

use crate::routes::{self, Route};
use crate::session::SessionStore;

/// What the landing screen does for the current session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HomeOutcome {
    /// Show the welcome card with the stored role and a dashboard link.
    LoggedIn { role: Role, dashboard: Route },
    /// No usable session; it has been cleared and login is next.
    RedirectLogin,
}

/// Resolves the home screen. A session missing its token is cleared on
/// the spot before redirecting, so stale storage never lingers.
pub async fn resolve(store: &SessionStore) -> HomeOutcome {
    match store.get().await {
        Some(session) if !session.access.is_empty() => HomeOutcome::LoggedIn {
            role: session.role,
            dashboard: routes::landing_route(session.role),
        },
        _ => {
            if let Err(error) = store.clear().await {
                tracing::warn!("Failed to clear stale session: {error}");
            }
            HomeOutcome::RedirectLogin
        }
    }
}
