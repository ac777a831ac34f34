use crate::session::{Role, Session};

/// Outcome of gating a screen against the current session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Access {
    /// The screen may render.
    Render,
    /// No access token; send the user to the login screen.
    RedirectLogin,
    /// Authenticated but wrong role; send the user home.
    RedirectHome,
}

/// Decides whether a screen requiring `required` roles may render.
///
/// An empty `required` list means any authenticated session is enough.
/// This is advisory client-side gating only; the backend API is the real
/// authorization boundary.
pub fn evaluate(required: &[Role], session: Option<&Session>) -> Access {
    let Some(session) = session else {
        return Access::RedirectLogin;
    };
    if session.access.is_empty() {
        return Access::RedirectLogin;
    }
    if !required.is_empty() && !required.contains(&session.role) {
        return Access::RedirectHome;
    }
    Access::Render
}
