use serde::Deserialize;
use serde_json::json;

use domain::profile::RegisterProfile;
use domain::{Role, Session};

use crate::errors::Error;
use crate::portal::Portal;
use crate::routes::{self, Route};

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access: String,
    refresh: String,
    role: String,
}

impl Portal {
    /// Authenticates and stores the session. Returns the landing route
    /// for the role. On any failure nothing is stored.
    pub async fn login(&self, username: &str, password: &str) -> Result<Route, Error> {
        let response: LoginResponse = self
            .api
            .post(
                "/users/login/",
                &json!({ "username": username, "password": password }),
            )
            .await?;
        let role: Role = response.role.parse().map_err(Error::Domain)?;
        self.session
            .set(Session::new(response.access, response.refresh, role))
            .await?;
        tracing::info!("Logged in as {role}");
        Ok(routes::landing_route(role))
    }

    /// Creates an account. The caller logs in separately afterwards.
    pub async fn register(&self, profile: &RegisterProfile) -> Result<(), Error> {
        profile.validate()?;
        self.api.post_unit("/users/register/", profile).await
    }

    /// Invalidates the session server-side (best effort) and always
    /// clears the local session.
    pub async fn logout(&self) -> Result<(), Error> {
        if let Err(error) = self.api.post_empty("/users/logout/").await {
            tracing::warn!("Server-side logout failed: {error}");
        }
        self.session.clear().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::session::SessionStore;
    use crate::testing::ScriptedTransport;
    use crate::transport::Method;

    use super::*;

    fn portal() -> (Arc<ScriptedTransport>, Portal) {
        let transport = Arc::new(ScriptedTransport::new());
        let session = Arc::new(SessionStore::in_memory());
        let portal = Portal::with_transport(transport.clone(), session);
        (transport, portal)
    }

    #[tokio::test]
    async fn login_stores_session_and_routes_patient_to_dashboard() {
        let (transport, portal) = portal();
        transport.on(
            Method::Post,
            "/users/login/",
            200,
            json!({ "access": "a-token", "refresh": "r-token", "role": "patient" }),
        );

        let route = portal.login("alice", "hunter2").await.unwrap();
        assert_eq!(route, Route::Dashboard);

        let session = portal.current_session().await.unwrap();
        assert_eq!(session.access, "a-token");
        assert_eq!(session.refresh, "r-token");
        assert_eq!(session.role, Role::Patient);
    }

    #[tokio::test]
    async fn failed_login_leaves_no_session() {
        let (transport, portal) = portal();
        transport.on(
            Method::Post,
            "/users/login/",
            401,
            json!({ "detail": "Invalid credentials" }),
        );

        assert!(portal.login("alice", "wrong").await.is_err());
        assert!(portal.current_session().await.is_none());
    }

    #[tokio::test]
    async fn unknown_role_in_response_is_a_failed_login() {
        let (transport, portal) = portal();
        transport.on(
            Method::Post,
            "/users/login/",
            200,
            json!({ "access": "a", "refresh": "r", "role": "superuser" }),
        );

        assert!(portal.login("root", "root").await.is_err());
        assert!(portal.current_session().await.is_none());
    }

    #[tokio::test]
    async fn doctor_lands_on_doctor_dashboard() {
        let (transport, portal) = portal();
        transport.on(
            Method::Post,
            "/users/login/",
            200,
            json!({ "access": "a", "refresh": "r", "role": "doctor" }),
        );
        assert_eq!(
            portal.login("doc", "pw").await.unwrap(),
            Route::DoctorDashboard
        );
    }

    #[tokio::test]
    async fn logout_clears_session_even_when_server_call_fails() {
        let (transport, portal) = portal();
        transport.on(
            Method::Post,
            "/users/login/",
            200,
            json!({ "access": "a", "refresh": "r", "role": "patient" }),
        );
        portal.login("alice", "hunter2").await.unwrap();

        // No /users/logout/ scripted, so the server call fails.
        portal.logout().await.unwrap();
        assert!(portal.current_session().await.is_none());
    }

    #[tokio::test]
    async fn requests_after_login_carry_the_bearer_token() {
        let (transport, portal) = portal();
        transport.on(
            Method::Post,
            "/users/login/",
            200,
            json!({ "access": "a-token", "refresh": "r", "role": "patient" }),
        );
        transport.on(Method::Get, "/users/profile/", 200, json!({
            "username": "alice", "role": "patient"
        }));

        portal.login("alice", "hunter2").await.unwrap();
        portal.profile().await.unwrap();

        let requests = transport.requests_to("/users/profile/");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].bearer.as_deref(), Some("a-token"));
    }

    #[tokio::test]
    async fn register_validates_before_hitting_the_network() {
        let (transport, portal) = portal();
        let bad = RegisterProfile {
            username: "".into(),
            email: "a@b.c".into(),
            password: "pw".into(),
            role: Role::Patient,
            phone: "1".into(),
            address: "x".into(),
        };
        assert!(portal.register(&bad).await.is_err());
        assert!(transport.requests().is_empty());
    }
}
