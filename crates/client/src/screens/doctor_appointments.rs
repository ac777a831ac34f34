use domain::booking::{Appointment, AppointmentStatus};

use crate::portal::Portal;

use super::loadable::Loadable;

/// The doctor's appointment queue with complete/cancel actions on
/// pending rows.
#[derive(Default)]
pub struct DoctorAppointmentsScreen {
    appointments: Loadable<Vec<Appointment>>,
    message: Option<String>,
}

impl DoctorAppointmentsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn appointments(&self) -> &Loadable<Vec<Appointment>> {
        &self.appointments
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub async fn refresh(&mut self, portal: &Portal) {
        self.appointments = Loadable::Loading;
        self.message = None;
        match portal.doctor_appointments().await {
            Ok(list) => self.appointments = Loadable::Ready(list),
            Err(error) => {
                tracing::warn!("Failed to load appointments: {error}");
                self.appointments =
                    Loadable::Failed("Failed to load appointments. Please try again.".to_string());
            }
        }
    }

    /// Posts the status transition, then refetches the queue. On failure
    /// the current list stays as-is with a message.
    pub async fn update_status(
        &mut self,
        portal: &Portal,
        appointment_id: &str,
        status: AppointmentStatus,
    ) {
        match portal.update_status(appointment_id, status).await {
            Ok(()) => self.refresh(portal).await,
            Err(error) => {
                tracing::warn!("Failed to update status: {error}");
                self.message = Some("Failed to update status. Please try again.".to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::session::SessionStore;
    use crate::testing::ScriptedTransport;
    use crate::transport::{Body, Method};

    use super::*;

    fn portal() -> (Arc<ScriptedTransport>, Portal) {
        let transport = Arc::new(ScriptedTransport::new());
        let session = Arc::new(SessionStore::in_memory());
        let portal = Portal::with_transport(transport.clone(), session);
        (transport, portal)
    }

    fn queue(status: &str) -> serde_json::Value {
        json!([{
            "id": "a1",
            "patient": { "username": "alice" },
            "date": "2025-01-06",
            "time_slot": "09:00-09:30",
            "mode": "video",
            "status": status
        }])
    }

    #[tokio::test]
    async fn completing_an_appointment_posts_and_refetches() {
        let (transport, portal) = portal();
        transport.on(
            Method::Get,
            "/appointments/doctor-appointments/",
            200,
            queue("pending"),
        );
        transport.on(
            Method::Post,
            "/appointments/update-status/a1/",
            200,
            json!({}),
        );
        transport.on(
            Method::Get,
            "/appointments/doctor-appointments/",
            200,
            queue("completed"),
        );

        let mut screen = DoctorAppointmentsScreen::new();
        screen.refresh(&portal).await;
        screen
            .update_status(&portal, "a1", AppointmentStatus::Completed)
            .await;

        let posts = transport.requests_to("/appointments/update-status/a1/");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].body, Body::Json(json!({ "status": "completed" })));

        let list = screen.appointments().ready().unwrap();
        assert_eq!(list[0].status, AppointmentStatus::Completed);
    }

    #[tokio::test]
    async fn failed_transition_keeps_the_list_and_sets_a_message() {
        let (transport, portal) = portal();
        transport.on(
            Method::Get,
            "/appointments/doctor-appointments/",
            200,
            queue("pending"),
        );

        let mut screen = DoctorAppointmentsScreen::new();
        screen.refresh(&portal).await;
        screen
            .update_status(&portal, "a1", AppointmentStatus::Cancelled)
            .await;

        assert!(screen.message().is_some());
        assert_eq!(
            screen.appointments().ready().unwrap()[0].status,
            AppointmentStatus::Pending
        );
    }
}
