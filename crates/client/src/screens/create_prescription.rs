use domain::booking::Appointment;
use domain::prescriptions::Authoring;

use crate::errors::Error;
use crate::portal::Portal;

use super::loadable::Loadable;

/// The doctor's prescription authoring screen: a form over the next
/// unprescribed appointment and a searchable history of completed ones.
#[derive(Default)]
pub struct CreatePrescriptionScreen {
    model: Loadable<Authoring>,
    note: String,
    search_query: String,
    message: Option<String>,
}

impl CreatePrescriptionScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&self) -> &Loadable<Authoring> {
        &self.model
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The completed rows matching the current search query.
    pub fn filtered_completed(&self) -> Vec<&Appointment> {
        self.model
            .ready()
            .map(|model| model.search(&self.search_query))
            .unwrap_or_default()
    }

    pub fn select_appointment(&mut self, appointment_id: &str) -> Result<(), Error> {
        match &mut self.model {
            Loadable::Ready(model) => Ok(model.select(appointment_id)?),
            _ => Err(Error::Domain(domain::Error::NotFound {
                entity: "appointments are still loading".to_string(),
            })),
        }
    }

    /// Fetches the appointment queue and the doctor's prescriptions
    /// together, then rebuilds the authoring model.
    pub async fn refresh(&mut self, portal: &Portal) {
        self.model = Loadable::Loading;
        let (appointments, prescriptions) =
            tokio::join!(portal.doctor_appointments(), portal.doctor_prescriptions());
        match (appointments, prescriptions) {
            (Ok(appointments), Ok(prescriptions)) => {
                let mut model = Authoring::default();
                model.refresh(appointments, prescriptions);
                self.model = Loadable::Ready(model);
            }
            (Err(error), _) | (_, Err(error)) => {
                tracing::warn!("Failed to load prescription data: {error}");
                self.model =
                    Loadable::Failed("Failed to load appointments. Please try again.".to_string());
            }
        }
    }

    /// Submits the note for the selected appointment, then clears the
    /// note field and re-fetches both lists. No optimistic update; the
    /// refreshed lists are the only source of truth.
    pub async fn submit(&mut self, portal: &Portal) {
        let Some(model) = self.model.ready() else {
            return;
        };
        let request = match model.validate_submit(&self.note) {
            Ok(request) => request,
            Err(error) => {
                self.message = Some(error.to_string());
                return;
            }
        };
        match portal.create_prescription(&request).await {
            Ok(()) => {
                self.note.clear();
                self.message = None;
                self.refresh(portal).await;
            }
            Err(error) => {
                tracing::warn!("Failed to submit prescription: {error}");
                self.message =
                    Some("Error submitting prescription. Please try again.".to_string());
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

    fn appointment_row(id: &str, username: &str, prescribed: bool) -> serde_json::Value {
        json!({
            "id": id,
            "patient": { "username": username },
            "date": "2025-01-06",
            "time_slot": "09:00-09:30",
            "mode": "video",
            "status": "completed",
            "prescription_added": prescribed
        })
    }

    fn script_fetch(transport: &ScriptedTransport, rows: serde_json::Value, prescriptions: serde_json::Value) {
        transport.on(Method::Get, "/appointments/doctor-appointments/", 200, rows);
        transport.on(Method::Get, "/prescriptions/my-doctor/", 200, prescriptions);
    }

    #[tokio::test]
    async fn refresh_builds_model_and_selects_first_unprescribed() {
        let (transport, portal) = portal();
        script_fetch(
            &transport,
            json!([
                appointment_row("a1", "Alice", true),
                appointment_row("a2", "bob", false),
            ]),
            json!([{ "appointment_id": "a1", "notes": "rest", "pdf": null }]),
        );

        let mut screen = CreatePrescriptionScreen::new();
        screen.refresh(&portal).await;

        let model = screen.model().ready().unwrap();
        assert_eq!(model.selected().unwrap().id, "a2");
        assert_eq!(model.prescription_for("a1").unwrap().notes, "rest");
    }

    #[tokio::test]
    async fn search_filters_history_case_insensitively() {
        let (transport, portal) = portal();
        script_fetch(
            &transport,
            json!([
                appointment_row("a1", "Alice", true),
                appointment_row("a2", "bob", true),
            ]),
            json!([]),
        );

        let mut screen = CreatePrescriptionScreen::new();
        screen.refresh(&portal).await;
        screen.set_search("al");

        let hits = screen.filtered_completed();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].patient.as_ref().unwrap().username, "Alice");
    }

    #[tokio::test]
    async fn submit_posts_clears_note_and_refetches() {
        let (transport, portal) = portal();
        script_fetch(
            &transport,
            json!([appointment_row("a2", "bob", false)]),
            json!([]),
        );
        transport.on(Method::Post, "/prescriptions/create/", 201, json!({}));
        // Second fetch round after the successful submit.
        script_fetch(
            &transport,
            json!([appointment_row("a2", "bob", true)]),
            json!([{ "appointment_id": "a2", "notes": "two pills", "pdf": null }]),
        );

        let mut screen = CreatePrescriptionScreen::new();
        screen.refresh(&portal).await;
        screen.set_note("two pills");
        screen.submit(&portal).await;

        let creates = transport.requests_to("/prescriptions/create/");
        assert_eq!(creates.len(), 1);
        assert_eq!(
            creates[0].body,
            Body::Json(json!({ "appointment": "a2", "notes": "two pills" }))
        );
        assert!(screen.note().is_empty());

        let model = screen.model().ready().unwrap();
        assert!(model.selected().is_none(), "nothing left to prescribe");
        assert_eq!(model.completed().len(), 1);
    }

    #[tokio::test]
    async fn empty_note_blocks_submission_client_side() {
        let (transport, portal) = portal();
        script_fetch(
            &transport,
            json!([appointment_row("a2", "bob", false)]),
            json!([]),
        );

        let mut screen = CreatePrescriptionScreen::new();
        screen.refresh(&portal).await;
        screen.set_note("   ");
        screen.submit(&portal).await;

        assert!(transport.requests_to("/prescriptions/create/").is_empty());
        assert!(screen.message().is_some());
    }

    #[tokio::test]
    async fn fetch_failure_surfaces_as_failed_state() {
        let (transport, portal) = portal();
        transport.on(
            Method::Get,
            "/appointments/doctor-appointments/",
            500,
            json!({}),
        );
        transport.on(Method::Get, "/prescriptions/my-doctor/", 200, json!([]));

        let mut screen = CreatePrescriptionScreen::new();
        screen.refresh(&portal).await;
        assert!(screen.model().failure().is_some());
    }
}
