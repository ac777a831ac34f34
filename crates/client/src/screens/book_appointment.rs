use domain::booking::{Appointment, Doctor, Wizard};

use crate::portal::Portal;

use super::loadable::Loadable;

/// The patient's appointments screen with the four-step booking wizard.
#[derive(Default)]
pub struct BookAppointmentScreen {
    appointments: Loadable<Vec<Appointment>>,
    doctors: Vec<Doctor>,
    wizard: Wizard,
    message: Option<String>,
}

impl BookAppointmentScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn appointments(&self) -> &Loadable<Vec<Appointment>> {
        &self.appointments
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut Wizard {
        &mut self.wizard
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Fetch-on-mount, and again after every successful booking.
    pub async fn refresh(&mut self, portal: &Portal) {
        self.appointments = Loadable::Loading;
        match portal.my_appointments().await {
            Ok(list) => self.appointments = Loadable::Ready(list),
            Err(error) => {
                tracing::warn!("Failed to load appointments: {error}");
                self.appointments = Loadable::Failed("Failed to load appointments.".to_string());
            }
        }
    }

    /// Opens the wizard at step 1 with cleared selections and fetches the
    /// doctor directory. On fetch failure the wizard stays open at step 1
    /// over an empty list, with a transient message.
    pub async fn open_wizard(&mut self, portal: &Portal) {
        self.wizard.open();
        self.message = None;
        self.doctors.clear();
        match portal.doctors().await {
            Ok(doctors) => self.doctors = doctors,
            Err(error) => {
                tracing::warn!("Failed to load doctors: {error}");
                self.message = Some("Failed to load doctors.".to_string());
            }
        }
    }

    pub fn close_wizard(&mut self) {
        self.wizard.close();
    }

    /// Submits the wizard's booking. Awaits the create call, then
    /// refreshes the appointment list and moves to the confirmation step.
    /// On failure the wizard keeps all selections so a retry posts the
    /// identical payload.
    pub async fn submit(&mut self, portal: &Portal) {
        let request = match self.wizard.booking_request() {
            Ok(request) => request,
            Err(error) => {
                self.message = Some(error.to_string());
                return;
            }
        };
        match portal.book(&request).await {
            Ok(()) => {
                self.message = Some("Appointment booked successfully!".to_string());
                self.refresh(portal).await;
                if let Err(error) = self.wizard.confirm() {
                    tracing::warn!("Wizard left step 3 mid-submit: {error}");
                }
            }
            Err(error) => {
                tracing::warn!("Failed to book appointment: {error}");
                self.message = Some("Error booking appointment. Please try again.".to_string());
            }
        }
    }
}
