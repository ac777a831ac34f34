use serde_json::json;

use domain::booking::{Appointment, AppointmentStatus, AvailabilitySlot, BookingRequest, Doctor};
use domain::profile::Specialization;

use crate::errors::Error;
use crate::portal::Portal;

impl Portal {
    /// The patient's appointments.
    pub async fn my_appointments(&self) -> Result<Vec<Appointment>, Error> {
        self.api.get("/appointments/my-appointments/").await
    }

    /// Doctor directory, availability included.
    pub async fn doctors(&self) -> Result<Vec<Doctor>, Error> {
        self.api.get("/appointments/doctors/").await
    }

    /// Creates an appointment.
    pub async fn book(&self, request: &BookingRequest) -> Result<(), Error> {
        self.api.post_unit("/appointments/book/", request).await
    }

    /// The doctor's appointment queue.
    pub async fn doctor_appointments(&self) -> Result<Vec<Appointment>, Error> {
        self.api.get("/appointments/doctor-appointments/").await
    }

    /// Transitions an appointment's status.
    pub async fn update_status(&self, id: &str, status: AppointmentStatus) -> Result<(), Error> {
        self.api
            .post_unit(
                &format!("/appointments/update-status/{id}/"),
                &json!({ "status": status }),
            )
            .await
    }

    /// The doctor's own weekly slots.
    pub async fn availability(&self) -> Result<Vec<AvailabilitySlot>, Error> {
        self.api.get("/appointments/availability/").await
    }

    /// Adds one weekly slot. No duplicate or overlap check happens
    /// client-side; the backend owns that decision.
    pub async fn add_availability(&self, slot: &AvailabilitySlot) -> Result<(), Error> {
        self.api.post_unit("/appointments/availability/", slot).await
    }

    /// Specialization lookup list.
    pub async fn specializations(&self) -> Result<Vec<Specialization>, Error> {
        self.api.get("/appointments/specializations/").await
    }

    /// Sets the doctor's specialization.
    pub async fn set_specialization(&self, specialization_id: i64) -> Result<(), Error> {
        self.api
            .post_unit(
                "/appointments/set-specialization/",
                &json!({ "specialization_id": specialization_id }),
            )
            .await
    }
}
