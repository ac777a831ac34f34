use domain::prescriptions::{Prescription, PrescriptionRequest};

use crate::errors::Error;
use crate::portal::Portal;

impl Portal {
    /// Prescriptions the doctor has written.
    pub async fn doctor_prescriptions(&self) -> Result<Vec<Prescription>, Error> {
        self.api.get("/prescriptions/my-doctor/").await
    }

    /// Prescriptions written for the patient.
    pub async fn patient_prescriptions(&self) -> Result<Vec<Prescription>, Error> {
        self.api.get("/prescriptions/patient/").await
    }

    /// Creates a prescription for an appointment. The backend flips the
    /// appointment's `prescription_added` flag; at most one prescription
    /// ever exists per appointment.
    pub async fn create_prescription(&self, request: &PrescriptionRequest) -> Result<(), Error> {
        self.api.post_unit("/prescriptions/create/", request).await
    }
}
