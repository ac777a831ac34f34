use std::collections::HashMap;

use crate::booking::types::Appointment;
use crate::errors::Error;

use super::types::{Prescription, PrescriptionRequest};

/// In-memory model behind the prescription authoring screen.
///
/// Splits a doctor's appointments into rows still awaiting a prescription
/// and rows already prescribed, and keeps a single selection pointer over
/// the former. Consistency is pull-based: the screen re-feeds both lists
/// through [`Authoring::refresh`] after every successful submission, and
/// no optimistic local update happens.
#[derive(Clone, Debug, Default)]
pub struct Authoring {
    appointments: Vec<Appointment>,
    by_appointment: HashMap<String, Prescription>,
    selected: Option<String>,
}

impl Authoring {
    /// Replaces both lists and re-points the selection at the first
    /// appointment still awaiting a prescription, if any.
    pub fn refresh(&mut self, appointments: Vec<Appointment>, prescriptions: Vec<Prescription>) {
        self.by_appointment = prescriptions
            .into_iter()
            .filter_map(|p| p.appointment_id.clone().map(|id| (id, p)))
            .collect();
        self.appointments = appointments;
        self.selected = self
            .to_prescribe()
            .first()
            .map(|appointment| appointment.id.clone());
    }

    /// Appointments without a prescription yet.
    pub fn to_prescribe(&self) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|appointment| !appointment.prescription_added)
            .collect()
    }

    /// Appointments that already have a prescription.
    pub fn completed(&self) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|appointment| appointment.prescription_added)
            .collect()
    }

    /// The currently selected appointment, if it is still prescribable.
    pub fn selected(&self) -> Option<&Appointment> {
        let id = self.selected.as_deref()?;
        self.to_prescribe()
            .into_iter()
            .find(|appointment| appointment.id == id)
    }

    /// Points the selection at another prescribable appointment.
    pub fn select(&mut self, appointment_id: &str) -> Result<(), Error> {
        if !self
            .to_prescribe()
            .iter()
            .any(|appointment| appointment.id == appointment_id)
        {
            return Err(Error::NotFound {
                entity: format!("prescribable appointment {appointment_id}"),
            });
        }
        self.selected = Some(appointment_id.to_string());
        Ok(())
    }

    /// The stored prescription for a completed appointment, if the doctor
    /// list returned one.
    pub fn prescription_for(&self, appointment_id: &str) -> Option<&Prescription> {
        self.by_appointment.get(appointment_id)
    }

    /// Completed rows whose patient username contains `query`,
    /// case-insensitive. Pure filter, recomputed per keystroke.
    pub fn search(&self, query: &str) -> Vec<&Appointment> {
        let needle = query.to_lowercase();
        self.completed()
            .into_iter()
            .filter(|appointment| {
                appointment
                    .patient
                    .as_ref()
                    .map(|patient| patient.username.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Validates a submission: a selection must exist and the note must be
    /// non-empty after trimming. Returns the create payload.
    pub fn validate_submit(&self, note: &str) -> Result<PrescriptionRequest, Error> {
        if note.trim().is_empty() {
            return Err(Error::Validation {
                message: "Prescription notes must not be empty".to_string(),
            });
        }
        let selected = self.selected().ok_or(Error::Validation {
            message: "Select an appointment to prescribe".to_string(),
        })?;
        Ok(PrescriptionRequest {
            appointment: selected.id.clone(),
            notes: note.to_string(),
        })
    }
}
