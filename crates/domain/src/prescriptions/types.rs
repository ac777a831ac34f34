use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A prescription. At most one exists per appointment; the backend keys
/// them by appointment id. Patient-side rows carry `doctor_name` and
/// `date`, doctor-side rows carry `appointment_id`.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Prescription {
    #[serde(default)]
    pub appointment_id: Option<String>,
    #[serde(default)]
    pub doctor_name: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub notes: String,
    #[serde(default)]
    pub pdf: Option<String>,
}

/// Create-prescription payload.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct PrescriptionRequest {
    pub appointment: String,
    pub notes: String,
}
