//! One controller per screen. Each owns its local UI state, loads data
//! through the shared [`Loadable`] shape, and converts every network
//! failure into a user-facing message at the call site.

/// Patient appointment list + booking wizard
pub mod book_appointment;

/// Doctor prescription authoring
pub mod create_prescription;

/// Doctor appointment queue
pub mod doctor_appointments;

/// Doctor profile, specialization and availability manager
pub mod doctor_dashboard;

/// Landing screen resolution
pub mod home;

/// Tagged data-loading result
pub mod loadable;

/// Patient prescription list
pub mod my_prescriptions;

/// Patient report list
pub mod my_reports;

/// Patient profile card
pub mod patient_dashboard;

/// Report upload form
pub mod upload_report;

pub use book_appointment::BookAppointmentScreen;
pub use create_prescription::CreatePrescriptionScreen;
pub use doctor_appointments::DoctorAppointmentsScreen;
pub use doctor_dashboard::{DoctorDashboardScreen, SlotForm};
pub use home::HomeOutcome;
pub use loadable::Loadable;
pub use my_prescriptions::MyPrescriptionsScreen;
pub use my_reports::MyReportsScreen;
pub use patient_dashboard::PatientDashboardScreen;
pub use upload_report::UploadReportScreen;
