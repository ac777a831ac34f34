/// Authoring screen model
pub mod authoring;

/// Prescription types
pub mod types;

pub use authoring::Authoring;
pub use types::{Prescription, PrescriptionRequest};
