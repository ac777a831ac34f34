//! Typed surface over the portal's REST routes, one module per backend
//! resource. All methods live on [`crate::Portal`].

/// Appointments, availability, specializations
pub mod appointments;

/// Prescriptions
pub mod prescriptions;

/// Medical reports
pub mod reports;

/// Profile
pub mod users;
