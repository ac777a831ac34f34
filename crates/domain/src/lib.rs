//! Medical Portal Domain Models
//!
//! Pure client-side domain logic for the clinic appointment portal. No
//! I/O happens in this crate; the `client` crate drives the network.

/// Booking wizard, calendar math, appointment types
pub mod booking;

/// Domain errors
pub mod errors;

/// Route gating
pub mod guard;

/// Prescription types and the authoring screen model
pub mod prescriptions;

/// Profile and registration types
pub mod profile;

/// Medical report types
pub mod reports;

/// Session and roles
pub mod session;

pub use errors::Error;
pub use guard::Access;
pub use session::{Role, Session};
