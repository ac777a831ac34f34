/// 7-day date window and weekday slot matching
pub mod calendar;

/// Appointment and availability types
pub mod types;

/// Booking wizard state machine
pub mod wizard;

pub use types::{
    Appointment, AppointmentStatus, AvailabilitySlot, BookingRequest, DayAvailability, Doctor,
    DoctorRef, Mode, PatientRef, TimeRange, Weekday,
};
pub use wizard::{Step, Wizard};
