use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Portal weekday. The backend books Monday through Saturday only, so
/// Sunday has no representation here.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// The portal weekday of a calendar date, `None` on Sundays.
    pub fn of(date: NaiveDate) -> Option<Self> {
        match date.weekday() {
            chrono::Weekday::Mon => Some(Self::Monday),
            chrono::Weekday::Tue => Some(Self::Tuesday),
            chrono::Weekday::Wed => Some(Self::Wednesday),
            chrono::Weekday::Thu => Some(Self::Thursday),
            chrono::Weekday::Fri => Some(Self::Friday),
            chrono::Weekday::Sat => Some(Self::Saturday),
            chrono::Weekday::Sun => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single offered interval within a day, times as `HH:MM` strings.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct TimeRange {
    pub start_time: String,
    pub end_time: String,
}

impl TimeRange {
    /// Slot key as submitted in a booking, e.g. `09:00-09:30`.
    pub fn key(&self) -> String {
        format!("{}-{}", self.start_time, self.end_time)
    }
}

/// A doctor's recurring weekly availability for one weekday, as returned
/// by the doctor directory.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct DayAvailability {
    pub weekday: Weekday,
    #[serde(default)]
    pub slots: Vec<TimeRange>,
}

/// One recurring weekly slot, the flat shape used by the availability
/// manager endpoints.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct AvailabilitySlot {
    pub weekday: Weekday,
    pub start_time: String,
    pub end_time: String,
}

/// Doctor directory entry.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Doctor {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub availability: Vec<DayAvailability>,
}

/// Appointment delivery channel.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Video,
    InPerson,
}

impl Default for Mode {
    fn default() -> Self {
        Self::Video
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Completed,
    Cancelled,
}

/// Doctor as embedded in a patient's appointment rows.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct DoctorRef {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
}

/// Patient as embedded in a doctor's appointment rows.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct PatientRef {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A booked appointment. Patient-side rows carry `doctor`, doctor-side
/// rows carry `patient`.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Appointment {
    pub id: String,
    #[serde(default)]
    pub doctor: Option<DoctorRef>,
    #[serde(default)]
    pub patient: Option<PatientRef>,
    pub date: NaiveDate,
    pub time_slot: String,
    pub mode: Mode,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub prescription_added: bool,
}

/// Create-booking payload.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct BookingRequest {
    pub doctor: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub mode: Mode,
}
