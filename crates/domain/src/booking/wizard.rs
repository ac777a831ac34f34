use chrono::NaiveDate;

use crate::errors::Error;

use super::calendar;
use super::types::{BookingRequest, Doctor, Mode, TimeRange};

/// Wizard position, one variant per modal step. Each variant carries
/// exactly the selections that are valid at that step, so combinations
/// like "slot chosen but no date" are unrepresentable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Step {
    Closed,
    /// Step 1: pick a doctor from the directory.
    SelectDoctor,
    /// Step 2: pick a date within the doctor's 7-day window.
    SelectDate { doctor: Doctor },
    /// Step 3: pick a time slot and delivery mode, then submit.
    SelectSlot {
        doctor: Doctor,
        date: NaiveDate,
        slot: Option<String>,
        mode: Mode,
    },
    /// Step 4: display-only confirmation.
    Confirmed { doctor: Doctor },
}

impl Step {
    fn name(&self) -> &'static str {
        match self {
            Step::Closed => "closed",
            Step::SelectDoctor => "select_doctor",
            Step::SelectDate { .. } => "select_date",
            Step::SelectSlot { .. } => "select_slot",
            Step::Confirmed { .. } => "confirmed",
        }
    }
}

/// Four-step, single-session booking wizard.
///
/// The wizard owns selections only; fetching the doctor directory and
/// posting the booking are the screen's job. A failed submission leaves
/// the wizard at step 3 with all selections intact, so a retry posts the
/// same payload.
#[derive(Clone, Debug)]
pub struct Wizard {
    step: Step,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self { step: Step::Closed }
    }

    pub fn step(&self) -> &Step {
        &self.step
    }

    pub fn is_open(&self) -> bool {
        self.step != Step::Closed
    }

    /// Opens the modal at doctor selection, discarding any prior
    /// selections.
    pub fn open(&mut self) {
        self.step = Step::SelectDoctor;
    }

    /// Closes the modal and discards all wizard-local state.
    pub fn close(&mut self) {
        self.step = Step::Closed;
    }

    /// Step 1 -> 2.
    pub fn select_doctor(&mut self, doctor: Doctor) -> Result<(), Error> {
        match &self.step {
            Step::SelectDoctor => {
                self.step = Step::SelectDate { doctor };
                Ok(())
            }
            other => Err(invalid(other, "select_date")),
        }
    }

    /// The selectable dates at step 2: the next seven days (today
    /// inclusive) matching the chosen doctor's weekly availability.
    pub fn available_dates(&self, today: NaiveDate) -> Vec<NaiveDate> {
        match &self.step {
            Step::SelectDate { doctor } => calendar::upcoming_dates(today, &doctor.availability),
            _ => Vec::new(),
        }
    }

    /// Step 2 -> 3. Mode defaults to video, no slot chosen yet.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), Error> {
        match &self.step {
            Step::SelectDate { doctor } => {
                self.step = Step::SelectSlot {
                    doctor: doctor.clone(),
                    date,
                    slot: None,
                    mode: Mode::default(),
                };
                Ok(())
            }
            other => Err(invalid(other, "select_slot")),
        }
    }

    /// The slot options at step 3, derived from the chosen date's weekday.
    pub fn slot_options(&self) -> Vec<TimeRange> {
        match &self.step {
            Step::SelectSlot { doctor, date, .. } => calendar::slots_on(*date, &doctor.availability),
            _ => Vec::new(),
        }
    }

    /// Records the chosen slot key within step 3. The key must be one of
    /// the options for the chosen date.
    pub fn choose_slot(&mut self, key: &str) -> Result<(), Error> {
        let options = self.slot_options();
        match &mut self.step {
            Step::SelectSlot { slot, .. } => {
                if !options.iter().any(|option| option.key() == key) {
                    return Err(Error::Validation {
                        message: format!("No such slot on the chosen date: {key}"),
                    });
                }
                *slot = Some(key.to_string());
                Ok(())
            }
            other => Err(invalid(other, "select_slot")),
        }
    }

    /// Records the delivery mode within step 3.
    pub fn choose_mode(&mut self, chosen: Mode) -> Result<(), Error> {
        match &mut self.step {
            Step::SelectSlot { mode, .. } => {
                *mode = chosen;
                Ok(())
            }
            other => Err(invalid(other, "select_slot")),
        }
    }

    /// Back navigation: 2 -> 1 drops the doctor, 3 -> 2 drops date, slot
    /// and mode.
    pub fn back(&mut self) -> Result<(), Error> {
        match &self.step {
            Step::SelectDate { .. } => {
                self.step = Step::SelectDoctor;
                Ok(())
            }
            Step::SelectSlot { doctor, .. } => {
                self.step = Step::SelectDate {
                    doctor: doctor.clone(),
                };
                Ok(())
            }
            other => Err(invalid(other, "back")),
        }
    }

    /// The create-booking payload. Only reachable at step 3 with a slot
    /// chosen; submit stays disabled until then.
    pub fn booking_request(&self) -> Result<BookingRequest, Error> {
        match &self.step {
            Step::SelectSlot {
                doctor,
                date,
                slot: Some(slot),
                mode,
            } => Ok(BookingRequest {
                doctor: doctor.id.clone(),
                date: *date,
                time_slot: slot.clone(),
                mode: *mode,
            }),
            Step::SelectSlot { slot: None, .. } => Err(Error::Validation {
                message: "Select a time slot before confirming".to_string(),
            }),
            other => Err(invalid(other, "confirmed")),
        }
    }

    /// Step 3 -> 4, after the booking call succeeded.
    pub fn confirm(&mut self) -> Result<(), Error> {
        match &self.step {
            Step::SelectSlot {
                doctor,
                slot: Some(_),
                ..
            } => {
                self.step = Step::Confirmed {
                    doctor: doctor.clone(),
                };
                Ok(())
            }
            other => Err(invalid(other, "confirmed")),
        }
    }
}

fn invalid(from: &Step, to: &str) -> Error {
    Error::InvalidStateTransition {
        from: from.name().to_string(),
        to: to.to_string(),
    }
}
