use chrono::{Duration, NaiveDate};

use super::types::{DayAvailability, TimeRange, Weekday};

/// Calendar dates in the next seven days (today inclusive) on which the
/// doctor has at least one weekly availability entry.
pub fn upcoming_dates(today: NaiveDate, availability: &[DayAvailability]) -> Vec<NaiveDate> {
    if availability.is_empty() {
        return Vec::new();
    }
    (0..7)
        .map(|offset| today + Duration::days(offset))
        .filter(|date| {
            Weekday::of(*date)
                .map(|day| availability.iter().any(|entry| entry.weekday == day))
                .unwrap_or(false)
        })
        .collect()
}

/// Weekly slots the doctor offers on the given date's weekday.
pub fn slots_on(date: NaiveDate, availability: &[DayAvailability]) -> Vec<TimeRange> {
    let Some(day) = Weekday::of(date) else {
        return Vec::new();
    };
    availability
        .iter()
        .find(|entry| entry.weekday == day)
        .map(|entry| entry.slots.clone())
        .unwrap_or_default()
}
