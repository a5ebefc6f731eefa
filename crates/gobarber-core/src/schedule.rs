//! Appointment-time helpers: grouping a provider's day and formatting dates.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::types::{AppointmentRequest, HourAvailability};

/// Hours before this belong to the morning section.
pub const AFTERNOON_STARTS_AT: u32 = 12;

/// An hour slot ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HourSlot {
    pub hour: u32,
    pub available: bool,
    /// `"HH:00"`.
    pub label: String,
}

impl From<HourAvailability> for HourSlot {
    fn from(slot: HourAvailability) -> Self {
        HourSlot {
            hour: slot.hour,
            available: slot.available,
            label: format!("{:02}:00", slot.hour),
        }
    }
}

/// A provider's day split into morning and afternoon.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DaySchedule {
    pub morning: Vec<HourSlot>,
    pub afternoon: Vec<HourSlot>,
}

impl DaySchedule {
    pub fn from_availability(availability: &[HourAvailability]) -> Self {
        let (morning, afternoon): (Vec<_>, Vec<_>) = availability
            .iter()
            .copied()
            .map(HourSlot::from)
            .partition(|slot| slot.hour < AFTERNOON_STARTS_AT);
        DaySchedule { morning, afternoon }
    }

    /// Whether `hour` is listed and free.
    pub fn is_available(&self, hour: u32) -> bool {
        self.morning
            .iter()
            .chain(self.afternoon.iter())
            .any(|slot| slot.hour == hour && slot.available)
    }

    pub fn is_empty(&self) -> bool {
        self.morning.is_empty() && self.afternoon.is_empty()
    }
}

/// The start of the appointment, or `None` if `hour` is not a valid hour.
pub fn appointment_start(date: NaiveDate, hour: u32) -> Option<NaiveDateTime> {
    date.and_hms_opt(hour, 0, 0)
}

/// Date string the API expects: `"{year}-{month}-{day} {hour}:00:00"`, unpadded.
pub fn appointment_date(date: NaiveDate, hour: u32) -> String {
    format!(
        "{}-{}-{} {}:00:00",
        date.year(),
        date.month(),
        date.day(),
        hour
    )
}

pub fn appointment_request(
    provider_id: impl Into<String>,
    date: NaiveDate,
    hour: u32,
) -> AppointmentRequest {
    AppointmentRequest {
        provider_id: provider_id.into(),
        date: appointment_date(date, hour),
    }
}

/// Confirmation line, e.g. `Tuesday, 20 October 2026 at 14:00h`.
pub fn confirmation_message(start: NaiveDateTime) -> String {
    start.format("%A, %d %B %Y at %H:%Mh").to_string()
}
