// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time slot derivation for the availability grid.
//!
//! This module derives the bookable display slots for one facility and one
//! calendar date:
//! - Weekend/weekday window selection
//! - One slot per whole hour in `[open, close)`
//! - 12-hour/24-hour label conversion
//! - Past-slot suppression with a safety buffer
//!
//! ## Invariants
//!
//! - All date decisions use the facility's **local** wall clock. The weekday
//!   selection, the past rule, and the backend date key derive from the same
//!   local calendar date; a UTC/local mix near midnight would silently apply
//!   the wrong operating window.
//! - `to_24h(to_12h(t)) == t` for every whole-hour time.
//! - Dates strictly before today are entirely past; dates strictly after are
//!   never past. The buffer applies on today only.

use crate::error::DomainError;
use crate::types::OperatingHours;
use time::macros::format_description;
use time::{Date, Time, Weekday};

/// Fixed booking granularity in minutes.
pub const SLOT_DURATION_MINUTES: u32 = 60;

/// Minutes of lead time below which a slot today is treated as past.
///
/// Prevents booking a court the customer cannot physically reach in time.
pub const PAST_BUFFER_MINUTES: i64 = 15;

/// A derived display slot. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    /// 12-hour display label (e.g., "8:00 AM").
    pub label: String,
    /// 24-hour start time ("HH:MM").
    pub start_24: String,
    /// Slot length in minutes. Always [`SLOT_DURATION_MINUTES`].
    pub duration_minutes: u32,
    /// Whether this slot starts within the past buffer on the given date.
    pub is_past: bool,
}

/// Derives the ordered display slots for one date.
///
/// # Arguments
///
/// * `hours` - The facility's operating windows
/// * `date` - The calendar date being viewed (local)
/// * `today` - The current local calendar date
/// * `now` - The current local time of day
///
/// # Window Selection
///
/// Saturday and Sunday use the weekend window, all other days the weekday
/// window. A window that fails its invariant (possible after
/// deserialization) degrades to the hardcoded defaults instead of crashing.
#[must_use]
pub fn day_slots(hours: &OperatingHours, date: Date, today: Date, now: Time) -> Vec<TimeSlot> {
    let is_weekend = matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday);
    let mut window = hours.window_for(is_weekend);
    if !window.is_valid() {
        window = if is_weekend {
            OperatingHours::DEFAULT_WEEKEND
        } else {
            OperatingHours::DEFAULT_WEEKDAY
        };
    }

    (window.open()..window.close())
        .map(|hour| TimeSlot {
            label: label_from(hour, 0),
            start_24: format!("{hour:02}:00"),
            duration_minutes: SLOT_DURATION_MINUTES,
            is_past: is_past_slot(hour, date, today, now),
        })
        .collect()
}

/// Applies the past rule for a slot starting on the hour.
///
/// For today, a slot is past iff `slot_start <= now + buffer`.
fn is_past_slot(slot_hour: u8, date: Date, today: Date, now: Time) -> bool {
    if date < today {
        return true;
    }
    if date > today {
        return false;
    }
    let slot_minutes = i64::from(slot_hour) * 60;
    let now_minutes = i64::from(now.hour()) * 60 + i64::from(now.minute());
    slot_minutes <= now_minutes + PAST_BUFFER_MINUTES
}

/// Converts a 24-hour "HH:MM" time to its 12-hour display label.
///
/// Noon is "12:00 PM"; midnight is "12:00 AM".
///
/// # Errors
///
/// Returns an error if the input is not a valid "HH:MM" time.
pub fn to_12h(time_24: &str) -> Result<String, DomainError> {
    let (hour, minute) = split_hhmm(time_24)?;
    Ok(label_from(hour, minute))
}

/// Converts a 12-hour display label back to its 24-hour "HH:MM" form.
///
/// Inverse of [`to_12h`]: "12:00 PM" is "12:00" and "12:00 AM" is "00:00".
///
/// # Errors
///
/// Returns an error if the label is not of the form "H:MM AM" / "H:MM PM".
pub fn to_24h(label: &str) -> Result<String, DomainError> {
    let (time_part, suffix) = label
        .rsplit_once(' ')
        .ok_or_else(|| DomainError::InvalidTimeLabel(label.to_string()))?;
    let (hour, minute) = split_hhmm(time_part)?;
    if hour == 0 || hour > 12 {
        return Err(DomainError::InvalidTimeLabel(label.to_string()));
    }
    let hour_24 = match suffix {
        "AM" => {
            if hour == 12 {
                0
            } else {
                hour
            }
        }
        "PM" => {
            if hour == 12 {
                12
            } else {
                hour + 12
            }
        }
        _ => return Err(DomainError::InvalidTimeLabel(label.to_string())),
    };
    Ok(format!("{hour_24:02}:{minute:02}"))
}

/// Computes a slot end time: start plus the fixed duration, with hour
/// rollover past midnight.
///
/// # Errors
///
/// Returns an error if the start time is not a valid "HH:MM" time.
pub fn slot_end_time(start_24: &str) -> Result<String, DomainError> {
    let (hour, minute) = split_hhmm(start_24)?;
    let total = (u32::from(hour) * 60 + u32::from(minute) + SLOT_DURATION_MINUTES) % (24 * 60);
    Ok(format!("{:02}:{:02}", total / 60, total % 60))
}

/// Formats a local calendar date as the backend "YYYY-MM-DD" key.
///
/// The same local date drives weekday selection and the past rule; the
/// backend key must not be derived from a UTC-shifted timestamp.
///
/// # Errors
///
/// Returns an error if the date cannot be formatted.
pub fn date_key(date: Date) -> Result<String, DomainError> {
    let description = format_description!("[year]-[month]-[day]");
    date.format(&description)
        .map_err(|e| DomainError::DateFormatError {
            reason: e.to_string(),
        })
}

/// Builds the 12-hour label for an hour/minute pair.
fn label_from(hour: u8, minute: u8) -> String {
    let (display_hour, suffix) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{display_hour}:{minute:02} {suffix}")
}

/// Splits an "HH:MM" string into hour and minute components.
fn split_hhmm(s: &str) -> Result<(u8, u8), DomainError> {
    let (hour_part, minute_part) = s
        .split_once(':')
        .ok_or_else(|| DomainError::InvalidTimeLabel(s.to_string()))?;
    let hour: u8 = hour_part
        .parse()
        .map_err(|_| DomainError::InvalidTimeLabel(s.to_string()))?;
    let minute: u8 = minute_part
        .parse()
        .map_err(|_| DomainError::InvalidTimeLabel(s.to_string()))?;
    if hour > 23 || minute > 59 {
        return Err(DomainError::InvalidTimeLabel(s.to_string()));
    }
    Ok((hour, minute))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::DailyHours;

    fn hours() -> OperatingHours {
        OperatingHours {
            weekday: DailyHours::new(8, 20).unwrap(),
            weekend: DailyHours::new(6, 22).unwrap(),
        }
    }

    #[test]
    fn test_time_conversion_round_trips_every_whole_hour() {
        for hour in 0..24_u8 {
            let time_24 = format!("{hour:02}:00");
            let label = to_12h(&time_24).unwrap();
            assert_eq!(to_24h(&label).unwrap(), time_24);
        }
    }

    #[test]
    fn test_noon_and_midnight_labels() {
        assert_eq!(to_12h("12:00").unwrap(), "12:00 PM");
        assert_eq!(to_12h("00:00").unwrap(), "12:00 AM");
        assert_eq!(to_24h("12:00 PM").unwrap(), "12:00");
        assert_eq!(to_24h("12:00 AM").unwrap(), "00:00");
    }

    #[test]
    fn test_invalid_labels_rejected() {
        assert!(to_24h("13:00 PM").is_err());
        assert!(to_24h("8:00").is_err());
        assert!(to_12h("24:00").is_err());
        assert!(to_12h("not a time").is_err());
    }

    #[test]
    fn test_weekday_uses_weekday_window() {
        let date = Date::from_calendar_date(2026, time::Month::March, 4).unwrap(); // Wednesday
        let today = Date::from_calendar_date(2026, time::Month::March, 1).unwrap();
        let slots = day_slots(&hours(), date, today, Time::from_hms(9, 0, 0).unwrap());
        assert_eq!(slots.len(), 12);
        assert_eq!(slots[0].start_24, "08:00");
        assert_eq!(slots[0].label, "8:00 AM");
        assert_eq!(slots[11].start_24, "19:00");
    }

    #[test]
    fn test_weekend_uses_weekend_window() {
        let date = Date::from_calendar_date(2026, time::Month::March, 7).unwrap(); // Saturday
        let today = Date::from_calendar_date(2026, time::Month::March, 1).unwrap();
        let slots = day_slots(&hours(), date, today, Time::from_hms(9, 0, 0).unwrap());
        assert_eq!(slots.len(), 16);
        assert_eq!(slots[0].start_24, "06:00");
        assert_eq!(slots[15].start_24, "21:00");
    }

    #[test]
    fn test_slot_in_ten_minutes_is_past() {
        let today = Date::from_calendar_date(2026, time::Month::March, 4).unwrap();
        // 13:50 now; the 14:00 slot starts in 10 minutes.
        let slots = day_slots(&hours(), today, today, Time::from_hms(13, 50, 0).unwrap());
        let slot = slots.iter().find(|s| s.start_24 == "14:00").unwrap();
        assert!(slot.is_past);
    }

    #[test]
    fn test_slot_in_twenty_minutes_is_not_past() {
        let today = Date::from_calendar_date(2026, time::Month::March, 4).unwrap();
        // 13:40 now; the 14:00 slot starts in 20 minutes.
        let slots = day_slots(&hours(), today, today, Time::from_hms(13, 40, 0).unwrap());
        let slot = slots.iter().find(|s| s.start_24 == "14:00").unwrap();
        assert!(!slot.is_past);
    }

    #[test]
    fn test_yesterday_is_entirely_past() {
        let today = Date::from_calendar_date(2026, time::Month::March, 4).unwrap();
        let yesterday = Date::from_calendar_date(2026, time::Month::March, 3).unwrap();
        let slots = day_slots(&hours(), yesterday, today, Time::from_hms(0, 0, 0).unwrap());
        assert!(slots.iter().all(|s| s.is_past));
    }

    #[test]
    fn test_tomorrow_is_never_past() {
        let today = Date::from_calendar_date(2026, time::Month::March, 4).unwrap();
        let tomorrow = Date::from_calendar_date(2026, time::Month::March, 5).unwrap();
        let slots = day_slots(&hours(), tomorrow, today, Time::from_hms(23, 59, 0).unwrap());
        assert!(slots.iter().all(|s| !s.is_past));
    }

    #[test]
    fn test_invalid_window_degrades_to_default() {
        let broken = OperatingHours {
            weekday: DailyHours { open: 20, close: 8 },
            weekend: DailyHours::new(6, 22).unwrap(),
        };
        let date = Date::from_calendar_date(2026, time::Month::March, 4).unwrap();
        let today = Date::from_calendar_date(2026, time::Month::March, 1).unwrap();
        let slots = day_slots(&broken, date, today, Time::from_hms(9, 0, 0).unwrap());
        assert_eq!(slots[0].start_24, "08:00");
        assert_eq!(slots.len(), 12);
    }

    #[test]
    fn test_slot_end_time_rolls_over_midnight() {
        assert_eq!(slot_end_time("08:00").unwrap(), "09:00");
        assert_eq!(slot_end_time("23:00").unwrap(), "00:00");
    }

    #[test]
    fn test_date_key_is_zero_padded() {
        let date = Date::from_calendar_date(2026, time::Month::March, 4).unwrap();
        assert_eq!(date_key(date).unwrap(), "2026-03-04");
    }
}
