// libs/shared/models/src/slot.rs
use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::MalformedDateError;

/// Calendar date of a bookable slot, stored as unpadded day/month/year
/// components. The wire spelling is `day_month_year` ("5_6_2025") and is
/// also the lookup key into a doctor's booked-slot ledger, so formatting
/// must round-trip exactly with [`SlotDate::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl SlotDate {
    /// Parse a `day_month_year` key positionally. Single- and double-digit
    /// day/month without zero-padding are accepted; anything non-numeric is
    /// rejected, as is a year outside 4-digit scale.
    pub fn parse(key: &str) -> Result<Self, MalformedDateError> {
        let trimmed = key.trim();
        let parts: Vec<&str> = trimmed.split('_').collect();
        if parts.len() != 3 {
            return Err(MalformedDateError::WrongComponentCount(trimmed.to_string()));
        }

        let day = parse_component(parts[0])?;
        let month = parse_component(parts[1])?;
        let year: i64 = parts[2]
            .parse()
            .map_err(|_| MalformedDateError::NonNumericComponent(parts[2].to_string()))?;
        if !(1000..=9999).contains(&year) {
            return Err(MalformedDateError::YearOutOfRange(year));
        }

        Ok(Self {
            day,
            month,
            year: year as i32,
        })
    }

    /// Inverse direction used by slot generation.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            month: date.month(),
            year: date.year(),
        }
    }

    /// Ledger key with the same unpadded formatting generation uses.
    pub fn key(&self) -> String {
        format!("{}_{}_{}", self.day, self.month, self.year)
    }

    /// Rejects impossible calendar dates (e.g. 31_2_2025) that parse fine
    /// component-wise.
    pub fn to_naive_date(&self) -> Result<NaiveDate, MalformedDateError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or(
            MalformedDateError::InvalidCalendarDate {
                day: self.day,
                month: self.month,
                year: self.year,
            },
        )
    }
}

fn parse_component(part: &str) -> Result<u32, MalformedDateError> {
    part.parse()
        .map_err(|_| MalformedDateError::NonNumericComponent(part.to_string()))
}

impl fmt::Display for SlotDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl TryFrom<String> for SlotDate {
    type Error = MalformedDateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SlotDate> for String {
    fn from(value: SlotDate) -> Self {
        value.key()
    }
}

/// Parse a 12-hour wall-clock string with AM/PM marker ("10:30 AM").
pub fn parse_slot_time(slot_time: &str) -> Result<NaiveTime, MalformedDateError> {
    NaiveTime::parse_from_str(slot_time.trim(), "%I:%M %p")
        .map_err(|_| MalformedDateError::MalformedClockTime(slot_time.to_string()))
}

/// Two-digit-hour formatting ("08:30 PM"), the exact spelling stored in the
/// booked-slot ledger so membership lookups round-trip.
pub fn format_slot_time(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// Combine a slot date and time string into the single comparable,
/// timezone-naive instant the status classifier works with.
pub fn slot_instant(
    slot_date: &SlotDate,
    slot_time: &str,
) -> Result<NaiveDateTime, MalformedDateError> {
    Ok(slot_date.to_naive_date()?.and_time(parse_slot_time(slot_time)?))
}
