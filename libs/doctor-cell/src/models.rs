// libs/doctor-cell/src/models.rs
use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use shared_models::MalformedDateError;

// ==============================================================================
// CORE DOCTOR MODELS
// ==============================================================================

/// A doctor record as supplied by the persistence collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    /// Accepting new bookings at all. When false, slot generation produces
    /// nothing; callers inspect this field directly to tell "unavailable"
    /// apart from "fully booked".
    pub available: bool,
    #[serde(alias = "slotsBooked", default)]
    pub slots_booked: SlotsBooked,
}

/// Ledger of already-taken times, keyed by slot-date key
/// (`day_month_year`), valued by formatted slot times ("10:30 AM").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotsBooked(HashMap<String, Vec<String>>);

impl SlotsBooked {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_booked(&self, key: &str, time: &str) -> bool {
        self.0
            .get(key)
            .map(|times| times.iter().any(|taken| taken == time))
            .unwrap_or(false)
    }

    /// Record a claim. Returns false when the slot was already taken.
    pub fn claim(&mut self, key: &str, time: &str) -> bool {
        let times = self.0.entry(key.to_string()).or_default();
        if times.iter().any(|taken| taken == time) {
            return false;
        }
        times.push(time.to_string());
        true
    }

    /// Free a slot again. Returns whether anything was released.
    pub fn release(&mut self, key: &str, time: &str) -> bool {
        match self.0.get_mut(key) {
            Some(times) => {
                let before = times.len();
                times.retain(|taken| taken != time);
                times.len() < before
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|times| times.is_empty())
    }
}

// ==============================================================================
// SLOT GENERATION MODELS
// ==============================================================================

/// One bookable time within a date-group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub date_time: NaiveDateTime,
    /// Formatted exactly as the booked-slot ledger stores it.
    pub time: String,
}

/// All free slots of one calendar day, ascending by time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlots {
    pub date: NaiveDate,
    pub slots: Vec<TimeSlot>,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Doctor not available")]
    DoctorUnavailable,

    #[error("Slot not available")]
    SlotTaken,

    #[error(transparent)]
    MalformedDate(#[from] MalformedDateError),
}
