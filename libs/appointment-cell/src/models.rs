// libs/appointment-cell/src/models.rs
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::SlotDate;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// An appointment record as supplied by the persistence collaborator.
/// The engine consumes it read-only; it classifies, it never mutates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    #[serde(alias = "slotDate")]
    pub slot_date: SlotDate,
    #[serde(alias = "slotTime")]
    pub slot_time: String,
    pub amount: f64,
    #[serde(default)]
    pub payment: bool,
    #[serde(alias = "isCompleted", default)]
    pub is_completed: bool,
    #[serde(default)]
    pub cancelled: bool,
    /// Externally-confirmed live session, authoritative over time-window
    /// inference.
    #[serde(alias = "videoCallActive", default)]
    pub video_call_active: bool,
}

/// Single status label derived for an appointment at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Cancelled,
    Completed,
    VideoCallActive,
    LiveNow,
    Missed,
    Today,
    Upcoming,
}

impl SessionStatus {
    /// Cancelled and Completed are mutually exclusive terminal states;
    /// derivation is stable once either is set.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Cancelled | SessionStatus::Completed)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Cancelled => write!(f, "Cancelled"),
            SessionStatus::Completed => write!(f, "Completed"),
            SessionStatus::VideoCallActive => write!(f, "Video Call Active"),
            SessionStatus::LiveNow => write!(f, "Live Now"),
            SessionStatus::Missed => write!(f, "Missed"),
            SessionStatus::Today => write!(f, "Today"),
            SessionStatus::Upcoming => write!(f, "Upcoming"),
        }
    }
}

/// Classifier output: the status label plus the auxiliary flags the
/// presentation layer renders and gates on. The flags are part of the
/// contract, not incidental; call-join gating on `is_paid` belongs to the
/// caller, not the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub status: SessionStatus,
    /// The appointment's combined date/time as a comparable local instant.
    pub instant: NaiveDateTime,
    pub is_call_available: bool,
    pub is_live: bool,
    pub is_today: bool,
    pub is_paid: bool,
    pub is_future: bool,
}
