// libs/appointment-cell/src/services/session.rs
use chrono::{Duration, NaiveDateTime};
use tracing::debug;

use shared_models::{slot_instant, MalformedDateError};

use crate::models::{Appointment, SessionState, SessionStatus};

/// Time windows around the scheduled instant that drive status derivation.
#[derive(Debug, Clone)]
pub struct SessionWindowRules {
    pub live_radius_minutes: i64,
    pub call_opens_before_minutes: i64,
    pub call_closes_after_minutes: i64,
}

impl Default for SessionWindowRules {
    fn default() -> Self {
        Self {
            live_radius_minutes: 15,        // "Live Now" within 15 minutes either side
            call_opens_before_minutes: 30,  // Join button appears 30 minutes early
            call_closes_after_minutes: 60,  // And stays up to an hour after start
        }
    }
}

pub struct SessionStateService {
    rules: SessionWindowRules,
}

impl SessionStateService {
    pub fn new() -> Self {
        Self {
            rules: SessionWindowRules::default(),
        }
    }

    pub fn with_rules(rules: SessionWindowRules) -> Self {
        Self { rules }
    }

    /// Derive the session state for one appointment at `now`.
    ///
    /// Pure function of its inputs: identical appointment and `now` always
    /// produce identical output, and records are never mutated. The status
    /// rules form an ordered decision list; the first match wins.
    pub fn classify(
        &self,
        appointment: &Appointment,
        now: NaiveDateTime,
    ) -> Result<SessionState, MalformedDateError> {
        let instant = slot_instant(&appointment.slot_date, &appointment.slot_time)?;

        // Signed offset, positive = future. Windows are closed intervals.
        let time_diff = instant - now;
        let is_today = instant.date() == now.date();
        let is_live =
            is_today && time_diff.abs() <= Duration::minutes(self.rules.live_radius_minutes);
        let is_call_available = is_today
            && time_diff <= Duration::minutes(self.rules.call_opens_before_minutes)
            && time_diff >= -Duration::minutes(self.rules.call_closes_after_minutes);

        let status = if appointment.cancelled {
            SessionStatus::Cancelled
        } else if appointment.is_completed {
            SessionStatus::Completed
        } else if appointment.video_call_active || (is_live && appointment.payment) {
            SessionStatus::VideoCallActive
        } else if is_live && appointment.payment {
            SessionStatus::LiveNow
        } else if instant < now {
            SessionStatus::Missed
        } else if is_today {
            SessionStatus::Today
        } else {
            SessionStatus::Upcoming
        };

        debug!("appointment {} classified as {:?}", appointment.id, status);

        Ok(SessionState {
            status,
            instant,
            is_call_available,
            is_live,
            is_today,
            is_paid: appointment.payment,
            is_future: instant > now,
        })
    }

    /// Classify a batch of appointments and order them for display: active
    /// video calls first, then by scheduled instant, most recent first.
    ///
    /// A malformed record fails the whole call rather than being silently
    /// dropped or defaulted.
    pub fn order_for_display(
        &self,
        appointments: &[Appointment],
        now: NaiveDateTime,
    ) -> Result<Vec<(Appointment, SessionState)>, MalformedDateError> {
        let mut rows = Vec::with_capacity(appointments.len());
        for appointment in appointments {
            let state = self.classify(appointment, now)?;
            rows.push((appointment.clone(), state));
        }

        rows.sort_by(|(_, a), (_, b)| {
            let a_active = a.status == SessionStatus::VideoCallActive;
            let b_active = b.status == SessionStatus::VideoCallActive;
            b_active
                .cmp(&a_active)
                .then_with(|| b.instant.cmp(&a.instant))
        });

        Ok(rows)
    }
}

impl Default for SessionStateService {
    fn default() -> Self {
        Self::new()
    }
}
