// libs/doctor-cell/src/services/booking.rs
use tracing::{debug, warn};

use shared_models::{parse_slot_time, SlotDate};

use crate::models::{BookingError, Doctor};

/// Records slot claims and releases on a doctor's booked-slot ledger.
///
/// This mutates only the caller's in-memory `Doctor` value; persisting the
/// write and re-validating at commit time remain the persistence
/// collaborator's job.
pub struct BookingService;

impl BookingService {
    pub fn new() -> Self {
        Self
    }

    /// Claim a slot for a new appointment. The date/time pair is
    /// normalized first; a malformed request never reaches the ledger.
    pub fn reserve(
        &self,
        doctor: &mut Doctor,
        slot_date: &SlotDate,
        slot_time: &str,
    ) -> Result<(), BookingError> {
        if !doctor.available {
            return Err(BookingError::DoctorUnavailable);
        }

        slot_date.to_naive_date()?;
        parse_slot_time(slot_time)?;

        let key = slot_date.key();
        if !doctor.slots_booked.claim(&key, slot_time) {
            warn!(
                "slot {} {} already taken for doctor {}",
                key, slot_time, doctor.id
            );
            return Err(BookingError::SlotTaken);
        }

        debug!("reserved {} {} for doctor {}", key, slot_time, doctor.id);
        Ok(())
    }

    /// Free a slot on cancellation. Returns whether anything was released.
    pub fn release(&self, doctor: &mut Doctor, slot_date: &SlotDate, slot_time: &str) -> bool {
        let released = doctor.slots_booked.release(&slot_date.key(), slot_time);
        if released {
            debug!(
                "released {} {} for doctor {}",
                slot_date.key(),
                slot_time,
                doctor.id
            );
        }
        released
    }
}

impl Default for BookingService {
    fn default() -> Self {
        Self::new()
    }
}
