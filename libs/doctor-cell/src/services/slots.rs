// libs/doctor-cell/src/services/slots.rs
use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use tracing::debug;

use shared_models::{format_slot_time, SlotDate};

use crate::models::{DaySlots, Doctor, TimeSlot};

/// Operating hours and horizon for slot generation.
#[derive(Debug, Clone)]
pub struct SlotGridRules {
    pub start_hour: u32,
    pub end_hour: u32,
    pub slot_minutes: i64,
    /// Non-empty date-groups to produce.
    pub target_days: usize,
    /// Calendar days to scan forward before giving up.
    pub scan_days: u32,
}

impl Default for SlotGridRules {
    fn default() -> Self {
        Self {
            start_hour: 10,
            end_hour: 21,
            slot_minutes: 30,
            target_days: 7,
            scan_days: 7,
        }
    }
}

pub struct SlotService {
    rules: SlotGridRules,
}

impl SlotService {
    pub fn new() -> Self {
        Self {
            rules: SlotGridRules::default(),
        }
    }

    pub fn with_rules(rules: SlotGridRules) -> Self {
        Self { rules }
    }

    /// Lazy, finite iterator of bookable date-groups for one doctor,
    /// ascending chronologically from `now`. Clone it to restart.
    ///
    /// An unavailable doctor yields nothing; a day whose every slot is
    /// taken contributes no date-group and does not count toward the
    /// target.
    pub fn day_slots<'a>(&self, doctor: &'a Doctor, now: NaiveDateTime) -> DaySlotsIter<'a> {
        // Within an hour of closing there is nothing left to offer today.
        let start_tomorrow = now.hour() + 1 >= self.rules.end_hour;
        if !doctor.available {
            debug!("doctor {} not available, generating no slots", doctor.id);
        }

        DaySlotsIter {
            doctor,
            now,
            rules: self.rules.clone(),
            next_offset: if start_tomorrow { 1 } else { 0 },
            produced: 0,
            started_today: !start_tomorrow,
        }
    }

    /// Collect the full grid eagerly.
    pub fn generate(&self, doctor: &Doctor, now: NaiveDateTime) -> Vec<DaySlots> {
        self.day_slots(doctor, now).collect()
    }
}

impl Default for SlotService {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct DaySlotsIter<'a> {
    doctor: &'a Doctor,
    now: NaiveDateTime,
    rules: SlotGridRules,
    next_offset: u32,
    produced: usize,
    started_today: bool,
}

impl DaySlotsIter<'_> {
    /// Open and close instants for the day at `offset`. The first scanned
    /// day, when generation starts today, opens no earlier than an hour
    /// from now, rounded up to a half-hour boundary; every other day opens
    /// at `start_hour` sharp.
    fn day_window(&self, offset: u32, date: NaiveDate) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let close = date.and_hms_opt(self.rules.end_hour, 0, 0)?;

        let open = if offset == 0 && self.started_today {
            let hour = (self.now.hour() + 1).max(self.rules.start_hour);
            if self.now.minute() > 30 {
                date.and_hms_opt(hour + 1, 0, 0)?
            } else {
                date.and_hms_opt(hour, 30, 0)?
            }
        } else {
            date.and_hms_opt(self.rules.start_hour, 0, 0)?
        };

        Some((open, close))
    }

    fn free_slots(&self, date: NaiveDate, open: NaiveDateTime, close: NaiveDateTime) -> Vec<TimeSlot> {
        let key = SlotDate::from_date(date).key();
        let mut slots = Vec::new();
        if self.rules.slot_minutes <= 0 {
            return slots;
        }
        let mut cursor = open;

        while cursor < close {
            let time = format_slot_time(cursor.time());
            if !self.doctor.slots_booked.is_booked(&key, &time) {
                slots.push(TimeSlot {
                    date_time: cursor,
                    time,
                });
            }
            cursor += Duration::minutes(self.rules.slot_minutes);
        }

        slots
    }
}

impl Iterator for DaySlotsIter<'_> {
    type Item = DaySlots;

    fn next(&mut self) -> Option<DaySlots> {
        if !self.doctor.available {
            return None;
        }

        while self.next_offset < self.rules.scan_days && self.produced < self.rules.target_days {
            let offset = self.next_offset;
            self.next_offset += 1;

            let date = self.now.date() + Duration::days(offset as i64);
            let Some((open, close)) = self.day_window(offset, date) else {
                continue;
            };

            let slots = self.free_slots(date, open, close);
            if slots.is_empty() {
                continue;
            }

            self.produced += 1;
            return Some(DaySlots { date, slots });
        }

        None
    }
}
