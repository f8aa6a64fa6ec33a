use thiserror::Error;

/// Failure to turn a stored slot date/time pair into numeric components.
///
/// Propagated to the caller, never defaulted: a guessed date would let the
/// UI mis-enable a payment or call-join action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedDateError {
    #[error("slot date must have day, month and year components: {0}")]
    WrongComponentCount(String),

    #[error("slot date component is not numeric: {0}")]
    NonNumericComponent(String),

    #[error("slot date year out of range: {0}")]
    YearOutOfRange(i64),

    #[error("no such calendar date: {day}_{month}_{year}")]
    InvalidCalendarDate { day: u32, month: u32, year: i32 },

    #[error("slot time is not a 12-hour clock string: {0}")]
    MalformedClockTime(String),
}
