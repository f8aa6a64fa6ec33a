pub mod error;
pub mod slot;

// Re-export for external use
pub use error::MalformedDateError;
pub use slot::{format_slot_time, parse_slot_time, slot_instant, SlotDate};
