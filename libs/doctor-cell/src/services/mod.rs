pub mod booking;
pub mod slots;

pub use booking::BookingService;
pub use slots::{DaySlotsIter, SlotGridRules, SlotService};
