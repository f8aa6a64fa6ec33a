pub mod session;

pub use session::{SessionStateService, SessionWindowRules};
