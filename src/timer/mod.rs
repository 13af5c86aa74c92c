pub mod countdown;
pub mod session;

pub use countdown::format_clock;
pub use session::{Completion, ModeRequest, Phase, Session, TickOutcome};
