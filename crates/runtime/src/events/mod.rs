//! Topic-based event bus for session events.
//!
//! Events are published to specific topics, and consumers subscribe only to
//! the topics they need.

mod bus;
mod types;

pub use bus::{EventBus, SessionEvent, Topic};
pub use types::{Notice, RoundEvent, TimerEvent};
