//! Worker tasks that back the session.
//!
//! The session worker executes every command in order; the discussion clock
//! feeds countdown ticks back into it as ordinary commands.

mod clock;
mod session;

pub use session::{Command, SessionSnapshot, SessionWorker};

pub(crate) use session::{Preferences, Services};
