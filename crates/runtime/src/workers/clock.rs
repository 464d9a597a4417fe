//! Discussion countdown driver.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};
use tracing::trace;

use super::session::Command;

/// Background task feeding one countdown's ticks into the session worker.
///
/// Holds only a weak sender so a running clock never keeps the worker alive.
/// Dropping the clock stops it.
pub struct DiscussionClock {
    epoch: u32,
    task: JoinHandle<()>,
}

impl DiscussionClock {
    pub fn start(epoch: u32, commands: mpsc::WeakSender<Command>, period: Duration) -> Self {
        let task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                let Some(tx) = commands.upgrade() else {
                    break;
                };
                if tx.send(Command::Tick { epoch }).await.is_err() {
                    break;
                }
                trace!(target: "runtime::clock", epoch, "tick sent");
            }
        });

        Self { epoch, task }
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }
}

impl Drop for DiscussionClock {
    fn drop(&mut self) {
        self.task.abort();
    }
}
