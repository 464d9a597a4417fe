/// Discussion countdown carried in the round state.
///
/// The countdown is armed when the round enters `Discussion` with the timer
/// option on and dropped when the round leaves `Discussion` by any path. The
/// `epoch` ties external clock ticks to one specific arming: a tick carrying
/// an older epoch is rejected, so a clock that fired just before a manual
/// vote start can never push a later discussion into `Voting`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscussionTimer {
    epoch: u32,
    remaining: u32,
}

/// Result of advancing the countdown by one second.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerStatus {
    Running { remaining: u32 },
    Expired,
}

impl DiscussionTimer {
    pub fn new(epoch: u32, seconds: u32) -> Self {
        Self {
            epoch,
            remaining: seconds,
        }
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn tick(&mut self) -> TimerStatus {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            TimerStatus::Expired
        } else {
            TimerStatus::Running {
                remaining: self.remaining,
            }
        }
    }

    /// `m:ss` rendering used by the discussion screen.
    pub fn display(&self) -> String {
        format!("{}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_on_last_second() {
        let mut timer = DiscussionTimer::new(1, 2);
        assert_eq!(timer.tick(), TimerStatus::Running { remaining: 1 });
        assert_eq!(timer.tick(), TimerStatus::Expired);
    }

    #[test]
    fn display_pads_seconds() {
        assert_eq!(DiscussionTimer::new(0, 180).display(), "3:00");
        assert_eq!(DiscussionTimer::new(0, 65).display(), "1:05");
    }
}
