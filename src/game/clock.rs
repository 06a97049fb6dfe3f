use std::time::Duration;

/// Monotonic engine time. Nothing reads the wall clock directly; callers
/// decide how real time maps onto it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VirtualClock {
    now: Duration,
}

impl VirtualClock {
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Moves forward to `target`; earlier targets leave the clock where it is.
    pub fn advance_to(&mut self, target: Duration) {
        if target > self.now {
            self.now = target;
        }
    }
}
