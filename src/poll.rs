// Poll pause policy for the workers health endpoint.
// Once a worker is unreachable the console stops refetching it; resuming is
// a deliberate user action, not a timer.

use crate::config::PollingConfig;

/// Pause latch consulted by the external poller before each refetch. Owns no
/// timers and issues no requests; the embedding poller drives the schedule.
#[derive(Debug)]
pub struct PollGate {
    pause_on_unavailable: bool,
    paused: bool,
}

impl Default for PollGate {
    fn default() -> Self {
        Self::new()
    }
}

impl PollGate {
    pub fn new() -> Self {
        Self {
            pause_on_unavailable: true,
            paused: false,
        }
    }

    pub fn from_config(config: &PollingConfig) -> Self {
        Self {
            pause_on_unavailable: config.pause_on_unavailable,
            paused: false,
        }
    }

    /// Feed one observation. The first unavailable observation latches the
    /// gate; later healthy observations do not unlatch it.
    pub fn observe(&mut self, unavailable: bool) {
        if self.pause_on_unavailable && unavailable && !self.paused {
            self.paused = true;
            tracing::debug!(operation = "poll_gate", "worker unreachable; polling paused");
        }
    }

    /// Manual resume (e.g. the user pressed refresh).
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            tracing::debug!(operation = "poll_gate", "polling resumed");
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the next scheduled refetch should run.
    pub fn should_poll(&self) -> bool {
        !self.paused
    }
}
