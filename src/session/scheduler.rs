use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Stopped,
    Running,
}

/// On/off switch for the tick cadence.
///
/// The scheduler does not own a timer. The host loop asks `is_running` on
/// every timer tick, which lets tests advance the game by hand.
#[derive(Debug, Clone)]
pub struct Scheduler {
    state: SchedulerState,
    period: Duration,
}

impl Scheduler {
    pub fn new(period: Duration) -> Self {
        Self {
            state: SchedulerState::Stopped,
            period,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    /// Time between two ticks
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns false if already running
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = SchedulerState::Running;
        true
    }

    /// Idempotent. Returns whether the scheduler was running.
    pub fn stop(&mut self) -> bool {
        let was_running = self.is_running();
        self.state = SchedulerState::Stopped;
        was_running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_stop() {
        let mut scheduler = Scheduler::new(Duration::from_millis(120));
        assert_eq!(scheduler.state(), SchedulerState::Stopped);
        assert_eq!(scheduler.period(), Duration::from_millis(120));

        assert!(scheduler.start());
        assert!(!scheduler.start());
        assert!(scheduler.is_running());

        assert!(scheduler.stop());
        assert!(!scheduler.stop());
        assert_eq!(scheduler.state(), SchedulerState::Stopped);
    }
}
