//! Per-phase countdown state

/// Countdown state for a single phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    pub active: bool,
    pub remaining_seconds: u64,
    duration_seconds: u64,
}

impl TimerState {
    /// Create an inactive timer holding the full duration
    pub fn new(duration_minutes: u32) -> Self {
        let duration_seconds = u64::from(duration_minutes) * 60;
        Self {
            active: false,
            remaining_seconds: duration_seconds,
            duration_seconds,
        }
    }

    /// Check if the timer is active
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Full duration of the phase in seconds
    pub fn duration_seconds(&self) -> u64 {
        self.duration_seconds
    }

    /// Mark the timer running. An exhausted countdown is refilled first.
    pub fn start(&mut self) {
        if self.remaining_seconds == 0 {
            self.remaining_seconds = self.duration_seconds;
        }
        self.active = true;
    }

    /// Stop the countdown without touching the remaining time
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Stop and restore the full duration
    pub fn reset(&mut self) {
        self.active = false;
        self.remaining_seconds = self.duration_seconds;
    }

    /// Decrement by one second. Returns true when the countdown hit zero.
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        self.remaining_seconds == 0
    }

    /// Remaining time formatted as `MM:SS`
    pub fn display(&self) -> String {
        format_clock(self.remaining_seconds)
    }
}

/// Format a second count as `MM:SS`
pub fn format_clock(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_clock() {
        assert_eq!(format_clock(25 * 60), "25:00");
        assert_eq!(format_clock(5 * 60 - 1), "04:59");
        assert_eq!(format_clock(60 * 60), "60:00");
        assert_eq!(format_clock(0), "00:00");
    }

    #[test]
    fn tick_only_counts_while_active() {
        let mut timer = TimerState::new(1);
        assert!(!timer.tick());
        assert_eq!(timer.remaining_seconds, 60);

        timer.start();
        for _ in 0..59 {
            assert!(!timer.tick());
        }
        assert!(timer.tick());
        assert_eq!(timer.remaining_seconds, 0);
    }

    #[test]
    fn stop_keeps_remaining_and_reset_restores() {
        let mut timer = TimerState::new(5);
        timer.start();
        timer.tick();
        timer.tick();
        timer.stop();
        assert!(!timer.is_active());
        assert_eq!(timer.display(), "04:58");

        timer.reset();
        assert_eq!(timer.remaining_seconds, timer.duration_seconds());
    }
}
