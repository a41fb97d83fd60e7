use std::time::{Duration, Instant};

/// Timer pulse period in milliseconds
pub const PULSE_MS: u64 = 1000;

/// Longest wait for terminal input before redrawing
pub const MAX_POLL_MS: u64 = 250;

/// Get pulse period
pub fn pulse_duration() -> Duration {
    Duration::from_millis(PULSE_MS)
}

/// Periodic pulse source with a cancel handle
///
/// The event loop asks how long it may block, then collects the pulses that
/// became due. Pulses are scheduled from the previous deadline, not from the
/// time they were observed, so a slow frame does not stretch the second.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_pulse: Option<Instant>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(pulse_duration())
    }
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_pulse: None,
        }
    }

    /// Schedule the first pulse one period from `now`
    pub fn arm(&mut self, now: Instant) {
        self.next_pulse = Some(now + self.period);
    }

    /// Drop any pending pulse
    pub fn cancel(&mut self) {
        self.next_pulse = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_pulse.is_some()
    }

    /// Time left before the next pulse, None when cancelled
    pub fn time_until_pulse(&self, now: Instant) -> Option<Duration> {
        self.next_pulse
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// How long the event loop may block on input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let cap = Duration::from_millis(MAX_POLL_MS);
        self.time_until_pulse(now).map_or(cap, |wait| wait.min(cap))
    }

    /// Number of pulses due at `now`, advancing the schedule past them
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut deadline) = self.next_pulse else {
            return 0;
        };

        let mut due = 0;
        while deadline <= now {
            due += 1;
            deadline += self.period;
        }
        self.next_pulse = Some(deadline);
        due
    }
}
