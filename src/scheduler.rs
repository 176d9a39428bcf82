use std::time::{Duration, Instant};

/// Fixed-period tick clock. The period can be changed at any time and takes
/// effect from the tick after the last one recorded.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    last_tick: Instant,
}

impl Ticker {
    pub fn new(delay_ms: u64, now: Instant) -> Self {
        Ticker { period: Duration::from_millis(delay_ms), last_tick: now }
    }

    pub fn set_delay(&mut self, delay_ms: u64) {
        self.period = Duration::from_millis(delay_ms);
    }

    pub fn delay(&self) -> u64 {
        self.period.as_millis() as u64
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_tick) >= self.period
    }

    /// How long input may be polled for before the next tick is due
    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.period.saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    pub fn mark(&mut self, now: Instant) {
        self.last_tick = now;
    }

    pub fn restart(&mut self, delay_ms: u64, now: Instant) {
        self.set_delay(delay_ms);
        self.mark(now);
    }
}
