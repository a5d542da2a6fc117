use std::time::{SystemTime, UNIX_EPOCH};

/// Current UNIX timestamp in milliseconds.
pub fn now_ms() -> u64 {
    millis_since_epoch(SystemTime::now())
}

/// Milliseconds between the epoch and `t`. Instants before the epoch read as 0.
pub fn millis_since_epoch(t: SystemTime) -> u64 {
    t.duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Source of epoch milliseconds for a single invocation.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}

/// Wall clock of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        now_ms()
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_ms(&self) -> u64 {
        self.0
    }
}
