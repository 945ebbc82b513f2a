//! Whole-second wall clocks.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Source of the current time as whole epoch seconds.
pub trait Clock: Send + Sync {
    /// Current time in seconds since the Unix epoch.
    fn now_epoch_secs(&self) -> i64;
}

/// Wall clock backed by the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_secs(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Manually driven clock for simulated time.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    /// Creates a clock frozen at `now` epoch seconds.
    pub fn new(now: i64) -> Self {
        Self {
            now: AtomicI64::new(now),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, secs: i64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }

    /// Jumps to an absolute time.
    pub fn set(&self, now: i64) {
        self.now.store(now, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_epoch_secs(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}
