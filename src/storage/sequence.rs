//! Record id assignment
//!
//! Ids are millisecond timestamps, but two records created within the same
//! millisecond (or after the clock stepped backwards) still get distinct,
//! increasing ids: every id is `max(now_millis, previous + 1)`.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Monotonic id source shared by every collection of one database
#[derive(Debug, Default)]
pub struct IdSequence {
    last: AtomicI64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure future ids are greater than `raw`
    pub fn observe(&self, raw: i64) {
        self.last.fetch_max(raw, Ordering::SeqCst);
    }

    /// Next id, using the current wall clock
    pub fn next(&self) -> i64 {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Next id given the current time in milliseconds
    pub fn next_at(&self, now_millis: i64) -> i64 {
        let previous = match self.last.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now_millis.max(last + 1))
        }) {
            Ok(prev) | Err(prev) => prev,
        };
        now_millis.max(previous + 1)
    }
}
