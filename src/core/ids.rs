//! Id generation for dishes and orders.
//!
//! Ids stay millisecond timestamps so they sort by creation time and line up with ids
//! already on disk, but the generator never hands out the same value twice: if the
//! clock has not advanced past the last id, the next id is `last + 1`.

use crate::errors::{Error, Result};
use std::sync::atomic::{AtomicI64, Ordering};

/// Monotonic, timestamp-based id source.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    /// Generator with no ids issued yet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts above every id in `existing` so reloaded collections never collide.
    #[must_use]
    pub fn seeded(existing: impl IntoIterator<Item = i64>) -> Self {
        let last = existing.into_iter().max().unwrap_or(0);
        Self {
            last: AtomicI64::new(last),
        }
    }

    /// Next id based on the current wall-clock time.
    ///
    /// # Errors
    /// Returns `Error::IdSpaceExhausted` once `i64::MAX` has been issued.
    pub fn next_id(&self) -> Result<i64> {
        self.next_at(chrono::Utc::now().timestamp_millis())
    }

    /// Next id given a clock reading of `now_millis`.
    ///
    /// # Errors
    /// Returns `Error::IdSpaceExhausted` once `i64::MAX` has been issued; nothing is
    /// recorded in that case.
    pub fn next_at(&self, now_millis: i64) -> Result<i64> {
        let mut current = self.last.load(Ordering::Relaxed);
        loop {
            let successor = current
                .checked_add(1)
                .ok_or(Error::IdSpaceExhausted { last: current })?;
            let candidate = now_millis.max(successor);
            match self.last.compare_exchange_weak(
                current,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return Ok(candidate),
                Err(actual) => current = actual,
            }
        }
    }
}
