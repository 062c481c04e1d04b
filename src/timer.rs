//! Millisecond timing for benchmark phases
//!
//! Every timed operation goes through a [`Clock`] so tests can swap the wall
//! clock for a deterministic one.

use std::cell::Cell;
use std::time::Instant;

use serde::Serialize;

/// Source of monotonic millisecond readings
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u64;
}

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    #[inline]
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Deterministic clock for tests.
///
/// Time only moves when [`advance`](ManualClock::advance) is called, plus an
/// optional fixed step added after every reading.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
    step: u64,
}

impl ManualClock {
    /// A clock frozen at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// A clock that moves `step` milliseconds after each reading
    pub fn with_step(step: u64) -> Self {
        Self {
            now: Cell::new(0),
            step,
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        let now = self.now.get();
        self.now.set(now + self.step);
        now
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// A value paired with the time it took to produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed_ms: u64,
}

/// Run `op` and measure it against `clock`
pub fn time<C, T, F>(clock: &C, op: F) -> Timed<T>
where
    C: Clock + ?Sized,
    F: FnOnce() -> T,
{
    let start = clock.now_ms();
    let value = op();
    let elapsed_ms = clock.now_ms().saturating_sub(start);
    Timed { value, elapsed_ms }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_frozen() {
        let clock = ManualClock::new();
        let timed = time(&clock, || 42);
        assert_eq!(timed.value, 42);
        assert_eq!(timed.elapsed_ms, 0);
    }

    #[test]
    fn test_manual_clock_advance_inside_op() {
        let clock = ManualClock::new();
        let timed = time(&clock, || {
            clock.advance(250);
            "done"
        });
        assert_eq!(timed.value, "done");
        assert_eq!(timed.elapsed_ms, 250);
    }

    #[test]
    fn test_manual_clock_step() {
        let clock = ManualClock::with_step(3);
        assert_eq!(clock.now_ms(), 0);
        assert_eq!(clock.now_ms(), 3);
        let timed = time(&clock, || ());
        assert_eq!(timed.elapsed_ms, 3);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
