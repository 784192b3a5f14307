//! Logical time for recency tracking.
//!
//! The reference behavior stamps items with wall-clock time; a strictly
//! increasing logical clock gives the same ordering with deterministic
//! tie-breaks, which matters for reproducible eviction decisions.

use std::fmt;

/// A point in logical time.
///
/// `Tick::BASELINE` (zero) marks "never used". Every touch of an item
/// produces a tick strictly greater than all earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tick(pub u64);

impl Tick {
    /// The initial timestamp of every item: never used.
    pub const BASELINE: Tick = Tick(0);

    /// Create a tick from a raw value.
    #[inline]
    pub fn new(value: u64) -> Self {
        Tick(value)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// A monotonically increasing logical clock.
///
/// Advancing never repeats or decreases, so `LastUsed` values across a
/// simulator's lifetime are totally ordered except for the shared
/// baseline.
#[derive(Debug, Clone, Default)]
pub struct LogicalClock {
    now: Tick,
}

impl LogicalClock {
    /// Create a clock at the baseline.
    pub fn new() -> Self {
        Self {
            now: Tick::BASELINE,
        }
    }

    /// Advance the clock and return the new tick.
    pub fn advance(&mut self) -> Tick {
        self.now = Tick(self.now.0 + 1);
        self.now
    }

    /// The most recently issued tick.
    pub fn now(&self) -> Tick {
        self.now
    }

    /// Move the clock forward to at least `tick`.
    ///
    /// Used when restoring a snapshot so ticks issued afterwards stay
    /// strictly greater than every restored timestamp. Never moves the
    /// clock backwards.
    pub fn resume_from(&mut self, tick: Tick) {
        if tick > self.now {
            self.now = tick;
        }
    }

    /// Return the clock to the baseline.
    pub fn reset(&mut self) {
        self.now = Tick::BASELINE;
    }
}
