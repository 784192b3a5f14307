//! Hit/fault statistics tracking.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Counters for requests served by the simulator.
///
/// Both counters only grow between resets. The struct is plain data (no
/// atomics) because the simulator core is single-threaded; it derives
/// `Serialize`/`Deserialize` so it can embed directly in snapshots.
///
/// # Example
/// ```
/// use shelfsim::SimStats;
///
/// let stats = SimStats { hits: 7, faults: 3 };
/// assert_eq!(stats.hit_ratio(), 70);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimStats {
    /// Requests that found the item already on the shelf.
    pub hits: u64,

    /// Requests that had to fetch the item from storage.
    pub faults: u64,
}

impl SimStats {
    /// Create zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total requests since the last reset.
    pub fn total(&self) -> u64 {
        self.hits + self.faults
    }

    /// Hit ratio as a percentage rounded to the nearest integer.
    ///
    /// Returns 0 when no requests have been made.
    pub fn hit_ratio(&self) -> u32 {
        let total = self.total();
        if total == 0 {
            0
        } else {
            (self.hits as f64 / total as f64 * 100.0).round() as u32
        }
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_fault(&mut self) {
        self.faults += 1;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, hit_ratio: {}% }}",
            self.hits,
            self.faults,
            self.hit_ratio()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = SimStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.faults, 0);
        assert_eq!(stats.hit_ratio(), 0);
    }

    #[test]
    fn test_stats_record() {
        let mut stats = SimStats::new();
        stats.record_hit();
        stats.record_fault();
        stats.record_fault();

        assert_eq!(stats.hits, 1);
        assert_eq!(stats.faults, 2);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn test_hit_ratio_rounds_to_nearest() {
        // 1/3 = 33.33..% rounds down
        let stats = SimStats { hits: 1, faults: 2 };
        assert_eq!(stats.hit_ratio(), 33);

        // 2/3 = 66.66..% rounds up
        let stats = SimStats { hits: 2, faults: 1 };
        assert_eq!(stats.hit_ratio(), 67);

        // 1/2 = exactly 50%
        let stats = SimStats { hits: 1, faults: 1 };
        assert_eq!(stats.hit_ratio(), 50);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SimStats { hits: 10, faults: 5 };
        stats.reset();
        assert_eq!(stats, SimStats::new());
    }

    #[test]
    fn test_stats_display() {
        let stats = SimStats { hits: 8, faults: 2 };
        let display = format!("{}", stats);
        assert!(display.contains("hits: 8"));
        assert!(display.contains("faults: 2"));
        assert!(display.contains("80%"));
    }
}
