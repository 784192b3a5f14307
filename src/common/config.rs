//! Configuration constants for shelfsim.

/// Default shelf capacity (number of resident items).
///
/// Three slots is small enough that every interesting replacement case
/// (fill, hit, evict) shows up within a handful of requests, which is the
/// point of an educational simulator.
pub const DEFAULT_CAPACITY: usize = 3;

/// Suggested presentation delay for resolving a page fault, in milliseconds.
///
/// A fault is a two-phase event: it is counted when the request is made,
/// but the shelf mutation becomes visible only when the fault completes
/// (see [`PagingSimulator::complete_fault`]). The core never sleeps; this
/// constant exists so presentation layers animating the "fetch from
/// storage" delay all use the same duration.
///
/// [`PagingSimulator::complete_fault`]: crate::PagingSimulator::complete_fault
pub const FAULT_LATENCY_MS: u64 = 1000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity_is_usable() {
        assert!(DEFAULT_CAPACITY >= 1);
    }

    #[test]
    fn test_fault_latency() {
        assert_eq!(FAULT_LATENCY_MS, 1000);
    }
}
