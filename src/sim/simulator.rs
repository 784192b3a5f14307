//! Paging simulator - the core replacement-policy state machine.
//!
//! The [`PagingSimulator`] owns:
//! - The catalog (fixed, read-only)
//! - The shelf (ordered resident items, bounded by capacity)
//! - The page table (derived residency/slot metadata)
//! - Per-item last-used ticks and hit/fault statistics

use std::collections::BTreeMap;

use crate::common::{Error, ItemId, Result};
use crate::sim::clock::{LogicalClock, Tick};
use crate::sim::lru;
use crate::sim::outcome::{Outcome, RequestPhase};
use crate::sim::page_table::{PageTable, PageTableEntry};
use crate::sim::stats::SimStats;
use crate::sim::Catalog;
use crate::snapshot::Snapshot;

/// An LRU page-replacement simulator over a fixed catalog.
///
/// # Architecture
/// ```text
/// ┌───────────────────────────────────────────────────────────┐
/// │                      PagingSimulator                      │
/// │  ┌─────────────┐   ┌───────────────────────────────────┐  │
/// │  │  catalog    │   │   shelf: Vec<ItemId>  (≤ capacity)│  │
/// │  │ label ↔ id  │   │   [slot 0] [slot 1] [slot 2]      │  │
/// │  └─────────────┘   └───────────────────────────────────┘  │
/// │  ┌─────────────┐   ┌─────────────┐   ┌────────────────┐   │
/// │  │ page_table  │   │  last_used  │   │ stats + clock  │   │
/// │  │ per-item    │◀──│  per-item   │   │ hits/faults    │   │
/// │  │ slot/resid. │   │  Tick       │   │ logical time   │   │
/// │  └─────────────┘   └─────────────┘   └────────────────┘   │
/// └───────────────────────────────────────────────────────────┘
/// ```
///
/// The page table is always derived from the shelf; it is rebuilt after
/// every shelf mutation so residency and slot numbers never drift.
///
/// # Faults are two-phase
/// A request for an absent item counts the fault immediately but leaves
/// the shelf untouched until [`complete_fault`] is called, modeling the
/// fetch-from-storage delay. While a fault is in flight every other
/// mutating call is rejected with [`Error::FaultInFlight`]. Callers that
/// do not model the latency use [`request`], which collapses both phases.
///
/// # Usage
/// ```
/// use shelfsim::{Catalog, PagingSimulator};
///
/// let catalog = Catalog::demo();
/// let os = catalog.id_of("Operating Systems").unwrap();
///
/// let mut sim = PagingSimulator::new(catalog, 3).unwrap();
/// let outcome = sim.request(os).unwrap();
/// assert!(outcome.is_fault());
/// assert!(sim.request(os).unwrap().is_hit());
/// ```
///
/// [`request`]: PagingSimulator::request
/// [`complete_fault`]: PagingSimulator::complete_fault
#[derive(Debug, Clone)]
pub struct PagingSimulator {
    /// The fixed set of items (immutable after construction).
    catalog: Catalog,

    /// Maximum number of resident items (immutable after construction).
    capacity: usize,

    /// Resident items in insertion/arrangement order.
    shelf: Vec<ItemId>,

    /// Residency and slot metadata, one entry per catalog item.
    page_table: PageTable,

    /// Last-used tick per catalog item, indexed by `ItemId`.
    last_used: Vec<Tick>,

    /// Hit/fault counters.
    stats: SimStats,

    /// Logical time source.
    clock: LogicalClock,

    /// The item whose fault is in flight, if any.
    pending_fault: Option<ItemId>,
}

impl PagingSimulator {
    /// Create a simulator with an empty shelf.
    ///
    /// # Errors
    /// Returns `Error::InvalidCapacity` if `capacity` is 0.
    pub fn new(catalog: Catalog, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        let len = catalog.len();
        Ok(Self {
            catalog,
            capacity,
            shelf: Vec::with_capacity(capacity),
            page_table: PageTable::new(len),
            last_used: vec![Tick::BASELINE; len],
            stats: SimStats::new(),
            clock: LogicalClock::new(),
            pending_fault: None,
        })
    }

    // ========================================================================
    // Public API: Requests
    // ========================================================================

    /// Request an item, resolving any fault immediately.
    ///
    /// Equivalent to [`begin_request`] followed by [`complete_fault`] when
    /// the item was absent.
    ///
    /// # Errors
    /// - `Error::UnknownItem` if `item` is not in the catalog
    /// - `Error::FaultInFlight` if a deferred fault is still pending
    ///
    /// [`begin_request`]: PagingSimulator::begin_request
    /// [`complete_fault`]: PagingSimulator::complete_fault
    pub fn request(&mut self, item: ItemId) -> Result<Outcome> {
        match self.begin_request(item)? {
            RequestPhase::Hit { item } => Ok(Outcome::Hit { item }),
            RequestPhase::FaultPending { .. } => self.complete_fault(),
        }
    }

    /// Begin a request, leaving any fault in flight.
    ///
    /// The item's last-used tick is bumped unconditionally (a fault still
    /// counts as "most recently requested"). On a hit the request is fully
    /// resolved. On a fault the counter is incremented and the fault is
    /// parked; the shelf does not change until [`complete_fault`].
    ///
    /// # Errors
    /// - `Error::UnknownItem` if `item` is not in the catalog; nothing is
    ///   mutated
    /// - `Error::FaultInFlight` if an earlier fault has not completed
    ///
    /// [`complete_fault`]: PagingSimulator::complete_fault
    pub fn begin_request(&mut self, item: ItemId) -> Result<RequestPhase> {
        self.ensure_known(item)?;
        self.ensure_no_pending_fault()?;

        let now = self.clock.advance();
        self.last_used[item.0] = now;

        let resident = self
            .page_table
            .entry(item)
            .map(|e| e.resident)
            .unwrap_or(false);

        if resident {
            self.stats.record_hit();
            Ok(RequestPhase::Hit { item })
        } else {
            self.stats.record_fault();
            self.pending_fault = Some(item);
            Ok(RequestPhase::FaultPending { item })
        }
    }

    /// Resolve the fault in flight: evict if the shelf is full, then
    /// place the faulted item in the last slot.
    ///
    /// Eviction removes the least-recently-used resident item (ties break
    /// to the earliest shelf position) and renumbers the slots of every
    /// surviving item.
    ///
    /// # Errors
    /// Returns `Error::NoPendingFault` if no fault is in flight.
    pub fn complete_fault(&mut self) -> Result<Outcome> {
        let item = self.pending_fault.take().ok_or(Error::NoPendingFault)?;

        let mut evicted = None;
        if self.shelf.len() >= self.capacity {
            if let Some(index) = lru::victim_index(&self.shelf, &self.last_used) {
                evicted = Some(self.shelf.remove(index));
            }
        }

        self.shelf.push(item);
        self.page_table.rebuild(&self.shelf);

        Ok(Outcome::Fault { item, evicted })
    }

    /// The item whose fault is currently in flight, if any.
    pub fn pending_fault(&self) -> Option<ItemId> {
        self.pending_fault
    }

    // ========================================================================
    // Public API: Arrangement and reset
    // ========================================================================

    /// Replace the shelf order with `order`, which must be a permutation
    /// of the current shelf contents.
    ///
    /// Slots are renumbered to the new positions and every shelf item's
    /// last-used tick is set to one fresh tick (rearranging counts as a
    /// touch). Statistics do not change.
    ///
    /// # Errors
    /// - `Error::InvalidArrangement` if `order` adds, drops, or repeats an
    ///   item; nothing is mutated
    /// - `Error::FaultInFlight` if a fault is pending
    pub fn rearrange(&mut self, order: &[ItemId]) -> Result<()> {
        self.ensure_no_pending_fault()?;

        if order.len() != self.shelf.len() {
            return Err(Error::InvalidArrangement(format!(
                "expected {} shelf items, got {}",
                self.shelf.len(),
                order.len()
            )));
        }

        let mut seen = vec![false; self.catalog.len()];
        for &item in order {
            let resident = self.catalog.contains(item)
                && self
                    .page_table
                    .entry(item)
                    .map(|e| e.resident)
                    .unwrap_or(false);
            if !resident {
                return Err(Error::InvalidArrangement(format!(
                    "{} is not on the shelf",
                    self.display_label(item)
                )));
            }
            if seen[item.0] {
                return Err(Error::InvalidArrangement(format!(
                    "{} appears more than once",
                    self.display_label(item)
                )));
            }
            seen[item.0] = true;
        }

        self.shelf.clear();
        self.shelf.extend_from_slice(order);
        self.page_table.rebuild(&self.shelf);

        // One tick for the whole arrangement.
        let now = self.clock.advance();
        for &item in &self.shelf {
            self.last_used[item.0] = now;
        }

        Ok(())
    }

    /// Return the simulator to its initial empty state.
    ///
    /// Clears the shelf, vacates the page table, rewinds every last-used
    /// tick to the baseline, zeroes the statistics, and discards any fault
    /// in flight. Idempotent.
    pub fn reset(&mut self) {
        self.shelf.clear();
        self.page_table.clear();
        for tick in &mut self.last_used {
            *tick = Tick::BASELINE;
        }
        self.stats.reset();
        self.clock.reset();
        self.pending_fault = None;
    }

    // ========================================================================
    // Public API: Persistence
    // ========================================================================

    /// Capture the observable state as a [`Snapshot`].
    ///
    /// Only the shelf, the statistics, and the last-used map are saved;
    /// the page table is derivable and is rebuilt on load.
    pub fn save(&self) -> Snapshot {
        let shelf = self
            .shelf
            .iter()
            .filter_map(|&item| self.catalog.label(item))
            .map(str::to_string)
            .collect();

        let last_used: BTreeMap<String, u64> = self
            .catalog
            .ids()
            .filter_map(|item| {
                self.catalog
                    .label(item)
                    .map(|label| (label.to_string(), self.last_used[item.0].0))
            })
            .collect();

        Snapshot {
            shelf,
            stats: self.stats,
            last_used,
        }
    }

    /// Restore state from a snapshot, all-or-nothing.
    ///
    /// The snapshot is validated in full before anything is touched. On
    /// success the shelf, statistics, and last-used map are replaced, the
    /// page table is rebuilt from the restored shelf, the clock resumes
    /// past the largest restored tick, and any fault in flight is
    /// discarded. Last-used entries absent from the snapshot start at the
    /// baseline.
    ///
    /// # Errors
    /// Returns `Error::InvalidSnapshot` if the snapshot references items
    /// outside the catalog, repeats a shelf item, or overflows the
    /// capacity. On that failure the simulator falls back to the fresh
    /// empty state (never a partially-applied one).
    pub fn load(&mut self, snapshot: &Snapshot) -> Result<()> {
        match self.validate_snapshot(snapshot) {
            Ok((shelf, last_used, max_tick)) => {
                self.shelf = shelf;
                self.page_table.rebuild(&self.shelf);
                self.last_used = last_used;
                self.stats = snapshot.stats;
                self.clock.reset();
                self.clock.resume_from(max_tick);
                self.pending_fault = None;
                Ok(())
            }
            Err(err) => {
                self.reset();
                Err(err)
            }
        }
    }

    // ========================================================================
    // Public API: Accessors
    // ========================================================================

    /// The catalog this simulator was built over.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The shelf capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The resident items in shelf order.
    pub fn shelf(&self) -> &[ItemId] {
        &self.shelf
    }

    /// The full page table.
    pub fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    /// The page-table entry for `item`.
    ///
    /// # Errors
    /// Returns `Error::UnknownItem` if `item` is not in the catalog.
    pub fn entry(&self, item: ItemId) -> Result<PageTableEntry> {
        self.ensure_known(item)?;
        Ok(self.page_table.entry(item).unwrap_or_default())
    }

    /// The last-used tick for `item`.
    ///
    /// # Errors
    /// Returns `Error::UnknownItem` if `item` is not in the catalog.
    pub fn last_used(&self, item: ItemId) -> Result<Tick> {
        self.ensure_known(item)?;
        Ok(self.last_used[item.0])
    }

    /// Hit/fault counters since the last reset.
    pub fn stats(&self) -> SimStats {
        self.stats
    }

    /// Hit ratio as a percentage rounded to the nearest integer (0 when
    /// no requests have been made).
    pub fn hit_ratio(&self) -> u32 {
        self.stats.hit_ratio()
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    fn ensure_known(&self, item: ItemId) -> Result<()> {
        if self.catalog.contains(item) {
            Ok(())
        } else {
            Err(Error::UnknownItem(format!("item id {}", item.0)))
        }
    }

    fn ensure_no_pending_fault(&self) -> Result<()> {
        match self.pending_fault {
            Some(pending) => Err(Error::FaultInFlight(self.display_label(pending))),
            None => Ok(()),
        }
    }

    fn display_label(&self, item: ItemId) -> String {
        match self.catalog.label(item) {
            Some(label) => label.to_string(),
            None => format!("item id {}", item.0),
        }
    }

    /// Validate a snapshot against the catalog and capacity without
    /// mutating anything.
    fn validate_snapshot(
        &self,
        snapshot: &Snapshot,
    ) -> Result<(Vec<ItemId>, Vec<Tick>, Tick)> {
        if snapshot.shelf.len() > self.capacity {
            return Err(Error::InvalidSnapshot(format!(
                "shelf holds {} items but capacity is {}",
                snapshot.shelf.len(),
                self.capacity
            )));
        }

        let mut shelf = Vec::with_capacity(snapshot.shelf.len());
        let mut seen = vec![false; self.catalog.len()];
        for label in &snapshot.shelf {
            let item = self.catalog.id_of(label).ok_or_else(|| {
                Error::InvalidSnapshot(format!("shelf item {:?} is not in the catalog", label))
            })?;
            if seen[item.0] {
                return Err(Error::InvalidSnapshot(format!(
                    "shelf item {:?} appears more than once",
                    label
                )));
            }
            seen[item.0] = true;
            shelf.push(item);
        }

        let mut last_used = vec![Tick::BASELINE; self.catalog.len()];
        let mut max_tick = Tick::BASELINE;
        for (label, &raw) in &snapshot.last_used {
            let item = self.catalog.id_of(label).ok_or_else(|| {
                Error::InvalidSnapshot(format!(
                    "last-used entry {:?} is not in the catalog",
                    label
                ))
            })?;
            let tick = Tick::new(raw);
            last_used[item.0] = tick;
            if tick > max_tick {
                max_tick = tick;
            }
        }

        Ok((shelf, last_used, max_tick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(capacity: usize) -> PagingSimulator {
        PagingSimulator::new(Catalog::demo(), capacity).unwrap()
    }

    fn id(sim: &PagingSimulator, label: &str) -> ItemId {
        sim.catalog().id_of(label).unwrap()
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result = PagingSimulator::new(Catalog::demo(), 0);
        assert!(matches!(result, Err(Error::InvalidCapacity(0))));
    }

    #[test]
    fn test_first_request_faults_then_hits() {
        let mut sim = sim(3);
        let os = id(&sim, "Operating Systems");

        let outcome = sim.request(os).unwrap();
        assert_eq!(outcome, Outcome::Fault { item: os, evicted: None });
        assert_eq!(sim.shelf(), &[os]);
        assert_eq!(sim.entry(os).unwrap(), PageTableEntry::resident_at(0));

        let outcome = sim.request(os).unwrap();
        assert_eq!(outcome, Outcome::Hit { item: os });
        assert_eq!(sim.stats(), SimStats { hits: 1, faults: 1 });
    }

    #[test]
    fn test_unknown_item_rejected_before_mutation() {
        let mut sim = sim(3);
        let bogus = ItemId::new(99);

        let before_stats = sim.stats();
        let result = sim.request(bogus);

        assert!(matches!(result, Err(Error::UnknownItem(_))));
        assert_eq!(sim.stats(), before_stats);
        assert!(sim.shelf().is_empty());
        assert!(sim.pending_fault().is_none());
    }

    #[test]
    fn test_eviction_targets_least_recently_used() {
        let mut sim = sim(2);
        let a = id(&sim, "Operating Systems");
        let b = id(&sim, "Computer Networks");
        let c = id(&sim, "Algorithms");

        sim.request(a).unwrap();
        sim.request(b).unwrap();
        sim.request(a).unwrap(); // a is now fresher than b

        let outcome = sim.request(c).unwrap();
        assert_eq!(outcome, Outcome::Fault { item: c, evicted: Some(b) });
        assert_eq!(sim.shelf(), &[a, c]);
        assert_eq!(sim.entry(b).unwrap(), PageTableEntry::vacant());
    }

    #[test]
    fn test_slots_renumbered_after_eviction() {
        let mut sim = sim(2);
        let a = id(&sim, "Operating Systems");
        let b = id(&sim, "Computer Networks");
        let c = id(&sim, "Algorithms");

        sim.request(a).unwrap();
        sim.request(b).unwrap();
        // a is the LRU victim; b shifts from slot 1 to slot 0.
        sim.request(c).unwrap();

        assert_eq!(sim.shelf(), &[b, c]);
        assert_eq!(sim.entry(b).unwrap(), PageTableEntry::resident_at(0));
        assert_eq!(sim.entry(c).unwrap(), PageTableEntry::resident_at(1));
    }

    #[test]
    fn test_two_phase_fault() {
        let mut sim = sim(3);
        let a = id(&sim, "Operating Systems");

        let phase = sim.begin_request(a).unwrap();
        assert_eq!(phase, RequestPhase::FaultPending { item: a });

        // Counted, but not yet resident.
        assert_eq!(sim.stats(), SimStats { hits: 0, faults: 1 });
        assert!(sim.shelf().is_empty());
        assert_eq!(sim.pending_fault(), Some(a));

        let outcome = sim.complete_fault().unwrap();
        assert_eq!(outcome, Outcome::Fault { item: a, evicted: None });
        assert_eq!(sim.shelf(), &[a]);
        assert!(sim.pending_fault().is_none());
    }

    #[test]
    fn test_requests_rejected_while_fault_in_flight() {
        let mut sim = sim(3);
        let a = id(&sim, "Operating Systems");
        let b = id(&sim, "Computer Networks");

        sim.begin_request(a).unwrap();

        assert!(matches!(sim.begin_request(b), Err(Error::FaultInFlight(_))));
        assert!(matches!(sim.request(b), Err(Error::FaultInFlight(_))));
        assert!(matches!(sim.rearrange(&[]), Err(Error::FaultInFlight(_))));

        // The rejected calls must not have leaked any counting.
        assert_eq!(sim.stats(), SimStats { hits: 0, faults: 1 });

        sim.complete_fault().unwrap();
        assert!(sim.request(b).unwrap().is_fault());
    }

    #[test]
    fn test_complete_without_pending_fault() {
        let mut sim = sim(3);
        assert!(matches!(sim.complete_fault(), Err(Error::NoPendingFault)));
    }

    #[test]
    fn test_hit_resolves_in_one_phase() {
        let mut sim = sim(3);
        let a = id(&sim, "Operating Systems");

        sim.request(a).unwrap();
        let phase = sim.begin_request(a).unwrap();
        assert_eq!(phase, RequestPhase::Hit { item: a });
        assert!(sim.pending_fault().is_none());
    }

    #[test]
    fn test_rearrange_bumps_all_shelf_items_with_one_tick() {
        let mut sim = sim(3);
        let a = id(&sim, "Operating Systems");
        let b = id(&sim, "Computer Networks");
        let c = id(&sim, "Algorithms");

        sim.request(a).unwrap();
        sim.request(b).unwrap();
        sim.request(c).unwrap();

        sim.rearrange(&[c, a, b]).unwrap();

        assert_eq!(sim.shelf(), &[c, a, b]);
        assert_eq!(sim.entry(a).unwrap().slot, 1);
        assert_eq!(sim.entry(b).unwrap().slot, 2);
        assert_eq!(sim.entry(c).unwrap().slot, 0);

        let ta = sim.last_used(a).unwrap();
        assert_eq!(ta, sim.last_used(b).unwrap());
        assert_eq!(ta, sim.last_used(c).unwrap());
        assert_eq!(sim.stats(), SimStats { hits: 0, faults: 3 });
    }

    #[test]
    fn test_rearrange_rejects_set_mismatch() {
        let mut sim = sim(3);
        let a = id(&sim, "Operating Systems");
        let b = id(&sim, "Computer Networks");
        let d = id(&sim, "Database Systems");

        sim.request(a).unwrap();
        sim.request(b).unwrap();

        let before = sim.shelf().to_vec();

        // Wrong length
        assert!(matches!(sim.rearrange(&[a]), Err(Error::InvalidArrangement(_))));
        // Non-resident item swapped in
        assert!(matches!(sim.rearrange(&[a, d]), Err(Error::InvalidArrangement(_))));
        // Duplicate
        assert!(matches!(sim.rearrange(&[a, a]), Err(Error::InvalidArrangement(_))));

        assert_eq!(sim.shelf(), before.as_slice());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut sim = sim(3);
        let a = id(&sim, "Operating Systems");

        sim.request(a).unwrap();
        sim.reset();
        sim.reset();

        assert!(sim.shelf().is_empty());
        assert_eq!(sim.stats(), SimStats::new());
        assert_eq!(sim.last_used(a).unwrap(), Tick::BASELINE);
        assert_eq!(sim.entry(a).unwrap(), PageTableEntry::vacant());
        assert_eq!(sim.hit_ratio(), 0);
    }

    #[test]
    fn test_reset_discards_pending_fault() {
        let mut sim = sim(3);
        let a = id(&sim, "Operating Systems");

        sim.begin_request(a).unwrap();
        sim.reset();

        assert!(sim.pending_fault().is_none());
        assert!(matches!(sim.complete_fault(), Err(Error::NoPendingFault)));
    }

    #[test]
    fn test_hit_ratio() {
        let mut sim = sim(3);
        let a = id(&sim, "Operating Systems");

        assert_eq!(sim.hit_ratio(), 0);

        sim.request(a).unwrap(); // fault
        sim.request(a).unwrap(); // hit
        sim.request(a).unwrap(); // hit

        assert_eq!(sim.hit_ratio(), 67);
    }

    #[test]
    fn test_shelf_never_exceeds_capacity() {
        let mut sim = sim(2);
        for label in ["Operating Systems", "Algorithms", "Web Development", "Database Systems"] {
            let item = id(&sim, label);
            sim.request(item).unwrap();
            assert!(sim.shelf().len() <= 2);
        }
    }
}
