//! Page table - per-item residency and slot metadata.
//!
//! The page table is fully derived state: it always mirrors the shelf.
//! After any shelf mutation (fault completion, eviction, rearrangement,
//! snapshot load) the table is rebuilt wholesale rather than patched,
//! which makes the residency/slot invariant trivially true.

use std::fmt;

use crate::common::ItemId;

/// Residency metadata for one catalog item.
///
/// `slot` is the item's exact index on the shelf when resident, else
/// [`PageTableEntry::VACANT_SLOT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTableEntry {
    /// Whether the item is currently on the shelf.
    pub resident: bool,
    /// Shelf index when resident, -1 otherwise.
    pub slot: isize,
}

impl PageTableEntry {
    /// Sentinel slot for non-resident items.
    pub const VACANT_SLOT: isize = -1;

    /// Entry for an item that is not on the shelf.
    pub fn vacant() -> Self {
        Self {
            resident: false,
            slot: Self::VACANT_SLOT,
        }
    }

    /// Entry for an item resident at `slot`.
    pub fn resident_at(slot: usize) -> Self {
        Self {
            resident: true,
            slot: slot as isize,
        }
    }
}

impl Default for PageTableEntry {
    fn default() -> Self {
        Self::vacant()
    }
}

impl fmt::Display for PageTableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.resident {
            write!(f, "Shelf {}", self.slot)
        } else {
            write!(f, "In Storage")
        }
    }
}

/// The page table: exactly one [`PageTableEntry`] per catalog item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTable {
    entries: Vec<PageTableEntry>,
}

impl PageTable {
    /// Create a table with `len` vacant entries (one per catalog item).
    pub fn new(len: usize) -> Self {
        Self {
            entries: vec![PageTableEntry::vacant(); len],
        }
    }

    /// Number of entries (always the catalog size).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry for `item`, or None if the id is out of range.
    pub fn entry(&self, item: ItemId) -> Option<PageTableEntry> {
        self.entries.get(item.0).copied()
    }

    /// Iterate over `(item, entry)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, PageTableEntry)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, &e)| (ItemId::new(i), e))
    }

    /// Number of resident entries.
    pub fn resident_count(&self) -> usize {
        self.entries.iter().filter(|e| e.resident).count()
    }

    /// Recompute every entry from the shelf contents.
    ///
    /// An item is resident iff it appears on the shelf, and its slot is
    /// its index there.
    pub(crate) fn rebuild(&mut self, shelf: &[ItemId]) {
        for entry in &mut self.entries {
            *entry = PageTableEntry::vacant();
        }
        for (slot, &item) in shelf.iter().enumerate() {
            self.entries[item.0] = PageTableEntry::resident_at(slot);
        }
    }

    /// Mark every entry vacant.
    pub(crate) fn clear(&mut self) {
        for entry in &mut self.entries {
            *entry = PageTableEntry::vacant();
        }
    }
}
