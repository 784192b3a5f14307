//! The persisted snapshot record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::sim::SimStats;

/// The observable simulator state that survives a save/load round trip.
///
/// Exactly three fields are persisted: the shelf (as labels, in order),
/// the statistics, and the last-used map. The page table is deliberately
/// absent - it is fully derivable from the shelf and is rebuilt on load.
///
/// The JSON field names (`shelf`, `stats`, `lastUsed`) match the record
/// the original browser simulation kept in local storage, so snapshots
/// are interchangeable with it:
///
/// ```json
/// {
///   "shelf": ["Algorithms", "Operating Systems"],
///   "stats": { "hits": 1, "faults": 4 },
///   "lastUsed": { "Algorithms": 3, "Operating Systems": 4 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Resident item labels in shelf order.
    pub shelf: Vec<String>,

    /// Hit/fault counters.
    pub stats: SimStats,

    /// Last-used tick per item label. Items absent here start at the
    /// baseline when loaded.
    #[serde(rename = "lastUsed")]
    pub last_used: BTreeMap<String, u64>,
}
