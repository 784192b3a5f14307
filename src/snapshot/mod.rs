//! Snapshot persistence.
//!
//! A [`Snapshot`] captures the three persisted fields of the simulator
//! (shelf, stats, last-used); the [`SnapshotStore`] reads and writes
//! them as checksummed JSON files.

#[allow(clippy::module_inception)]
mod snapshot;
mod store;

pub use snapshot::Snapshot;
pub use store::SnapshotStore;
