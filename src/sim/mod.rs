//! The simulator core.
//!
//! # Components
//! - [`PagingSimulator`] - the replacement-policy state machine
//! - [`Catalog`] - the fixed set of items and their ids
//! - [`PageTable`] / [`PageTableEntry`] - derived residency metadata
//! - [`SimStats`] - hit/fault counters
//! - [`LogicalClock`] / [`Tick`] - logical time for recency tracking
//! - LRU victim selection (internal `lru` module)

mod catalog;
mod clock;
mod lru;
mod outcome;
mod page_table;
mod simulator;
mod stats;

pub use catalog::Catalog;
pub use clock::{LogicalClock, Tick};
pub use outcome::{Outcome, RequestPhase};
pub use page_table::{PageTable, PageTableEntry};
pub use simulator::PagingSimulator;
pub use stats::SimStats;
