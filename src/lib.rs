//! shelfsim - an educational LRU page replacement simulator.
//!
//! A fixed-capacity shelf (physical memory) holds a subset of a fixed
//! catalog of books (virtual pages). Requesting a book that is on the
//! shelf is a hit; requesting an absent one is a page fault that fetches
//! the book from storage, evicting the least-recently-used resident if
//! the shelf is full.
//!
//! # Architecture
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Presentation layer (yours)                │
//! │        rendering, drag-and-drop, sounds, fetch animation     │
//! └──────────────┬────────────────────────────────▲──────────────┘
//!                │ request / rearrange / reset    │ Outcome + accessors
//! ┌──────────────▼────────────────────────────────┴──────────────┐
//! │                    PagingSimulator (sim/)                    │
//! │     catalog · shelf · page table · last-used · stats         │
//! └──────────────┬────────────────────────────────▲──────────────┘
//!                │ save()                         │ load()
//! ┌──────────────▼────────────────────────────────┴──────────────┐
//! │                 Snapshot + SnapshotStore (snapshot/)         │
//! │             checksummed JSON files, round-trip safe          │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The simulator is the single authority over its state: presentation
//! layers call in, observe the returned [`Outcome`], and redraw from the
//! read-only accessors. Nothing in this crate depends on any rendering
//! mechanism.
//!
//! # Modules
//! - [`common`] - shared primitives (ItemId, Error, config)
//! - [`sim`] - the simulator core
//! - [`snapshot`] - persistence
//!
//! # Quick Start
//! ```
//! use shelfsim::{Catalog, PagingSimulator};
//!
//! let catalog = Catalog::demo();
//! let algorithms = catalog.id_of("Algorithms").unwrap();
//!
//! let mut sim = PagingSimulator::new(catalog, 3).unwrap();
//!
//! let outcome = sim.request(algorithms).unwrap();
//! assert!(outcome.is_fault());
//! assert_eq!(sim.hit_ratio(), 0);
//!
//! assert!(sim.request(algorithms).unwrap().is_hit());
//! assert_eq!(sim.hit_ratio(), 50);
//! ```

pub mod common;
pub mod sim;
pub mod snapshot;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_CAPACITY, FAULT_LATENCY_MS};
pub use common::{Error, ItemId, Result};

pub use sim::{
    Catalog, LogicalClock, Outcome, PageTable, PageTableEntry, PagingSimulator, RequestPhase,
    SimStats, Tick,
};
pub use snapshot::{Snapshot, SnapshotStore};
