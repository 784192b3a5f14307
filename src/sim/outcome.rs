//! Request outcomes returned to the caller.

use crate::common::ItemId;

/// The result of a fully resolved request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The item was already on the shelf.
    Hit {
        /// The requested item.
        item: ItemId,
    },

    /// The item was fetched from storage.
    Fault {
        /// The requested item, now resident.
        item: ItemId,
        /// The item removed to make room, if the shelf was full.
        evicted: Option<ItemId>,
    },
}

impl Outcome {
    /// The requested item, regardless of outcome kind.
    pub fn item(&self) -> ItemId {
        match *self {
            Outcome::Hit { item } | Outcome::Fault { item, .. } => item,
        }
    }

    /// Whether the request was a hit.
    pub fn is_hit(&self) -> bool {
        matches!(self, Outcome::Hit { .. })
    }

    /// Whether the request was a fault.
    pub fn is_fault(&self) -> bool {
        matches!(self, Outcome::Fault { .. })
    }
}

/// The immediate result of [`begin_request`].
///
/// A hit resolves in one phase. A fault is only *counted* at this point;
/// the shelf mutation happens in [`complete_fault`], after the simulated
/// fetch latency the caller chooses to model.
///
/// [`begin_request`]: crate::PagingSimulator::begin_request
/// [`complete_fault`]: crate::PagingSimulator::complete_fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    /// Resolved immediately: the item is on the shelf.
    Hit {
        /// The requested item.
        item: ItemId,
    },

    /// A fault was recorded and is now in flight.
    FaultPending {
        /// The item being fetched.
        item: ItemId,
    },
}
