//! LRU (Least Recently Used) victim selection.
//!
//! Scans the shelf left to right and keeps the item with the smallest
//! last-used tick. The running minimum is replaced only on a *strictly*
//! smaller tick, so when several items share a timestamp (possible only
//! at the baseline) the earliest shelf position wins. This tie-break is
//! part of the observable contract and must not be changed to
//! "most recently inserted" or similar.

use crate::common::ItemId;
use crate::sim::clock::Tick;

/// Select the shelf index of the eviction victim.
///
/// `last_used` is indexed by `ItemId`; every shelf item must have an
/// entry. Returns None only for an empty shelf.
pub(crate) fn victim_index(shelf: &[ItemId], last_used: &[Tick]) -> Option<usize> {
    let mut victim: Option<(usize, Tick)> = None;

    for (index, &item) in shelf.iter().enumerate() {
        let tick = last_used[item.0];
        match victim {
            Some((_, best)) if tick >= best => {}
            _ => victim = Some((index, tick)),
        }
    }

    victim.map(|(index, _)| index)
}
