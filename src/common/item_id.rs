//! Catalog item identifier type.

use std::fmt;

/// Identifies an item (a "book") in the catalog.
///
/// Using `usize` because:
/// 1. The catalog is a `Vec` of labels and per-item state lives in
///    parallel `Vec`s
/// 2. Direct indexing without casting: `last_used[item.0]`
/// 3. Matches Rust idioms for array/vector indexing
///
/// An `ItemId` is only meaningful relative to the catalog that issued it
/// (see [`Catalog::id_of`]).
///
/// [`Catalog::id_of`]: crate::Catalog::id_of
///
/// # Example
/// ```
/// use shelfsim::ItemId;
///
/// let item = ItemId::new(2);
/// assert_eq!(item.0, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

impl ItemId {
    /// Create a new ItemId.
    #[inline]
    pub fn new(id: usize) -> Self {
        ItemId(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item({})", self.0)
    }
}
