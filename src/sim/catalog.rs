//! The catalog - the fixed set of items the simulator knows about.

use std::collections::HashMap;
use std::fmt;

use crate::common::{Error, ItemId, Result};

/// The fixed, ordered set of item labels (the "virtual pages").
///
/// A catalog is immutable for the lifetime of a simulator. Items are
/// addressed by [`ItemId`], an index into the catalog's label order;
/// labels are only needed at the boundaries (snapshots, display).
///
/// # Example
/// ```
/// use shelfsim::Catalog;
///
/// let catalog = Catalog::demo();
/// let id = catalog.id_of("Algorithms").unwrap();
/// assert_eq!(catalog.label(id), Some("Algorithms"));
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Labels in catalog order. ItemId(i) names labels[i].
    labels: Vec<String>,

    /// Reverse lookup for O(1) label resolution.
    index: HashMap<String, ItemId>,
}

impl Catalog {
    /// Build a catalog from an ordered sequence of labels.
    ///
    /// # Errors
    /// Returns `Error::DuplicateLabel` if the same label appears twice.
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        let mut index = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if index.insert(label.clone(), ItemId::new(i)).is_some() {
                return Err(Error::DuplicateLabel(label.clone()));
            }
        }

        Ok(Self { labels, index })
    }

    /// The six-book catalog used throughout the docs and tests.
    pub fn demo() -> Self {
        Self::new([
            "Operating Systems",
            "Computer Networks",
            "Algorithms",
            "Database Systems",
            "Machine Learning",
            "Web Development",
        ])
        .expect("demo labels are distinct")
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Whether `item` names an entry in this catalog.
    #[inline]
    pub fn contains(&self, item: ItemId) -> bool {
        item.0 < self.labels.len()
    }

    /// The label of `item`, or None if the id is out of range.
    pub fn label(&self, item: ItemId) -> Option<&str> {
        self.labels.get(item.0).map(String::as_str)
    }

    /// Resolve a label to its id.
    pub fn id_of(&self, label: &str) -> Option<ItemId> {
        self.index.get(label).copied()
    }

    /// Iterate over all item ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        (0..self.labels.len()).map(ItemId::new)
    }

    /// Iterate over all labels in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Catalog({} items)", self.labels.len())
    }
}
