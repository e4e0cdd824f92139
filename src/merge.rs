//! Pure functions for merging records that carry a string identifier.
//!
//! Records are keyed by ID. A later record replaces an earlier one with the
//! same ID but keeps the position where that ID was first seen.

use std::collections::HashMap;
use tracing::debug;

/// A record with a unique string identifier.
pub trait Identifiable {
    fn id(&self) -> &str;
}

impl<T: Identifiable + ?Sized> Identifiable for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<T: Identifiable + ?Sized> Identifiable for Box<T> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

/// Merge two lists of records, one record per ID.
///
/// Records from `items2` take precedence on duplicate IDs. The result is
/// ordered by the first occurrence of each ID across `items1` followed by
/// `items2`. Merging with an empty list returns the other list unchanged.
///
/// # Examples
/// ```
/// use infogata_utils::{merge_items, Identifiable};
///
/// #[derive(Debug, PartialEq)]
/// struct Track { id: String, name: &'static str }
///
/// impl Identifiable for Track {
///     fn id(&self) -> &str { &self.id }
/// }
///
/// let merged = merge_items(
///     vec![Track { id: "1".into(), name: "a" }, Track { id: "2".into(), name: "b" }],
///     vec![Track { id: "1".into(), name: "c" }],
/// );
/// assert_eq!(merged[0].name, "c");
/// assert_eq!(merged.len(), 2);
/// ```
pub fn merge_items<T: Identifiable>(items1: Vec<T>, items2: Vec<T>) -> Vec<T> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut merged: Vec<T> = Vec::with_capacity(items1.len() + items2.len());
    let mut replaced = 0usize;

    for item in items1.into_iter().chain(items2) {
        match positions.get(item.id()) {
            Some(&index) => {
                merged[index] = item;
                replaced += 1;
            }
            None => {
                positions.insert(item.id().to_string(), merged.len());
                merged.push(item);
            }
        }
    }

    debug!(merged = merged.len(), replaced, "Merged records by identifier");
    merged
}
