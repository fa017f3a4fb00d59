//! Helpers that turn an item order plus a placeholder position into displayed entries, and
//! displayed entries back into a committed order.

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::{ConfigError, Entry, PlaceholderId, PlaceholderPosition, is_placeholder_marker};

#[cfg(not(feature = "std"))]
type IdSet<'a> = alloc::collections::BTreeSet<&'a str>;
#[cfg(feature = "std")]
type IdSet<'a> = std::collections::HashSet<&'a str>;

/// Rejects item lists that could be confused with placeholder entries.
///
/// Every identifier must be unique and must not start with [`crate::PLACEHOLDER_PREFIX`].
pub fn validate_items<K: AsRef<str>>(items: &[K]) -> Result<(), ConfigError> {
    let mut seen = IdSet::new();
    for item in items {
        let id = item.as_ref();
        if is_placeholder_marker(id) {
            return Err(ConfigError::ReservedPrefix(id.to_string()));
        }
        if !seen.insert(id) {
            return Err(ConfigError::DuplicateId(id.to_string()));
        }
    }
    Ok(())
}

/// Element index at which the placeholder is inserted into `items`.
///
/// `item_index` counts the items other than `dragged`; the dragged item keeps its own slot.
/// The placeholder goes immediately before the `item_index`-th such item, or at the end.
pub fn placeholder_element_index<K: PartialEq>(
    items: impl IntoIterator<Item = K>,
    dragged: &K,
    item_index: usize,
) -> usize {
    let mut others = 0usize;
    let mut len = 0usize;
    for (element_index, key) in items.into_iter().enumerate() {
        len = element_index + 1;
        if &key == dragged {
            continue;
        }
        if others == item_index {
            return element_index;
        }
        others += 1;
    }
    len
}

/// Builds the displayed sequence: `items` with the placeholder spliced in.
///
/// With `placeholder = None` (or [`PlaceholderPosition::Ejected`]) no placeholder is shown.
pub fn splice_placeholder<K: Clone + PartialEq>(
    items: &[K],
    dragged: Option<&K>,
    placeholder: Option<(PlaceholderPosition, PlaceholderId)>,
) -> Vec<Entry<K>> {
    let mut out: Vec<Entry<K>> = items.iter().cloned().map(Entry::Item).collect();
    let (Some(dragged), Some((PlaceholderPosition::At(item_index), id))) = (dragged, placeholder)
    else {
        return out;
    };
    let at = placeholder_element_index(items.iter(), &dragged, item_index);
    out.insert(at, Entry::Placeholder(id));
    out
}

/// Computes the order committed when `dragged` is released at `placeholder`.
///
/// The placeholder entry and the dragged item are filtered out of `entries`; the dragged item
/// is then re-inserted at the placeholder's item index, or dropped entirely when ejected.
pub fn commit_order<K: Clone + PartialEq>(
    entries: &[Entry<K>],
    dragged: &K,
    placeholder: PlaceholderPosition,
) -> Vec<K> {
    let mut order: Vec<K> = entries
        .iter()
        .filter_map(Entry::item)
        .filter(|key| *key != dragged)
        .cloned()
        .collect();
    if let PlaceholderPosition::At(item_index) = placeholder {
        let at = item_index.min(order.len());
        order.insert(at, dragged.clone());
    }
    order
}
