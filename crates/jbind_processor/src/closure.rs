//! One-level nested-type closure over the exposed set.
//!
//! Exposure propagates from a root to the nested types observed alongside it
//! in the same batch, one nesting level deep. Types compiled in earlier
//! batches are invisible here; the registry merge is what accumulates those
//! across invocations.

use std::collections::{BTreeSet, HashMap};

/// Expanded exposed set: the directly exposed roots plus every nested type
/// whose enclosing root is exposed.
pub fn expand(
    exposed_roots: &BTreeSet<String>,
    nested_by_root: &HashMap<String, Vec<String>>,
) -> BTreeSet<String> {
    let mut expanded = exposed_roots.clone();

    for root in exposed_roots {
        if let Some(nested) = nested_by_root.get(root) {
            for name in nested {
                expanded.insert(name.clone());
            }
        }
    }

    expanded
}
