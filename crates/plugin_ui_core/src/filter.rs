//! Search filtering over menu trees
//!
//! Filtering is a pure function of `(tree, query)`:
//!
//! - An empty or whitespace-only query returns the input unchanged (borrowed).
//! - A node matches when the trimmed, lowercased query is a substring of its
//!   lowercased label or secondary label.
//! - A node that matches directly is kept with its **whole** subtree.
//! - A node that only has matching descendants is kept with its children
//!   replaced by the pruned children.
//! - Sibling order is preserved at every level.
//!
//! The asymmetry between the last two rules is intentional: a direct hit
//! reveals everything under it, an indirect hit only reveals the path to the hit.

use std::borrow::Cow;

use crate::menu::{MenuGroup, MenuItem};

/// Normalize a raw query into the needle used for matching
///
/// Returns `None` when the query is empty after trimming, meaning "no filter".
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Direct match test against a normalized needle
///
/// Descendants are not considered here.
pub fn item_matches(item: &MenuItem, needle: &str) -> bool {
    item.label.to_lowercase().contains(needle)
        || item
            .secondary_label
            .as_ref()
            .is_some_and(|secondary| secondary.to_lowercase().contains(needle))
}

/// Filter root items by `query`
pub fn filter_items<'a>(items: &'a [MenuItem], query: &str) -> Cow<'a, [MenuItem]> {
    match normalize_query(query) {
        None => Cow::Borrowed(items),
        Some(needle) => {
            let filtered = prune_items(items, &needle);
            tracing::trace!(
                query = needle.as_str(),
                kept = filtered.len(),
                total = items.len(),
                "filtered menu items"
            );
            Cow::Owned(filtered)
        }
    }
}

/// Filter every group's items by `query`, dropping groups left empty
pub fn filter_groups<'a>(groups: &'a [MenuGroup], query: &str) -> Cow<'a, [MenuGroup]> {
    let Some(needle) = normalize_query(query) else {
        return Cow::Borrowed(groups);
    };

    let filtered: Vec<MenuGroup> = groups
        .iter()
        .filter_map(|group| {
            let items = prune_items(&group.items, &needle);
            if items.is_empty() {
                return None;
            }
            Some(MenuGroup {
                id: group.id.clone(),
                label: group.label.clone(),
                secondary_label: group.secondary_label.clone(),
                items,
                class_name: group.class_name.clone(),
            })
        })
        .collect();

    tracing::trace!(
        query = needle.as_str(),
        kept = filtered.len(),
        total = groups.len(),
        "filtered menu groups"
    );
    Cow::Owned(filtered)
}

fn prune_items(items: &[MenuItem], needle: &str) -> Vec<MenuItem> {
    items
        .iter()
        .filter_map(|item| {
            if item_matches(item, needle) {
                return Some(item.clone());
            }
            let children = prune_items(&item.children, needle);
            if children.is_empty() {
                None
            } else {
                Some(with_children(item, children))
            }
        })
        .collect()
}

/// Shallow copy of `item` carrying `children` instead of its own
fn with_children(item: &MenuItem, children: Vec<MenuItem>) -> MenuItem {
    MenuItem {
        id: item.id.clone(),
        label: item.label.clone(),
        secondary_label: item.secondary_label.clone(),
        icon: item.icon.clone(),
        action: item.action.clone(),
        children,
        disabled: item.disabled,
        class_name: item.class_name.clone(),
    }
}
