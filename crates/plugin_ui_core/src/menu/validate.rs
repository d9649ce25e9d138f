//! Structural checks for menu trees
//!
//! Sibling ids must be unique and non-empty; anything else is accepted.
//! Ids repeated in different branches are legal but share expansion state,
//! so they are reported with a warning.

use rustc_hash::FxHashSet;

use super::{MenuGroup, MenuItem};
use crate::error::{MenuError, Result};

const ROOT: &str = "<root>";

/// Validate a list of root items
pub fn validate_items(items: &[MenuItem]) -> Result<()> {
    let mut seen = FxHashSet::default();
    check_siblings(items, ROOT, &mut seen)
}

/// Validate groups and every item inside them
pub fn validate_groups(groups: &[MenuGroup]) -> Result<()> {
    let mut group_ids = FxHashSet::default();
    let mut seen = FxHashSet::default();
    for group in groups {
        if group.id.trim().is_empty() {
            return Err(MenuError::EmptyGroupId);
        }
        if !group_ids.insert(group.id.as_str()) {
            return Err(MenuError::DuplicateGroupId(group.id.clone()));
        }
        check_siblings(&group.items, &group.id, &mut seen)?;
    }
    Ok(())
}

fn check_siblings<'a>(
    items: &'a [MenuItem],
    parent: &str,
    seen: &mut FxHashSet<&'a str>,
) -> Result<()> {
    let mut siblings = FxHashSet::default();
    for item in items {
        if item.id.trim().is_empty() {
            return Err(MenuError::EmptyId {
                parent: parent.to_string(),
            });
        }
        if !siblings.insert(item.id.as_str()) {
            return Err(MenuError::DuplicateId {
                id: item.id.clone(),
                parent: parent.to_string(),
            });
        }
        if !seen.insert(item.id.as_str()) {
            tracing::warn!(
                id = item.id.as_str(),
                parent,
                "menu id reused in another branch; both nodes share expansion state"
            );
        }
        if item.has_children() && item.action.is_some() {
            tracing::warn!(id = item.id.as_str(), "action on a parent item is never run");
        }

        let path = if parent == ROOT {
            item.id.clone()
        } else {
            format!("{}/{}", parent, item.id)
        };
        check_siblings(&item.children, &path, seen)?;
    }
    Ok(())
}
