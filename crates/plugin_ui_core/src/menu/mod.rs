//! Menu data model
//!
//! Menus are plain owned trees. Nothing in here carries UI state: open/closed
//! flags live in [`ExpansionState`](crate::expansion::ExpansionState) and the
//! search query lives in the controller, so a tree can be shared across renders.

mod action;
mod group;
mod item;
mod validate;

pub use action::{ActionCallback, MenuAction};
pub use group::MenuGroup;
pub use item::MenuItem;
pub use validate::{validate_groups, validate_items};
