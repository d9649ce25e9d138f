//! plugin-ui Core
//!
//! Headless engine behind the `plugin_ui_cn` layout menu:
//!
//! - **Menu Data Model**: nested [`MenuItem`] trees and flat [`MenuGroup`] sections
//! - **Search Filtering**: case-insensitive label search that keeps ancestor chains
//! - **Expansion State**: per-node open/closed map that survives re-filtering
//! - **Dispatch**: visible-row flattening and click/keyboard activation routing
//! - **Documents**: JSON/TOML menu definitions validated into the data model
//!
//! # Example
//!
//! ```rust
//! use plugin_ui_core::{MenuController, MenuItem};
//!
//! let mut menu = MenuController::new(vec![
//!     MenuItem::new("reports", "Reports").child("sales", "Sales", |n| n),
//!     MenuItem::new("users", "Users").secondary("Manage accounts"),
//! ]);
//!
//! menu.set_query("sal");
//! let view = menu.view();
//! assert_eq!(view.rows().count(), 1);
//! assert_eq!(view.rows().next().map(|r| r.item.id.as_str()), Some("reports"));
//! ```

pub mod config;
pub mod controller;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod events;
pub mod expansion;
pub mod filter;
pub mod menu;

pub use config::{MenuConfig, DEFAULT_SEARCH_PLACEHOLDER};
pub use controller::MenuController;
pub use dispatch::{
    activate, apply_command, visible_rows, Activation, ActivationHooks, EmptyState, ItemCallback,
    ItemPath, MenuEntry, MenuView, NavigateCallback, VisibleRow,
};
pub use document::{GroupDocument, ItemDocument, MenuDefinition, MenuDocument};
pub use error::{MenuError, Result};
pub use events::{Key, MenuCommand};
pub use expansion::{Expansion, ExpansionState};
pub use filter::{filter_groups, filter_items, item_matches, normalize_query};
pub use menu::{
    validate_groups, validate_items, ActionCallback, MenuAction, MenuGroup, MenuItem,
};
