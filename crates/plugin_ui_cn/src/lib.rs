//! # plugin-ui Component Library (plugin_ui_cn)
//!
//! A shadcn-inspired component library built on the `plugin_ui_core` engine.
//!
//! - **Engine**: `plugin_ui_core` owns the menu tree, filtering, expansion state
//!   and activation routing
//! - **Elements**: [`element`] is the small tagged tree components render into
//! - **Components**: `plugin_ui_cn` turns engine state into element trees
//!
//! ## Example
//!
//! ```rust
//! use plugin_ui_cn::prelude::*;
//!
//! let mut menu = cn::layout_menu()
//!     .item("reports", "Reports", |i| i.child("sales", "Sales", |c| c.href("/reports/sales")))
//!     .item("users", "Users", |i| i)
//!     .build();
//!
//! menu.click(&ItemPath::root("reports"));
//! menu.set_search("sal");
//! assert_eq!(menu.view().rows().count(), 2);
//! assert!(menu.render().to_markup().contains("href=\"/reports/sales\""));
//! ```
//!
//! ## Components
//!
//! - **LayoutMenu** - Searchable nested navigation menu, flat or grouped
//! - **LayoutMenuSearch** - The menu's search field

pub mod components;
pub mod element;

pub use components::*;

/// Layout menu settings
pub use plugin_ui_core::MenuConfig as LayoutMenuConfig;

/// Convenience module for accessing components with `cn::` prefix
pub mod cn {
    pub use crate::components::layout_menu::layout_menu;
    pub use crate::components::layout_menu_search::layout_menu_search;
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cn;
    pub use crate::components::layout_menu::{layout_menu, LayoutMenu, LayoutMenuBuilder};
    pub use crate::components::layout_menu_search::{layout_menu_search, LayoutMenuSearch};
    pub use crate::element::{Element, Node, Tag};
    pub use crate::LayoutMenuConfig;
    // Re-export commonly needed engine types
    pub use plugin_ui_core::{
        Activation, ItemPath, Key, MenuDocument, MenuGroup, MenuItem, MenuView,
    };
}
