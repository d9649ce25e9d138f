//! Components built on the `plugin_ui_core` menu engine
//!
//! Each component follows a consistent pattern:
//! - Builder function (e.g., `layout_menu()`)
//! - Mounted instance holding per-menu state
//! - `render()` producing an [`Element`](crate::element::Element) tree

pub mod layout_menu;
pub mod layout_menu_search;

pub use layout_menu::{layout_menu, LayoutMenu, LayoutMenuBuilder, RenderGroupLabelFn, RenderItemFn};
pub use layout_menu_search::{layout_menu_search, LayoutMenuSearch};
