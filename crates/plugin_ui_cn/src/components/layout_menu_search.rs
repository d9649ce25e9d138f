//! Layout Menu Search component
//!
//! The search field shown above a [`LayoutMenu`](super::layout_menu::LayoutMenu).
//! The field is stateless: the host forwards input events to
//! [`LayoutMenu::set_search`](super::layout_menu::LayoutMenu::set_search) and
//! the next render shows the new value.
//!
//! # Example
//!
//! ```ignore
//! use plugin_ui_cn::prelude::*;
//!
//! let field = cn::layout_menu_search()
//!     .value("rep")
//!     .placeholder("Find a page…")
//!     .render();
//! ```

use plugin_ui_core::DEFAULT_SEARCH_PLACEHOLDER;

use crate::element::{div, input, Element};

/// Magnifier icon
const SEARCH_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/></svg>"#;

/// Search field for the layout menu
#[derive(Clone, Debug)]
pub struct LayoutMenuSearch {
    value: String,
    placeholder: String,
    class: Option<String>,
}

impl LayoutMenuSearch {
    /// Create an empty search field with the default placeholder
    pub fn new() -> Self {
        Self {
            value: String::new(),
            placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
            class: None,
        }
    }

    /// Set the current value
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the container class
    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.class = Some(class_name.into());
        self
    }

    /// Build the element tree
    pub fn render(&self) -> Element {
        let field = input()
            .attr("type", "search")
            .attr("value", &self.value)
            .attr("placeholder", &self.placeholder)
            .attr("aria-label", "Search menu");

        div()
            .slot("layout-menu-search")
            .class(self.class.as_deref())
            .child(
                div()
                    .slot("layout-menu-search-field")
                    .child(Element::svg(SEARCH_SVG))
                    .child(field),
            )
            .into()
    }
}

impl Default for LayoutMenuSearch {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a layout menu search field
pub fn layout_menu_search() -> LayoutMenuSearch {
    LayoutMenuSearch::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Tag;

    #[test]
    fn test_default_placeholder() {
        let element = layout_menu_search().render();
        let node = element.as_node().unwrap();
        let field = node.find_tag(Tag::Input)[0];

        assert_eq!(node.get_attr("data-slot"), Some("layout-menu-search"));
        assert_eq!(field.get_attr("placeholder"), Some("Search menu…"));
        assert_eq!(field.get_attr("type"), Some("search"));
        assert_eq!(field.get_attr("aria-label"), Some("Search menu"));
    }

    #[test]
    fn test_value_and_class() {
        let markup = layout_menu_search()
            .value("repo")
            .placeholder("Find…")
            .class("search")
            .render()
            .to_markup();

        assert!(markup.starts_with("<div data-slot=\"layout-menu-search\" class=\"search\">"));
        assert!(markup.contains("value=\"repo\""));
        assert!(markup.contains("placeholder=\"Find…\""));
    }
}
