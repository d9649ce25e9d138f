//! Layout Menu component
//!
//! A searchable, nested navigation menu for sidebars and layout shells.
//! Items can be given flat or split into labelled groups; parents expand and
//! collapse in place, leaves run their click callback or navigate to their
//! `href`.
//!
//! # Example
//!
//! ```ignore
//! use plugin_ui_cn::prelude::*;
//!
//! let mut menu = cn::layout_menu()
//!     .group("main", "Main", |g| {
//!         g.item("dashboard", "Dashboard", |i| i.href("/"))
//!             .item("reports", "Reports", |i| {
//!                 i.child("sales", "Sales", |c| c.href("/reports/sales"))
//!             })
//!     })
//!     .on_item_click(|item| tracing::info!(id = %item.id, "menu item clicked"))
//!     .build();
//!
//! menu.set_search("sal");
//! let markup = menu.render().to_markup();
//! ```
//!
//! # Structure
//!
//! ```text
//! div[data-slot=layout-menu]
//!   div[data-slot=layout-menu-search]        (when searchable)
//!   div[data-slot=layout-menu-content]
//!     div[data-slot=layout-menu-group]       (per non-empty group)
//!       div[data-slot=layout-menu-group-label]
//!       ul[role=list]
//!         li[data-slot=layout-menu-item][data-depth][role=none]
//!           a | button[role=menuitem]
//!           ul[role=list]                    (open parents)
//! ```

use std::fmt;
use std::sync::Arc;

use plugin_ui_core::{
    validate_groups, validate_items, Activation, ActivationHooks, EmptyState, ItemPath, Key,
    MenuConfig, MenuController, MenuDocument, MenuEntry, MenuGroup, MenuItem, MenuView,
    Result, VisibleRow,
};

use crate::element::{anchor, button, div, li, span, ul, Element, Node};

use super::layout_menu_search::layout_menu_search;

/// Chevron right SVG icon (collapsed state)
const CHEVRON_RIGHT_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m9 18 6-6-6-6"/></svg>"#;

/// Chevron down SVG icon (expanded state)
const CHEVRON_DOWN_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m6 9 6 6 6-6"/></svg>"#;

/// Custom row renderer, called with the item and its depth
pub type RenderItemFn = Arc<dyn Fn(&MenuItem, usize) -> Element + Send + Sync>;

/// Custom group header renderer
pub type RenderGroupLabelFn = Arc<dyn Fn(&MenuGroup) -> Element + Send + Sync>;

/// Builder for [`LayoutMenu`]
pub struct LayoutMenuBuilder {
    items: Vec<MenuItem>,
    groups: Option<Vec<MenuGroup>>,
    config: MenuConfig,
    hooks: ActivationHooks,
    render_item: Option<RenderItemFn>,
    render_group_label: Option<RenderGroupLabelFn>,
    class: Option<String>,
}

impl LayoutMenuBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            groups: None,
            config: MenuConfig::default(),
            hooks: ActivationHooks::default(),
            render_item: None,
            render_group_label: None,
            class: None,
        }
    }

    /// Start from a menu document (items, groups and settings)
    pub fn from_document(document: MenuDocument) -> Result<Self> {
        let definition = document.into_definition()?;
        Ok(Self {
            items: definition.items,
            groups: definition.groups,
            config: definition.settings,
            ..Self::new()
        })
    }

    /// Set the flat items
    pub fn items(mut self, items: impl IntoIterator<Item = MenuItem>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    /// Add a flat item
    pub fn item<F>(mut self, id: impl Into<String>, label: impl Into<String>, builder: F) -> Self
    where
        F: FnOnce(MenuItem) -> MenuItem,
    {
        self.items.push(builder(MenuItem::new(id, label)));
        self
    }

    /// Set the groups; non-empty groups are rendered instead of the flat items
    pub fn groups(mut self, groups: impl IntoIterator<Item = MenuGroup>) -> Self {
        self.groups = Some(groups.into_iter().collect());
        self
    }

    /// Add a group
    pub fn group<F>(mut self, id: impl Into<String>, label: impl Into<String>, builder: F) -> Self
    where
        F: FnOnce(MenuGroup) -> MenuGroup,
    {
        self.groups
            .get_or_insert_with(Vec::new)
            .push(builder(MenuGroup::new(id, label)));
        self
    }

    /// Show the search field (default: true)
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.config.searchable = searchable;
        self
    }

    /// Set the search placeholder
    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.search_placeholder = placeholder.into();
        self
    }

    /// Apply menu settings
    pub fn config(mut self, config: &MenuConfig) -> Self {
        self.config = config.clone();
        self
    }

    /// Observe every item activation (parents and leaves)
    pub fn on_item_click<F>(mut self, callback: F) -> Self
    where
        F: Fn(&MenuItem) + Send + Sync + 'static,
    {
        self.hooks.on_item_activated = Some(Arc::new(callback));
        self
    }

    /// Perform navigation for `href` leaves
    pub fn on_navigate<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.hooks.on_navigate = Some(Arc::new(callback));
        self
    }

    /// Replace the default row content
    pub fn render_item<F>(mut self, render: F) -> Self
    where
        F: Fn(&MenuItem, usize) -> Element + Send + Sync + 'static,
    {
        self.render_item = Some(Arc::new(render));
        self
    }

    /// Replace the default group header content
    pub fn render_group_label<F>(mut self, render: F) -> Self
    where
        F: Fn(&MenuGroup) -> Element + Send + Sync + 'static,
    {
        self.render_group_label = Some(Arc::new(render));
        self
    }

    /// Add a class to the container
    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.class = Some(class_name.into());
        self
    }

    /// Validate ids, then mount
    pub fn try_build(self) -> Result<LayoutMenu> {
        validate_items(&self.items)?;
        if let Some(groups) = &self.groups {
            validate_groups(groups)?;
        }
        Ok(self.build())
    }

    /// Mount the menu
    pub fn build(self) -> LayoutMenu {
        let mut controller = MenuController::new(self.items).config(&self.config);
        if let Some(groups) = self.groups {
            controller = controller.groups(groups);
        }
        controller.set_hooks(self.hooks);

        tracing::debug!(
            items = controller.source_items().len(),
            groups = controller.source_groups().map_or(0, <[MenuGroup]>::len),
            searchable = self.config.searchable,
            "layout menu mounted"
        );

        LayoutMenu {
            controller,
            config: self.config,
            render_item: self.render_item,
            render_group_label: self.render_group_label,
            class: self.class,
        }
    }
}

impl Default for LayoutMenuBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LayoutMenuBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutMenuBuilder")
            .field("items", &self.items.len())
            .field("groups", &self.groups.as_ref().map(Vec::len))
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// A mounted layout menu
pub struct LayoutMenu {
    controller: MenuController,
    config: MenuConfig,
    render_item: Option<RenderItemFn>,
    render_group_label: Option<RenderGroupLabelFn>,
    class: Option<String>,
}

impl LayoutMenu {
    /// Handle an edit of the search field
    pub fn set_search(&mut self, query: &str) {
        self.controller.set_query(query);
    }

    /// Current search text
    pub fn search(&self) -> &str {
        self.controller.query()
    }

    /// Row click
    pub fn click(&mut self, path: &ItemPath) -> Activation {
        self.controller.click(path)
    }

    /// Key press on a focused row
    pub fn key_down(&mut self, path: &ItemPath, key: Key) -> Activation {
        self.controller.key_down(path, key)
    }

    /// Reset search and expansion
    pub fn remount(&mut self) {
        self.controller.remount();
    }

    /// Visible rows and empty state
    pub fn view(&self) -> MenuView<'_> {
        self.controller.view()
    }

    /// Underlying controller
    pub fn controller(&self) -> &MenuController {
        &self.controller
    }

    /// Open or close nodes directly
    pub fn expansion_mut(&mut self) -> &mut plugin_ui_core::ExpansionState {
        self.controller.expansion_mut()
    }

    /// Settings this menu was built with
    pub fn settings(&self) -> &MenuConfig {
        &self.config
    }

    /// Build the element tree for the current state
    pub fn render(&self) -> Element {
        let view = self.controller.view();

        let mut root = div().slot("layout-menu").class(self.class.as_deref());
        if self.controller.is_searchable() {
            root = root.child(
                layout_menu_search()
                    .value(self.controller.query())
                    .placeholder(self.config.search_placeholder.as_str())
                    .render(),
            );
        }

        let mut content = div().slot("layout-menu-content");
        content = content.children(self.render_entries(&view.entries));
        if let Some(empty) = &view.empty {
            content = content.child(render_empty(empty));
        }

        root.child(content).into()
    }

    fn render_entries(&self, entries: &[MenuEntry<'_>]) -> Vec<Element> {
        let mut out = Vec::new();
        let mut current: Option<&MenuGroup> = None;
        let mut rows: Vec<&VisibleRow<'_>> = Vec::new();

        for entry in entries {
            match entry {
                MenuEntry::GroupHeader(group) => {
                    if let Some(previous) = current.take() {
                        out.push(self.render_group(previous, &rows));
                    }
                    rows.clear();
                    current = Some(*group);
                }
                MenuEntry::Row(row) => rows.push(row),
            }
        }

        match current {
            Some(group) => out.push(self.render_group(group, &rows)),
            None if !rows.is_empty() => out.push(self.render_list(&rows).into()),
            None => {}
        }
        out
    }

    fn render_group(&self, group: &MenuGroup, rows: &[&VisibleRow<'_>]) -> Element {
        let label = match &self.render_group_label {
            Some(render) => div().slot("layout-menu-group-label").child(render(group)),
            None => {
                let mut label = div()
                    .slot("layout-menu-group-label")
                    .child(span().text(group.label.as_str()));
                if let Some(secondary) = &group.secondary_label {
                    label = label.child(span().text(secondary.as_str()));
                }
                label
            }
        };

        div()
            .slot("layout-menu-group")
            .class(group.class_name.as_deref())
            .child(label)
            .child(self.render_list(rows))
            .into()
    }

    /// Nest flat rows back into lists; a row owns the following rows that are deeper
    fn render_list(&self, rows: &[&VisibleRow<'_>]) -> Node {
        let mut list = ul().role("list");
        let mut index = 0;

        while index < rows.len() {
            let row = rows[index];
            let end = rows[index + 1..]
                .iter()
                .position(|next| next.depth <= row.depth)
                .map_or(rows.len(), |offset| index + 1 + offset);

            let mut entry = li()
                .slot("layout-menu-item")
                .attr("data-depth", row.depth)
                .role("none")
                .child(self.render_row(row));
            if end > index + 1 {
                entry = entry.child(self.render_list(&rows[index + 1..end]));
            }

            list = list.child(entry);
            index = end;
        }
        list
    }

    fn render_row(&self, row: &VisibleRow<'_>) -> Element {
        match &self.render_item {
            Some(render) => render(row.item, row.depth),
            None => self.default_row(row),
        }
    }

    fn default_row(&self, row: &VisibleRow<'_>) -> Element {
        let item = row.item;
        let mut node = match item.link_target() {
            Some(href) => anchor().attr("href", href),
            None => button().attr("type", "button"),
        };

        node = node
            .role("menuitem")
            .attr("tabindex", 0)
            .class(item.class_name.as_deref())
            .attr(
                "style",
                format!("padding-left: {}px", self.config.indent_for(row.depth)),
            )
            .attr_opt("disabled", item.disabled.then_some(""));

        if let Some(icon) = &item.icon {
            node = node.child(
                span()
                    .slot("layout-menu-item-icon")
                    .child(render_icon(icon)),
            );
        }

        let mut labels = span()
            .slot("layout-menu-item-labels")
            .child(span().text(item.label.as_str()));
        if let Some(secondary) = &item.secondary_label {
            labels = labels.child(span().text(secondary.as_str()));
        }
        node = node.child(labels);

        if row.has_children() {
            let open = row.is_open();
            node = node.child(
                span()
                    .slot("layout-menu-item-chevron")
                    .attr("aria-expanded", open)
                    .child(Element::svg(if open {
                        CHEVRON_DOWN_SVG
                    } else {
                        CHEVRON_RIGHT_SVG
                    })),
            );
        }

        node.into()
    }
}

/// Inline `<svg>` markup is trusted; anything else is shown as text
fn render_icon(icon: &str) -> Element {
    if icon.trim_start().starts_with("<svg") {
        Element::svg(icon)
    } else {
        Element::text(icon)
    }
}

fn render_empty(empty: &EmptyState) -> Element {
    div().slot("layout-menu-empty").text(empty.to_string()).into()
}

impl fmt::Debug for LayoutMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutMenu")
            .field("controller", &self.controller)
            .field("config", &self.config)
            .field("render_item", &self.render_item.is_some())
            .field("render_group_label", &self.render_group_label.is_some())
            .finish_non_exhaustive()
    }
}

/// Create a layout menu builder
pub fn layout_menu() -> LayoutMenuBuilder {
    LayoutMenuBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Tag;
    use plugin_ui_core::Expansion;
    use std::sync::Mutex;

    fn reports_menu() -> LayoutMenuBuilder {
        layout_menu()
            .item("dashboard", "Dashboard", |i| i.href("/").secondary("Overview"))
            .item("reports", "Reports", |i| {
                i.child("sales", "Sales", |c| c.href("/reports/sales"))
                    .child("products", "Products", |c| c)
            })
            .item("archive", "Archive", |i| i.disabled())
    }

    fn root(menu: &LayoutMenu) -> Node {
        match menu.render() {
            Element::Node(node) => node,
            other => panic!("expected node, got {:?}", other),
        }
    }

    #[test]
    fn test_structure_slots() {
        let menu = reports_menu().class("sidebar").build();
        let tree = root(&menu);

        assert_eq!(tree.get_attr("data-slot"), Some("layout-menu"));
        assert_eq!(tree.get_attr("class"), Some("sidebar"));
        assert_eq!(tree.find_slot("layout-menu-search").len(), 1);

        let items = tree.find_slot("layout-menu-item");
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|li| li.get_attr("role") == Some("none")));
        assert_eq!(items[0].get_attr("data-depth"), Some("0"));

        let lists = tree.find_tag(Tag::Ul);
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].get_attr("role"), Some("list"));
    }

    #[test]
    fn test_not_searchable_hides_search() {
        let menu = reports_menu().searchable(false).build();
        assert!(root(&menu).find_slot("layout-menu-search").is_empty());
    }

    #[test]
    fn test_default_row_markup() {
        let mut menu = reports_menu().build();
        menu.click(&ItemPath::root("reports"));
        let tree = root(&menu);

        let anchors = tree.find_tag(Tag::Anchor);
        assert_eq!(anchors.len(), 2);
        assert_eq!(anchors[0].get_attr("href"), Some("/"));
        assert_eq!(anchors[0].get_attr("role"), Some("menuitem"));
        assert_eq!(anchors[0].get_attr("tabindex"), Some("0"));
        assert_eq!(anchors[0].get_attr("style"), Some("padding-left: 12px"));
        assert_eq!(anchors[0].text_content(), "DashboardOverview");
        assert_eq!(anchors[1].get_attr("style"), Some("padding-left: 24px"));

        let buttons = tree.find_tag(Tag::Button);
        let reports = buttons[0];
        assert_eq!(reports.get_attr("type"), Some("button"));
        let chevron = reports.find_slot("layout-menu-item-chevron")[0];
        assert_eq!(chevron.get_attr("aria-expanded"), Some("true"));
        assert!(chevron.to_markup().contains("m6 9 6 6 6-6"));

        let archive = buttons.last().unwrap();
        assert_eq!(archive.get_attr("disabled"), Some(""));
        assert!(archive.find_slot("layout-menu-item-chevron").is_empty());
    }

    #[test]
    fn test_open_parent_nests_children() {
        let mut menu = reports_menu().build();
        assert_eq!(
            menu.click(&ItemPath::root("reports")),
            Activation::Toggled(Expansion::Open)
        );
        let tree = root(&menu);

        let items = tree.find_slot("layout-menu-item");
        let reports = items[1];
        let nested = reports.find_tag(Tag::Ul);
        assert_eq!(nested.len(), 1);
        let children = nested[0].find_slot("layout-menu-item");
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].get_attr("data-depth"), Some("1"));
        assert_eq!(children[1].text_content(), "Products");
    }

    #[test]
    fn test_search_filters_and_reports_no_results() {
        let mut menu = reports_menu().build();
        menu.set_search("sal");
        assert_eq!(menu.search(), "sal");
        let ids: Vec<_> = menu.view().rows().map(|row| row.item.id.clone()).collect();
        assert_eq!(ids, vec!["reports"]);

        menu.set_search("zzz");
        let tree = root(&menu);
        let empty = tree.find_slot("layout-menu-empty");
        assert_eq!(empty.len(), 1);
        assert_eq!(empty[0].text_content(), "No results for \"zzz\"");
        assert!(tree.find_tag(Tag::Ul).is_empty());

        let search = tree.find_tag(Tag::Input)[0];
        assert_eq!(search.get_attr("value"), Some("zzz"));
    }

    #[test]
    fn test_groups_render_labels() {
        let mut menu = layout_menu()
            .group("main", "Main", |g| {
                g.secondary("Primary").item("dashboard", "Dashboard", |i| i)
            })
            .group("tools", "Tools", |g| g.class("tools").item("import", "Import", |i| i))
            .build();

        let tree = root(&menu);
        let groups = tree.find_slot("layout-menu-group");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].get_attr("class"), Some("tools"));
        let label = groups[0].find_slot("layout-menu-group-label")[0];
        assert_eq!(label.text_content(), "MainPrimary");

        menu.set_search("import");
        let tree = root(&menu);
        let groups = tree.find_slot("layout-menu-group");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].find_slot("layout-menu-group-label")[0].text_content(), "Tools");
    }

    #[test]
    fn test_custom_renderers() {
        let menu = layout_menu()
            .group("main", "Main", |g| g.item("dashboard", "Dashboard", |i| i))
            .render_group_label(|group| span().text(group.label.to_uppercase()).into())
            .render_item(|item, depth| span().text(format!("{}@{}", item.label, depth)).into())
            .build();

        let tree = root(&menu);
        assert_eq!(tree.find_slot("layout-menu-group-label")[0].text_content(), "MAIN");
        let item = tree.find_slot("layout-menu-item")[0];
        assert_eq!(item.text_content(), "Dashboard@0");
        assert!(item.find_tag(Tag::Button).is_empty());
    }

    #[test]
    fn test_item_click_and_navigation() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let clicks = log.clone();
        let visits = log.clone();

        let mut menu = reports_menu()
            .on_item_click(move |item| clicks.lock().unwrap().push(format!("click:{}", item.id)))
            .on_navigate(move |href| visits.lock().unwrap().push(format!("nav:{}", href)))
            .build();

        assert_eq!(
            menu.click(&ItemPath::root("dashboard")),
            Activation::Navigated("/".to_string())
        );
        assert_eq!(menu.key_down(&ItemPath::root("archive"), Key::Enter), Activation::Suppressed);
        assert_eq!(*log.lock().unwrap(), vec!["nav:/", "click:dashboard"]);
    }

    #[test]
    fn test_config_and_remount() {
        let config = MenuConfig {
            search_placeholder: "Find…".to_string(),
            indent_base: 8.0,
            indent_step: 16.0,
            ..MenuConfig::default()
        };
        let mut menu = reports_menu().config(&config).build();
        menu.expansion_mut().expand("reports");
        menu.set_search("sales");

        let tree = root(&menu);
        let input = tree.find_tag(Tag::Input)[0];
        assert_eq!(input.get_attr("placeholder"), Some("Find…"));
        let sales = tree.find_tag(Tag::Anchor)[0];
        assert_eq!(sales.get_attr("style"), Some("padding-left: 24px"));

        menu.remount();
        assert_eq!(menu.search(), "");
        assert_eq!(menu.view().rows().count(), 3);
    }

    #[test]
    fn test_escaped_markup() {
        let menu = layout_menu()
            .item("qa", "Q&A <beta>", |i| i)
            .searchable(false)
            .build();
        let markup = menu.render().to_markup();
        assert!(markup.contains("Q&amp;A &lt;beta&gt;"));
    }

    #[test]
    fn test_icons() {
        let menu = layout_menu()
            .item("home", "Home", |i| i.icon(CHEVRON_RIGHT_SVG))
            .item("star", "Starred", |i| i.icon("<img src=x onerror=alert(1)>"))
            .searchable(false)
            .build();
        let tree = root(&menu);
        let icons = tree.find_slot("layout-menu-item-icon");

        assert_eq!(icons.len(), 2);
        assert!(icons[0].to_markup().contains("<svg"));
        assert_eq!(
            icons[1].to_markup(),
            "<span data-slot=\"layout-menu-item-icon\">&lt;img src=x onerror=alert(1)&gt;</span>"
        );
    }

    #[test]
    fn test_try_build_rejects_duplicates() {
        let result = layout_menu()
            .item("a", "A", |i| i)
            .item("a", "Again", |i| i)
            .try_build();
        assert!(result.is_err());
    }

    #[test]
    fn test_from_document() {
        let document = MenuDocument::from_toml(
            r#"
[settings]
searchable = false

[[items]]
id = "docs"
label = "Docs"
href = "/docs"
"#,
        )
        .unwrap();
        let menu = LayoutMenuBuilder::from_document(document).unwrap().build();

        assert!(!menu.settings().searchable);
        let tree = root(&menu);
        assert!(tree.find_slot("layout-menu-search").is_empty());
        assert_eq!(tree.find_tag(Tag::Anchor)[0].get_attr("href"), Some("/docs"));
    }
}
