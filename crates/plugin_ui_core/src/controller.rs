//! Menu instance state
//!
//! A [`MenuController`] is one mounted menu: it owns the source tree, the
//! search query, the filtered result for that query, the expansion map and
//! the activation hooks. Nothing is shared between controllers.
//!
//! ```rust
//! use plugin_ui_core::{Activation, ItemPath, MenuController, MenuItem};
//!
//! let mut menu = MenuController::new(vec![
//!     MenuItem::new("reports", "Reports").child("sales", "Sales", |n| n),
//! ]);
//!
//! assert_eq!(menu.view().rows().count(), 1);
//! menu.click(&ItemPath::root("reports"));
//! assert_eq!(menu.view().rows().count(), 2);
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use crate::config::MenuConfig;
use crate::dispatch::{apply_command, Activation, ActivationHooks, EmptyState, ItemPath, MenuView};
use crate::document::MenuDocument;
use crate::error::Result;
use crate::events::{Key, MenuCommand};
use crate::expansion::ExpansionState;
use crate::filter::{filter_groups, filter_items, normalize_query};
use crate::menu::{MenuGroup, MenuItem};

/// State of one mounted menu
#[derive(Debug)]
pub struct MenuController {
    items: Vec<MenuItem>,
    groups: Option<Vec<MenuGroup>>,
    searchable: bool,
    /// Query as typed
    query: String,
    /// Normalized query the cached result below was computed for
    needle: Option<String>,
    /// `None` while unfiltered
    filtered_items: Option<Vec<MenuItem>>,
    filtered_groups: Option<Vec<MenuGroup>>,
    expansion: ExpansionState,
    hooks: ActivationHooks,
}

impl MenuController {
    /// Mount a menu over a flat item list
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            groups: None,
            searchable: true,
            query: String::new(),
            needle: None,
            filtered_items: None,
            filtered_groups: None,
            expansion: ExpansionState::new(),
            hooks: ActivationHooks::default(),
        }
    }

    /// Mount a grouped menu
    pub fn with_groups(groups: Vec<MenuGroup>) -> Self {
        let mut controller = Self::new(Vec::new());
        controller.groups = Some(groups);
        controller
    }

    /// Mount a menu from a document, validating it first
    pub fn from_document(document: MenuDocument) -> Result<Self> {
        let definition = document.into_definition()?;
        let mut controller = Self::new(definition.items);
        controller.groups = definition.groups;
        Ok(controller.config(&definition.settings))
    }

    /// Set the groups; they take precedence over the flat items
    pub fn groups(mut self, groups: Vec<MenuGroup>) -> Self {
        self.groups = Some(groups);
        self.refilter();
        self
    }

    /// Enable or disable searching
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        if !searchable {
            self.set_query("");
        }
        self
    }

    /// Apply the behavioral parts of a [`MenuConfig`]
    pub fn config(self, config: &MenuConfig) -> Self {
        self.searchable(config.searchable)
    }

    /// Observe every activation
    pub fn on_item_activated<F>(mut self, callback: F) -> Self
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

    /// Replace the activation hooks
    pub fn set_hooks(&mut self, hooks: ActivationHooks) {
        self.hooks = hooks;
    }

    /// Whether searching is enabled
    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    /// Query as typed
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Update the search query and re-filter
    ///
    /// Ignored when searching is disabled. Re-filtering is skipped when the
    /// normalized query is unchanged.
    pub fn set_query(&mut self, query: &str) {
        if !self.searchable && !query.is_empty() {
            tracing::debug!("search disabled, query ignored");
            return;
        }
        self.query = query.to_string();

        let needle = normalize_query(query);
        if needle == self.needle {
            tracing::trace!(query, "menu query unchanged, reusing filter result");
            return;
        }
        self.needle = needle;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered_items = match filter_items(&self.items, &self.query) {
            Cow::Borrowed(_) => None,
            Cow::Owned(items) => Some(items),
        };
        self.filtered_groups = match &self.groups {
            Some(groups) => match filter_groups(groups, &self.query) {
                Cow::Borrowed(_) => None,
                Cow::Owned(groups) => Some(groups),
            },
            None => None,
        };
    }

    /// Source items, unfiltered
    pub fn source_items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Source groups, unfiltered
    pub fn source_groups(&self) -> Option<&[MenuGroup]> {
        self.groups.as_deref()
    }

    /// Items after filtering
    pub fn items(&self) -> &[MenuItem] {
        self.filtered_items.as_deref().unwrap_or(&self.items)
    }

    /// Groups after filtering (empty when the menu is ungrouped)
    pub fn filtered_groups(&self) -> &[MenuGroup] {
        match (&self.filtered_groups, &self.groups) {
            (Some(filtered), _) => filtered.as_slice(),
            (None, Some(groups)) => groups.as_slice(),
            (None, None) => &[],
        }
    }

    /// Expansion map
    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Mutable expansion map, e.g. to open nodes up front
    pub fn expansion_mut(&mut self) -> &mut ExpansionState {
        &mut self.expansion
    }

    /// Whether the view renders groups rather than the flat items
    ///
    /// Groups win as soon as one of them has items after filtering.
    fn shows_groups(&self) -> bool {
        self.filtered_groups()
            .iter()
            .any(|group| !group.items.is_empty())
    }

    /// What the menu shows right now
    ///
    /// Non-empty groups are rendered when present; otherwise the flat items.
    /// An empty result for a non-blank query carries [`EmptyState::NoResults`].
    pub fn view(&self) -> MenuView<'_> {
        let mut view = if self.shows_groups() {
            MenuView::from_groups(self.filtered_groups(), &self.expansion)
        } else {
            MenuView::from_items(self.items(), &self.expansion)
        };

        if view.is_empty() && self.needle.is_some() {
            view.empty = Some(EmptyState::NoResults {
                query: self.query.clone(),
            });
        }
        view
    }

    /// Click on the row at `path`
    pub fn click(&mut self, path: &ItemPath) -> Activation {
        self.command(path, MenuCommand::Activate)
    }

    /// Key press on the row at `path`
    pub fn key_down(&mut self, path: &ItemPath, key: Key) -> Activation {
        match MenuCommand::from_key(key) {
            Some(command) => self.command(path, command),
            None => Activation::Ignored,
        }
    }

    /// Apply `command` to the row at `path`
    ///
    /// Only rows of the current view resolve: the path must address the
    /// rendered section (a group when groups are shown, the flat items
    /// otherwise) and every ancestor on it must be open. Anything else is
    /// ignored.
    pub fn command(&mut self, path: &ItemPath, command: MenuCommand) -> Activation {
        let shows_groups = self.shows_groups();
        let groups: &[MenuGroup] = match (&self.filtered_groups, &self.groups) {
            (Some(filtered), _) => filtered.as_slice(),
            (None, Some(groups)) => groups.as_slice(),
            (None, None) => &[],
        };
        let items = self.filtered_items.as_deref().unwrap_or(&self.items);

        let target = match (shows_groups, path.group()) {
            (true, Some(_)) => path.resolve_visible_in_groups(groups, &self.expansion),
            (false, None) => path.resolve_visible(items, &self.expansion),
            _ => None,
        };

        match target {
            Some(item) => apply_command(item, command, &mut self.expansion, &self.hooks),
            None => {
                tracing::debug!(%path, ?command, "menu command on a row that is not shown");
                Activation::Ignored
            }
        }
    }

    /// Reset instance state as if the menu was mounted again
    pub fn remount(&mut self) {
        self.expansion.clear();
        self.query.clear();
        self.needle = None;
        self.refilter();
    }
}
