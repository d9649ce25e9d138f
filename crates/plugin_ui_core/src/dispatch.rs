//! Visible-row flattening and activation routing
//!
//! The dispatcher turns a (filtered) tree plus an [`ExpansionState`] into the
//! ordered list of rows a user can see, and routes activations on those rows:
//!
//! - parent rows toggle their expansion
//! - leaf rows run their [`MenuAction`] (callback or navigation)
//! - in both cases the item-activated observer runs once, afterwards
//! - disabled rows never activate and never notify

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::events::MenuCommand;
use crate::expansion::{Expansion, ExpansionState};
use crate::menu::{MenuAction, MenuGroup, MenuItem};

/// Observer called with the activated item
pub type ItemCallback = Arc<dyn Fn(&MenuItem) + Send + Sync>;

/// Hook performing navigation for `Navigate` leaves
pub type NavigateCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Address of a node: optional group id plus the id chain from the root
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ItemPath {
    group: Option<String>,
    ids: SmallVec<[String; 4]>,
}

impl ItemPath {
    /// Path to a root item of an ungrouped menu
    pub fn root(id: impl Into<String>) -> Self {
        let mut ids = SmallVec::new();
        ids.push(id.into());
        Self { group: None, ids }
    }

    /// Path to a root item inside a group
    pub fn in_group(group: impl Into<String>, id: impl Into<String>) -> Self {
        let mut path = Self::root(id);
        path.group = Some(group.into());
        path
    }

    /// Build a path from an id chain
    pub fn from_ids<I, S>(group: Option<&str>, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            group: group.map(str::to_string),
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Path to a child of this node
    pub fn child(&self, id: impl Into<String>) -> Self {
        let mut path = self.clone();
        path.ids.push(id.into());
        path
    }

    /// Group id, for grouped menus
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Id chain from the root
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Id of the addressed node
    pub fn id(&self) -> Option<&str> {
        self.ids.last().map(String::as_str)
    }

    /// Nesting depth of the addressed node (root = 0)
    pub fn depth(&self) -> usize {
        self.ids.len().saturating_sub(1)
    }

    /// Resolve this path against a list of root items, as a visible row
    ///
    /// Every ancestor on the path must be open; a node under a collapsed
    /// parent does not resolve. The group component is not consulted here.
    pub fn resolve_visible<'a>(
        &self,
        items: &'a [MenuItem],
        expansion: &ExpansionState,
    ) -> Option<&'a MenuItem> {
        let (first, rest) = self.ids.split_first()?;
        let mut node = items.iter().find(|item| &item.id == first)?;
        for id in rest {
            if !expansion.is_open(&node.id) {
                return None;
            }
            node = node.children.iter().find(|child| &child.id == id)?;
        }
        Some(node)
    }

    /// Resolve this path against groups, then against their items
    pub fn resolve_visible_in_groups<'a>(
        &self,
        groups: &'a [MenuGroup],
        expansion: &ExpansionState,
    ) -> Option<&'a MenuItem> {
        let group_id = self.group.as_deref()?;
        let group = groups.iter().find(|group| group.id == group_id)?;
        self.resolve_visible(&group.items, expansion)
    }
}

impl fmt::Display for ItemPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(group) = &self.group {
            write!(f, "{}:", group)?;
        }
        write!(f, "{}", self.ids.join("/"))
    }
}

/// A row the user can currently see
#[derive(Clone, Debug)]
pub struct VisibleRow<'a> {
    /// Node data
    pub item: &'a MenuItem,
    /// Address used to route activations back to the node
    pub path: ItemPath,
    /// Nesting depth (root = 0)
    pub depth: usize,
    /// Open/closed state; `None` for leaves
    pub expansion: Option<Expansion>,
}

impl VisibleRow<'_> {
    /// Whether the row is a parent
    pub fn has_children(&self) -> bool {
        self.expansion.is_some()
    }

    /// Whether the row is an open parent
    pub fn is_open(&self) -> bool {
        self.expansion.is_some_and(Expansion::is_open)
    }
}

/// Flatten `items` into visible rows, depth-first in display order
///
/// A row is visible iff every ancestor is open; roots are always visible.
pub fn visible_rows<'a>(items: &'a [MenuItem], expansion: &ExpansionState) -> Vec<VisibleRow<'a>> {
    let mut rows = Vec::new();
    push_rows(items, None, 0, expansion, &mut rows);
    rows
}

fn visible_group_rows<'a>(group: &'a MenuGroup, expansion: &ExpansionState) -> Vec<VisibleRow<'a>> {
    let mut rows = Vec::new();
    let parent = ItemPath::from_ids(Some(group.id.as_str()), std::iter::empty::<String>());
    push_rows(&group.items, Some(&parent), 0, expansion, &mut rows);
    rows
}

fn push_rows<'a>(
    items: &'a [MenuItem],
    parent: Option<&ItemPath>,
    depth: usize,
    expansion: &ExpansionState,
    rows: &mut Vec<VisibleRow<'a>>,
) {
    for item in items {
        let path = match parent {
            Some(parent) => parent.child(item.id.as_str()),
            None => ItemPath::root(item.id.as_str()),
        };
        let state = item.has_children().then(|| expansion.get(&item.id));
        let open = state.is_some_and(Expansion::is_open);

        rows.push(VisibleRow {
            item,
            path: path.clone(),
            depth,
            expansion: state,
        });

        if open {
            push_rows(&item.children, Some(&path), depth + 1, expansion, rows);
        }
    }
}

/// One entry of a rendered menu: a group header or a row
#[derive(Clone, Debug)]
pub enum MenuEntry<'a> {
    /// Header of a non-empty group; its rows follow
    GroupHeader(&'a MenuGroup),
    /// A visible row
    Row(VisibleRow<'a>),
}

/// Renderable "nothing to show" signal
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmptyState {
    /// The query filtered everything out; carries the query as typed
    NoResults {
        /// Query text
        query: String,
    },
}

impl fmt::Display for EmptyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyState::NoResults { query } => write!(f, "No results for \"{}\"", query),
        }
    }
}

/// Snapshot of what a menu currently shows
#[derive(Clone, Debug, Default)]
pub struct MenuView<'a> {
    /// Group headers and rows in display order
    pub entries: Vec<MenuEntry<'a>>,
    /// Set when nothing matched a non-empty query
    pub empty: Option<EmptyState>,
}

impl<'a> MenuView<'a> {
    /// Build the view for an ungrouped item list
    pub fn from_items(items: &'a [MenuItem], expansion: &ExpansionState) -> Self {
        Self {
            entries: visible_rows(items, expansion)
                .into_iter()
                .map(MenuEntry::Row)
                .collect(),
            empty: None,
        }
    }

    /// Build the view for groups; empty groups are skipped
    pub fn from_groups(groups: &'a [MenuGroup], expansion: &ExpansionState) -> Self {
        let mut entries = Vec::new();
        for group in groups.iter().filter(|group| !group.items.is_empty()) {
            entries.push(MenuEntry::GroupHeader(group));
            entries.extend(
                visible_group_rows(group, expansion)
                    .into_iter()
                    .map(MenuEntry::Row),
            );
        }
        Self {
            entries,
            empty: None,
        }
    }

    /// Visible rows, skipping group headers
    pub fn rows(&self) -> impl Iterator<Item = &VisibleRow<'a>> {
        self.entries.iter().filter_map(|entry| match entry {
            MenuEntry::Row(row) => Some(row),
            MenuEntry::GroupHeader(_) => None,
        })
    }

    /// Rendered group headers
    pub fn groups(&self) -> impl Iterator<Item = &'a MenuGroup> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            MenuEntry::GroupHeader(group) => Some(*group),
            MenuEntry::Row(_) => None,
        })
    }

    /// Whether there is nothing to render
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Observers notified by activations
#[derive(Clone, Default)]
pub struct ActivationHooks {
    /// Called once per activation, after the specific action
    pub on_item_activated: Option<ItemCallback>,
    /// Performs navigation for `Navigate` leaves
    pub on_navigate: Option<NavigateCallback>,
}

impl fmt::Debug for ActivationHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivationHooks")
            .field("on_item_activated", &self.on_item_activated.is_some())
            .field("on_navigate", &self.on_navigate.is_some())
            .finish()
    }
}

/// Outcome of a row command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Parent toggled to the contained state
    Toggled(Expansion),
    /// Leaf callback ran
    Invoked,
    /// Leaf navigation requested to the contained target
    Navigated(String),
    /// Leaf without an action; only the observer ran
    Notified,
    /// Parent opened by an expand command
    Expanded,
    /// Parent closed by a collapse command
    Collapsed,
    /// Disabled row; nothing ran
    Suppressed,
    /// No-op: wrong state, leaf target, or unknown row
    Ignored,
}

/// Activate `item` (click, Enter, Space)
pub fn activate(
    item: &MenuItem,
    expansion: &mut ExpansionState,
    hooks: &ActivationHooks,
) -> Activation {
    if item.disabled {
        tracing::debug!(id = item.id.as_str(), "activation suppressed on disabled item");
        return Activation::Suppressed;
    }

    let outcome = if item.has_children() {
        if item.action.is_some() {
            tracing::trace!(id = item.id.as_str(), "parent action ignored, toggling instead");
        }
        Activation::Toggled(expansion.toggle(&item.id))
    } else {
        match &item.action {
            Some(MenuAction::Invoke(callback)) => {
                callback();
                Activation::Invoked
            }
            Some(MenuAction::Navigate(target)) => {
                if let Some(navigate) = &hooks.on_navigate {
                    navigate(target);
                }
                Activation::Navigated(target.clone())
            }
            None => Activation::Notified,
        }
    };

    if let Some(observer) = &hooks.on_item_activated {
        observer(item);
    }

    tracing::debug!(id = item.id.as_str(), ?outcome, "menu item activated");
    outcome
}

/// Apply a row command to `item`
pub fn apply_command(
    item: &MenuItem,
    command: MenuCommand,
    expansion: &mut ExpansionState,
    hooks: &ActivationHooks,
) -> Activation {
    match command {
        MenuCommand::Activate => activate(item, expansion, hooks),
        MenuCommand::Expand | MenuCommand::Collapse if item.disabled => Activation::Suppressed,
        MenuCommand::Expand | MenuCommand::Collapse if item.is_leaf() => Activation::Ignored,
        MenuCommand::Expand => {
            if expansion.expand(&item.id) {
                Activation::Expanded
            } else {
                Activation::Ignored
            }
        }
        MenuCommand::Collapse => {
            if expansion.collapse(&item.id) {
                Activation::Collapsed
            } else {
                Activation::Ignored
            }
        }
    }
}
