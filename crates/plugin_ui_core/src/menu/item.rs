use super::action::MenuAction;

/// A node in the menu tree
///
/// A node with a non-empty `children` list is a parent: activating it toggles
/// expansion. Every other node is a leaf and activation runs its `action`.
#[derive(Clone, Debug)]
pub struct MenuItem {
    /// Identifier, unique among siblings
    pub id: String,
    /// Primary, searchable text
    pub label: String,
    /// Second line (description, badge text), also searchable
    pub secondary_label: Option<String>,
    /// Icon: inline `<svg>` markup (rendered verbatim) or plain text
    pub icon: Option<String>,
    /// Leaf action
    pub action: Option<MenuAction>,
    /// Nested items, in display order
    pub children: Vec<MenuItem>,
    /// Disabled items stay visible but never activate
    pub disabled: bool,
    /// Class string passed through to the rendered row
    pub class_name: Option<String>,
}

impl MenuItem {
    /// Create a new leaf item with no action
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            secondary_label: None,
            icon: None,
            action: None,
            children: Vec::new(),
            disabled: false,
            class_name: None,
        }
    }

    /// Set the secondary label
    pub fn secondary(mut self, label: impl Into<String>) -> Self {
        self.secondary_label = Some(label.into());
        self
    }

    /// Set the icon: trusted `<svg>` markup, or plain text
    pub fn icon(mut self, svg: impl Into<String>) -> Self {
        self.icon = Some(svg.into());
        self
    }

    /// Run `callback` when this leaf is activated
    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.action = Some(MenuAction::invoke(callback));
        self
    }

    /// Navigate to `target` when this leaf is activated
    pub fn href(mut self, target: impl Into<String>) -> Self {
        self.action = Some(MenuAction::navigate(target));
        self
    }

    /// Set the action directly
    pub fn action(mut self, action: MenuAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Mark the item as disabled
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the pass-through class string
    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Add a child item using builder pattern
    pub fn child<F>(mut self, id: impl Into<String>, label: impl Into<String>, builder: F) -> Self
    where
        F: FnOnce(MenuItem) -> MenuItem,
    {
        let child = MenuItem::new(id, label);
        self.children.push(builder(child));
        self
    }

    /// Add a pre-built child item
    pub fn add_child(mut self, child: MenuItem) -> Self {
        self.children.push(child);
        self
    }

    /// Replace the children
    pub fn children(mut self, children: impl IntoIterator<Item = MenuItem>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Whether this node is a parent (has at least one child)
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether this node is a leaf
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Navigation target of a `Navigate` leaf
    ///
    /// Parents never navigate, even if an action was attached.
    pub fn link_target(&self) -> Option<&str> {
        if self.has_children() {
            return None;
        }
        self.action.as_ref().and_then(MenuAction::href)
    }

    /// Find a node by id in this subtree (depth-first, self included)
    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Mutable variant of [`find`](Self::find), used to attach callbacks after loading
    pub fn find_mut(&mut self, id: &str) -> Option<&mut MenuItem> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_builder() {
        let item = MenuItem::new("reports", "Reports")
            .secondary("Analytics & exports")
            .child("sales", "Sales", |n| n.href("/sales"))
            .child("products", "Products", |n| {
                n.child("categories", "Categories", |n| n.disabled())
            });

        assert_eq!(item.id, "reports");
        assert_eq!(item.secondary_label.as_deref(), Some("Analytics & exports"));
        assert!(item.has_children());
        assert_eq!(item.children.len(), 2);
        assert!(item.find("categories").is_some_and(|n| n.disabled));
    }

    #[test]
    fn test_empty_children_is_leaf() {
        let item = MenuItem::new("a", "A").children(Vec::new());
        assert!(item.is_leaf());
        assert!(!item.has_children());
    }

    #[test]
    fn test_link_target_only_on_leaves() {
        let leaf = MenuItem::new("docs", "Docs").href("https://example.com/docs");
        assert_eq!(leaf.link_target(), Some("https://example.com/docs"));

        let parent = MenuItem::new("docs", "Docs")
            .href("https://example.com/docs")
            .child("intro", "Intro", |n| n);
        assert_eq!(parent.link_target(), None);

        let callback = MenuItem::new("save", "Save").on_click(|| {});
        assert_eq!(callback.link_target(), None);
    }

    #[test]
    fn test_find_mut_attaches_callback() {
        let mut item = MenuItem::new("root", "Root").child("leaf", "Leaf", |n| n);
        if let Some(leaf) = item.find_mut("leaf") {
            leaf.action = Some(MenuAction::invoke(|| {}));
        }
        assert!(matches!(
            item.find("leaf").and_then(|n| n.action.as_ref()),
            Some(MenuAction::Invoke(_))
        ));
    }
}
