use super::item::MenuItem;

/// A top-level menu section with a header
///
/// Groups do not nest; each wraps an ordered list of root items.
#[derive(Clone, Debug)]
pub struct MenuGroup {
    /// Group identifier
    pub id: String,
    /// Header label
    pub label: String,
    /// Optional second header line
    pub secondary_label: Option<String>,
    /// Root items of this section
    pub items: Vec<MenuItem>,
    /// Class string passed through to the rendered group
    pub class_name: Option<String>,
}

impl MenuGroup {
    /// Create an empty group
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            secondary_label: None,
            items: Vec::new(),
            class_name: None,
        }
    }

    /// Set the secondary header label
    pub fn secondary(mut self, label: impl Into<String>) -> Self {
        self.secondary_label = Some(label.into());
        self
    }

    /// Set the pass-through class string
    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Add an item using builder pattern
    pub fn item<F>(mut self, id: impl Into<String>, label: impl Into<String>, builder: F) -> Self
    where
        F: FnOnce(MenuItem) -> MenuItem,
    {
        self.items.push(builder(MenuItem::new(id, label)));
        self
    }

    /// Add a pre-built item
    pub fn add_item(mut self, item: MenuItem) -> Self {
        self.items.push(item);
        self
    }

    /// Replace the items
    pub fn items(mut self, items: impl IntoIterator<Item = MenuItem>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    /// Find a node by id anywhere in this group
    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find_map(|item| item.find(id))
    }

    /// Mutable variant of [`find`](Self::find)
    pub fn find_mut(&mut self, id: &str) -> Option<&mut MenuItem> {
        self.items.iter_mut().find_map(|item| item.find_mut(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_group_builder() {
        let group = MenuGroup::new("main", "Main")
            .secondary("Primary navigation")
            .item("dashboard", "Dashboard", |n| n.href("/"))
            .item("reports", "Reports", |n| n.child("sales", "Sales", |n| n));

        assert_eq!(group.items.len(), 2);
        assert_eq!(group.secondary_label.as_deref(), Some("Primary navigation"));
        assert_eq!(group.find("sales").map(|n| n.label.as_str()), Some("Sales"));
        assert!(group.find("missing").is_none());
    }
}
