//! Serializable menu definitions
//!
//! Hosts that keep their navigation in data files describe it as a
//! [`MenuDocument`] (JSON or TOML). Documents can only express `href`
//! actions; callbacks are attached after loading with
//! [`MenuItem::find_mut`](crate::MenuItem::find_mut). `<svg>` icons in a
//! document are inserted into rendered markup as-is.
//!
//! ```toml
//! [settings]
//! search_placeholder = "Find…"
//!
//! [[groups]]
//! id = "main"
//! label = "Main"
//!
//! [[groups.items]]
//! id = "reports"
//! label = "Reports"
//!
//! [[groups.items.children]]
//! id = "sales"
//! label = "Sales"
//! href = "/reports/sales"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::MenuConfig;
use crate::error::Result;
use crate::menu::{validate_groups, validate_items, MenuAction, MenuGroup, MenuItem};

/// A menu definition: root items and/or groups plus settings
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct MenuDocument {
    /// Ungrouped root items
    #[serde(default)]
    pub items: Vec<ItemDocument>,
    /// Groups; rendered instead of `items` when non-empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupDocument>>,
    /// Menu settings
    #[serde(default)]
    pub settings: MenuConfig,
}

/// Serialized form of a [`MenuItem`]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ItemDocument {
    pub id: String,
    pub label: String,
    #[serde(default, alias = "secondaryLabel", skip_serializing_if = "Option::is_none")]
    pub secondary_label: Option<String>,
    /// Inline `<svg>` markup is rendered verbatim, so documents must come from
    /// a trusted source; any other value is shown as escaped text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, alias = "className", skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ItemDocument>,
}

/// Serialized form of a [`MenuGroup`]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct GroupDocument {
    pub id: String,
    pub label: String,
    #[serde(default, alias = "secondaryLabel", skip_serializing_if = "Option::is_none")]
    pub secondary_label: Option<String>,
    #[serde(default, alias = "className", skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemDocument>,
}

impl From<ItemDocument> for MenuItem {
    fn from(doc: ItemDocument) -> Self {
        MenuItem {
            id: doc.id,
            label: doc.label,
            secondary_label: doc.secondary_label,
            icon: doc.icon,
            action: doc.href.map(MenuAction::Navigate),
            children: doc.children.into_iter().map(MenuItem::from).collect(),
            disabled: doc.disabled,
            class_name: doc.class_name,
        }
    }
}

impl From<&MenuItem> for ItemDocument {
    fn from(item: &MenuItem) -> Self {
        ItemDocument {
            id: item.id.clone(),
            label: item.label.clone(),
            secondary_label: item.secondary_label.clone(),
            icon: item.icon.clone(),
            // callbacks have no serialized form
            href: item.action.as_ref().and_then(MenuAction::href).map(str::to_string),
            disabled: item.disabled,
            class_name: item.class_name.clone(),
            children: item.children.iter().map(ItemDocument::from).collect(),
        }
    }
}

impl From<GroupDocument> for MenuGroup {
    fn from(doc: GroupDocument) -> Self {
        MenuGroup {
            id: doc.id,
            label: doc.label,
            secondary_label: doc.secondary_label,
            items: doc.items.into_iter().map(MenuItem::from).collect(),
            class_name: doc.class_name,
        }
    }
}

impl From<&MenuGroup> for GroupDocument {
    fn from(group: &MenuGroup) -> Self {
        GroupDocument {
            id: group.id.clone(),
            label: group.label.clone(),
            secondary_label: group.secondary_label.clone(),
            class_name: group.class_name.clone(),
            items: group.items.iter().map(ItemDocument::from).collect(),
        }
    }
}

/// Validated, converted contents of a [`MenuDocument`]
#[derive(Clone, Debug, Default)]
pub struct MenuDefinition {
    /// Ungrouped root items
    pub items: Vec<MenuItem>,
    /// Groups, if the document had any
    pub groups: Option<Vec<MenuGroup>>,
    /// Settings
    pub settings: MenuConfig,
}

impl MenuDocument {
    /// Parse a document from JSON
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parse a document from TOML
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Capture an existing menu as a document
    pub fn from_menu(items: &[MenuItem], groups: Option<&[MenuGroup]>, settings: MenuConfig) -> Self {
        Self {
            items: items.iter().map(ItemDocument::from).collect(),
            groups: groups.map(|groups| groups.iter().map(GroupDocument::from).collect()),
            settings,
        }
    }

    /// Convert into the data model, validating ids
    pub fn into_definition(self) -> Result<MenuDefinition> {
        let items: Vec<MenuItem> = self.items.into_iter().map(MenuItem::from).collect();
        validate_items(&items)?;

        let groups = match self.groups {
            Some(groups) => {
                let groups: Vec<MenuGroup> = groups.into_iter().map(MenuGroup::from).collect();
                validate_groups(&groups)?;
                Some(groups)
            }
            None => None,
        };

        tracing::debug!(
            items = items.len(),
            groups = groups.as_ref().map_or(0, Vec::len),
            "loaded menu document"
        );

        Ok(MenuDefinition {
            items,
            groups,
            settings: self.settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MenuError;

    const JSON: &str = r#"{
        "items": [
            { "id": "dashboard", "label": "Dashboard", "secondaryLabel": "Overview", "href": "/" },
            {
                "id": "reports",
                "label": "Reports",
                "children": [
                    { "id": "sales", "label": "Sales", "href": "/reports/sales" },
                    { "id": "archive", "label": "Archive", "disabled": true }
                ]
            }
        ]
    }"#;

    const TOML: &str = r#"
[settings]
searchable = false

[[groups]]
id = "main"
label = "Main"
secondary_label = "Primary navigation"

[[groups.items]]
id = "reports"
label = "Reports"

[[groups.items.children]]
id = "sales"
label = "Sales"
href = "/reports/sales"

[[groups]]
id = "tools"
label = "Tools"

[[groups.items]]
id = "import"
label = "Import"
"#;

    #[test]
    fn test_json_document() {
        let definition = MenuDocument::from_json(JSON)
            .unwrap()
            .into_definition()
            .unwrap();

        assert_eq!(definition.items.len(), 2);
        assert!(definition.groups.is_none());
        let dashboard = &definition.items[0];
        assert_eq!(dashboard.secondary_label.as_deref(), Some("Overview"));
        assert_eq!(dashboard.link_target(), Some("/"));
        let archive = &definition.items[1].children[1];
        assert!(archive.disabled);
        assert!(archive.action.is_none());
    }

    #[test]
    fn test_toml_document() {
        let definition = MenuDocument::from_toml(TOML)
            .unwrap()
            .into_definition()
            .unwrap();

        assert!(!definition.settings.searchable);
        let groups = definition.groups.unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].secondary_label.as_deref(), Some("Primary navigation"));
        assert_eq!(
            groups[0].find("sales").and_then(MenuItem::link_target),
            Some("/reports/sales")
        );
    }

    #[test]
    fn test_duplicate_sibling_rejected() {
        let json = r#"{ "items": [ { "id": "a", "label": "A" }, { "id": "a", "label": "B" } ] }"#;
        let result = MenuDocument::from_json(json).unwrap().into_definition();
        assert!(matches!(result, Err(MenuError::DuplicateId { .. })));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            MenuDocument::from_json("{ \"items\": 3 }"),
            Err(MenuError::Json(_))
        ));
    }

    #[test]
    fn test_capture_drops_callbacks() {
        let items = vec![
            MenuItem::new("save", "Save").on_click(|| {}),
            MenuItem::new("docs", "Docs").href("/docs"),
        ];
        let doc = MenuDocument::from_menu(&items, None, MenuConfig::default());
        assert_eq!(doc.items[0].href, None);
        assert_eq!(doc.items[1].href.as_deref(), Some("/docs"));

        let json = doc.to_json_pretty().unwrap();
        assert!(json.contains("\"href\": \"/docs\""));
    }
}
