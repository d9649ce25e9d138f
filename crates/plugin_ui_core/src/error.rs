//! Menu error types

use thiserror::Error;

/// Errors raised while loading or validating menu definitions
#[derive(Error, Debug)]
pub enum MenuError {
    /// An item id is empty or whitespace
    #[error("Menu item under '{parent}' has an empty id")]
    EmptyId {
        /// Path of the parent ("<root>" for top-level items)
        parent: String,
    },

    /// Two siblings share an id
    #[error("Duplicate menu item id '{id}' under '{parent}'")]
    DuplicateId {
        /// The repeated id
        id: String,
        /// Path of the parent ("<root>" for top-level items)
        parent: String,
    },

    /// A group id is empty or whitespace
    #[error("Menu group has an empty id")]
    EmptyGroupId,

    /// Two groups share an id
    #[error("Duplicate menu group id '{0}'")]
    DuplicateGroupId(String),

    /// Malformed JSON document
    #[error("Invalid menu JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML document
    #[error("Invalid menu TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for menu operations
pub type Result<T> = std::result::Result<T, MenuError>;
