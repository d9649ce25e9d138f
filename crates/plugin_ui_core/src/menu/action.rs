use std::fmt;
use std::sync::Arc;

/// Callback invoked when a leaf row is activated
pub type ActionCallback = Arc<dyn Fn() + Send + Sync>;

/// What a leaf row does when activated
///
/// Chosen once when the item is built, never inferred at click time.
#[derive(Clone)]
pub enum MenuAction {
    /// Run a callback
    Invoke(ActionCallback),
    /// Navigate to a target (URL or route)
    Navigate(String),
}

impl MenuAction {
    /// Create an `Invoke` action from a closure
    pub fn invoke<F>(callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        MenuAction::Invoke(Arc::new(callback))
    }

    /// Create a `Navigate` action
    pub fn navigate(target: impl Into<String>) -> Self {
        MenuAction::Navigate(target.into())
    }

    /// Navigation target, if this is a `Navigate` action
    pub fn href(&self) -> Option<&str> {
        match self {
            MenuAction::Navigate(target) => Some(target),
            MenuAction::Invoke(_) => None,
        }
    }
}

impl fmt::Debug for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::Invoke(_) => f.write_str("Invoke(..)"),
            MenuAction::Navigate(target) => f.debug_tuple("Navigate").field(target).finish(),
        }
    }
}
