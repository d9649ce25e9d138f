//! Row input events
//!
//! Raw keys are mapped to menu commands once, so the dispatcher only deals
//! with three commands.

/// Keys the menu rows react to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Escape,
    Tab,
    /// Any printable character
    Char(char),
}

/// Command applied to a single row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    /// Click / Enter / Space: toggle a parent or run a leaf action
    Activate,
    /// Open a closed parent
    Expand,
    /// Close an open parent
    Collapse,
}

impl MenuCommand {
    /// Map a key press to a command; unmapped keys yield `None`
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Enter | Key::Space | Key::Char(' ') => Some(MenuCommand::Activate),
            Key::ArrowRight => Some(MenuCommand::Expand),
            Key::ArrowLeft => Some(MenuCommand::Collapse),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(MenuCommand::from_key(Key::Enter), Some(MenuCommand::Activate));
        assert_eq!(MenuCommand::from_key(Key::Space), Some(MenuCommand::Activate));
        assert_eq!(MenuCommand::from_key(Key::Char(' ')), Some(MenuCommand::Activate));
        assert_eq!(MenuCommand::from_key(Key::ArrowRight), Some(MenuCommand::Expand));
        assert_eq!(MenuCommand::from_key(Key::ArrowLeft), Some(MenuCommand::Collapse));
        assert_eq!(MenuCommand::from_key(Key::ArrowDown), None);
        assert_eq!(MenuCommand::from_key(Key::Char('a')), None);
    }
}
