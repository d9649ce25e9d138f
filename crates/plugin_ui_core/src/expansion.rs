//! Per-node expand/collapse state
//!
//! Keyed by node id and owned by a single menu instance. Filtering never
//! touches it: a node hidden by the current query keeps its state and shows
//! up again with it once the query changes.

use rustc_hash::FxHashMap;

/// Open/closed state of a parent node
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Expansion {
    /// Children hidden
    #[default]
    Closed,
    /// Children visible
    Open,
}

impl Expansion {
    /// Whether this is `Open`
    pub fn is_open(self) -> bool {
        self == Expansion::Open
    }

    /// The opposite state
    pub fn toggled(self) -> Self {
        match self {
            Expansion::Closed => Expansion::Open,
            Expansion::Open => Expansion::Closed,
        }
    }
}

/// Expansion map for one menu instance
///
/// Unknown ids read as [`Expansion::Closed`].
#[derive(Clone, Debug, Default)]
pub struct ExpansionState {
    nodes: FxHashMap<String, Expansion>,
}

impl ExpansionState {
    /// Create an empty map (everything closed)
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of `id`
    pub fn get(&self, id: &str) -> Expansion {
        self.nodes.get(id).copied().unwrap_or_default()
    }

    /// Whether `id` is open
    pub fn is_open(&self, id: &str) -> bool {
        self.get(id).is_open()
    }

    /// Set the state of `id`
    pub fn set(&mut self, id: &str, state: Expansion) {
        match state {
            // closed is the default, no need to keep an entry
            Expansion::Closed => {
                self.nodes.remove(id);
            }
            Expansion::Open => {
                self.nodes.insert(id.to_string(), Expansion::Open);
            }
        }
    }

    /// Flip the state of `id`, returning the new state
    pub fn toggle(&mut self, id: &str) -> Expansion {
        let next = self.get(id).toggled();
        self.set(id, next);
        tracing::trace!(id, open = next.is_open(), "toggled menu node");
        next
    }

    /// Open `id` if it is closed
    ///
    /// Returns `true` if the state changed; opening an open node is a no-op.
    pub fn expand(&mut self, id: &str) -> bool {
        if self.is_open(id) {
            return false;
        }
        self.set(id, Expansion::Open);
        tracing::trace!(id, "expanded menu node");
        true
    }

    /// Close `id` if it is open
    ///
    /// Returns `true` if the state changed; closing a closed node is a no-op.
    pub fn collapse(&mut self, id: &str) -> bool {
        if !self.is_open(id) {
            return false;
        }
        self.set(id, Expansion::Closed);
        tracing::trace!(id, "collapsed menu node");
        true
    }

    /// Close everything
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_closed() {
        let state = ExpansionState::new();
        assert_eq!(state.get("anything"), Expansion::Closed);
        assert!(!state.is_open("anything"));
        assert_eq!(Expansion::default(), Expansion::Closed);
    }

    #[test]
    fn test_toggle() {
        let mut state = ExpansionState::new();
        assert_eq!(state.toggle("reports"), Expansion::Open);
        assert!(state.is_open("reports"));
        assert_eq!(state.toggle("reports"), Expansion::Closed);
        assert!(!state.is_open("reports"));
    }

    #[test]
    fn test_expand_collapse_idempotent() {
        let mut state = ExpansionState::new();
        assert!(state.expand("a"));
        assert!(!state.expand("a"));
        assert!(state.is_open("a"));

        assert!(state.collapse("a"));
        assert!(!state.collapse("a"));
        assert!(!state.is_open("a"));
    }

    #[test]
    fn test_nodes_are_independent() {
        let mut state = ExpansionState::new();
        state.expand("a");
        state.expand("b");
        state.collapse("a");
        assert!(!state.is_open("a"));
        assert!(state.is_open("b"));

        state.clear();
        assert!(!state.is_open("b"));
    }

    #[test]
    fn test_expansion_toggled() {
        assert_eq!(Expansion::Open.toggled(), Expansion::Closed);
        assert_eq!(Expansion::Closed.toggled(), Expansion::Open);
    }
}
