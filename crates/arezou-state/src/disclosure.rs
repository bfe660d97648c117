//! Single-expansion disclosure state.

use serde::{Deserialize, Serialize};

/// At most one expanded item out of a set.
///
/// Expanding one item implicitly collapses the previous one; toggling the
/// expanded item collapses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disclosure<K> {
    expanded: Option<K>,
}

impl<K: Copy + Eq> Disclosure<K> {
    /// Start with `expanded` open, or everything collapsed.
    pub fn new(expanded: Option<K>) -> Self {
        Self { expanded }
    }

    /// Collapse `key` if it is expanded, otherwise expand it.
    pub fn toggle(&mut self, key: K) {
        self.expanded = if self.expanded == Some(key) {
            None
        } else {
            Some(key)
        };
    }

    /// Expand `key`, collapsing anything else.
    pub fn expand(&mut self, key: K) {
        self.expanded = Some(key);
    }

    /// Collapse everything.
    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    /// Currently expanded item.
    pub fn expanded(&self) -> Option<K> {
        self.expanded
    }

    pub fn is_expanded(&self, key: K) -> bool {
        self.expanded == Some(key)
    }
}

impl<K> Default for Disclosure<K> {
    fn default() -> Self {
        Self { expanded: None }
    }
}
