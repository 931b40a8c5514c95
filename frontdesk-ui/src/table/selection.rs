//! Row selection state

use std::collections::HashSet;
use std::hash::Hash;

/// Selection mode for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// No selection allowed.
    #[default]
    None,
    /// Single row selection (radio-button style).
    Single,
    /// Multiple rows can be selected (checkbox style).
    Multi,
}

/// Tracks selected rows by key.
#[derive(Debug, Clone)]
pub struct Selection<K: Clone + Eq + Hash> {
    pub mode: SelectionMode,
    pub selected: HashSet<K>,
}

impl<K: Clone + Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self::none()
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    /// Creates a selection with no selection allowed.
    pub fn none() -> Self {
        Self {
            mode: SelectionMode::None,
            selected: HashSet::new(),
        }
    }

    /// Creates a single-selection state.
    pub fn single() -> Self {
        Self {
            mode: SelectionMode::Single,
            selected: HashSet::new(),
        }
    }

    /// Creates a multi-selection state.
    pub fn multi() -> Self {
        Self {
            mode: SelectionMode::Multi,
            selected: HashSet::new(),
        }
    }

    /// Toggles selection for a key. Returns `true` if the selection
    /// changed.
    pub fn toggle(&mut self, key: K) -> bool {
        match self.mode {
            SelectionMode::None => false,
            SelectionMode::Single => {
                if self.selected.contains(&key) {
                    self.selected.clear();
                } else {
                    self.selected.clear();
                    self.selected.insert(key);
                }
                true
            }
            SelectionMode::Multi => {
                if self.selected.contains(&key) {
                    self.selected.remove(&key);
                } else {
                    self.selected.insert(key);
                }
                true
            }
        }
    }

    /// Checks if a key is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// Clears all selections.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Number of selected keys.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The single selected key, if any (for `Single` mode).
    pub fn get_single(&self) -> Option<&K> {
        self.selected.iter().next()
    }
}
