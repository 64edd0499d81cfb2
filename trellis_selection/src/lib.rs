// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Selection: row-selection tracking for data grids.
//!
//! A [`SelectionMap`] maps row identities to a selected flag. It is the
//! single source of truth for selection: hosts receive full snapshots, not
//! deltas, and the map is reconciled against the live row-id set whenever
//! the underlying data changes so it can never reference phantom rows.
//!
//! The map is generic over the row identity `K`, so callers can use any
//! small cloneable key (an integer id, a string key, a UUID wrapper).
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_selection::SelectionMap;
//!
//! let mut selection: SelectionMap<u32> = SelectionMap::new();
//! selection.toggle(1);
//! selection.toggle(2);
//! selection.toggle(3);
//! assert_eq!(selection.len(), 3);
//!
//! // Row 2 disappears from the dataset (e.g. after a refresh): pruned.
//! let changed = selection.reconcile([1, 3].iter().cloned());
//! assert!(changed);
//! assert!(selection.is_selected(&1));
//! assert!(!selection.is_selected(&2));
//! assert!(selection.is_selected(&3));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use core::hash::Hash;

use hashbrown::HashSet;

/// Set of selected row identities.
///
/// Only selected ids are stored; absence means unselected. All mutators
/// report whether anything actually changed so callers can skip redundant
/// change notifications.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionMap<K: Eq + Hash> {
    selected: HashSet<K>,
}

impl<K: Clone + Eq + Hash> SelectionMap<K> {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected: HashSet::new(),
        }
    }

    /// Returns `true` if the row is selected.
    #[must_use]
    pub fn is_selected(&self, id: &K) -> bool {
        self.selected.contains(id)
    }

    /// Number of selected rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Flips one row's selected flag. Returns the new flag.
    pub fn toggle(&mut self, id: K) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Sets one row's selected flag. Returns `true` if the map changed.
    pub fn set(&mut self, id: K, selected: bool) -> bool {
        if selected {
            self.selected.insert(id)
        } else {
            self.selected.remove(&id)
        }
    }

    /// Sets the flag for every id in `ids` (select-all / clear-all over the
    /// current view). Returns `true` if the map changed.
    pub fn set_all(&mut self, ids: impl Iterator<Item = K>, selected: bool) -> bool {
        let mut changed = false;
        for id in ids {
            changed |= self.set(id, selected);
        }
        changed
    }

    /// Drops every selected id not present in `current_ids`.
    ///
    /// Run this whenever the row set changes identity (refresh, save,
    /// filter-at-source); it guarantees selection never references rows
    /// that no longer exist. Returns `true` if anything was pruned.
    pub fn reconcile(&mut self, current_ids: impl Iterator<Item = K>) -> bool {
        let current: HashSet<K> = current_ids.collect();
        let before = self.selected.len();
        self.selected.retain(|id| current.contains(id));
        self.selected.len() != before
    }

    /// Clears the selection. Returns `true` if it was non-empty.
    pub fn clear(&mut self) -> bool {
        let had = !self.selected.is_empty();
        self.selected.clear();
        had
    }

    /// Iterates over the selected ids in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.selected.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::SelectionMap;

    #[test]
    fn toggle_flips_and_reports_new_state() {
        let mut selection: SelectionMap<u32> = SelectionMap::new();
        assert!(selection.toggle(7));
        assert!(selection.is_selected(&7));
        assert!(!selection.toggle(7));
        assert!(!selection.is_selected(&7));
    }

    #[test]
    fn set_reports_change_only_when_state_differs() {
        let mut selection: SelectionMap<u32> = SelectionMap::new();
        assert!(selection.set(1, true));
        assert!(!selection.set(1, true));
        assert!(selection.set(1, false));
        assert!(!selection.set(1, false));
    }

    #[test]
    fn set_all_selects_and_clears_in_bulk() {
        let mut selection: SelectionMap<u32> = SelectionMap::new();
        assert!(selection.set_all([1, 2, 3].into_iter(), true));
        assert_eq!(selection.len(), 3);

        // Re-selecting the same ids is a no-op.
        assert!(!selection.set_all([1, 2, 3].into_iter(), true));

        assert!(selection.set_all([2, 3].into_iter(), false));
        let mut remaining: Vec<u32> = selection.iter().copied().collect();
        remaining.sort_unstable();
        assert_eq!(remaining, [1]);
    }

    #[test]
    fn reconcile_prunes_stale_ids() {
        let mut selection: SelectionMap<u32> = SelectionMap::new();
        selection.set_all([1, 2, 3].into_iter(), true);

        assert!(selection.reconcile([1, 3, 4].into_iter()));
        assert!(selection.is_selected(&1));
        assert!(!selection.is_selected(&2));
        assert!(selection.is_selected(&3));

        // Nothing stale: no change reported.
        assert!(!selection.reconcile([1, 3].into_iter()));
    }

    #[test]
    fn reconcile_against_empty_row_set_clears_everything() {
        let mut selection: SelectionMap<u32> = SelectionMap::new();
        selection.set_all([1, 2].into_iter(), true);
        assert!(selection.reconcile(core::iter::empty()));
        assert!(selection.is_empty());
    }

    #[test]
    fn clear_reports_prior_contents() {
        let mut selection: SelectionMap<u32> = SelectionMap::new();
        assert!(!selection.clear());
        selection.toggle(1);
        assert!(selection.clear());
        assert!(selection.is_empty());
    }
}
