// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column order as an explicit permutation, and array-move helpers.

use alloc::string::String;
use alloc::vec::Vec;

/// Id of the fixed leading actions column.
///
/// The actions column is pinned first in every [`ColumnOrder`] and never
/// participates in drag reordering.
pub const ACTIONS_COLUMN_ID: &str = "actions";

/// Removes the element at `from` and reinserts it at `to`.
///
/// This is array-move, not a swap: every other element keeps its relative
/// order. Out-of-bounds indices leave the slice order unchanged.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// Computes the permutation produced by dropping `active` onto `over`.
///
/// Returns `None` when either id is missing from `order` or the two are
/// equal; both are treated as a cancelled drag, per the engine's
/// degrade-gracefully policy.
#[must_use]
pub fn reorder_ids<I: PartialEq + Clone>(order: &[I], active: &I, over: &I) -> Option<Vec<I>> {
    if active == over {
        return None;
    }
    let from = order.iter().position(|id| id == active)?;
    let to = order.iter().position(|id| id == over)?;
    let mut next: Vec<I> = order.to_vec();
    array_move(&mut next, from, to);
    Some(next)
}

/// The grid's column order: a permutation of `{actions} ∪ {column ids}`.
///
/// The actions id is always present and always first. Mutations preserve
/// the permutation invariant by construction; an attempted update that
/// would break it is refused rather than applied partially.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnOrder {
    order: Vec<String>,
}

impl ColumnOrder {
    /// Builds the initial order: actions first, then `ids` in declaration order.
    ///
    /// An explicit `"actions"` entry in `ids` is ignored; the pin provides it.
    #[must_use]
    pub fn new<'a>(ids: impl Iterator<Item = &'a str>) -> Self {
        let mut order = Vec::new();
        order.push(String::from(ACTIONS_COLUMN_ID));
        for id in ids {
            if id != ACTIONS_COLUMN_ID {
                order.push(String::from(id));
            }
        }
        Self { order }
    }

    /// The full order, actions first.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    /// The drag-candidate ids: everything except the pinned actions column.
    #[must_use]
    pub fn draggable(&self) -> &[String] {
        &self.order[1..]
    }

    /// Applies a drag of `active` onto `over` among the draggable ids.
    ///
    /// Returns `true` if the order changed. Unknown ids, `active == over`,
    /// or either id being the actions column are no-ops.
    pub fn move_column(&mut self, active: &str, over: &str) -> bool {
        if active == ACTIONS_COLUMN_ID || over == ACTIONS_COLUMN_ID {
            return false;
        }
        let Some(next) = reorder_ids(
            self.draggable(),
            &String::from(active),
            &String::from(over),
        ) else {
            return false;
        };
        self.order.truncate(1);
        self.order.extend(next);
        true
    }

    /// Replaces the draggable portion with `next`, validating it is a
    /// permutation of the current draggable ids. Returns `false` (and
    /// leaves the order untouched) otherwise.
    pub fn set_draggable(&mut self, next: Vec<String>) -> bool {
        if next.len() != self.order.len() - 1 {
            return false;
        }
        let current = self.draggable();
        if !next.iter().all(|id| current.contains(id)) {
            return false;
        }
        // Same length and every id present: a permutation, since the
        // current draggable list never holds duplicates.
        let mut unique = next.clone();
        unique.sort();
        unique.dedup();
        if unique.len() != next.len() {
            return false;
        }
        self.order.truncate(1);
        self.order.extend(next);
        true
    }

    /// Reconciles the order against the current column set: stale ids are
    /// dropped, new ids appended, survivors keep their relative order.
    pub fn sync<'a>(&mut self, ids: impl Iterator<Item = &'a str> + Clone) {
        self.order
            .retain(|id| id == ACTIONS_COLUMN_ID || ids.clone().any(|current| current == id));
        for id in ids {
            if id != ACTIONS_COLUMN_ID && !self.order.iter().any(|existing| existing == id) {
                self.order.push(String::from(id));
            }
        }
    }

    /// Restores declaration order, as used by the reset-layout command.
    pub fn reset<'a>(&mut self, ids: impl Iterator<Item = &'a str>) {
        *self = Self::new(ids);
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{ACTIONS_COLUMN_ID, ColumnOrder, array_move, reorder_ids};

    fn ids(order: &ColumnOrder) -> Vec<&str> {
        order.as_slice().iter().map(String::as_str).collect()
    }

    #[test]
    fn array_move_is_not_a_swap() {
        let mut items = vec!["A", "B", "C", "D", "E"];
        array_move(&mut items, 0, 2);
        assert_eq!(items, ["B", "C", "A", "D", "E"]);
    }

    #[test]
    fn array_move_ignores_out_of_bounds() {
        let mut items = vec!["A", "B"];
        array_move(&mut items, 5, 0);
        array_move(&mut items, 0, 5);
        assert_eq!(items, ["A", "B"]);
    }

    #[test]
    fn reorder_ids_rejects_unknown_and_self_drops() {
        let order = ["a", "b", "c"];
        assert!(reorder_ids(&order, &"a", &"a").is_none());
        assert!(reorder_ids(&order, &"ghost", &"b").is_none());
        assert!(reorder_ids(&order, &"a", &"ghost").is_none());
        assert_eq!(reorder_ids(&order, &"c", &"a"), Some(vec!["c", "a", "b"]));
    }

    #[test]
    fn actions_is_pinned_first() {
        let order = ColumnOrder::new(["x", "y", "actions", "z"].into_iter());
        assert_eq!(ids(&order), ["actions", "x", "y", "z"]);
    }

    #[test]
    fn move_column_keeps_a_permutation() {
        let mut order = ColumnOrder::new(["x", "y", "z"].into_iter());
        assert!(order.move_column("z", "x"));
        assert_eq!(ids(&order), ["actions", "z", "x", "y"]);

        // Same id set, same length, actions still first.
        let mut sorted: Vec<&str> = ids(&order);
        sorted.sort_unstable();
        assert_eq!(sorted, ["actions", "x", "y", "z"]);
    }

    #[test]
    fn actions_refuses_drag_participation() {
        let mut order = ColumnOrder::new(["x", "y"].into_iter());
        assert!(!order.move_column(ACTIONS_COLUMN_ID, "x"));
        assert!(!order.move_column("x", ACTIONS_COLUMN_ID));
        assert_eq!(ids(&order), ["actions", "x", "y"]);
    }

    #[test]
    fn set_draggable_validates_permutations() {
        let mut order = ColumnOrder::new(["x", "y", "z"].into_iter());
        assert!(!order.set_draggable(vec![String::from("x")]));
        assert!(!order.set_draggable(vec![
            String::from("x"),
            String::from("x"),
            String::from("y"),
        ]));
        assert!(order.set_draggable(vec![
            String::from("y"),
            String::from("z"),
            String::from("x"),
        ]));
        assert_eq!(ids(&order), ["actions", "y", "z", "x"]);
    }

    #[test]
    fn sync_drops_stale_and_appends_new() {
        let mut order = ColumnOrder::new(["x", "y", "z"].into_iter());
        assert!(order.move_column("z", "x"));
        // "y" disappears, "w" appears.
        order.sync(["x", "z", "w"].into_iter());
        assert_eq!(ids(&order), ["actions", "z", "x", "w"]);
    }

    #[test]
    fn reset_restores_declaration_order() {
        let mut order = ColumnOrder::new(["x", "y", "z"].into_iter());
        assert!(order.move_column("z", "x"));
        order.reset(["x", "y", "z"].into_iter());
        assert_eq!(ids(&order), ["actions", "x", "y", "z"]);
    }
}
