// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sort keys, the three-state activation cycle, and the comparator chain.

use alloc::string::String;
use core::cmp::Ordering;

use smallvec::SmallVec;

use crate::Row;

/// Direction of one sort key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest values first.
    Ascending,
    /// Largest values first.
    Descending,
}

impl SortDirection {
    /// Advances the three-state activation cycle for one column:
    /// unsorted → ascending → descending → unsorted.
    #[must_use]
    pub const fn cycle(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::Ascending),
            Some(Self::Ascending) => Some(Self::Descending),
            Some(Self::Descending) => None,
        }
    }
}

/// One entry in a sort chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortKey {
    /// The column the key sorts by.
    pub column: String,
    /// The key's direction.
    pub direction: SortDirection,
}

/// An ordered list of sort keys.
///
/// The chain is applied left to right; rows equal on every key keep their
/// original relative order (the pipeline sorts stably). Most grids carry
/// zero or one key, so the chain stores two inline.
#[derive(Clone, Debug, Default)]
pub struct SortChain {
    keys: SmallVec<[SortKey; 2]>,
}

impl SortChain {
    /// Creates an empty (unsorted) chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the keys in application order.
    #[must_use]
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Returns `true` if no sort is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the active direction for one column, if any.
    #[must_use]
    pub fn direction_of(&self, column: &str) -> Option<SortDirection> {
        self.keys
            .iter()
            .find(|key| key.column == column)
            .map(|key| key.direction)
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Activates a column, advancing its three-state cycle.
    ///
    /// Plain activation (`additive == false`) collapses the chain to the
    /// clicked column before cycling, which is the common single-sort
    /// interaction. Additive activation cycles the column in place,
    /// appending it when absent, so hosts can build multi-column sorts.
    pub fn activate(&mut self, column: &str, additive: bool) {
        let current = self.direction_of(column);
        let next = SortDirection::cycle(current);
        if !additive {
            self.keys.clear();
        }
        match next {
            Some(direction) => {
                if let Some(key) = self.keys.iter_mut().find(|key| key.column == column) {
                    key.direction = direction;
                } else {
                    self.keys.push(SortKey {
                        column: String::from(column),
                        direction,
                    });
                }
            }
            None => {
                self.keys.retain(|key| key.column != column);
            }
        }
    }

    /// Compares two rows under the chain. [`Ordering::Equal`] means "let
    /// the stable sort keep the original order".
    #[must_use]
    pub fn compare<R: Row>(&self, a: &R, b: &R) -> Ordering {
        for key in &self.keys {
            let ordering = a.cell(&key.column).cmp(&b.cell(&key.column));
            let ordering = match key.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use core::cmp::Ordering;

    use super::{SortChain, SortDirection};
    use crate::{CellValue, Row};

    struct Item {
        id: u32,
        group: &'static str,
        price: f64,
    }

    impl Row for Item {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }

        fn cell(&self, column_id: &str) -> CellValue {
            match column_id {
                "group" => CellValue::from(self.group),
                "price" => CellValue::from(self.price),
                _ => CellValue::Empty,
            }
        }
    }

    #[test]
    fn cycle_walks_three_states() {
        let asc = SortDirection::cycle(None);
        assert_eq!(asc, Some(SortDirection::Ascending));
        let desc = SortDirection::cycle(asc);
        assert_eq!(desc, Some(SortDirection::Descending));
        assert_eq!(SortDirection::cycle(desc), None);
    }

    #[test]
    fn three_activations_return_to_unsorted() {
        let mut chain = SortChain::new();
        chain.activate("price", false);
        chain.activate("price", false);
        chain.activate("price", false);
        assert!(chain.is_empty());
    }

    #[test]
    fn plain_activation_collapses_the_chain() {
        let mut chain = SortChain::new();
        chain.activate("group", false);
        chain.activate("price", false);
        assert_eq!(chain.keys().len(), 1);
        assert_eq!(chain.direction_of("price"), Some(SortDirection::Ascending));
        assert_eq!(chain.direction_of("group"), None);
    }

    #[test]
    fn additive_activation_builds_multi_sort() {
        let mut chain = SortChain::new();
        chain.activate("group", false);
        chain.activate("price", true);
        assert_eq!(chain.keys().len(), 2);

        // Cycling the second key out leaves the first intact.
        chain.activate("price", true);
        chain.activate("price", true);
        assert_eq!(chain.keys().len(), 1);
        assert_eq!(chain.direction_of("group"), Some(SortDirection::Ascending));
    }

    #[test]
    fn comparator_respects_direction_and_chain_order() {
        let mut chain = SortChain::new();
        chain.activate("group", false);
        chain.activate("price", true);
        chain.activate("price", true); // price descending

        let a = Item { id: 1, group: "a", price: 5.0 };
        let b = Item { id: 2, group: "a", price: 9.0 };
        let c = Item { id: 3, group: "b", price: 1.0 };

        // Same group: price descending decides.
        assert_eq!(chain.compare(&a, &b), Ordering::Greater);
        // Different groups: first key decides.
        assert_eq!(chain.compare(&b, &c), Ordering::Less);
    }

    #[test]
    fn empty_chain_reports_equal() {
        let chain = SortChain::new();
        let a = Item { id: 1, group: "a", price: 5.0 };
        let b = Item { id: 2, group: "b", price: 9.0 };
        assert_eq!(chain.compare(&a, &b), Ordering::Equal);
    }
}
