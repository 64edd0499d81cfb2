// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The consolidated grid view state.

use core::hash::Hash;

use hashbrown::HashMap;
use trellis_columns::ColumnOrder;
use trellis_row_model::{FilterSet, Pagination, SortChain};
use trellis_selection::SelectionMap;

/// Everything that describes how the grid currently views its data:
/// sorting, filters, column visibility / order / sizing, row selection,
/// and pagination.
///
/// One `ViewState` exists per grid instance. It is created from the
/// caller's seeds at construction and mutated only through
/// [`GridEngine`](crate::GridEngine) transitions; hosts read it through
/// the accessors here to render headers, checkboxes, and pagers.
#[derive(Clone, Debug)]
pub struct ViewState<K: Eq + Hash> {
    pub(crate) sort: SortChain,
    pub(crate) filters: FilterSet,
    pub(crate) visibility: HashMap<String, bool>,
    pub(crate) order: ColumnOrder,
    pub(crate) sizing: HashMap<String, f64>,
    pub(crate) selection: SelectionMap<K>,
    pub(crate) pagination: Pagination,
}

impl<K: Clone + Eq + Hash> ViewState<K> {
    pub(crate) fn new(order: ColumnOrder, page_size: usize) -> Self {
        Self {
            sort: SortChain::new(),
            filters: FilterSet::new(),
            visibility: HashMap::new(),
            order,
            sizing: HashMap::new(),
            selection: SelectionMap::new(),
            pagination: Pagination::new(page_size),
        }
    }

    /// The active sort chain.
    #[must_use]
    pub fn sort(&self) -> &SortChain {
        &self.sort
    }

    /// The active filters.
    #[must_use]
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// The column order, actions first.
    #[must_use]
    pub fn order(&self) -> &ColumnOrder {
        &self.order
    }

    /// Explicit column widths; columns absent here use their default width.
    #[must_use]
    pub fn sizing(&self) -> &HashMap<String, f64> {
        &self.sizing
    }

    /// The current row selection.
    #[must_use]
    pub fn selection(&self) -> &SelectionMap<K> {
        &self.selection
    }

    /// The requested pagination. The page index is clamped against the
    /// filtered total during projection.
    #[must_use]
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Whether a column is currently visible. Columns never touched by a
    /// visibility toggle are visible.
    #[must_use]
    pub fn is_column_visible(&self, column_id: &str) -> bool {
        self.visibility.get(column_id).copied().unwrap_or(true)
    }
}
