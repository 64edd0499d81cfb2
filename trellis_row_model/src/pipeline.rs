// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The filter → sort → paginate derivation.

use alloc::vec::Vec;

use crate::{FilterSet, Pagination, Row, SortChain};

/// Result of projecting rows through the pipeline.
///
/// Indices refer into the row slice passed to [`project`]; the pipeline
/// never copies or owns rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projection {
    /// Indices of the rows on the current page, in display order.
    pub page_rows: Vec<usize>,
    /// Number of rows passing the filters, across all pages.
    pub filtered_len: usize,
    /// The page index actually displayed, after clamping.
    pub page_index: usize,
    /// Total number of pages; at least 1.
    pub page_count: usize,
}

/// Projects raw rows into display order: filter, stable sort, paginate.
///
/// - Filtering applies [`FilterSet::row_passes`] with `visible_columns` as
///   the global-needle scope.
/// - Sorting uses [`SortChain::compare`] through a stable sort, so rows
///   equal on every key keep their original relative order.
/// - With `pagination` present the result is the clamped current page;
///   without it, every surviving row is returned and `page_count` is 1.
#[must_use]
pub fn project<R: Row>(
    rows: &[R],
    visible_columns: &[&str],
    filters: &FilterSet,
    chain: &SortChain,
    pagination: Option<Pagination>,
) -> Projection {
    let mut order: Vec<usize> = (0..rows.len())
        .filter(|&index| filters.row_passes(&rows[index], visible_columns))
        .collect();

    if !chain.is_empty() {
        // Vec::sort_by is stable; ties keep original row order.
        order.sort_by(|&a, &b| chain.compare(&rows[a], &rows[b]));
    }

    let filtered_len = order.len();
    match pagination {
        Some(pagination) => {
            let page_index = pagination.clamped_index(filtered_len);
            let page_count = pagination.page_count(filtered_len);
            let range = pagination.range(filtered_len);
            order.drain(..range.start);
            order.truncate(range.end - range.start);
            Projection {
                page_rows: order,
                filtered_len,
                page_index,
                page_count,
            }
        }
        None => Projection {
            page_rows: order,
            filtered_len,
            page_index: 0,
            page_count: 1,
        },
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::project;
    use crate::{CellValue, FilterSet, Pagination, Row, SortChain};

    struct Entry {
        id: u32,
        name: &'static str,
        qty: f64,
    }

    impl Row for Entry {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }

        fn cell(&self, column_id: &str) -> CellValue {
            match column_id {
                "name" => CellValue::from(self.name),
                "qty" => CellValue::from(self.qty),
                _ => CellValue::Empty,
            }
        }
    }

    const COLUMNS: &[&str] = &["name", "qty"];

    fn entries() -> Vec<Entry> {
        vec![
            Entry { id: 1, name: "bolt", qty: 4.0 },
            Entry { id: 2, name: "nut", qty: 2.0 },
            Entry { id: 3, name: "bolt", qty: 1.0 },
            Entry { id: 4, name: "washer", qty: 2.0 },
        ]
    }

    #[test]
    fn unfiltered_unsorted_is_identity_order() {
        let rows = entries();
        let projection = project(&rows, COLUMNS, &FilterSet::new(), &SortChain::new(), None);
        assert_eq!(projection.page_rows, vec![0, 1, 2, 3]);
        assert_eq!(projection.filtered_len, 4);
        assert_eq!(projection.page_count, 1);
    }

    #[test]
    fn filter_then_sort_then_page() {
        let rows = entries();
        let mut filters = FilterSet::new();
        filters.set_global("bolt");
        let mut chain = SortChain::new();
        chain.activate("qty", false);

        let projection = project(&rows, COLUMNS, &filters, &chain, Some(Pagination::new(10)));
        // Both bolts survive; qty ascending puts id 3 (qty 1) first.
        assert_eq!(projection.page_rows, vec![2, 0]);
        assert_eq!(projection.filtered_len, 2);
    }

    #[test]
    fn stable_sort_preserves_baseline_order_on_ties() {
        let rows = entries();
        let mut chain = SortChain::new();
        chain.activate("qty", false);

        let projection = project(&rows, COLUMNS, &FilterSet::new(), &chain, None);
        // qty: 1 (id 3), then the 2.0 tie in original order (ids 2, 4), then 4 (id 1).
        assert_eq!(projection.page_rows, vec![2, 1, 3, 0]);
    }

    #[test]
    fn sort_cycle_round_trips_to_baseline() {
        let rows = entries();
        let mut chain = SortChain::new();
        chain.activate("qty", false);
        chain.activate("qty", false);
        chain.activate("qty", false);

        let projection = project(&rows, COLUMNS, &FilterSet::new(), &chain, None);
        assert_eq!(projection.page_rows, vec![0, 1, 2, 3]);
    }

    #[test]
    fn pagination_clamps_after_filtering_shrinks_total() {
        let rows: Vec<Entry> = (0..60)
            .map(|i| Entry {
                id: i,
                name: if i < 12 { "keep" } else { "drop" },
                qty: f64::from(i),
            })
            .collect();

        let mut pagination = Pagination::new(10);
        pagination.page_index = 5;

        // All 60 rows: page 5 is valid.
        let full = project(&rows, COLUMNS, &FilterSet::new(), &SortChain::new(), Some(pagination));
        assert_eq!(full.page_index, 5);
        assert_eq!(full.page_rows.len(), 10);

        // Filtered to 12 rows: page index clamps to 1, showing rows 10..12.
        let mut filters = FilterSet::new();
        filters.set_global("keep");
        let clamped = project(&rows, COLUMNS, &filters, &SortChain::new(), Some(pagination));
        assert_eq!(clamped.page_index, 1);
        assert_eq!(clamped.page_count, 2);
        assert_eq!(clamped.page_rows, vec![10, 11]);
    }

    #[test]
    fn empty_rows_project_to_empty_single_page() {
        let rows: Vec<Entry> = Vec::new();
        let projection = project(
            &rows,
            COLUMNS,
            &FilterSet::new(),
            &SortChain::new(),
            Some(Pagination::new(10)),
        );
        assert!(projection.page_rows.is_empty());
        assert_eq!(projection.filtered_len, 0);
        assert_eq!(projection.page_count, 1);
        assert_eq!(projection.page_index, 0);
    }
}
