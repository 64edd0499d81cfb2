// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page arithmetic: clamping and pure slicing.

use core::ops::Range;

/// Current page and page size.
///
/// The page index is a *request*; it is clamped against the filtered total
/// at projection time so a shrinking dataset can never leave the grid on an
/// out-of-range page. An empty dataset still has one (empty) page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// Zero-based page index.
    pub page_index: usize,
    /// Rows per page. Never zero.
    pub page_size: usize,
}

impl Pagination {
    /// Creates pagination at the first page. A zero `page_size` is clamped to 1.
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: if page_size == 0 { 1 } else { page_size },
        }
    }

    /// Number of pages for `total` rows; at least 1.
    #[must_use]
    pub const fn page_count(&self, total: usize) -> usize {
        let pages = total.div_ceil(self.page_size);
        if pages == 0 { 1 } else { pages }
    }

    /// The requested page index clamped into `[0, page_count - 1]`.
    #[must_use]
    pub const fn clamped_index(&self, total: usize) -> usize {
        let max = self.page_count(total) - 1;
        if self.page_index > max {
            max
        } else {
            self.page_index
        }
    }

    /// The half-open row range of the (clamped) current page.
    #[must_use]
    pub const fn range(&self, total: usize) -> Range<usize> {
        let start = self.clamped_index(total) * self.page_size;
        let start = if start > total { total } else { start };
        let end = start + self.page_size;
        let end = if end > total { total } else { end };
        start..end
    }
}
