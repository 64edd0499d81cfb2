// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filler-row arithmetic for fixed-height grids.

/// A fixed visible-row budget.
///
/// Grids that keep a constant visual height pad short result sets with
/// non-interactive filler rows instead of collapsing. When the realized row
/// count exceeds the capacity there is no filler and the host scrolls
/// naturally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedWindow {
    capacity: usize,
}

/// How one window's worth of rows should be realized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowPlan {
    /// Number of real data rows.
    pub realized: usize,
    /// Number of filler rows appended after them.
    pub filler: usize,
}

impl WindowPlan {
    /// Total rows the host will lay out, real plus filler.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.realized + self.filler
    }
}

impl FixedWindow {
    /// Creates a window holding `capacity` visible rows.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Returns the window capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Filler rows needed after `realized` data rows: `max(0, capacity - realized)`.
    #[must_use]
    pub const fn filler_count(&self, realized: usize) -> usize {
        self.capacity.saturating_sub(realized)
    }

    /// Plans one window: all realized rows plus the filler after them.
    #[must_use]
    pub const fn plan(&self, realized: usize) -> WindowPlan {
        WindowPlan {
            realized,
            filler: self.filler_count(realized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FixedWindow;

    #[test]
    fn short_result_sets_are_padded() {
        let window = FixedWindow::new(7);
        assert_eq!(window.filler_count(3), 4);
        assert_eq!(window.plan(3).total(), 7);
    }

    #[test]
    fn overflowing_result_sets_get_no_filler() {
        let window = FixedWindow::new(7);
        assert_eq!(window.filler_count(10), 0);
        assert_eq!(window.plan(10).total(), 10);
    }

    #[test]
    fn empty_result_set_is_all_filler() {
        let window = FixedWindow::new(5);
        let plan = window.plan(0);
        assert_eq!(plan.realized, 0);
        assert_eq!(plan.filler, 5);
    }

    #[test]
    fn exact_fit_has_no_filler() {
        let window = FixedWindow::new(4);
        assert_eq!(window.filler_count(4), 0);
    }
}
