// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid configuration: feature flags and sizing knobs.

use bitflags::bitflags;

bitflags! {
    /// Interactive capabilities of one grid instance.
    ///
    /// Transitions for a disabled capability are silent no-ops, so hosts
    /// can wire a full toolbar and gate behavior centrally here.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct GridFeatures: u32 {
        /// Header activation sorts columns.
        const SORTING = 1 << 0;
        /// The row model is sliced into pages.
        const PAGINATION = 1 << 1;
        /// Rows can be selected.
        const ROW_SELECTION = 1 << 2;
        /// Per-column filter needles are honored.
        const COLUMN_FILTERS = 1 << 3;
        /// Column edges can be drag-resized.
        const COLUMN_RESIZING = 1 << 4;
        /// Columns can be toggled out of visibility.
        const COLUMN_VISIBILITY = 1 << 5;
        /// Rows can be drag-reordered.
        const ROW_REORDER = 1 << 6;
        /// Columns can be drag-reordered.
        const COLUMN_REORDER = 1 << 7;
    }
}

impl Default for GridFeatures {
    fn default() -> Self {
        Self::SORTING | Self::PAGINATION | Self::ROW_SELECTION
    }
}

/// Configuration for one grid instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSettings {
    /// Enabled interactive capabilities.
    pub features: GridFeatures,
    /// Rows per page. Defaults to 10.
    pub page_size: usize,
    /// Fixed visible-row budget for filler-row padding. Defaults to the
    /// page size when absent, which matches grids whose visual window is
    /// exactly one page.
    pub window_capacity: Option<usize>,
    /// Placeholder text hosts show in the global search box.
    pub global_filter_placeholder: String,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            features: GridFeatures::default(),
            page_size: 10,
            window_capacity: None,
            global_filter_placeholder: String::from("Search…"),
        }
    }
}

impl GridSettings {
    /// Creates default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the feature set.
    #[must_use]
    pub fn with_features(mut self, features: GridFeatures) -> Self {
        self.features = features;
        self
    }

    /// Enables additional features on top of the current set.
    #[must_use]
    pub fn enable(mut self, features: GridFeatures) -> Self {
        self.features |= features;
        self
    }

    /// Sets the page size. Zero is clamped to 1.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Sets an explicit fixed-window capacity.
    #[must_use]
    pub fn with_window_capacity(mut self, capacity: usize) -> Self {
        self.window_capacity = Some(capacity);
        self
    }

    /// Sets the global search placeholder.
    #[must_use]
    pub fn with_global_filter_placeholder(mut self, text: &str) -> Self {
        self.global_filter_placeholder = String::from(text);
        self
    }

    /// The effective fixed-window capacity.
    #[must_use]
    pub fn window_capacity(&self) -> usize {
        self.window_capacity.unwrap_or(self.page_size)
    }

    /// Returns `true` if every feature in `features` is enabled.
    #[must_use]
    pub fn has(&self, features: GridFeatures) -> bool {
        self.features.contains(features)
    }
}

#[cfg(test)]
mod tests {
    use super::{GridFeatures, GridSettings};

    #[test]
    fn defaults_match_the_common_grid() {
        let settings = GridSettings::default();
        assert_eq!(settings.page_size, 10);
        assert_eq!(settings.window_capacity(), 10);
        assert!(settings.has(GridFeatures::SORTING));
        assert!(settings.has(GridFeatures::PAGINATION));
        assert!(!settings.has(GridFeatures::ROW_REORDER));
    }

    #[test]
    fn explicit_window_capacity_overrides_page_size() {
        let settings = GridSettings::new().with_page_size(25).with_window_capacity(7);
        assert_eq!(settings.window_capacity(), 7);
    }

    #[test]
    fn enable_is_additive() {
        let settings = GridSettings::new().enable(GridFeatures::ROW_REORDER);
        assert!(settings.has(GridFeatures::SORTING));
        assert!(settings.has(GridFeatures::ROW_REORDER));
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let settings = GridSettings::new().with_page_size(0);
        assert_eq!(settings.page_size, 1);
    }
}
