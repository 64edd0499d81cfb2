// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active filter needles and the row predicate they induce.

use alloc::string::String;

use hashbrown::HashMap;

use crate::Row;

/// The set of active filters for one grid.
///
/// Needles are stored lowercased so the per-row predicate never re-lowers
/// them. A row passes when the global needle matches *some* visible column
/// and every per-column needle matches its own column (logical AND).
#[derive(Clone, Debug, Default)]
pub struct FilterSet {
    global: Option<String>,
    by_column: HashMap<String, String>,
}

impl FilterSet {
    /// Creates an empty filter set that passes every row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the global filter. Empty text clears it.
    pub fn set_global(&mut self, text: &str) {
        if text.is_empty() {
            self.global = None;
        } else {
            self.global = Some(text.to_lowercase());
        }
    }

    /// Returns the global filter text as originally lowercased, if active.
    #[must_use]
    pub fn global(&self) -> Option<&str> {
        self.global.as_deref()
    }

    /// Sets or clears the filter for one column. `None` or empty text clears.
    pub fn set_column(&mut self, column_id: &str, needle: Option<&str>) {
        match needle {
            Some(text) if !text.is_empty() => {
                self.by_column
                    .insert(String::from(column_id), text.to_lowercase());
            }
            _ => {
                self.by_column.remove(column_id);
            }
        }
    }

    /// Returns the lowercased needle for one column, if active.
    #[must_use]
    pub fn column(&self, column_id: &str) -> Option<&str> {
        self.by_column.get(column_id).map(String::as_str)
    }

    /// Removes every active filter.
    pub fn clear(&mut self) {
        self.global = None;
        self.by_column.clear();
    }

    /// Returns `true` if no filter is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.global.is_none() && self.by_column.is_empty()
    }

    /// Evaluates the combined predicate for one row.
    ///
    /// `visible_columns` is the set of column ids the global needle is
    /// matched against; per-column needles always consult their own column,
    /// visible or not.
    #[must_use]
    pub fn row_passes<R: Row>(&self, row: &R, visible_columns: &[&str]) -> bool {
        for (column, needle) in &self.by_column {
            if !row.cell(column).matches(needle) {
                return false;
            }
        }
        if let Some(needle) = &self.global {
            return visible_columns
                .iter()
                .any(|column| row.cell(column).matches(needle));
        }
        true
    }
}
