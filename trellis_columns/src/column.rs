// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column descriptors and their normalization.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;
use trellis_row_model::CellKind;

/// Horizontal alignment of a column's cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    /// Leading edge.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Trailing edge; the usual choice for numeric columns.
    Right,
}

/// A caller-supplied column descriptor.
///
/// Built with [`ColumnSpec::new`] plus the chainable setters, then fed to
/// [`normalize`]. Width bounds that disagree are reconciled there rather
/// than rejected.
#[derive(Clone, Debug)]
pub struct ColumnSpec {
    /// Unique column id, also the accessor key rows are read by.
    pub id: String,
    /// Header caption.
    pub header: String,
    /// Smallest width the column may be resized to.
    pub min_width: f64,
    /// Width used until the user resizes.
    pub default_width: f64,
    /// Largest width the column may be resized to.
    pub max_width: f64,
    /// Whether header activation sorts by this column.
    pub sortable: bool,
    /// Whether cells in this column can be edited inline.
    pub editable: bool,
    /// Whether the column may be toggled out of visibility.
    pub hideable: bool,
    /// Data kind, driving edit coercion.
    pub kind: CellKind,
    /// Cell alignment.
    pub align: Align,
}

impl ColumnSpec {
    /// Creates a sortable, hideable, non-editable text column with default widths.
    #[must_use]
    pub fn new(id: &str, header: &str) -> Self {
        Self {
            id: String::from(id),
            header: String::from(header),
            min_width: 60.0,
            default_width: 150.0,
            max_width: 500.0,
            sortable: true,
            editable: false,
            hideable: true,
            kind: CellKind::Text,
            align: Align::Left,
        }
    }

    /// Sets the width bounds: minimum, default, maximum.
    #[must_use]
    pub const fn with_widths(mut self, min: f64, default: f64, max: f64) -> Self {
        self.min_width = min;
        self.default_width = default;
        self.max_width = max;
        self
    }

    /// Marks the column numeric and right-aligned.
    #[must_use]
    pub const fn numeric(mut self) -> Self {
        self.kind = CellKind::Number;
        self.align = Align::Right;
        self
    }

    /// Enables inline editing.
    #[must_use]
    pub const fn editable(mut self) -> Self {
        self.editable = true;
        self
    }

    /// Disables sorting by this column.
    #[must_use]
    pub const fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Pins the column into visibility (cannot be hidden).
    #[must_use]
    pub const fn always_visible(mut self) -> Self {
        self.hideable = false;
        self
    }

    /// Sets the cell alignment.
    #[must_use]
    pub const fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

/// A normalized column as the engine sees it.
///
/// Produced only by [`normalize`]; the width invariant
/// `min_width ≤ default_width ≤ max_width` always holds.
#[derive(Clone, Debug)]
pub struct Column {
    /// Unique column id.
    pub id: String,
    /// Header caption.
    pub header: String,
    /// Smallest allowed width.
    pub min_width: f64,
    /// Initial width.
    pub default_width: f64,
    /// Largest allowed width.
    pub max_width: f64,
    /// Whether header activation sorts by this column.
    pub sortable: bool,
    /// Whether cells can be edited inline.
    pub editable: bool,
    /// Whether visibility can be toggled off.
    pub hideable: bool,
    /// Data kind.
    pub kind: CellKind,
    /// Cell alignment.
    pub align: Align,
}

impl Column {
    /// Clamps a candidate width into this column's bounds.
    #[must_use]
    pub fn clamp_width(&self, width: f64) -> f64 {
        width.clamp(self.min_width, self.max_width)
    }
}

/// Normalizes caller descriptors into engine columns.
///
/// Width bounds are reconciled by swapping an inverted `min`/`max` pair and
/// clamping the default into the resulting range. Duplicate ids keep the
/// first occurrence and drop the rest; both repairs are debug-asserted so
/// misuse surfaces during development.
#[must_use]
pub fn normalize(specs: Vec<ColumnSpec>) -> Vec<Column> {
    let mut seen: HashSet<String> = HashSet::with_capacity(specs.len());
    let mut columns = Vec::with_capacity(specs.len());
    for spec in specs {
        if !seen.insert(spec.id.clone()) {
            debug_assert!(false, "duplicate column id {:?} dropped", spec.id);
            continue;
        }
        let (min_width, max_width) = if spec.min_width <= spec.max_width {
            (spec.min_width, spec.max_width)
        } else {
            debug_assert!(
                false,
                "column {:?} has min_width > max_width; swapping",
                spec.id
            );
            (spec.max_width, spec.min_width)
        };
        let default_width = spec.default_width.clamp(min_width, max_width);
        columns.push(Column {
            id: spec.id,
            header: spec.header,
            min_width,
            default_width,
            max_width,
            sortable: spec.sortable,
            editable: spec.editable,
            hideable: spec.hideable,
            kind: spec.kind,
            align: spec.align,
        });
    }
    columns
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{Align, ColumnSpec, normalize};
    use trellis_row_model::CellKind;

    #[test]
    fn builder_flags_carry_through() {
        let columns = normalize(vec![
            ColumnSpec::new("amount", "Amount").numeric().editable(),
            ColumnSpec::new("note", "Note").unsortable().always_visible(),
        ]);
        assert_eq!(columns[0].kind, CellKind::Number);
        assert_eq!(columns[0].align, Align::Right);
        assert!(columns[0].editable);
        assert!(!columns[1].sortable);
        assert!(!columns[1].hideable);
    }

    #[test]
    fn default_width_is_clamped_into_bounds() {
        let columns = normalize(vec![
            ColumnSpec::new("a", "A").with_widths(100.0, 50.0, 300.0),
            ColumnSpec::new("b", "B").with_widths(100.0, 900.0, 300.0),
        ]);
        assert_eq!(columns[0].default_width, 100.0);
        assert_eq!(columns[1].default_width, 300.0);
    }

    #[test]
    fn clamp_width_honors_bounds() {
        let columns = normalize(vec![ColumnSpec::new("a", "A").with_widths(80.0, 100.0, 300.0)]);
        assert_eq!(columns[0].clamp_width(50.0), 80.0);
        assert_eq!(columns[0].clamp_width(400.0), 300.0);
        assert_eq!(columns[0].clamp_width(120.0), 120.0);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn duplicate_ids_keep_first_occurrence() {
        let columns = normalize(vec![
            ColumnSpec::new("a", "First"),
            ColumnSpec::new("a", "Second"),
        ]);
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].header, "First");
    }
}
