// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The value universe the pipeline can compare and match.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use core::cmp::Ordering;

/// Declared data kind of a column, used for edit coercion.
///
/// Editing a [`CellKind::Number`] column parses the pending text as `f64`
/// on commit; a [`CellKind::Text`] column commits text verbatim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Free text.
    #[default]
    Text,
    /// Numeric; committed edits must parse as `f64`.
    Number,
}

/// A single cell's value as seen by the pipeline.
///
/// Hosts produce these from their own row types via [`Row::cell`]; the
/// pipeline never looks at rows any other way.
///
/// Values have a total order so sorting never panics on mixed columns:
/// variants order as `Empty < Bool < Number < Text`, numbers compare via
/// [`f64::total_cmp`], and text compares bytewise. Filtering, by contrast,
/// is case-insensitive substring matching over the textual rendering.
///
/// [`Row::cell`]: crate::Row::cell
#[derive(Clone, Debug)]
pub enum CellValue {
    /// No value; sorts before everything else.
    Empty,
    /// A boolean, rendered as `true` / `false`.
    Bool(bool),
    /// A finite or non-finite number. NaNs are ordered via `total_cmp`
    /// rather than poisoning the sort.
    Number(f64),
    /// Arbitrary text.
    Text(String),
}

impl CellValue {
    const fn rank(&self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Bool(_) => 1,
            Self::Number(_) => 2,
            Self::Text(_) => 3,
        }
    }

    /// Renders the value as text, as used by the global filter.
    #[must_use]
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Empty => Cow::Borrowed(""),
            Self::Bool(true) => Cow::Borrowed("true"),
            Self::Bool(false) => Cow::Borrowed("false"),
            Self::Number(n) => Cow::Owned(format!("{n}")),
            Self::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Case-insensitive substring match against an already-lowercased needle.
    ///
    /// An empty needle matches everything, including [`CellValue::Empty`].
    #[must_use]
    pub fn matches(&self, needle_lowercase: &str) -> bool {
        if needle_lowercase.is_empty() {
            return true;
        }
        self.to_text().to_lowercase().contains(needle_lowercase)
    }

    /// Returns `true` for [`CellValue::Empty`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Empty, Self::Empty) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    #[allow(
        clippy::cast_precision_loss,
        reason = "Grid cells use f64 as the single numeric type"
    )]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use core::cmp::Ordering;

    use super::CellValue;

    #[test]
    fn variants_order_by_rank() {
        let empty = CellValue::Empty;
        let boolean = CellValue::Bool(true);
        let number = CellValue::Number(0.0);
        let text = CellValue::from("a");

        assert!(empty < boolean);
        assert!(boolean < number);
        assert!(number < text);
    }

    #[test]
    fn numbers_compare_numerically_including_nan() {
        assert_eq!(
            CellValue::Number(2.0).cmp(&CellValue::Number(10.0)),
            Ordering::Less
        );
        // total_cmp gives NaN a defined position instead of panicking.
        let nan = CellValue::Number(f64::NAN);
        assert_eq!(nan.cmp(&nan), Ordering::Equal);
    }

    #[test]
    fn text_rendering_covers_all_variants() {
        assert_eq!(CellValue::Empty.to_text(), "");
        assert_eq!(CellValue::Bool(false).to_text(), "false");
        assert_eq!(CellValue::Number(1.5).to_text(), "1.5");
        assert_eq!(CellValue::from("hi").to_text(), "hi");
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let value = CellValue::from("Accounts Payable");
        assert!(value.matches("payab"));
        assert!(!value.matches("receivable"));
        // Empty needle matches everything.
        assert!(CellValue::Empty.matches(""));
    }

    #[test]
    fn option_conversion_maps_none_to_empty() {
        assert_eq!(CellValue::from(None::<String>), CellValue::Empty);
        assert_eq!(CellValue::from(Some(3_i64)), CellValue::Number(3.0));
    }
}
