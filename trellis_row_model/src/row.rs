// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The row accessor trait the pipeline reads through.

use core::hash::Hash;

use crate::CellValue;

/// A grid row as seen by the pipeline.
///
/// The engine never inspects rows beyond this surface: a stable identity
/// used by selection and drag bookkeeping, and cell access keyed by column
/// id. Unknown column ids should yield [`CellValue::Empty`] rather than
/// panic.
///
/// Identities must be unique within one grid instance. That is a caller
/// contract, not a runtime-checked invariant; duplicate ids make selection
/// and reorder behavior meaningless.
pub trait Row {
    /// Stable row identity.
    type Id: Clone + Eq + Hash;

    /// Returns this row's identity.
    fn id(&self) -> Self::Id;

    /// Returns the value of the cell in the named column.
    fn cell(&self, column_id: &str) -> CellValue;
}

impl<R: Row> Row for &R {
    type Id = R::Id;

    fn id(&self) -> Self::Id {
        (**self).id()
    }

    fn cell(&self, column_id: &str) -> CellValue {
        (**self).cell(column_id)
    }
}
