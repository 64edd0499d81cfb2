// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed events the engine queues for its host.

use hashbrown::HashMap;
use trellis_row_model::CellValue;
use trellis_selection::SelectionMap;

/// A state change the host needs to react to.
///
/// Transitions queue events; hosts drain them with
/// [`GridEngine::take_events`] after feeding input and apply them to their
/// own stores (canonical row data, persisted layout, search boxes). Events
/// carry full snapshots, never deltas, so handling them is idempotent.
///
/// [`GridEngine::take_events`]: crate::GridEngine::take_events
#[derive(Clone, Debug, PartialEq)]
pub enum GridEvent<K: Eq + core::hash::Hash> {
    /// A row drag committed; the payload is the complete new id order of
    /// the dragged view. The engine does not own row storage — the host
    /// must apply the order to its canonical data.
    RowsReordered(Vec<K>),
    /// The selection changed; the payload is the full selection state.
    SelectionChanged(SelectionMap<K>),
    /// A column resize committed; the payload is the full sizing map.
    ColumnSizingChanged(HashMap<String, f64>),
    /// An inline edit committed; the host applies the value to its data.
    CellCommitted {
        /// Row identity of the edited cell.
        row: K,
        /// Column id of the edited cell.
        column: String,
        /// The coerced committed value.
        value: CellValue,
    },
    /// The global filter changed, e.g. for hosts that mirror it into a URL
    /// or trigger a server-side search.
    GlobalSearch(String),
    /// The layout was reset to the caller's original defaults.
    LayoutReset,
}
