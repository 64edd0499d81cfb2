// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline cell-edit session state.

use alloc::string::String;

use trellis_row_model::{CellKind, CellValue};

/// Result of committing an edit session.
#[derive(Clone, Debug, PartialEq)]
pub enum EditOutcome {
    /// The pending text coerced successfully; the engine reports this value
    /// to the host, which applies it to its canonical data.
    Committed(CellValue),
    /// The pending text failed numeric coercion. The edit is rejected: the
    /// cell keeps its previous value and the raw text is returned so hosts
    /// can surface feedback.
    Rejected(String),
}

/// An in-flight inline edit of one cell.
///
/// Exactly one may exist per grid; the engine's session slot enforces
/// that. The pending value lives here, not in the grid state, so
/// cancelling is a plain drop and the display value is untouched until a
/// successful commit.
#[derive(Clone, Debug)]
pub struct EditState<K, C> {
    row: K,
    row_index: usize,
    column: C,
    original: String,
    pending: String,
}

impl<K: Clone, C: Clone> EditState<K, C> {
    /// Begins editing the cell at (`row`, `column`), seeded with the cell's
    /// current display text. `row_index` is the row's position in the
    /// current view, kept for the host's focus bookkeeping.
    #[must_use]
    pub fn begin(row: K, row_index: usize, column: C, initial: &str) -> Self {
        Self {
            row,
            row_index,
            column,
            original: String::from(initial),
            pending: String::from(initial),
        }
    }

    /// The row being edited.
    #[must_use]
    pub const fn row(&self) -> &K {
        &self.row
    }

    /// The row's position in the current view.
    #[must_use]
    pub const fn row_index(&self) -> usize {
        self.row_index
    }

    /// The column being edited.
    #[must_use]
    pub const fn column(&self) -> &C {
        &self.column
    }

    /// The pending (not yet committed) text.
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Replaces the pending text as the user types.
    pub fn set_pending(&mut self, text: &str) {
        self.pending.clear();
        self.pending.push_str(text);
    }

    /// Returns `true` if the pending text differs from the seed value.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.pending != self.original
    }

    /// Commits the session, coercing the pending text per the column kind.
    ///
    /// Numeric columns parse as `f64`; blank text commits
    /// [`CellValue::Empty`] (the cell was cleared), and a failed parse
    /// yields [`EditOutcome::Rejected`] with the raw text. Text columns
    /// commit verbatim.
    #[must_use]
    pub fn commit(self, kind: CellKind) -> EditOutcome {
        match kind {
            CellKind::Text => EditOutcome::Committed(CellValue::Text(self.pending)),
            CellKind::Number => {
                let trimmed = self.pending.trim();
                if trimmed.is_empty() {
                    return EditOutcome::Committed(CellValue::Empty);
                }
                match trimmed.parse::<f64>() {
                    Ok(value) => EditOutcome::Committed(CellValue::Number(value)),
                    Err(_) => EditOutcome::Rejected(self.pending),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::{EditOutcome, EditState};
    use trellis_row_model::{CellKind, CellValue};

    fn edit(initial: &str) -> EditState<u32, &'static str> {
        EditState::begin(7, 2, "amount", initial)
    }

    #[test]
    fn text_commit_is_verbatim() {
        let mut session = edit("old");
        session.set_pending("new value");
        assert!(session.is_dirty());
        assert_eq!(
            session.commit(CellKind::Text),
            EditOutcome::Committed(CellValue::from("new value"))
        );
    }

    #[test]
    fn numeric_commit_parses_f64() {
        let mut session = edit("10");
        session.set_pending(" 12.75 ");
        assert_eq!(
            session.commit(CellKind::Number),
            EditOutcome::Committed(CellValue::Number(12.75))
        );
    }

    #[test]
    fn numeric_parse_failure_rejects_with_raw_text() {
        let mut session = edit("10");
        session.set_pending("12,75");
        assert_eq!(
            session.commit(CellKind::Number),
            EditOutcome::Rejected(String::from("12,75"))
        );
    }

    #[test]
    fn blank_numeric_commit_clears_the_cell() {
        let mut session = edit("10");
        session.set_pending("   ");
        assert_eq!(
            session.commit(CellKind::Number),
            EditOutcome::Committed(CellValue::Empty)
        );
    }

    #[test]
    fn untouched_session_is_clean() {
        let session = edit("same");
        assert!(!session.is_dirty());
        assert_eq!(session.row(), &7);
        assert_eq!(session.row_index(), 2);
        assert_eq!(session.column(), &"amount");
    }
}
