// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Session: the transient interaction state machines of a data grid.
//!
//! A grid has three kinds of in-flight gesture, each with begin / update /
//! commit / cancel structure:
//!
//! - [`DragState`]: a row or column being drag-reordered, with
//!   activation-distance tracking so short presses stay clicks.
//! - [`ResizeState`]: a column width following the pointer, clamped to the
//!   column's bounds, written back only on explicit commit.
//! - [`EditState`]: an inline cell edit with a pending value, committed on
//!   blur or discarded on cancel.
//!
//! At most one gesture exists per grid at any instant. [`Session`] encodes
//! that mutual exclusion as a tagged union, so a simultaneous drag and edit
//! is unrepresentable rather than merely forbidden. The drag axis is the
//! variant ([`Session::RowDrag`] vs [`Session::ColumnDrag`]); one reorder
//! algorithm serves both.
//!
//! All machines are pure state: they never touch grid view state
//! themselves. Committing returns a value the engine applies; cancelling
//! drops the state without side effects, so an aborted gesture can never
//! corrupt the grid.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use trellis_session::{DragState, ResizeState, WidthBounds};
//!
//! // A column drag: press on "amount", pull past the activation distance,
//! // hover over "vendor", release.
//! let mut drag: DragState<&str> = DragState::begin("amount", Point::new(100.0, 10.0));
//! drag.on_move(Point::new(130.0, 12.0));
//! drag.set_over(Some("vendor"));
//! let drop = drag.end().expect("activated drag over a different target");
//! assert_eq!(drop, ("amount", "vendor"));
//!
//! // A resize: +250px of pointer travel clamps to the 300px bound.
//! let mut resize = ResizeState::begin(
//!     "amount",
//!     120.0,
//!     WidthBounds { min: 80.0, max: 300.0 },
//!     Point::new(500.0, 10.0),
//! );
//! assert_eq!(resize.update(Point::new(750.0, 10.0)), 300.0);
//! let (column, width) = resize.commit();
//! assert_eq!((column, width), ("amount", 300.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod drag;
mod edit;
mod resize;

pub use drag::DragState;
pub use edit::{EditOutcome, EditState};
pub use resize::{ResizeState, WidthBounds};

/// The grid's single in-flight gesture, if any.
///
/// The engine owns one `Session` per grid. Because the variants share one
/// slot, a resize can never overlap a drag or an edit; beginning a new
/// gesture requires the engine to resolve the old one first.
#[derive(Clone, Debug)]
pub enum Session<K, C> {
    /// No gesture in flight.
    Idle,
    /// A row is being drag-reordered.
    RowDrag(DragState<K>),
    /// A column is being drag-reordered.
    ColumnDrag(DragState<C>),
    /// A column edge is being resized.
    Resize(ResizeState<C>),
    /// A cell is being edited inline.
    Edit(EditState<K, C>),
}

impl<K, C> Session<K, C> {
    /// Returns `true` when no gesture is in flight.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Takes the current session, leaving [`Session::Idle`] behind.
    #[must_use]
    pub fn take(&mut self) -> Self {
        core::mem::replace(self, Self::Idle)
    }
}

impl<K, C> Default for Session<K, C> {
    fn default() -> Self {
        Self::Idle
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{DragState, Session};

    #[test]
    fn take_leaves_idle_behind() {
        let mut session: Session<u32, &str> =
            Session::RowDrag(DragState::begin(1, Point::ZERO));
        let taken = session.take();
        assert!(matches!(taken, Session::RowDrag(_)));
        assert!(session.is_idle());
    }

    #[test]
    fn default_is_idle() {
        let session: Session<u32, &str> = Session::default();
        assert!(session.is_idle());
    }
}
