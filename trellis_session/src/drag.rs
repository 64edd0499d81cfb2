// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-reorder session state.

use kurbo::Point;

/// Default pointer travel before a press becomes a drag.
const DEFAULT_ACTIVATION_DISTANCE: f64 = 4.0;

/// An in-flight drag of one item (row or column) over its siblings.
///
/// The state tracks which item the press started on, which item the
/// pointer is currently over, and whether the pointer has travelled far
/// enough from the press origin for the gesture to count as a drag at all.
/// Ending an unactivated drag yields `None`, so a plain click on a drag
/// handle never reorders anything.
///
/// The state is pure bookkeeping: computing the resulting permutation from
/// the `(active, over)` pair is the engine's job, which keeps this machine
/// independent of any particular ordered-id list.
#[derive(Clone, Debug)]
pub struct DragState<I> {
    active: I,
    over: Option<I>,
    origin: Point,
    activation_distance: f64,
    activated: bool,
}

impl<I: PartialEq + Clone> DragState<I> {
    /// Begins a drag of `active` at pointer position `origin`.
    #[must_use]
    pub fn begin(active: I, origin: Point) -> Self {
        Self {
            active,
            over: None,
            origin,
            activation_distance: DEFAULT_ACTIVATION_DISTANCE,
            activated: false,
        }
    }

    /// Overrides the activation distance. Zero activates on the first move.
    #[must_use]
    pub fn with_activation_distance(mut self, distance: f64) -> Self {
        self.activation_distance = distance.max(0.0);
        self
    }

    /// The item the drag started on.
    #[must_use]
    pub const fn active(&self) -> &I {
        &self.active
    }

    /// The current drop target, if the pointer is over one.
    #[must_use]
    pub const fn over(&self) -> Option<&I> {
        self.over.as_ref()
    }

    /// Returns `true` once the pointer has travelled the activation distance.
    #[must_use]
    pub const fn is_activated(&self) -> bool {
        self.activated
    }

    /// Records pointer movement; returns `true` if the drag is now active.
    pub fn on_move(&mut self, position: Point) -> bool {
        if !self.activated && self.origin.distance(position) >= self.activation_distance {
            self.activated = true;
        }
        self.activated
    }

    /// Updates the current drop target. `None` means the pointer left every
    /// valid target.
    pub fn set_over(&mut self, over: Option<I>) {
        self.over = over;
    }

    /// Ends the drag, yielding the `(active, over)` pair when the drop is
    /// meaningful.
    ///
    /// Returns `None` — a cancelled drag — when the gesture never
    /// activated, there is no drop target, or the target is the dragged
    /// item itself.
    #[must_use]
    pub fn end(self) -> Option<(I, I)> {
        if !self.activated {
            return None;
        }
        let over = self.over?;
        if over == self.active {
            return None;
        }
        Some((self.active, over))
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::DragState;

    #[test]
    fn drop_on_sibling_yields_pair() {
        let mut drag: DragState<u32> = DragState::begin(3, Point::new(10.0, 10.0));
        assert!(drag.on_move(Point::new(40.0, 10.0)));
        drag.set_over(Some(1));
        assert_eq!(drag.end(), Some((3, 1)));
    }

    #[test]
    fn unactivated_press_is_a_cancelled_drag() {
        let mut drag: DragState<u32> = DragState::begin(3, Point::new(10.0, 10.0));
        // 2px of travel: under the activation distance.
        assert!(!drag.on_move(Point::new(12.0, 10.0)));
        drag.set_over(Some(1));
        assert_eq!(drag.end(), None);
    }

    #[test]
    fn missing_or_self_target_is_a_no_op() {
        let mut drag: DragState<u32> = DragState::begin(3, Point::ZERO);
        drag.on_move(Point::new(50.0, 0.0));
        assert_eq!(drag.clone().end(), None);

        drag.set_over(Some(3));
        assert_eq!(drag.end(), None);
    }

    #[test]
    fn activation_is_sticky_once_reached() {
        let mut drag: DragState<u32> = DragState::begin(1, Point::ZERO);
        assert!(drag.on_move(Point::new(10.0, 0.0)));
        // Returning near the origin does not deactivate.
        assert!(drag.on_move(Point::new(1.0, 0.0)));
        assert!(drag.is_activated());
    }

    #[test]
    fn zero_activation_distance_activates_immediately() {
        let mut drag: DragState<u32> =
            DragState::begin(1, Point::ZERO).with_activation_distance(0.0);
        assert!(drag.on_move(Point::ZERO));
    }

    #[test]
    fn over_can_be_cleared_again() {
        let mut drag: DragState<u32> = DragState::begin(1, Point::ZERO);
        drag.on_move(Point::new(20.0, 0.0));
        drag.set_over(Some(2));
        drag.set_over(None);
        assert_eq!(drag.end(), None);
    }
}
