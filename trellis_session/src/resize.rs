// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column-resize session state.

use kurbo::Point;

/// Inclusive width bounds of one column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidthBounds {
    /// Smallest allowed width.
    pub min: f64,
    /// Largest allowed width.
    pub max: f64,
}

impl WidthBounds {
    /// Clamps `width` into the bounds.
    #[must_use]
    pub fn clamp(&self, width: f64) -> f64 {
        width.clamp(self.min, self.max)
    }
}

/// An in-flight column resize.
///
/// The width follows the pointer as `start_width + Δx`, clamped into the
/// column's bounds on every update. Nothing is written anywhere until
/// [`commit`]; dropping the state (pointer lost, gesture cancelled) leaves
/// the grid's sizing exactly as it was.
///
/// [`commit`]: ResizeState::commit
#[derive(Clone, Debug)]
pub struct ResizeState<C> {
    column: C,
    start_width: f64,
    bounds: WidthBounds,
    origin_x: f64,
    last_width: f64,
}

impl<C: Clone> ResizeState<C> {
    /// Begins resizing `column` from `start_width` at pointer `origin`.
    #[must_use]
    pub fn begin(column: C, start_width: f64, bounds: WidthBounds, origin: Point) -> Self {
        let start_width = bounds.clamp(start_width);
        Self {
            column,
            start_width,
            bounds,
            origin_x: origin.x,
            last_width: start_width,
        }
    }

    /// The column being resized.
    #[must_use]
    pub const fn column(&self) -> &C {
        &self.column
    }

    /// Recomputes the width for the current pointer position.
    ///
    /// Returns the clamped width so hosts can preview it immediately.
    pub fn update(&mut self, position: Point) -> f64 {
        let raw = self.start_width + (position.x - self.origin_x);
        self.last_width = self.bounds.clamp(raw);
        self.last_width
    }

    /// The last computed (clamped) width.
    #[must_use]
    pub const fn preview_width(&self) -> f64 {
        self.last_width
    }

    /// Ends the resize, yielding the column and its final width for the
    /// engine to persist into the sizing map.
    #[must_use]
    pub fn commit(self) -> (C, f64) {
        (self.column, self.last_width)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{ResizeState, WidthBounds};

    const BOUNDS: WidthBounds = WidthBounds { min: 80.0, max: 300.0 };

    #[test]
    fn width_follows_pointer_delta() {
        let mut resize = ResizeState::begin("qty", 120.0, BOUNDS, Point::new(200.0, 0.0));
        assert_eq!(resize.update(Point::new(230.0, 0.0)), 150.0);
        assert_eq!(resize.update(Point::new(180.0, 5.0)), 100.0);
        assert_eq!(resize.commit(), ("qty", 100.0));
    }

    #[test]
    fn widths_clamp_silently_at_both_bounds() {
        let mut resize = ResizeState::begin("qty", 120.0, BOUNDS, Point::new(200.0, 0.0));
        // Raw would be 50: clamps to min.
        assert_eq!(resize.update(Point::new(130.0, 0.0)), 80.0);
        // Raw would be 400: clamps to max.
        assert_eq!(resize.update(Point::new(480.0, 0.0)), 300.0);
    }

    #[test]
    fn commit_without_movement_keeps_start_width() {
        let resize = ResizeState::begin("qty", 120.0, BOUNDS, Point::new(200.0, 0.0));
        assert_eq!(resize.preview_width(), 120.0);
        assert_eq!(resize.commit(), ("qty", 120.0));
    }

    #[test]
    fn out_of_bounds_start_width_is_repaired() {
        let resize = ResizeState::begin("qty", 10.0, BOUNDS, Point::ZERO);
        assert_eq!(resize.preview_width(), 80.0);
    }
}
