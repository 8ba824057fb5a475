// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press travel tracking: decide when a single-pointer press becomes a drag.
//!
//! ## Usage
//!
//! 1) Call [`DragState::start`] with the press position.
//! 2) On each move, call [`DragState::latch_slop`]; it returns `true` once the
//!    pointer has travelled further than the slop from the origin, and keeps
//!    returning `true` for the rest of the press.
//! 3) Call [`DragState::end`] when the press is released.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use plotview_gesture::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0));
//!
//! // Jitter within the slop is not a drag.
//! assert!(!drag.latch_slop(Point::new(12.0, 21.0), 8.0));
//!
//! // Past the slop, the press is a drag for good.
//! assert!(drag.latch_slop(Point::new(30.0, 20.0), 8.0));
//! assert!(drag.latch_slop(Point::new(11.0, 20.0), 8.0));
//! ```

use kurbo::{Point, Vec2};

/// Tracks where a press started and whether it has left its slop radius.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Position of the press, if one is in progress.
    origin: Option<Point>,
    /// Set once the pointer has travelled past the slop.
    crossed: bool,
}

impl DragState {
    /// Starts tracking a press at `pos`, forgetting any previous press.
    pub fn start(&mut self, pos: Point) {
        self.origin = Some(pos);
        self.crossed = false;
    }

    /// Returns `true` if the press at `pos` has travelled more than `slop` from
    /// its origin at any point since [`DragState::start`].
    ///
    /// Returns `false` when no press is in progress.
    pub fn latch_slop(&mut self, pos: Point, slop: f64) -> bool {
        let Some(origin) = self.origin else {
            return false;
        };
        if !self.crossed && origin.distance(pos) > slop {
            self.crossed = true;
        }
        self.crossed
    }

    /// Whether the current press has already travelled past its slop.
    #[must_use]
    pub fn has_crossed_slop(&self) -> bool {
        self.crossed
    }

    /// Offset of `pos` from the press origin.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.origin.map(|origin| pos - origin)
    }

    /// Ends the current press and resets state.
    pub fn end(&mut self) {
        self.origin = None;
        self.crossed = false;
    }

    /// Returns `true` while a press is being tracked.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.origin.is_some()
    }
}
