// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Receives touch input the view does not interpret itself.
///
/// All points are logical. Every method returns whether the input was
/// handled.
pub trait TouchController {
    /// A touch began, or a confirmed single tap started.
    fn on_touch_started(&mut self, point: Point) -> bool;

    /// Pointers moved. `current` and `previous` are aligned by pointer.
    fn on_touch_delta(&mut self, current: &[Point], previous: &[Point]) -> bool;

    /// A touch ended, or a confirmed single tap completed.
    fn on_touch_completed(&mut self, point: Point) -> bool;
}

/// A controller that handles nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultTouchController;

impl TouchController for DefaultTouchController {
    fn on_touch_started(&mut self, _point: Point) -> bool {
        false
    }

    fn on_touch_delta(&mut self, _current: &[Point], _previous: &[Point]) -> bool {
        false
    }

    fn on_touch_completed(&mut self, _point: Point) -> bool {
        false
    }
}
