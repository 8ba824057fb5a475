// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// A semantic gesture or interaction transition produced by
/// [`GestureInterpreter`](crate::GestureInterpreter).
///
/// Points and `delta` are in logical units (device pixels divided by the
/// device scale); `pixel_delta` is the raw device-pixel movement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureEvent {
    /// The first pan or pinch of a touch interaction is about to be reported.
    ///
    /// Emitted at most once per down→up interaction.
    InteractionStarted(Point),
    /// One pointer moved after leaving its slop radius.
    Pan {
        /// Movement since the previous sample, in logical units.
        delta: Vec2,
        /// Movement since the previous sample, in device pixels.
        pixel_delta: Vec2,
    },
    /// Two pointers moved relative to each other.
    Pinch {
        /// Current pointer distance divided by the previous pointer distance.
        scale_factor: f64,
        /// Midpoint of the two pointers.
        center: Point,
    },
    /// The last pointer of a started interaction lifted (or the platform cancelled).
    ///
    /// Emitted exactly once for every [`GestureEvent::InteractionStarted`].
    InteractionCompleted(Point),
    /// A tap that was not followed by a second tap in time.
    SingleTap(Point),
    /// A second tap arrived within the double-tap window. Carries the first tap's position.
    DoubleTap(Point),
}

/// Events produced by a single sample; rarely more than two.
pub type GestureEvents = SmallVec<[GestureEvent; 4]>;
