// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer tracking: turn raw multi-pointer events into [`TouchSample`]s.
//!
//! Platforms report touch input as a stream of [`PointerEvent`]s, each listing
//! every pointer in contact at that instant. [`PointerTracker`] remembers the
//! last known position of every pointer (keyed by [`PointerId`]) so that each
//! [`TouchSample`] carries both the current points and the previous points
//! *aligned by pointer*, even when fingers are added or lifted mid-gesture.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use plotview_gesture::pointer::{PointerEvent, PointerId, PointerTracker};
//!
//! let mut tracker = PointerTracker::new();
//! let finger = PointerId(0);
//!
//! tracker.track(&PointerEvent::down(finger, Point::new(100.0, 100.0), 0), 2.0);
//! let sample = tracker
//!     .track(&PointerEvent::moved(finger, Point::new(120.0, 100.0), 16), 2.0)
//!     .unwrap();
//!
//! assert_eq!(sample.previous[0], Point::new(100.0, 100.0));
//! assert_eq!(sample.current[0], Point::new(120.0, 100.0));
//! // Logical points are device pixels divided by the device scale.
//! assert_eq!(sample.logical_current()[0], Point::new(60.0, 50.0));
//! ```

use hashbrown::HashMap;
use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// A small inline list of points; most touch interactions use one or two pointers.
pub type Points = SmallVec<[Point; 2]>;

/// Platform-assigned identifier of one pointer (finger) for the duration of its contact.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// One pointer in contact with the surface, in device pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pointer {
    /// Which pointer this is.
    pub id: PointerId,
    /// Position in device pixels.
    pub position: Point,
}

/// What happened in a [`PointerEvent`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerAction {
    /// The given pointer touched down. It is included in the event's pointer list.
    Down(PointerId),
    /// One or more pointers moved.
    Move,
    /// The given pointer lifted. It is still included in the event's pointer list.
    Up(PointerId),
    /// The platform aborted the interaction (for example, palm rejection).
    Cancel,
}

/// A raw pointer event as delivered by the platform.
///
/// `pointers` lists every pointer in contact at the instant of the event,
/// including the pointer that is going down or up.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// The action tag.
    pub action: PointerAction,
    /// All pointers in contact, in platform order.
    pub pointers: SmallVec<[Pointer; 2]>,
    /// Event timestamp in milliseconds from an arbitrary, monotonic origin.
    pub time_ms: u64,
}

impl PointerEvent {
    /// Creates an event with no pointers; add them with [`PointerEvent::with_pointer`].
    #[must_use]
    pub fn new(action: PointerAction, time_ms: u64) -> Self {
        Self {
            action,
            pointers: SmallVec::new(),
            time_ms,
        }
    }

    /// Adds a pointer to this event.
    #[must_use]
    pub fn with_pointer(mut self, id: PointerId, position: Point) -> Self {
        self.pointers.push(Pointer { id, position });
        self
    }

    /// A single pointer touching down.
    #[must_use]
    pub fn down(id: PointerId, position: Point, time_ms: u64) -> Self {
        Self::new(PointerAction::Down(id), time_ms).with_pointer(id, position)
    }

    /// A single pointer moving.
    #[must_use]
    pub fn moved(id: PointerId, position: Point, time_ms: u64) -> Self {
        Self::new(PointerAction::Move, time_ms).with_pointer(id, position)
    }

    /// A single pointer lifting.
    #[must_use]
    pub fn up(id: PointerId, position: Point, time_ms: u64) -> Self {
        Self::new(PointerAction::Up(id), time_ms).with_pointer(id, position)
    }
}

/// Returns `true` if `scale` is a usable device-pixel scale factor.
///
/// A scale of `0` means the surface has not been measured yet.
#[must_use]
pub fn is_measured(scale: f64) -> bool {
    scale.is_finite() && scale > 0.0
}

/// Converts a device-pixel point into logical units.
///
/// Unmeasured scales pass the point through unconverted.
#[must_use]
pub fn logical_point(point: Point, scale: f64) -> Point {
    if is_measured(scale) {
        Point::new(point.x / scale, point.y / scale)
    } else {
        point
    }
}

/// Converts a device-pixel delta into logical units.
///
/// Unmeasured scales yield a zero delta so that no `NaN` or infinity escapes.
#[must_use]
pub fn logical_delta(delta: Vec2, scale: f64) -> Vec2 {
    if is_measured(scale) {
        delta / scale
    } else {
        Vec2::ZERO
    }
}

/// All pointers at one instant plus where those same pointers were at the
/// previous instant.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchSample {
    /// The action that produced this sample.
    pub action: PointerAction,
    /// Timestamp of the underlying event, in milliseconds.
    pub time_ms: u64,
    /// Device scale at capture time.
    pub scale: f64,
    /// Current positions in device pixels, in event order.
    pub current: Points,
    /// Previous positions in device pixels, aligned index-for-index with `current`.
    ///
    /// A pointer seen for the first time reports its current position here.
    pub previous: Points,
    /// Index into `current` of the pointer named by a `Down`/`Up` action.
    action_index: Option<usize>,
}

impl TouchSample {
    /// Number of pointers in contact at the instant of the event.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.current.len()
    }

    /// Number of pointers still in contact once the event has been applied.
    #[must_use]
    pub fn remaining_pointers(&self) -> usize {
        match self.action {
            PointerAction::Up(_) => self.current.len().saturating_sub(1),
            PointerAction::Cancel => 0,
            PointerAction::Down(_) | PointerAction::Move => self.current.len(),
        }
    }

    /// Device-pixel position of the pointer this event is about.
    ///
    /// For `Down`/`Up` that is the pointer going down or up; otherwise the first pointer.
    #[must_use]
    pub fn action_point(&self) -> Option<Point> {
        match self.action_index {
            Some(index) => self.current.get(index).copied(),
            None => self.current.first().copied(),
        }
    }

    /// Device-pixel positions of the pointers that remain in contact after this event.
    #[must_use]
    pub fn remaining_points(&self) -> Points {
        match self.action {
            PointerAction::Up(_) => self
                .current
                .iter()
                .enumerate()
                .filter(|(index, _)| Some(*index) != self.action_index)
                .map(|(_, point)| *point)
                .collect(),
            PointerAction::Cancel => Points::new(),
            PointerAction::Down(_) | PointerAction::Move => self.current.clone(),
        }
    }

    /// Current positions converted to logical units.
    #[must_use]
    pub fn logical_current(&self) -> Points {
        self.current
            .iter()
            .map(|p| logical_point(*p, self.scale))
            .collect()
    }

    /// Previous positions converted to logical units.
    #[must_use]
    pub fn logical_previous(&self) -> Points {
        self.previous
            .iter()
            .map(|p| logical_point(*p, self.scale))
            .collect()
    }
}

/// Remembers pointer positions between events.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    last: HashMap<PointerId, Point>,
}

impl PointerTracker {
    /// Creates a tracker with no remembered pointers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pointers currently remembered as in contact.
    #[must_use]
    pub fn active_pointers(&self) -> usize {
        self.last.len()
    }

    /// Converts `event` into a [`TouchSample`] and remembers it as the previous sample.
    ///
    /// Returns `None` for malformed events: a down, move or up that lists no
    /// pointers. A `Cancel` always produces a sample and forgets every pointer.
    pub fn track(&mut self, event: &PointerEvent, scale: f64) -> Option<TouchSample> {
        if event.pointers.is_empty() && event.action != PointerAction::Cancel {
            tracing::trace!(action = ?event.action, "ignoring pointer event without pointers");
            return None;
        }

        let named = match event.action {
            PointerAction::Down(id) | PointerAction::Up(id) => Some(id),
            PointerAction::Move | PointerAction::Cancel => None,
        };

        let mut current = Points::new();
        let mut previous = Points::new();
        let mut action_index = None;
        for (index, pointer) in event.pointers.iter().enumerate() {
            current.push(pointer.position);
            previous.push(
                self.last
                    .get(&pointer.id)
                    .copied()
                    .unwrap_or(pointer.position),
            );
            if named == Some(pointer.id) {
                action_index = Some(index);
            }
        }

        // Pointers the platform no longer reports have left without an Up.
        self.last
            .retain(|id, _| event.pointers.iter().any(|p| p.id == *id));
        match event.action {
            PointerAction::Down(_) | PointerAction::Move => {
                for pointer in &event.pointers {
                    self.last.insert(pointer.id, pointer.position);
                }
            }
            PointerAction::Up(id) => {
                for pointer in &event.pointers {
                    self.last.insert(pointer.id, pointer.position);
                }
                self.last.remove(&id);
            }
            PointerAction::Cancel => self.last.clear(),
        }

        Some(TouchSample {
            action: event.action,
            time_ms: event.time_ms,
            scale,
            current,
            previous,
            action_index,
        })
    }

    /// Forgets every remembered pointer.
    pub fn reset(&mut self) {
        self.last.clear();
    }
}
