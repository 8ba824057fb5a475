// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=plotview_gesture --heading-base-level=0

//! Plotview Gesture: pointer tracking and touch gesture interpretation.
//!
//! This crate turns a stream of raw, possibly multi-pointer touch events into a
//! small set of semantic gestures: pan, pinch-zoom, single tap and double tap.
//! It is split into small pieces that are usable on their own:
//!
//! - [`pointer`]: [`PointerTracker`] converts platform [`PointerEvent`]s into
//!   [`TouchSample`]s carrying current and previous points aligned by pointer.
//! - [`drag`]: [`DragState`] decides when a press leaves its slop radius.
//! - [`tap`]: [`TapRecognizer`] resolves taps into single or double taps using
//!   timing and distance windows.
//! - [`GestureInterpreter`]: the state machine tying them together and
//!   producing [`GestureEvent`]s, including explicit
//!   [`GestureEvent::InteractionStarted`] / [`GestureEvent::InteractionCompleted`]
//!   transitions.
//!
//! The crate does not own a viewport or know about charts. Callers apply the
//! resulting events to whatever they display.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use plotview_gesture::{GestureEvent, GestureInterpreter, PointerEvent, PointerId, PointerTracker};
//!
//! let mut tracker = PointerTracker::new();
//! let mut gestures = GestureInterpreter::new();
//! let finger = PointerId(7);
//! let scale = 2.0;
//!
//! let mut feed = |event: PointerEvent| {
//!     let sample = tracker.track(&event, scale).unwrap();
//!     gestures.on_sample(&sample)
//! };
//!
//! feed(PointerEvent::down(finger, Point::new(100.0, 100.0), 0));
//! let events = feed(PointerEvent::moved(finger, Point::new(120.0, 100.0), 16));
//! assert_eq!(
//!     events[1],
//!     GestureEvent::Pan { delta: Vec2::new(10.0, 0.0), pixel_delta: Vec2::new(20.0, 0.0) }
//! );
//!
//! let events = feed(PointerEvent::up(finger, Point::new(120.0, 100.0), 32));
//! assert!(matches!(events[0], GestureEvent::InteractionCompleted(_)));
//! ```
//!
//! ## Units
//!
//! Thresholds in [`GestureConfig`] and the points inside [`TouchSample`] are
//! device pixels. Points reported in [`GestureEvent`]s are logical: device
//! pixels divided by the device scale. A scale of `0` means "not measured yet";
//! points then pass through unconverted and logical deltas are zero.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
pub mod drag;
mod event;
mod interpreter;
pub mod pointer;
pub mod tap;

pub use config::{ConfigError, GestureConfig};
pub use drag::DragState;
pub use event::{GestureEvent, GestureEvents};
pub use interpreter::{GestureInterpreter, GesturePhase};
pub use pointer::{
    Pointer, PointerAction, PointerEvent, PointerId, PointerTracker, Points, TouchSample,
};
pub use tap::TapRecognizer;
