// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=plotview --heading-base-level=0

//! Plotview: a touch-enabled plot view.
//!
//! [`PlotView`] ties together the building blocks of this workspace:
//!
//! - [`plotview_gesture`] turns platform touch events into pan, pinch and tap
//!   gestures.
//! - [`plotview_viewport`] applies those gestures to one axis of the model.
//! - [`plotview_invalidate`] coalesces invalidation requests from any thread
//!   and owns the lazily built render context.
//!
//! The host supplies a [`PlotModel`], a [`RenderBackend`] and optionally a
//! [`TouchController`] for input the view does not interpret itself.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use plotview::{DisplayMetrics, PaintOutcome, PlotModel, PlotView, RenderBackend};
//! use plotview_gesture::{PointerEvent, PointerId};
//! use plotview_viewport::{Axis, AxisKind, AxisViewport};
//!
//! struct Chart {
//!     x: AxisViewport,
//! }
//!
//! impl PlotModel for Chart {
//!     type Context = Vec<String>;
//!
//!     fn axes_mut(&mut self) -> impl Iterator<Item = &mut dyn Axis> {
//!         core::iter::once(&mut self.x as &mut dyn Axis)
//!     }
//!
//!     fn recompute(&mut self, _update_data: bool) {}
//!
//!     fn paint(&mut self, log: &mut Vec<String>, width: f64, height: f64) {
//!         log.push(format!("{width}x{height}"));
//!     }
//! }
//!
//! struct Log;
//!
//! impl RenderBackend for Log {
//!     type Context = Vec<String>;
//!     type Target = ();
//!
//!     fn create_context(&self, _metrics: &DisplayMetrics) -> Vec<String> {
//!         Vec::new()
//!     }
//!
//!     fn bind(&self, _context: &mut Vec<String>, _target: &mut ()) {}
//! }
//!
//! let mut view = PlotView::new(|| { /* request a frame */ });
//! view.set_display_metrics(DisplayMetrics::new(2.0));
//! view.set_backend(Some(Log));
//! view.set_model(Some(Chart { x: AxisViewport::new(AxisKind::Category, 0.0..400.0) }));
//! assert!(view.gestures_enabled());
//!
//! // Drag one finger 20 device pixels to the right.
//! let finger = PointerId(0);
//! view.on_touch_event(&PointerEvent::down(finger, Point::new(100.0, 100.0), 0));
//! view.on_touch_event(&PointerEvent::moved(finger, Point::new(120.0, 100.0), 16));
//! view.on_touch_event(&PointerEvent::up(finger, Point::new(120.0, 100.0), 32));
//! assert_eq!(view.model().map(|chart| chart.x.offset()), Some(10.0));
//!
//! let outcome = view.draw(&mut (), Size::new(800.0, 600.0));
//! assert_eq!(outcome, PaintOutcome::Painted { recomputed: true });
//! ```

mod config;
mod controller;
mod model;
mod paint;
mod view;

pub use config::{GestureMode, ViewConfig};
pub use controller::{DefaultTouchController, TouchController};
pub use model::{DisplayMetrics, PlotModel, RenderBackend};
pub use paint::{PaintOutcome, SkipReason};
pub use view::PlotView;

pub use plotview_gesture::ConfigError;
