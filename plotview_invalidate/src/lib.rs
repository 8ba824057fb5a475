// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotview Invalidate: coalescing invalidation for a plot view's paint pass.
//!
//! Invalidation requests may arrive from any thread while painting happens
//! on the UI thread. This crate keeps the two apart with two small critical
//! sections:
//!
//! - **Invalidation flags** ([`InvalidationFlags`]): "model dirty" and
//!   "data dirty", OR-merged by every request and consumed atomically by
//!   the paint pass ([`InvalidationCoordinator::take_pending`]).
//! - **Render slot** ([`RenderSlot`]): a render context built lazily on the
//!   first paint and reused until [reset](RenderSlot::reset).
//! - **Repaint scheduling** ([`RepaintScheduler`]): called after each request,
//!   outside the flags lock, to ask the host surface for a paint.
//! - **Handles** ([`InvalidationHandle`]): `Send + Sync` clones that can only
//!   request invalidation.
//!
//! ## Quick Start
//!
//! ```rust
//! use plotview_invalidate::InvalidationCoordinator;
//!
//! let coordinator = InvalidationCoordinator::<Vec<u8>>::new(|| {
//!     // e.g. post a redraw request to the window
//! });
//!
//! coordinator.request_invalidate(false);
//! coordinator.request_invalidate(true);
//!
//! // One paint pass consumes both requests.
//! let pending = coordinator.take_pending();
//! assert!(pending.needs_recompute() && pending.update_data());
//! assert!(!coordinator.is_pending());
//!
//! coordinator
//!     .render_slot()
//!     .with_context(Vec::new, |ctx| ctx.push(1));
//! ```

mod coordinator;
mod flags;
mod scheduler;
mod slot;

pub use coordinator::{InvalidationCoordinator, InvalidationHandle};
pub use flags::InvalidationFlags;
pub use scheduler::RepaintScheduler;
pub use slot::RenderSlot;
