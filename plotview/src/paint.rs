// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Why a paint pass did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// No model is attached.
    NoModel,
    /// No render backend is attached.
    NoBackend,
}

/// Result of [`PlotView::draw`](crate::PlotView::draw).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintOutcome {
    /// The model painted.
    Painted {
        /// Whether pending invalidation made the model recompute first.
        recomputed: bool,
    },
    /// Nothing was painted and pending invalidation was left untouched.
    Skipped(SkipReason),
}

impl PaintOutcome {
    /// Whether the model painted.
    #[must_use]
    pub fn is_painted(self) -> bool {
        matches!(self, Self::Painted { .. })
    }
}
