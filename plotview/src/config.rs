// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use plotview_gesture::{ConfigError, GestureConfig};
use plotview_viewport::AxisKind;

/// Whether the view interprets touch input as gestures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureMode {
    /// Interpret gestures only when the model has an axis of the configured kind.
    #[default]
    Auto,
    /// Always interpret gestures.
    Enabled,
    /// Never interpret gestures; forward raw touches to the controller.
    Disabled,
}

/// Configuration for a [`PlotView`](crate::PlotView).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewConfig {
    /// Gesture thresholds.
    pub gesture: GestureConfig,
    /// When to interpret gestures.
    pub gestures: GestureMode,
    /// Kind of axis that gestures pan and zoom.
    pub axis_kind: AxisKind,
}

impl ViewConfig {
    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first invalid gesture threshold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gesture.validate()
    }

    /// Whether a model with (or without) a matching axis gets gesture interpretation.
    #[must_use]
    pub fn gestures_enabled(&self, has_axis: bool) -> bool {
        match self.gestures {
            GestureMode::Auto => has_axis,
            GestureMode::Enabled => true,
            GestureMode::Disabled => false,
        }
    }
}
