// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture thresholds.

/// Distance and timing thresholds used to classify gestures.
///
/// Distances are in device pixels, durations in milliseconds. The defaults
/// follow common touch platform conventions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Travel from the press origin beyond which a one-pointer press becomes a pan.
    pub touch_slop: f64,
    /// Maximum distance between two taps for them to form a double tap.
    pub double_tap_slop: f64,
    /// Maximum press duration that still counts as a tap.
    pub tap_timeout_ms: u64,
    /// Window after a tap's release in which a second press makes a double tap.
    ///
    /// A tap is only confirmed as a single tap once this window has elapsed.
    pub double_tap_timeout_ms: u64,
}

impl GestureConfig {
    /// Default [`GestureConfig::touch_slop`].
    pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;
    /// Default [`GestureConfig::double_tap_slop`].
    pub const DEFAULT_DOUBLE_TAP_SLOP: f64 = 100.0;
    /// Default [`GestureConfig::tap_timeout_ms`].
    pub const DEFAULT_TAP_TIMEOUT_MS: u64 = 500;
    /// Default [`GestureConfig::double_tap_timeout_ms`].
    pub const DEFAULT_DOUBLE_TAP_TIMEOUT_MS: u64 = 300;

    /// Checks that every threshold is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSlop`] for a negative or non-finite slop, and
    /// [`ConfigError::ZeroTimeout`] for a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_slop("touch_slop", self.touch_slop)?;
        check_slop("double_tap_slop", self.double_tap_slop)?;
        if self.tap_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout {
                name: "tap_timeout_ms",
            });
        }
        if self.double_tap_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout {
                name: "double_tap_timeout_ms",
            });
        }
        Ok(())
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: Self::DEFAULT_TOUCH_SLOP,
            double_tap_slop: Self::DEFAULT_DOUBLE_TAP_SLOP,
            tap_timeout_ms: Self::DEFAULT_TAP_TIMEOUT_MS,
            double_tap_timeout_ms: Self::DEFAULT_DOUBLE_TAP_TIMEOUT_MS,
        }
    }
}

fn check_slop(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSlop { name, value })
    }
}

/// A rejected [`GestureConfig`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A distance threshold was negative, infinite or `NaN`.
    #[error("`{name}` must be a finite, non-negative distance, got {value}")]
    InvalidSlop {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A timeout was zero.
    #[error("`{name}` must be greater than zero")]
    ZeroTimeout {
        /// Name of the offending field.
        name: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(GestureConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_slop_is_allowed() {
        let config = GestureConfig {
            touch_slop: 0.0,
            ..GestureConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn negative_slop_is_rejected() {
        let config = GestureConfig {
            touch_slop: -1.0,
            ..GestureConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidSlop {
                name: "touch_slop",
                value: -1.0
            })
        );
    }

    #[test]
    fn nan_double_tap_slop_is_rejected() {
        let config = GestureConfig {
            double_tap_slop: f64::NAN,
            ..GestureConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSlop {
                name: "double_tap_slop",
                ..
            })
        ));
    }

    #[test]
    fn zero_timeouts_are_rejected() {
        let config = GestureConfig {
            double_tap_timeout_ms: 0,
            ..GestureConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroTimeout {
                name: "double_tap_timeout_ms"
            })
        );

        let config = GestureConfig {
            tap_timeout_ms: 0,
            ..GestureConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroTimeout {
                name: "tap_timeout_ms"
            })
        );
    }
}
