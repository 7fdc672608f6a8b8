// SPDX-License-Identifier: MPL-2.0
//! Scale/fade curve parameters and the pure emphasis function.
//!
//! A cell's emphasis is derived from a single proximity percentage
//! (`1.0` = centered, `0.0` = one cell width or more away):
//!
//! ```text
//! scale = scale_minimum + percentage / scale_divisor
//! alpha = alpha_minimum + percentage / scale_divisor
//! ```
//!
//! The additive term only spans `[0, 1 / scale_divisor]`, so the minimums
//! dominate the visible range unless the divisor is small. Pick
//! `scale_minimum` and `scale_divisor` together so that
//! `scale_minimum + 1 / scale_divisor <= 1.0` when the centered cell should be
//! exactly full size.

use crate::config::{DEFAULT_ALPHA_MINIMUM, DEFAULT_SCALE_DIVISOR, DEFAULT_SCALE_MINIMUM};
use std::fmt;

/// A tunable that failed validation, with the rejected value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TunableError {
    /// `scale_minimum` must lie in `(0, 1]`.
    ScaleMinimumOutOfRange(f32),
    /// `scale_divisor` must be strictly positive.
    ScaleDivisorNotPositive(f32),
    /// `alpha_minimum` must lie in `(0, 1]`.
    AlphaMinimumOutOfRange(f32),
}

impl TunableError {
    /// Name of the rejected tunable, as spelled in `settings.toml`.
    pub fn field(&self) -> &'static str {
        match self {
            TunableError::ScaleMinimumOutOfRange(_) => "scale_minimum",
            TunableError::ScaleDivisorNotPositive(_) => "scale_divisor",
            TunableError::AlphaMinimumOutOfRange(_) => "alpha_minimum",
        }
    }
}

impl fmt::Display for TunableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TunableError::ScaleMinimumOutOfRange(value)
            | TunableError::AlphaMinimumOutOfRange(value) => {
                write!(f, "{} must be in (0, 1], got {}", self.field(), value)
            }
            TunableError::ScaleDivisorNotPositive(value) => {
                write!(f, "{} must be greater than 0, got {}", self.field(), value)
            }
        }
    }
}

impl std::error::Error for TunableError {}

/// Uniform scale and opacity applied to a cell's main view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emphasis {
    pub scale: f32,
    pub alpha: f32,
}

impl Emphasis {
    /// Full size, fully opaque.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        alpha: 1.0,
    };
}

impl Default for Emphasis {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Validated parameters of the scale/fade curve.
///
/// Invariants: `scale_minimum` and `alpha_minimum` are in `(0, 1]`,
/// `scale_divisor` is greater than zero. NaN never passes validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingTunables {
    scale_minimum: f32,
    scale_divisor: f32,
    alpha_minimum: f32,
}

impl ScalingTunables {
    /// Creates a validated set of tunables.
    ///
    /// # Errors
    ///
    /// Returns the first tunable that violates its range.
    pub fn new(
        scale_minimum: f32,
        scale_divisor: f32,
        alpha_minimum: f32,
    ) -> Result<Self, TunableError> {
        if !is_unit_fraction(scale_minimum) {
            return Err(TunableError::ScaleMinimumOutOfRange(scale_minimum));
        }
        if !(scale_divisor > 0.0) {
            return Err(TunableError::ScaleDivisorNotPositive(scale_divisor));
        }
        if !is_unit_fraction(alpha_minimum) {
            return Err(TunableError::AlphaMinimumOutOfRange(alpha_minimum));
        }

        Ok(Self {
            scale_minimum,
            scale_divisor,
            alpha_minimum,
        })
    }

    #[must_use]
    pub fn scale_minimum(self) -> f32 {
        self.scale_minimum
    }

    #[must_use]
    pub fn scale_divisor(self) -> f32 {
        self.scale_divisor
    }

    #[must_use]
    pub fn alpha_minimum(self) -> f32 {
        self.alpha_minimum
    }

    /// Returns a copy with a different `scale_minimum`.
    ///
    /// # Errors
    ///
    /// Fails if `value` is outside `(0, 1]`.
    pub fn with_scale_minimum(self, value: f32) -> Result<Self, TunableError> {
        Self::new(value, self.scale_divisor, self.alpha_minimum)
    }

    /// Returns a copy with a different `scale_divisor`.
    ///
    /// # Errors
    ///
    /// Fails if `value` is not greater than zero.
    pub fn with_scale_divisor(self, value: f32) -> Result<Self, TunableError> {
        Self::new(self.scale_minimum, value, self.alpha_minimum)
    }

    /// Returns a copy with a different `alpha_minimum`.
    ///
    /// # Errors
    ///
    /// Fails if `value` is outside `(0, 1]`.
    pub fn with_alpha_minimum(self, value: f32) -> Result<Self, TunableError> {
        Self::new(self.scale_minimum, self.scale_divisor, value)
    }

    /// Maps a proximity percentage to the emphasis of the main view.
    ///
    /// No clamping is applied. Overscroll can hand in percentages outside
    /// `[0, 1]`, and the resulting scale/alpha then leave their nominal ranges
    /// on purpose.
    #[must_use]
    pub fn emphasis(self, percentage: f32) -> Emphasis {
        let boost = percentage / self.scale_divisor;

        Emphasis {
            scale: self.scale_minimum + boost,
            alpha: self.alpha_minimum + boost,
        }
    }
}

impl Default for ScalingTunables {
    fn default() -> Self {
        Self {
            scale_minimum: DEFAULT_SCALE_MINIMUM,
            scale_divisor: DEFAULT_SCALE_DIVISOR,
            alpha_minimum: DEFAULT_ALPHA_MINIMUM,
        }
    }
}

fn is_unit_fraction(value: f32) -> bool {
    value > 0.0 && value <= 1.0
}
