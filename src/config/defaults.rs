// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scaling**: Scale/fade curve of carousel cells
//! - **Demo**: Card strip shown by the demo application

// ==========================================================================
// Scaling Defaults
// ==========================================================================

/// Scale applied to a cell that is one full cell width (or more) off center.
pub const DEFAULT_SCALE_MINIMUM: f32 = 0.9;

/// Divisor applied to the proximity percentage before it is added to the
/// minimums. Lower values widen the gap between neighbouring cells.
pub const DEFAULT_SCALE_DIVISOR: f32 = 10.0;

/// Opacity floor of a cell that is one full cell width (or more) off center.
pub const DEFAULT_ALPHA_MINIMUM: f32 = 0.85;

// ==========================================================================
// Demo Defaults
// ==========================================================================

/// Number of cards shown by the demo carousel.
pub const DEFAULT_CARD_COUNT: usize = 12;

/// Minimum number of cards the demo accepts.
pub const MIN_CARD_COUNT: usize = 1;

/// Maximum number of cards the demo accepts.
pub const MAX_CARD_COUNT: usize = 200;

/// Card width in logical pixels.
pub const DEFAULT_CARD_WIDTH: f32 = 220.0;

/// Card height in logical pixels.
pub const DEFAULT_CARD_HEIGHT: f32 = 300.0;

/// Horizontal gap between cards in logical pixels.
pub const DEFAULT_CARD_SPACING: f32 = 24.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Scaling validation
    assert!(DEFAULT_SCALE_MINIMUM > 0.0);
    assert!(DEFAULT_SCALE_MINIMUM <= 1.0);
    assert!(DEFAULT_SCALE_DIVISOR > 0.0);
    assert!(DEFAULT_ALPHA_MINIMUM > 0.0);
    assert!(DEFAULT_ALPHA_MINIMUM <= 1.0);

    // Demo validation
    assert!(MIN_CARD_COUNT > 0);
    assert!(MAX_CARD_COUNT >= MIN_CARD_COUNT);
    assert!(DEFAULT_CARD_COUNT >= MIN_CARD_COUNT);
    assert!(DEFAULT_CARD_COUNT <= MAX_CARD_COUNT);
    assert!(DEFAULT_CARD_WIDTH > 0.0);
    assert!(DEFAULT_CARD_HEIGHT > 0.0);
    assert!(DEFAULT_CARD_SPACING >= 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn scaling_defaults_are_valid() {
        assert_eq!(DEFAULT_SCALE_MINIMUM, 0.9);
        assert_eq!(DEFAULT_SCALE_DIVISOR, 10.0);
        assert_eq!(DEFAULT_ALPHA_MINIMUM, 0.85);
    }

    #[test]
    fn default_curve_reaches_full_size_at_center() {
        assert_abs_diff_eq!(
            DEFAULT_SCALE_MINIMUM + 1.0 / DEFAULT_SCALE_DIVISOR,
            1.0,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn card_count_defaults_are_valid() {
        assert_eq!(DEFAULT_CARD_COUNT, 12);
        assert!(DEFAULT_CARD_COUNT >= MIN_CARD_COUNT);
        assert!(DEFAULT_CARD_COUNT <= MAX_CARD_COUNT);
    }
}
