// SPDX-License-Identifier: MPL-2.0
//! Viewport state of the carousel strip
//!
//! Tracks the horizontal scroll offset reported by the strip's scrollable.

use iced::widget::scrollable::AbsoluteOffset;

/// Manages viewport and scroll state of a horizontal card strip
#[derive(Debug, Clone, Default)]
pub struct ViewportState {
    /// Current horizontal scroll offset
    pub offset_x: f32,
}

impl ViewportState {
    /// Records the offset reported by the strip's scrollable.
    pub fn update(&mut self, offset: AbsoluteOffset) {
        self.offset_x = offset.x;
    }

    /// Index of the card whose leading edge is closest to the centered anchor.
    ///
    /// Assumes the strip is padded by the inset on its leading side, so card
    /// `i` is centered at offset `i * stride`.
    #[must_use]
    pub fn centered_index(&self, stride: f32, count: usize) -> Option<usize> {
        if count == 0 || stride <= 0.0 {
            return None;
        }
        let last = count - 1;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        // rounded and clamped to [0, last] before the cast
        let index = (self.offset_x / stride).round().max(0.0) as usize;
        Some(index.min(last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_viewport_has_zero_offset() {
        let state = ViewportState::default();
        assert_abs_diff_eq!(state.offset_x, 0.0);
    }

    #[test]
    fn update_tracks_horizontal_offset_only() {
        let mut state = ViewportState::default();

        state.update(AbsoluteOffset { x: 10.0, y: 5.0 });
        assert_abs_diff_eq!(state.offset_x, 10.0);
    }

    #[test]
    fn centered_index_rounds_to_nearest_card() {
        let state = ViewportState {
            offset_x: 370.0,
        };
        assert_eq!(state.centered_index(244.0, 12), Some(2));
    }

    #[test]
    fn centered_index_is_clamped_to_available_cards() {
        let overscrolled = ViewportState {
            offset_x: 10_000.0,
        };
        assert_eq!(overscrolled.centered_index(244.0, 3), Some(2));

        let underscrolled = ViewportState {
            offset_x: -50.0,
        };
        assert_eq!(underscrolled.centered_index(244.0, 3), Some(0));
        assert_eq!(underscrolled.centered_index(244.0, 0), None);
    }
}
