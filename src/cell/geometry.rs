// SPDX-License-Identifier: MPL-2.0
//! Geometry handed to a cell on every layout pass.
//!
//! The container owns both the cell frame and its scroll state; the cell
//! only reads them. Frame and scroll offset must be expressed in the same
//! coordinate space.

/// Horizontal extent of a cell inside its container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellFrame {
    /// Leading edge of the cell.
    pub x: f32,
    pub width: f32,
}

impl CellFrame {
    #[must_use]
    pub fn new(x: f32, width: f32) -> Self {
        Self { x, width }
    }
}

/// Scroll state of the carousel a cell is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerScroll {
    /// Current horizontal scroll position.
    pub offset_x: f32,
    /// Distance from the container's leading edge to the point treated as
    /// centered. Computed by the container.
    pub inset: f32,
}

impl ContainerScroll {
    #[must_use]
    pub fn new(offset_x: f32, inset: f32) -> Self {
        Self { offset_x, inset }
    }

    /// Position a cell's leading edge must reach to count as centered.
    #[must_use]
    pub fn anchor(self) -> f32 {
        self.offset_x + self.inset
    }

    /// Absolute horizontal distance between the centered anchor and `frame`.
    #[must_use]
    pub fn distance_to(self, frame: CellFrame) -> f32 {
        (self.anchor() - frame.x).abs()
    }

    /// Proximity of `frame` to the centered anchor.
    ///
    /// `1.0` when the cell sits exactly on the anchor, falling linearly to
    /// `0.0` once it is a full cell width away. Never negative.
    ///
    /// A zero-width frame is not guarded here; the container must not lay
    /// out degenerate cells.
    #[must_use]
    pub fn proximity(self, frame: CellFrame) -> f32 {
        1.0 - (self.distance_to(frame) / frame.width).min(1.0)
    }
}

/// Everything a cell learns from its container during one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutContext {
    pub frame: CellFrame,
    /// `None` while the cell is not attached to a scrolling carousel.
    pub container: Option<ContainerScroll>,
}

impl LayoutContext {
    #[must_use]
    pub fn attached(frame: CellFrame, container: ContainerScroll) -> Self {
        Self {
            frame,
            container: Some(container),
        }
    }

    #[must_use]
    pub fn detached(frame: CellFrame) -> Self {
        Self {
            frame,
            container: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: CellFrame = CellFrame {
        x: 100.0,
        width: 200.0,
    };

    #[test]
    fn centered_cell_has_full_proximity() {
        let scroll = ContainerScroll::new(100.0, 0.0);
        assert_eq!(scroll.distance_to(FRAME), 0.0);
        assert_eq!(scroll.proximity(FRAME), 1.0);
    }

    #[test]
    fn one_width_away_has_zero_proximity() {
        let scroll = ContainerScroll::new(300.0, 0.0);
        assert_eq!(scroll.distance_to(FRAME), 200.0);
        assert_eq!(scroll.proximity(FRAME), 0.0);
    }

    #[test]
    fn far_away_is_clamped_to_zero() {
        let scroll = ContainerScroll::new(1000.0, 0.0);
        assert_eq!(scroll.proximity(FRAME), 0.0);
    }

    #[test]
    fn distance_is_symmetric_around_the_anchor() {
        let before = ContainerScroll::new(50.0, 0.0);
        let after = ContainerScroll::new(150.0, 0.0);
        assert_eq!(before.proximity(FRAME), 0.75);
        assert_eq!(after.proximity(FRAME), 0.75);
    }

    #[test]
    fn inset_shifts_the_anchor() {
        let scroll = ContainerScroll::new(40.0, 60.0);
        assert_eq!(scroll.anchor(), 100.0);
        assert_eq!(scroll.proximity(FRAME), 1.0);

        let negative = ContainerScroll::new(160.0, -60.0);
        assert_eq!(negative.proximity(FRAME), 1.0);
    }

    #[test]
    fn detached_context_has_no_container() {
        assert!(LayoutContext::detached(FRAME).container.is_none());
        assert!(LayoutContext::attached(FRAME, ContainerScroll::default())
            .container
            .is_some());
    }
}
