// SPDX-License-Identifier: MPL-2.0
//! Framework-agnostic core of the scaling carousel cell.
//!
//! The container drives a cell through the [`CarouselCell`] capabilities: it
//! calls [`CarouselCell::on_layout`] on every layout-affecting event with the
//! current [`LayoutContext`], and [`CarouselCell::on_recycle`] right before
//! the cell is rebound to new content.
//!
//! # Examples
//!
//! ```
//! use scaling_carousel::cell::{
//!     CarouselCell, CellFrame, ContainerScroll, LayoutContext, ScalingCell, VisualState,
//! };
//!
//! let mut cell = ScalingCell::new(VisualState::default());
//! let frame = CellFrame::new(100.0, 200.0);
//!
//! // One full cell width away from the centered anchor.
//! cell.on_layout(&LayoutContext::attached(frame, ContainerScroll::new(300.0, 0.0)));
//! assert_eq!(cell.main_view().scale, 0.9);
//!
//! cell.on_recycle();
//! assert!(cell.main_view().is_identity());
//! ```

pub mod geometry;
pub mod scaling_cell;
pub mod tunables;

pub use geometry::{CellFrame, ContainerScroll, LayoutContext};
pub use scaling_cell::{MainView, ScalingCell, VisualState};
pub use tunables::{Emphasis, ScalingTunables, TunableError};

/// Lifecycle hooks a carousel container invokes on its cells.
pub trait CarouselCell {
    /// Re-evaluates the cell for the current geometry.
    fn on_layout(&mut self, context: &LayoutContext);

    /// Resets visual state before the cell shows different content.
    fn on_recycle(&mut self);
}
