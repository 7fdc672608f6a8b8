// SPDX-License-Identifier: MPL-2.0
//! The scaling carousel cell.
//!
//! A [`ScalingCell`] applies its emphasis to a designated main view and never
//! to itself, so the container's hit-testing and layout stay untouched. It
//! keeps no state across passes besides its tunables and the main view: each
//! layout pass recomputes the emphasis from scratch.

use super::geometry::{ContainerScroll, LayoutContext};
use super::tunables::{Emphasis, ScalingTunables};
use super::CarouselCell;

/// The child element that receives a cell's scale and opacity.
pub trait MainView {
    /// Replaces the current transform with a uniform scale.
    fn set_scale(&mut self, scale: f32);

    fn set_alpha(&mut self, alpha: f32);
}

/// Plain visual state of a main view, for hosts that render it themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub scale: f32,
    pub alpha: f32,
}

impl VisualState {
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for VisualState {
    fn default() -> Self {
        let Emphasis { scale, alpha } = Emphasis::IDENTITY;
        Self { scale, alpha }
    }
}

impl MainView for VisualState {
    fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }
}

/// Carousel cell that shrinks and fades its main view by distance from center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingCell<V> {
    main_view: V,
    tunables: ScalingTunables,
}

impl<V: MainView> ScalingCell<V> {
    /// Wraps `main_view` with the default tunables.
    pub fn new(main_view: V) -> Self {
        Self::with_tunables(main_view, ScalingTunables::default())
    }

    pub fn with_tunables(main_view: V, tunables: ScalingTunables) -> Self {
        Self {
            main_view,
            tunables,
        }
    }

    pub fn tunables(&self) -> ScalingTunables {
        self.tunables
    }

    /// Takes effect on the next layout pass.
    pub fn set_tunables(&mut self, tunables: ScalingTunables) {
        self.tunables = tunables;
    }

    pub fn main_view(&self) -> &V {
        &self.main_view
    }

    pub fn main_view_mut(&mut self) -> &mut V {
        &mut self.main_view
    }

    pub fn into_main_view(self) -> V {
        self.main_view
    }

    /// Restores the identity transform and full opacity.
    ///
    /// Must run before the cell is rebound to different content so a
    /// previous position's emphasis does not leak into the new one.
    pub fn reset_visual_state(&mut self) {
        self.apply(Emphasis::IDENTITY);
    }

    /// Derives the proximity percentage from the container's scroll state and
    /// applies the matching emphasis.
    ///
    /// Returns `None` and leaves the main view untouched when the cell is not
    /// attached to a carousel; that is a normal transient state during
    /// construction and teardown.
    pub fn apply_scale_for_container(
        &mut self,
        context: &LayoutContext,
    ) -> Option<Emphasis> {
        let Some(container) = context.container else {
            tracing::trace!("cell is not attached to a carousel, skipping layout pass");
            return None;
        };

        Some(self.apply_scale_for_inset(container, context))
    }

    fn apply_scale_for_inset(
        &mut self,
        container: ContainerScroll,
        context: &LayoutContext,
    ) -> Emphasis {
        let percentage = container.proximity(context.frame);
        tracing::trace!(
            offset_x = container.offset_x,
            inset = container.inset,
            frame_x = context.frame.x,
            percentage,
            "scaling cell layout pass"
        );
        self.apply_scale_with_percentage(percentage)
    }

    /// Applies the emphasis for `percentage` to the main view.
    ///
    /// Each call sets the transform from identity, so repeating it with the
    /// same input is idempotent. `percentage` is not clamped.
    pub fn apply_scale_with_percentage(&mut self, percentage: f32) -> Emphasis {
        let emphasis = self.tunables.emphasis(percentage);
        self.apply(emphasis);
        emphasis
    }

    fn apply(&mut self, emphasis: Emphasis) {
        self.main_view.set_scale(emphasis.scale);
        self.main_view.set_alpha(emphasis.alpha);
    }
}

impl<V: MainView> CarouselCell for ScalingCell<V> {
    fn on_layout(&mut self, context: &LayoutContext) {
        self.apply_scale_for_container(context);
    }

    fn on_recycle(&mut self) {
        tracing::debug!("recycling scaling cell, resetting visual state");
        self.reset_visual_state();
    }
}
