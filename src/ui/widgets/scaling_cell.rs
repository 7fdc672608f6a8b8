// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that scales and fades its content by its distance from
//! the center of an enclosing horizontal scrollable.
//!
//! Layout, events and hit-testing pass through untouched; only drawing is
//! transformed. The widget's tree state owns a [`ScalingCell`] which is laid
//! out on every event it receives (each frame starts with a
//! `RedrawRequested` event) and recycled whenever its key changes.
//!
//! The enclosing scrollable hands down a viewport shifted by its scroll
//! offset. Both the viewport and the layout bounds are in the scrollable's
//! content space, so `viewport.x` serves as the container scroll offset and
//! the scrollable's own origin cancels out of the distance.

use crate::cell::{
    CarouselCell, CellFrame, ContainerScroll, LayoutContext, ScalingCell, ScalingTunables,
    VisualState,
};
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Color, Element, Event, Length, Rectangle, Size, Transformation};

/// Per-instance state kept in the widget tree across frames.
#[derive(Debug, Clone, Copy)]
struct State {
    cell: ScalingCell<VisualState>,
    key: Option<u64>,
}

impl State {
    /// Runs one layout pass; `true` when the visual state changed.
    fn layout_pass(&mut self, context: &LayoutContext) -> bool {
        let before = *self.cell.main_view();
        self.cell.on_layout(context);
        *self.cell.main_view() != before
    }
}

/// A widget that scales and fades its content like a carousel cell.
pub struct ScalingCellView<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    tunables: ScalingTunables,
    inset: Option<f32>,
    key: Option<u64>,
    fade_color: Option<Color>,
}

impl<'a, Message, Theme, Renderer> ScalingCellView<'a, Message, Theme, Renderer> {
    /// Creates a new `ScalingCellView` wrapping the given content.
    ///
    /// Until [`inset`](Self::inset) is set the cell is unattached and the
    /// content is drawn as is.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            tunables: ScalingTunables::default(),
            inset: None,
            key: None,
            fade_color: None,
        }
    }

    /// Attaches the cell to a carousel whose centered anchor lies `inset`
    /// pixels from the scrollable's leading edge.
    #[must_use]
    pub fn inset(mut self, inset: f32) -> Self {
        self.inset = Some(inset);
        self
    }

    #[must_use]
    pub fn tunables(mut self, tunables: ScalingTunables) -> Self {
        self.tunables = tunables;
        self
    }

    /// Identifies the content bound to this cell. When the key differs from
    /// the previous frame the visual state is reset before the next pass.
    #[must_use]
    pub fn key(mut self, key: u64) -> Self {
        self.key = Some(key);
        self
    }

    /// Fades towards `color` (usually the carousel background) as alpha drops.
    #[must_use]
    pub fn fade_to(mut self, color: Color) -> Self {
        self.fade_color = Some(color);
        self
    }

    fn layout_context(&self, bounds: Rectangle, viewport: &Rectangle) -> LayoutContext {
        LayoutContext {
            frame: CellFrame::from(bounds),
            container: self
                .inset
                .map(|inset| ContainerScroll::new(viewport.x, inset)),
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for ScalingCellView<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State {
            cell: ScalingCell::with_tunables(VisualState::default(), self.tunables),
            key: self.key,
        })
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        let state = tree.state.downcast_mut::<State>();
        state.cell.set_tunables(self.tunables);
        if state.key != self.key {
            state.key = self.key;
            state.cell.on_recycle();
        }

        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let visual = *tree.state.downcast_ref::<State>().cell.main_view();

        if visual.is_identity() {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                layout,
                cursor,
                viewport,
            );
            return;
        }

        let bounds = layout.bounds();
        let faded_style = renderer::Style {
            text_color: style.text_color.scale_alpha(visual.alpha),
        };

        renderer.with_transformation(scale_about_center(bounds, visual.scale), |renderer| {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                &faded_style,
                layout,
                cursor,
                viewport,
            );

            if let Some(color) = self.fade_color.and_then(|c| fade_overlay(c, visual.alpha)) {
                renderer.fill_quad(
                    renderer::Quad {
                        bounds,
                        ..renderer::Quad::default()
                    },
                    color,
                );
            }
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let context = self.layout_context(layout.bounds(), viewport);
        if tree.state.downcast_mut::<State>().layout_pass(&context) {
            shell.request_redraw();
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<ScalingCellView<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(cell: ScalingCellView<'a, Message, Theme, Renderer>) -> Self {
        Self::new(cell)
    }
}

/// Helper function to create a scaling carousel cell.
pub fn scaling_cell<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> ScalingCellView<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    ScalingCellView::new(content)
}

impl From<Rectangle> for CellFrame {
    fn from(bounds: Rectangle) -> Self {
        Self::new(bounds.x, bounds.width)
    }
}

/// Uniform scale that keeps the center of `bounds` fixed.
fn scale_about_center(bounds: Rectangle, scale: f32) -> Transformation {
    let center = bounds.center();
    Transformation::translate(center.x, center.y)
        * Transformation::scale(scale)
        * Transformation::translate(-center.x, -center.y)
}

/// Color laid over the content so it reads as `alpha` over `background`.
///
/// `None` once alpha reaches full opacity, overscroll included.
fn fade_overlay(background: Color, alpha: f32) -> Option<Color> {
    if alpha >= 1.0 {
        None
    } else {
        Some(background.scale_alpha(1.0 - alpha))
    }
}
