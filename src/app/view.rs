// SPDX-License-Identifier: MPL-2.0
//! View composition for the demo application.

use super::{centering_inset, App, Card, Message};
use crate::ui::widgets::scaling_cell;
use iced::alignment::Vertical;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, column, container, responsive, row, text, Row, Scrollable};
use iced::{Background, Border, Color, Element, Length, Padding, Size, Theme};

const HEADER_PADDING: f32 = 16.0;
const CARD_RADIUS: f32 = 16.0;
const CARD_TITLE_SIZE: f32 = 28.0;

pub fn view(app: &App) -> Element<'_, Message> {
    let header = row![
        text(header_line(app)).size(16.0).width(Length::Fill),
        button(text("Rotate")).on_press(Message::RotateCards),
    ]
    .align_y(Vertical::Center);

    let strip = responsive(move |available: Size| view_strip(app, available));

    column![
        container(header).padding(HEADER_PADDING),
        container(strip).width(Length::Fill).height(Length::Fill),
    ]
    .into()
}

fn header_line(app: &App) -> String {
    let position = app
        .centered_card()
        .map(|index| format!("{} / {}", index + 1, app.cards.len()))
        .unwrap_or_default();

    format!(
        "Centered: {position}    scale_minimum {} · scale_divisor {} · alpha_minimum {}",
        app.tunables.scale_minimum(),
        app.tunables.scale_divisor(),
        app.tunables.alpha_minimum(),
    )
}

fn view_strip(app: &App, available: Size) -> Element<'_, Message> {
    let inset = centering_inset(available.width, app.card_size.width);
    let backdrop = app.theme().palette().background;

    let cells = app.cards.iter().map(|card| {
        scaling_cell(view_card(card, app.card_size))
            .inset(inset)
            .tunables(app.tunables)
            .key(card.id)
            .fade_to(backdrop)
            .into()
    });

    let row = Row::with_children(cells)
        .spacing(app.card_spacing)
        .align_y(Vertical::Center)
        .padding(Padding {
            top: 0.0,
            right: inset,
            bottom: 0.0,
            left: inset,
        });

    Scrollable::new(row)
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Horizontal(Scrollbar::new()))
        .on_scroll(Message::StripScrolled)
        .into()
}

fn view_card(card: &Card, size: Size) -> Element<'_, Message> {
    let color = card.color;

    container(text(card.title.as_str()).size(CARD_TITLE_SIZE))
        .center_x(Length::Fixed(size.width))
        .center_y(Length::Fixed(size.height))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: CARD_RADIUS.into(),
                ..Border::default()
            },
            text_color: Some(Color::WHITE),
            ..container::Style::default()
        })
        .into()
}
