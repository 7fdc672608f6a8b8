// SPDX-License-Identifier: MPL-2.0
//! Demo application: a horizontal strip of cards, each wrapped in a scaling
//! carousel cell.
//!
//! The app plays the container role. It decides the inset (half the free
//! width around a card, so the anchor sits in the middle of the viewport),
//! pads the strip by that inset, and records scroll offsets for the header.
//! Settings come from `settings.toml`, overridden by command-line flags.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::cell::ScalingTunables;
use crate::config::{self, Config};
use crate::ui::state::ViewportState;
use iced::{window, Color, Element, Size, Task, Theme};

/// Card shown in the demo strip.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Stable identity, used as the cell key.
    pub id: u64,
    pub title: String,
    pub color: Color,
}

/// Background colors cycled through by the demo cards.
const CARD_COLORS: [Color; 6] = [
    Color::from_rgb(0.87, 0.36, 0.33),
    Color::from_rgb(0.93, 0.62, 0.25),
    Color::from_rgb(0.40, 0.72, 0.42),
    Color::from_rgb(0.27, 0.60, 0.82),
    Color::from_rgb(0.53, 0.42, 0.80),
    Color::from_rgb(0.82, 0.38, 0.64),
];

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    tunables: ScalingTunables,
    cards: Vec<Card>,
    card_size: Size,
    card_spacing: f32,
    viewport: ViewportState,
}

impl Default for App {
    fn default() -> Self {
        Self::from_config(&Config::default(), ScalingTunables::default())
    }
}

impl App {
    /// Loads settings, applies the flags and builds the card strip.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        config::paths::init_cli_override(flags.config_dir.clone());

        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!("falling back to default config: {warning}");
        }

        let config = apply_flags(config, &flags);
        let tunables = resolve_tunables(&config);

        if flags.save_config {
            let mut saved = config.clone();
            saved.set_tunables(tunables);
            if let Err(err) = config::save(&saved) {
                tracing::error!("failed to save config: {err}");
            }
        }

        (Self::from_config(&config, tunables), Task::none())
    }

    fn from_config(config: &Config, tunables: ScalingTunables) -> Self {
        let demo = &config.demo;
        let count = demo
            .card_count
            .unwrap_or(config::DEFAULT_CARD_COUNT)
            .clamp(config::MIN_CARD_COUNT, config::MAX_CARD_COUNT);
        let width = positive_or(demo.card_width, config::DEFAULT_CARD_WIDTH);
        let height = positive_or(demo.card_height, config::DEFAULT_CARD_HEIGHT);
        let spacing = demo
            .card_spacing
            .filter(|spacing| *spacing >= 0.0)
            .unwrap_or(config::DEFAULT_CARD_SPACING);

        tracing::debug!(count, width, height, spacing, ?tunables, "building card strip");

        Self {
            tunables,
            cards: build_cards(count),
            card_size: Size::new(width, height),
            card_spacing: spacing,
            viewport: ViewportState::default(),
        }
    }

    fn title(&self) -> String {
        String::from("Scaling Carousel")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StripScrolled(viewport) => {
                self.viewport.update(viewport.absolute_offset());
            }
            Message::RotateCards => {
                self.cards.rotate_left(1);
                tracing::debug!(first = ?self.cards.first().map(|card| card.id), "rotated cards");
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Distance between the leading edges of two neighbouring cards.
    fn stride(&self) -> f32 {
        self.card_size.width + self.card_spacing
    }

    /// Index of the card currently closest to the centered anchor.
    fn centered_card(&self) -> Option<usize> {
        self.viewport.centered_index(self.stride(), self.cards.len())
    }
}

/// Lets command-line flags override config values.
#[must_use]
pub fn apply_flags(mut config: Config, flags: &Flags) -> Config {
    if flags.scale_minimum.is_some() {
        config.carousel.scale_minimum = flags.scale_minimum;
    }
    if flags.scale_divisor.is_some() {
        config.carousel.scale_divisor = flags.scale_divisor;
    }
    if flags.alpha_minimum.is_some() {
        config.carousel.alpha_minimum = flags.alpha_minimum;
    }
    if flags.cards.is_some() {
        config.demo.card_count = flags.cards;
    }
    config
}

/// Validates the configured tunables, falling back to the defaults.
#[must_use]
pub fn resolve_tunables(config: &Config) -> ScalingTunables {
    config.tunables().unwrap_or_else(|err| {
        tracing::warn!("invalid carousel tunables, using defaults: {err}");
        ScalingTunables::default()
    })
}

/// Inset that puts a card of `card_width` in the middle of `available_width`.
#[must_use]
pub fn centering_inset(available_width: f32, card_width: f32) -> f32 {
    ((available_width - card_width) / 2.0).max(0.0)
}

fn positive_or(value: Option<f32>, default: f32) -> f32 {
    value.filter(|v| *v > 0.0).unwrap_or(default)
}

fn build_cards(count: usize) -> Vec<Card> {
    (0..count)
        .map(|index| Card {
            id: index as u64,
            title: format!("Card {}", index + 1),
            color: CARD_COLORS[index % CARD_COLORS.len()],
        })
        .collect()
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot function; flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}
