// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use iced::widget::scrollable::Viewport;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The card strip scrolled or was resized.
    StripScrolled(Viewport),
    /// Moves the first card to the end, so every slot shows a new card.
    RotateCards,
}

/// Command-line overrides. Each `Some` wins over the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flags {
    pub scale_minimum: Option<f32>,
    pub scale_divisor: Option<f32>,
    pub alpha_minimum: Option<f32>,
    pub cards: Option<usize>,
    pub config_dir: Option<String>,
    /// Write the resolved settings back to `settings.toml`.
    pub save_config: bool,
}

impl Flags {
    /// Parses flags from the process arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if a flag value does not parse.
    pub fn from_args(mut args: pico_args::Arguments) -> Result<Self, pico_args::Error> {
        let flags = Self {
            scale_minimum: args.opt_value_from_str("--scale-minimum")?,
            scale_divisor: args.opt_value_from_str("--scale-divisor")?,
            alpha_minimum: args.opt_value_from_str("--alpha-minimum")?,
            cards: args.opt_value_from_str("--cards")?,
            config_dir: args.opt_value_from_str("--config-dir")?,
            save_config: args.contains("--save-config"),
        };

        let remaining = args.finish();
        if !remaining.is_empty() {
            tracing::warn!(?remaining, "ignoring unknown arguments");
        }

        Ok(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<Flags, pico_args::Error> {
        let args = args.iter().map(OsString::from).collect();
        Flags::from_args(pico_args::Arguments::from_vec(args))
    }

    #[test]
    fn no_arguments_yield_empty_flags() {
        assert_eq!(parse(&[]).expect("parses"), Flags::default());
    }

    #[test]
    fn tunable_flags_are_parsed() {
        let flags = parse(&[
            "--scale-minimum",
            "0.7",
            "--scale-divisor",
            "3",
            "--alpha-minimum",
            "0.5",
            "--cards",
            "20",
            "--save-config",
        ])
        .expect("parses");

        assert_eq!(flags.scale_minimum, Some(0.7));
        assert_eq!(flags.scale_divisor, Some(3.0));
        assert_eq!(flags.alpha_minimum, Some(0.5));
        assert_eq!(flags.cards, Some(20));
        assert!(flags.save_config);
    }

    #[test]
    fn malformed_number_is_an_error() {
        assert!(parse(&["--scale-divisor", "steep"]).is_err());
    }
}
