// SPDX-License-Identifier: MPL-2.0
//! `scaling_carousel` provides a carousel cell for the Iced GUI framework that
//! shrinks and fades items by their horizontal distance from center.
//!
//! The scale/fade logic lives in [`cell`] and does not depend on any widget
//! toolkit; [`ui::widgets::ScalingCellView`] hosts it inside an Iced widget
//! tree, and [`app`] is a small demo container built on top of it.

pub mod app;
pub mod cell;
pub mod config;
pub mod error;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
