// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! - [`widgets`] - Custom Iced widgets (scaling carousel cell)
//! - [`state`] - Reusable state management (strip viewport)

pub mod state;
pub mod widgets;
