// SPDX-License-Identifier: MPL-2.0
//! UI state management modules

pub mod viewport;

pub use viewport::ViewportState;
