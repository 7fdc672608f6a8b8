// SPDX-License-Identifier: MPL-2.0
pub mod scaling_cell;

pub use scaling_cell::{scaling_cell, ScalingCellView};
