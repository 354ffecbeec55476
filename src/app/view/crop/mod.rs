// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/mod.rs
//
// Crop marker module: overlay widget and tracker state.

mod overlay;
mod tracker;

pub use overlay::canvas_overlay;
pub use tracker::CropTracker;
