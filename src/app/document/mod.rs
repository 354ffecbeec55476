// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/mod.rs
//
// Document module root: image discovery, decoding and display sizing.

pub mod file;
pub mod raster;

use image::GenericImageView;

use crate::constant::{
    BASE_DISPLAY_HEIGHT, MAX_RENDER_DIMENSION, MAX_RENDER_PIXELS, MIN_PIXMAP_SIZE,
};

/// Re-export the image handle type for use by submodules.
pub type ImageHandle = cosmic::widget::image::Handle;

/// Create an iced image handle from a DynamicImage.
///
/// This is the central function for converting rendered images to display handles.
pub fn create_image_handle(img: &image::DynamicImage) -> ImageHandle {
    let (w, h) = img.dimensions();
    let rgba = img.to_rgba8();
    let pixels = rgba.into_raw();
    ImageHandle::from_rgba(w, h, pixels)
}

/// A scaled image ready for display.
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub handle: ImageHandle,
    pub width: u32,
    pub height: u32,
}

/// Compute the display size of an image at the given zoom factor.
///
/// The height is the base display height times `zoom`, the width follows the
/// source aspect ratio. Both are rounded and never drop below one pixel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn target_size(width: u32, height: u32, zoom: f64) -> (u32, u32) {
    let target_height = (BASE_DISPLAY_HEIGHT * zoom).round().max(f64::from(MIN_PIXMAP_SIZE));

    let target_width = if height == 0 {
        f64::from(MIN_PIXMAP_SIZE)
    } else {
        (f64::from(width) * target_height / f64::from(height))
            .round()
            .max(f64::from(MIN_PIXMAP_SIZE))
    };

    (target_width as u32, target_height as u32)
}

/// Whether a display size can be allocated without exceeding the render caps.
pub fn within_render_limits(width: u32, height: u32) -> bool {
    width <= MAX_RENDER_DIMENSION
        && height <= MAX_RENDER_DIMENSION
        && u64::from(width) * u64::from(height) <= MAX_RENDER_PIXELS
}
