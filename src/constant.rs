// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

use cosmic::iced::Color;

/// File name suffixes recognised as images (case-sensitive).
pub const IMAGE_SUFFIXES: [&str; 3] = [".jpg", ".png", ".jpeg"];

/// Display height in pixels at zoom factor 1.0.
pub const BASE_DISPLAY_HEIGHT: f64 = 500.0;

/// Minimum pixmap size for scaled output (prevents 0x0 images).
pub const MIN_PIXMAP_SIZE: u32 = 1;

/// Largest rendered width or height in pixels.
pub const MAX_RENDER_DIMENSION: u32 = 16_384;

/// Largest rendered pixel count (64 MP, 256 MiB of RGBA).
pub const MAX_RENDER_PIXELS: u64 = 64_000_000;

/// Radius of the circular crop marker in pixels.
pub const CROP_RADIUS: f32 = 100.0;

/// Fill color of the crop marker (50% alpha).
pub const CROP_OVERLAY_COLOR: Color = Color::from_rgba(1.0, 0.0, 0.0, 0.5);

/// Tolerance for zoom factor comparisons.
pub const SCALE_EPSILON: f64 = 0.0001;

/// Initial window size.
pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;

/// Spacing between footer controls.
pub const FOOTER_SPACING: u16 = 5;
