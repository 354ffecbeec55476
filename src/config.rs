// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the application.

use std::path::PathBuf;

/// Global configuration for the application.
///
/// Values are in-memory defaults only; nothing is read from or written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory the folder dialog starts in.
    pub default_image_dir: Option<PathBuf>,
    /// Scale step factor for zoom (e.g., 1.1 = 10% per step).
    pub scale_step: f64,
    /// Minimum zoom scale (e.g., 0.1 = 10%).
    pub min_scale: f64,
    /// Maximum zoom scale (e.g., 8.0 = 800%).
    pub max_scale: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_image_dir: dirs::picture_dir().or_else(dirs::home_dir),
            scale_step: 1.1,
            min_scale: 0.1,
            max_scale: 8.0,
        }
    }
}
