// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Application state.

use std::path::Path;

use cosmic::iced::keyboard::Modifiers;

use crate::app::document::RenderedImage;
use crate::app::document::file::ImageSet;
use crate::app::document::raster::RasterDocument;
use crate::app::view::crop::CropTracker;
use crate::config::AppConfig;
use crate::constant::SCALE_EPSILON;
use crate::fl;

// =============================================================================
// Zoom
// =============================================================================

/// Display zoom multiplier, changed in fixed steps and clamped to a range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom {
    factor: f64,
    step: f64,
    min: f64,
    max: f64,
}

impl Zoom {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            factor: 1.0,
            step: config.scale_step,
            min: config.min_scale,
            max: config.max_scale,
        }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Multiply by the step. Returns `false` if already at the upper bound.
    pub fn zoom_in(&mut self) -> bool {
        self.set(self.factor * self.step)
    }

    /// Divide by the step. Returns `false` if already at the lower bound.
    pub fn zoom_out(&mut self) -> bool {
        self.set(self.factor / self.step)
    }

    pub fn reset(&mut self) -> bool {
        self.set(1.0)
    }

    fn set(&mut self, factor: f64) -> bool {
        let clamped = factor.clamp(self.min, self.max);
        if (clamped - self.factor).abs() < SCALE_EPSILON {
            return false;
        }
        self.factor = clamped;
        true
    }
}

// =============================================================================
// Model
// =============================================================================

pub struct AppModel {
    // Navigation.
    pub images: ImageSet,

    // Document.
    pub document: Option<RasterDocument>,
    pub rendered: Option<RenderedImage>,

    // View.
    pub zoom: Zoom,

    // Tools.
    pub crop: CropTracker,
    pub modifiers: Modifiers,

    // UI state.
    pub error: Option<String>,
}

impl AppModel {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            images: ImageSet::new(),
            document: None,
            rendered: None,
            zoom: Zoom::new(config),
            crop: CropTracker::default(),
            modifiers: Modifiers::empty(),
            error: None,
        }
    }

    pub fn set_error<S: Into<String>>(&mut self, msg: S) {
        self.error = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Rebuild the image set from `directory` and show its first image.
    pub fn open_directory(&mut self, directory: &Path) {
        self.clear_error();

        match self.images.load_directory(directory) {
            Ok(()) => {
                log::info!(
                    "Loaded {} image(s) from {}",
                    self.images.len(),
                    directory.display()
                );
            }
            Err(e) => {
                log::error!("{e:#}");
                self.set_error(fl!("directory-error", path = directory.display().to_string()));
            }
        }

        self.load_current();
    }

    pub fn next_image(&mut self) {
        if self.images.next().is_some() {
            log::debug!("Next image: index {}", self.images.current_index());
            self.load_current();
        }
    }

    pub fn prev_image(&mut self) {
        if self.images.previous().is_some() {
            log::debug!("Previous image: index {}", self.images.current_index());
            self.load_current();
        }
    }

    pub fn zoom_in(&mut self) {
        if self.zoom.zoom_in() {
            self.render_current();
        }
    }

    pub fn zoom_out(&mut self) {
        if self.zoom.zoom_out() {
            self.render_current();
        }
    }

    pub fn zoom_reset(&mut self) {
        if self.zoom.reset() {
            self.render_current();
        }
    }

    /// Decode the image at the current index and render it.
    ///
    /// A decode failure leaves the model without an image.
    fn load_current(&mut self) {
        self.document = None;
        self.rendered = None;

        let Some(path) = self.images.current().map(Path::to_path_buf) else {
            return;
        };

        match RasterDocument::open(&path) {
            Ok(doc) => {
                self.clear_error();
                self.document = Some(doc);
                self.render_current();
            }
            Err(e) => {
                log::warn!("Failed to decode {}: {}", path.display(), e);
                self.set_error(fl!("decode-error", path = path.display().to_string()));
            }
        }
    }

    /// Rescale the decoded image for the current zoom factor.
    ///
    /// A render that exceeds the size caps leaves the model without an image.
    fn render_current(&mut self) {
        log::debug!("Rendering at zoom {:.3}", self.zoom.factor());
        self.rendered = None;

        let Some(doc) = &self.document else {
            return;
        };

        match doc.render(self.zoom.factor()) {
            Ok(rendered) => {
                self.rendered = Some(rendered);
                self.clear_error();
            }
            Err(e) => {
                log::warn!("{e:#}");
                let name = self.current_name().unwrap_or_default();
                self.set_error(fl!("render-error", path = name));
            }
        }
    }

    /// File name of the displayed image.
    pub fn current_name(&self) -> Option<String> {
        self.images
            .current()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
    }

    /// One-based position of the current image and the set size.
    pub fn position(&self) -> Option<(usize, usize)> {
        if self.images.is_empty() {
            None
        } else {
            Some((self.images.current_index() + 1, self.images.len()))
        }
    }
}
