// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/raster.rs

use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageReader, imageops::FilterType};

use super::RenderedImage;

/// Represents a decoded raster image (PNG, JPEG).
pub struct RasterDocument {
    /// The decoded source image at native resolution.
    document: DynamicImage,
}

impl RasterDocument {
    /// Load a raster document from disk.
    pub fn open(path: &Path) -> image::ImageResult<Self> {
        let document = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        Ok(Self { document })
    }

    /// Returns the native pixel dimensions (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.document.dimensions()
    }

    /// Scale the document for display at `zoom` using bilinear filtering.
    ///
    /// Fails without allocating when the target size exceeds the render caps.
    pub fn render(&self, zoom: f64) -> anyhow::Result<RenderedImage> {
        let (w, h) = self.dimensions();
        let (width, height) = super::target_size(w, h, zoom);

        if !super::within_render_limits(width, height) {
            anyhow::bail!("Render size {width}x{height} for {w}x{h} image exceeds limits");
        }

        let scaled = self.document.resize_exact(width, height, FilterType::Triangle);

        Ok(RenderedImage {
            handle: super::create_image_handle(&scaled),
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use tempfile::tempdir;

    #[test]
    fn open_and_render_scales_to_display_height() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("wide.png");
        RgbImage::new(200, 100).save(&path).expect("failed to write png");

        let doc = RasterDocument::open(&path).expect("decode failed");
        assert_eq!(doc.dimensions(), (200, 100));

        let rendered = doc.render(1.0).expect("render failed");
        assert_eq!((rendered.width, rendered.height), (1000, 500));

        let rendered = doc.render(0.5).expect("render failed");
        assert_eq!((rendered.width, rendered.height), (500, 250));
    }

    #[test]
    fn render_refuses_oversized_targets() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("strip.png");
        RgbImage::new(10_000, 1).save(&path).expect("failed to write png");

        let doc = RasterDocument::open(&path).expect("decode failed");
        let err = doc.render(1.0).expect_err("render should be refused");
        assert!(err.to_string().contains("exceeds limits"));
    }

    #[test]
    fn open_rejects_non_image_data() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"not really a jpeg").expect("failed to write file");

        assert!(RasterDocument::open(&path).is_err());
    }

    #[test]
    fn open_reports_missing_file() {
        let dir = tempdir().expect("failed to create temp dir");
        assert!(RasterDocument::open(&dir.path().join("missing.png")).is_err());
    }
}
