//! Raster images as renderable figures

use crate::constants::MAX_IMAGE_PIXELS;
use crate::figure::Renderable;
use crate::types::*;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use std::path::Path;

/// A raster image with a physical resolution.
///
/// Its native size is the pixel size divided by `dpi`. Resizing keeps the
/// resolution and resamples the pixels when saved.
#[derive(Debug, Clone)]
pub struct ImageFigure {
    image: DynamicImage,
    dpi: f64,
    size_inches: (f64, f64),
}

impl ImageFigure {
    pub fn new(image: DynamicImage, dpi: f64) -> Result<Self> {
        if dpi <= 0.0 || !dpi.is_finite() {
            return Err(ConfigError::Invalid(format!("Image resolution must be positive, got {}", dpi)).into());
        }
        let size_inches = (image.width() as f64 / dpi, image.height() as f64 / dpi);
        Ok(Self {
            image,
            dpi,
            size_inches,
        })
    }

    /// Load an image file
    pub fn open(path: impl AsRef<Path>, dpi: f64) -> Result<Self> {
        Self::new(image::open(path)?, dpi)
    }

    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    /// Pixel size the image will be written at. Fails when the scaled image
    /// would exceed [`MAX_IMAGE_PIXELS`].
    pub fn pixel_size(&self) -> Result<(u32, u32)> {
        let (width, height) = self.size_inches;
        let pixels = (width * self.dpi).round().max(1.0) * (height * self.dpi).round().max(1.0);
        if !pixels.is_finite() || pixels > MAX_IMAGE_PIXELS as f64 {
            return Err(ReportError::Render(format!(
                "image of {}x{} inches at {} dpi exceeds {} pixels",
                width, height, self.dpi, MAX_IMAGE_PIXELS
            )));
        }
        Ok((to_pixels(width, self.dpi), to_pixels(height, self.dpi)))
    }
}

// Only called once the area is known to fit, so each side fits in u32
fn to_pixels(inches: f64, dpi: f64) -> u32 {
    (inches * dpi).round().max(1.0) as u32
}

impl Renderable for ImageFigure {
    fn size_inches(&self) -> (f64, f64) {
        self.size_inches
    }

    fn set_size_inches(&mut self, width: f64, height: f64) {
        self.size_inches = (width, height);
    }

    fn save(&mut self, path: &Path, format: &str) -> Result<()> {
        let image_format = ImageFormat::from_extension(format)
            .ok_or_else(|| ConfigError::Invalid(format!("Unsupported image format: {}", format)))?;

        let (width, height) = self.pixel_size()?;
        let resized = if (width, height) == (self.image.width(), self.image.height()) {
            self.image.clone()
        } else {
            self.image.resize_exact(width, height, FilterType::Lanczos3)
        };

        // JPEG has no alpha channel
        let resized = match image_format {
            ImageFormat::Jpeg => DynamicImage::ImageRgb8(resized.to_rgb8()),
            _ => resized,
        };

        resized.save_with_format(path, image_format)?;
        Ok(())
    }
}
