//! Pixel surfaces produced by the compositor

use std::path::Path;

use image::{ImageResult, RgbaImage};

use crate::foundation::color::Color;

/// Mutable straight-alpha RGBA surface for one rendered state
///
/// Created transparent, written by the layer painters, then handed to the
/// caller. The engine keeps no reference after returning it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    image: RgbaImage,
}

impl RasterBuffer {
    /// Allocate a transparent buffer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Color::TRANSPARENT.to_rgba()),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// A zero-area buffer has nothing to paint into
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Color at `(x, y)`, panics when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        Color::from_rgba(*self.image.get_pixel(x, y))
    }

    /// Overwrite every pixel with `color`
    pub fn fill(&mut self, color: Color) {
        let px = color.to_rgba();
        for p in self.image.pixels_mut() {
            *p = px;
        }
    }

    /// Overwrite every pixel with `shade(x, y)`
    pub fn fill_with(&mut self, mut shade: impl FnMut(u32, u32) -> Color) {
        for (x, y, p) in self.image.enumerate_pixels_mut() {
            *p = shade(x, y).to_rgba();
        }
    }

    /// Whether every pixel equals `color`
    pub fn is_uniform(&self, color: Color) -> bool {
        let px = color.to_rgba();
        self.image.pixels().all(|p| *p == px)
    }

    /// Borrow the underlying image
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Mutably borrow the underlying image
    pub fn as_image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }

    /// Take ownership of the underlying image
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Write the buffer as an image file, format chosen by extension
    pub fn save(&self, path: impl AsRef<Path>) -> ImageResult<()> {
        self.image.save(path)
    }
}

impl From<RgbaImage> for RasterBuffer {
    fn from(image: RgbaImage) -> Self {
        Self { image }
    }
}
