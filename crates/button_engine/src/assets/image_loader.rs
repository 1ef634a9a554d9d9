//! Image loading utilities for bitmap layers
//!
//! Every decoded image is normalised to straight-alpha RGBA8, the only pixel
//! format the compositor works with.

use std::path::Path;

use image::RgbaImage;

use crate::assets::AssetError;

/// Decoded bitmap ready for compositing
#[derive(Debug, Clone)]
pub struct ImageData {
    /// RGBA8 pixels
    pub pixels: RgbaImage,
}

impl ImageData {
    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        log::debug!("Loading image from: {:?}", path_ref);

        let img = image::open(path_ref)
            .map_err(|e| AssetError::LoadFailed(format!("{}: {}", path_ref.display(), e)))?;

        let pixels = img.to_rgba8();
        log::trace!("Loaded image {}x{} from {:?}", pixels.width(), pixels.height(), path_ref);

        Ok(Self { pixels })
    }

    /// Load image from memory (embedded resources, tests)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to load image from bytes: {}", e)))?;

        let pixels = img.to_rgba8();
        log::debug!("Loaded image {}x{} from memory", pixels.width(), pixels.height());

        Ok(Self { pixels })
    }

    /// Create a solid color image
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, image::Rgba(color)),
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

impl From<RgbaImage> for ImageData {
    fn from(pixels: RgbaImage) -> Self {
        Self { pixels }
    }
}
