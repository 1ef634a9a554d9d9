//! Asset management system
//!
//! Bitmap layers name their images; an [`ImageSource`] turns the name into
//! decoded pixels. The compositor only depends on the trait, so the editor
//! can hand in its own resource store while the command line tool and the
//! tests use [`FileImageSource`] and [`MemoryImageSource`].

pub mod image_loader;

pub use image_loader::ImageData;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::config::AssetConfig;

/// Supplies decoded images for bitmap layers
pub trait ImageSource {
    /// Load the image referenced by `name`
    fn load(&self, name: &str) -> Result<ImageData, AssetError>;
}

/// Resolves file names against the configured search paths
#[derive(Debug, Clone, Default)]
pub struct FileImageSource {
    search_paths: Vec<PathBuf>,
}

impl FileImageSource {
    /// Create a source from asset configuration
    pub fn new(config: &AssetConfig) -> Self {
        Self {
            search_paths: config.search_paths.clone(),
        }
    }

    /// Locate `name` on disk
    ///
    /// Absolute paths are used as-is; relative names are tried against each
    /// search path in order, then against the working directory.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let path = Path::new(name);
        if path.is_absolute() {
            return path.exists().then(|| path.to_path_buf());
        }

        self.search_paths
            .iter()
            .map(|dir| dir.join(path))
            .find(|candidate| candidate.exists())
            .or_else(|| path.exists().then(|| path.to_path_buf()))
    }
}

impl ImageSource for FileImageSource {
    fn load(&self, name: &str) -> Result<ImageData, AssetError> {
        let path = self
            .resolve(name)
            .ok_or_else(|| AssetError::NotFound(name.to_string()))?;
        ImageData::from_file(path)
    }
}

/// Named in-memory images
#[derive(Debug, Clone, Default)]
pub struct MemoryImageSource {
    images: HashMap<String, ImageData>,
}

impl MemoryImageSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image under `name`, replacing any previous one
    pub fn insert(&mut self, name: impl Into<String>, image: impl Into<ImageData>) {
        self.images.insert(name.into(), image.into());
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with_image(mut self, name: impl Into<String>, image: impl Into<ImageData>) -> Self {
        self.insert(name, image);
        self
    }
}

impl ImageSource for MemoryImageSource {
    fn load(&self, name: &str) -> Result<ImageData, AssetError> {
        self.images
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
    }
}

/// Asset errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Asset loading failed
    #[error("Asset loading failed: {0}")]
    LoadFailed(String),
}
