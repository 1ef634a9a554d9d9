//! # Button Engine
//!
//! Compositing engine for multi-state touch-panel buttons.
//!
//! A [`ButtonObject`](model::ButtonObject) describes one button: its size and
//! an ordered list of visual states. Each state carries a flat fill or a
//! gradient, up to five bitmap layers, an optional chameleon stencil and a
//! custom layer order. The [`Compositor`](render::Compositor) rasterizes every
//! state into its own RGBA buffer.
//!
//! ## Features
//!
//! - **Draw order codes**: compact two-digit layer order strings with a safe default
//! - **Gradients**: radial, sweep and eight linear directions with any number of stops
//! - **Bitmap layers**: anchored, absolute or scaled placement, opacity, chameleon tinting
//! - **Diagnostics**: every recovered problem is logged and reported as a value
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use button_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApplicationConfig::default();
//!     let compositor = Compositor::new(FileImageSource::new(&config.assets));
//!
//!     let object = ButtonObject::load("power.ron")?;
//!     let mut diagnostics = Vec::new();
//!     for (state, buffer) in compositor.render_button(&object, &mut diagnostics)?.iter().enumerate() {
//!         buffer.save(format!("power_{}.png", state))?;
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod assets;
pub mod config;
pub mod core;
pub mod foundation;
pub mod model;
pub mod render;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, FileImageSource, ImageData, ImageSource, MemoryImageSource},
        core::config::{ApplicationConfig, AssetConfig, Config, ConfigError, EngineConfig, OutputConfig},
        foundation::color::Color,
        model::{BitmapLayer, ButtonObject, ButtonType, ChameleonImage, Justification, StateInstance},
        render::{
            Compositor, Diagnostic, DiagnosticSink, DrawOrder, GradientKind, LayerKind, LayerPainter,
            RasterBuffer, RenderError, Severity,
        },
    };
}
