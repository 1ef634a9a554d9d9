//! Button rendering
//!
//! The [`Compositor`] turns each state of a button object into a
//! [`RasterBuffer`] by painting the layers named by the state's resolved
//! [`DrawOrder`]:
//!
//! - fill: [`background::paint_background`]
//! - bitmap: [`bitmap::composite_bitmaps`]
//! - icon, text, border: caller-supplied [`LayerPainter`]s, no-ops otherwise

pub mod background;
pub mod bitmap;
pub mod compositor;
pub mod diagnostics;
pub mod draw_order;
pub mod gradient;
pub mod raster;


pub use background::paint_background;
pub use bitmap::composite_bitmaps;
pub use compositor::{Compositor, LayerPainter};
pub use diagnostics::{Diagnostic, DiagnosticSink, Severity};
pub use draw_order::{DrawOrder, LayerKind, DRAW_ORDER_SLOTS};
pub use gradient::{gradient_stops, resolve_gradient_type, GradientKind, GradientStop};
pub use raster::RasterBuffer;

use thiserror::Error;

/// Rendering errors
///
/// Only a missing drawing surface fails a render; every other problem is
/// recovered and reported as a [`Diagnostic`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The object has no area to allocate a buffer for
    #[error("Object '{object}' has no drawable surface ({width}x{height})")]
    MissingSurface {
        /// Object name
        object: String,
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// Painting was attempted on a zero-area buffer
    #[error("Render target has no area")]
    EmptyTarget,
}
