//! Button compositor
//!
//! Renders every state of a [`ButtonObject`] independently: allocate a
//! transparent buffer of the object's size, resolve the state's draw order and
//! run the layer painters slot by slot. Layer failures are reported and
//! skipped; only an object without area aborts the render.

use std::collections::HashMap;

use crate::assets::ImageSource;
use crate::model::{ButtonObject, StateInstance};
use crate::render::background::paint_background;
use crate::render::bitmap::composite_bitmaps;
use crate::render::diagnostics::{emit, Diagnostic, DiagnosticSink};
use crate::render::draw_order::{DrawOrder, LayerKind};
use crate::render::{RasterBuffer, RenderError};

/// Paints a layer the engine does not draw itself (icon, text, border)
pub trait LayerPainter {
    /// Paint this layer of `instance` into `buffer`
    fn paint(&self, buffer: &mut RasterBuffer, instance: &StateInstance, sink: &mut dyn DiagnosticSink);
}

impl<F> LayerPainter for F
where
    F: Fn(&mut RasterBuffer, &StateInstance, &mut dyn DiagnosticSink),
{
    fn paint(&self, buffer: &mut RasterBuffer, instance: &StateInstance, sink: &mut dyn DiagnosticSink) {
        self(buffer, instance, sink);
    }
}

/// Renders button objects into one raster buffer per state
pub struct Compositor {
    images: Box<dyn ImageSource>,
    painters: HashMap<LayerKind, Box<dyn LayerPainter>>,
}

impl Compositor {
    /// Create a compositor loading bitmaps from `images`
    pub fn new(images: impl ImageSource + 'static) -> Self {
        Self {
            images: Box::new(images),
            painters: HashMap::new(),
        }
    }

    /// Register a painter for the icon, text or border layer
    ///
    /// Fill and bitmap layers are always painted by the engine; a painter
    /// registered for them (or for `None`) is ignored.
    pub fn with_painter(mut self, kind: LayerKind, painter: impl LayerPainter + 'static) -> Self {
        match kind {
            LayerKind::Icon | LayerKind::Text | LayerKind::Border => {
                self.painters.insert(kind, Box::new(painter));
            }
            LayerKind::None | LayerKind::Fill | LayerKind::Bitmap => {
                log::warn!("Ignoring painter for built-in layer '{}'", kind);
            }
        }
        self
    }

    /// Render every state of `object`, reporting recovered problems to `sink`
    ///
    /// Returns exactly one buffer per state, each `object.width` x
    /// `object.height`. Fails without partial output when the object has no
    /// area.
    pub fn render_button(
        &self,
        object: &ButtonObject,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Vec<RasterBuffer>, RenderError> {
        if object.width == 0 || object.height == 0 {
            emit(
                sink,
                Diagnostic::MissingSurface {
                    object: object.name.clone(),
                    width: object.width,
                    height: object.height,
                },
            );
            return Err(RenderError::MissingSurface {
                object: object.name.clone(),
                width: object.width,
                height: object.height,
            });
        }

        log::debug!(
            "Rendering '{}' (id {}): {} state(s) at {}x{}",
            object.name,
            object.id,
            object.states.len(),
            object.width,
            object.height
        );

        Ok(object
            .states
            .iter()
            .enumerate()
            .map(|(index, instance)| {
                log::trace!("Rendering state {} of '{}'", index, object.name);
                self.render_instance(object.width, object.height, instance, sink)
            })
            .collect())
    }

    /// Render with diagnostics going to the log only
    pub fn render(&self, object: &ButtonObject) -> Result<Vec<RasterBuffer>, RenderError> {
        self.render_button(object, &mut ())
    }

    /// Render a single state into a fresh `width` x `height` buffer
    pub fn render_instance(
        &self,
        width: u32,
        height: u32,
        instance: &StateInstance,
        sink: &mut dyn DiagnosticSink,
    ) -> RasterBuffer {
        let mut buffer = RasterBuffer::new(width, height);
        let order = DrawOrder::resolve(instance.draw_order.as_deref().unwrap_or_default(), sink);

        for kind in order.layers() {
            self.paint_layer(kind, &mut buffer, instance, sink);
        }

        buffer
    }

    fn paint_layer(
        &self,
        kind: LayerKind,
        buffer: &mut RasterBuffer,
        instance: &StateInstance,
        sink: &mut dyn DiagnosticSink,
    ) {
        match kind {
            LayerKind::Fill => {
                if let Err(e) = paint_background(buffer, instance, sink) {
                    log::error!("Background not painted: {}", e);
                }
            }
            LayerKind::Bitmap => composite_bitmaps(buffer, instance, self.images.as_ref(), sink),
            LayerKind::Icon | LayerKind::Text | LayerKind::Border => match self.painters.get(&kind) {
                Some(painter) => painter.paint(buffer, instance, sink),
                None => log::trace!("No painter for '{}' layer, skipping", kind),
            },
            LayerKind::None => {}
        }
    }
}
