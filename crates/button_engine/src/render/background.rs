//! Background fill: flat color or multi-stop gradient

use crate::foundation::math::{pixel_center, Point2};
use crate::model::StateInstance;
use crate::render::diagnostics::DiagnosticSink;
use crate::render::gradient::{
    gradient_stops, linear_parameter, radial_parameter, resolve_gradient_type, sample_stops,
    sweep_parameter, GradientKind,
};
use crate::render::{RasterBuffer, RenderError};

/// Paint the background of `instance` over the whole buffer
///
/// Without a gradient type the buffer is filled with the video fill color
/// when set, else the fill color. A gradient whose type does not resolve is
/// painted flat with the fill color. Malformed gradients degrade through the
/// stop fallback instead of failing; the only error is a buffer with no area.
pub fn paint_background(
    buffer: &mut RasterBuffer,
    instance: &StateInstance,
    sink: &mut dyn DiagnosticSink,
) -> Result<(), RenderError> {
    if buffer.is_empty() {
        log::error!("Cannot paint background into an empty {}x{} buffer", buffer.width(), buffer.height());
        return Err(RenderError::EmptyTarget);
    }

    if instance.gradient_type.is_empty() {
        buffer.fill(instance.solid_fill());
        return Ok(());
    }

    paint_gradient(buffer, instance, sink);
    Ok(())
}

fn paint_gradient(buffer: &mut RasterBuffer, instance: &StateInstance, sink: &mut dyn DiagnosticSink) {
    let kind = resolve_gradient_type(&instance.gradient_type);
    if kind == GradientKind::Solid {
        log::debug!("Unknown gradient type '{}', painting flat", instance.gradient_type);
        buffer.fill(instance.fill_color);
        return;
    }

    let (width, height) = buffer.dimensions();
    let stops = gradient_stops(&instance.gradient_colors, width, height, sink);
    let (w, h) = (width as f32, height as f32);

    log::trace!("Painting {} gradient {}x{} with {} stops", kind, width, height, stops.len());

    match kind {
        GradientKind::Radial => {
            let center = Point2::new(
                w * instance.gradient_center_x / 100.0,
                h * instance.gradient_center_y / 100.0,
            );
            let radius = instance.gradient_radius;
            buffer.fill_with(|x, y| sample_stops(&stops, radial_parameter(&pixel_center(x, y), &center, radius)));
        }
        GradientKind::Sweep => {
            let center = Point2::new(w / 2.0, h / 2.0);
            buffer.fill_with(|x, y| sample_stops(&stops, sweep_parameter(&pixel_center(x, y), &center)));
        }
        linear => {
            let Some((start, end)) = linear.linear_endpoints(w, h) else {
                return;
            };
            buffer.fill_with(|x, y| sample_stops(&stops, linear_parameter(&pixel_center(x, y), &start, &end)));
        }
    }
}
