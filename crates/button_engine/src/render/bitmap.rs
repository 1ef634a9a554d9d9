//! Bitmap layer compositing
//!
//! Up to five bitmap layers are placed in list order onto a scratch layer the
//! size of the buffer, beneath them an optional tinted chameleon stencil. The
//! scratch layer then gets the instance's overall opacity and is blended onto
//! the buffer in one pass.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::assets::ImageSource;
use crate::foundation::color::Color;
use crate::model::{ChameleonImage, Justification, StateInstance, MAX_BITMAP_LAYERS};
use crate::render::diagnostics::{emit, Diagnostic, DiagnosticSink};
use crate::render::RasterBuffer;

/// Composite the bitmap layers of `instance` onto `buffer`
///
/// Layers whose image cannot be loaded are skipped and reported; the rest
/// are still drawn.
pub fn composite_bitmaps(
    buffer: &mut RasterBuffer,
    instance: &StateInstance,
    images: &dyn ImageSource,
    sink: &mut dyn DiagnosticSink,
) {
    if buffer.is_empty() {
        return;
    }

    let (width, height) = buffer.dimensions();
    let mut layer = RgbaImage::from_pixel(width, height, Color::TRANSPARENT.to_rgba());
    let mut drawn = 0usize;

    if let Some(chameleon) = &instance.chameleon {
        match &instance.border_style {
            Some(border) if instance.has_border() => {
                emit(sink, Diagnostic::ChameleonSuppressed { border: border.clone() });
            }
            _ => {
                if draw_chameleon(&mut layer, chameleon, images, sink) {
                    drawn += 1;
                }
            }
        }
    }

    for (slot, bitmap) in instance.bitmaps.iter().take(MAX_BITMAP_LAYERS).enumerate() {
        if bitmap.file.is_empty() {
            continue;
        }

        let image = match images.load(&bitmap.file) {
            Ok(data) => data.pixels,
            Err(e) => {
                emit(
                    sink,
                    Diagnostic::MissingBitmap { slot, file: bitmap.file.clone(), reason: e.to_string() },
                );
                continue;
            }
        };

        let image = if bitmap.opacity < u8::MAX {
            with_opacity(image, f32::from(bitmap.opacity) / 255.0)
        } else {
            image
        };

        log::trace!("Placing bitmap layer {} '{}' ({:?})", slot, bitmap.file, bitmap.justification);
        place(&mut layer, &image, bitmap.justification, bitmap.offset_x, bitmap.offset_y);
        drawn += 1;
    }

    if drawn == 0 {
        return;
    }

    if let Some(factor) = overall_opacity_factor(instance.overall_opacity) {
        layer = with_opacity(layer, factor);
    }

    blend_onto(buffer.as_image_mut(), &layer, 0, 0);
}

fn draw_chameleon(
    layer: &mut RgbaImage,
    chameleon: &ChameleonImage,
    images: &dyn ImageSource,
    sink: &mut dyn DiagnosticSink,
) -> bool {
    if chameleon.file.is_empty() {
        return false;
    }

    match images.load(&chameleon.file) {
        Ok(stencil) => {
            let tinted = tint_chameleon(&stencil.pixels, chameleon.foreground, chameleon.background);
            place(layer, &tinted, chameleon.justification, 0, 0);
            true
        }
        Err(e) => {
            emit(
                sink,
                Diagnostic::MissingChameleon { file: chameleon.file.clone(), reason: e.to_string() },
            );
            false
        }
    }
}

/// Recolor a chameleon stencil
///
/// Red selects `foreground`, green selects `background`, the contributions
/// add up and saturate. Alpha comes from the stencil.
pub fn tint_chameleon(stencil: &RgbaImage, foreground: Color, background: Color) -> RgbaImage {
    let mut out = stencil.clone();
    for px in out.pixels_mut() {
        let [r, g, _, a] = px.0;
        let mix = |fg: u8, bg: u8| -> u8 {
            let value = (u32::from(fg) * u32::from(r) + u32::from(bg) * u32::from(g)) / 255;
            value.min(255) as u8
        };
        px.0 = [
            mix(foreground.r, background.r),
            mix(foreground.g, background.g),
            mix(foreground.b, background.b),
            a,
        ];
    }
    out
}

/// Alpha multiplier for the instance-level opacity percentage
///
/// Negative values mean no blending pass; anything above 100 clamps.
pub fn overall_opacity_factor(percent: i32) -> Option<f32> {
    (percent >= 0).then(|| percent.min(100) as f32 / 100.0)
}

fn with_opacity(mut image: RgbaImage, factor: f32) -> RgbaImage {
    for px in image.pixels_mut() {
        px.0[3] = (f32::from(px.0[3]) * factor).round().clamp(0.0, 255.0) as u8;
    }
    image
}

/// Top-left position of a `size` image anchored inside `bounds`
///
/// Scaled justifications are centered here; their resize happens in
/// [`place`].
pub fn anchor_position(
    justification: Justification,
    bounds: (u32, u32),
    size: (u32, u32),
    offset: (i32, i32),
) -> (i64, i64) {
    let (bw, bh) = (i64::from(bounds.0), i64::from(bounds.1));
    let (w, h) = (i64::from(size.0), i64::from(size.1));
    let left = 0;
    let center_x = (bw - w) / 2;
    let right = bw - w;
    let top = 0;
    let center_y = (bh - h) / 2;
    let bottom = bh - h;

    match justification {
        Justification::Absolute => (i64::from(offset.0), i64::from(offset.1)),
        Justification::TopLeft => (left, top),
        Justification::TopCenter => (center_x, top),
        Justification::TopRight => (right, top),
        Justification::CenterLeft => (left, center_y),
        Justification::CenterMiddle | Justification::ScaleFit | Justification::ScaleAspect => {
            (center_x, center_y)
        }
        Justification::CenterRight => (right, center_y),
        Justification::BottomLeft => (left, bottom),
        Justification::BottomCenter => (center_x, bottom),
        Justification::BottomRight => (right, bottom),
    }
}

/// Size of an image scaled to fit `bounds`
pub fn scaled_size(justification: Justification, bounds: (u32, u32), size: (u32, u32)) -> (u32, u32) {
    match justification {
        Justification::ScaleFit => bounds,
        Justification::ScaleAspect => {
            let scale = f64::min(
                f64::from(bounds.0) / f64::from(size.0),
                f64::from(bounds.1) / f64::from(size.1),
            );
            let w = (f64::from(size.0) * scale).round().max(1.0) as u32;
            let h = (f64::from(size.1) * scale).round().max(1.0) as u32;
            (w.min(bounds.0), h.min(bounds.1))
        }
        _ => size,
    }
}

fn place(target: &mut RgbaImage, image: &RgbaImage, justification: Justification, offset_x: i32, offset_y: i32) {
    if image.width() == 0 || image.height() == 0 {
        return;
    }

    let bounds = target.dimensions();
    if justification.is_scaled() {
        let (w, h) = scaled_size(justification, bounds, image.dimensions());
        let resized = imageops::resize(image, w, h, FilterType::Triangle);
        let (x, y) = anchor_position(justification, bounds, (w, h), (0, 0));
        blend_onto(target, &resized, x, y);
    } else {
        let (x, y) = anchor_position(justification, bounds, image.dimensions(), (offset_x, offset_y));
        blend_onto(target, image, x, y);
    }
}

/// Straight-alpha source-over with rounding
///
/// An opaque destination stays opaque whatever the source alpha.
pub fn source_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let [sr, sg, sb, sa] = src.0.map(u32::from);
    let [dr, dg, db, da] = dst.0.map(u32::from);

    // Alpha scaled by 255 to keep the arithmetic exact
    let src_weight = sa * 255;
    let dst_weight = da * (255 - sa);
    let alpha = src_weight + dst_weight;
    if alpha == 0 {
        return Color::TRANSPARENT.to_rgba();
    }

    let mix = |s: u32, d: u32| -> u8 { ((s * src_weight + d * dst_weight + alpha / 2) / alpha).min(255) as u8 };
    Rgba([mix(sr, dr), mix(sg, dg), mix(sb, db), ((alpha + 127) / 255).min(255) as u8])
}

fn blend_onto(target: &mut RgbaImage, image: &RgbaImage, x: i64, y: i64) {
    let (tw, th) = target.dimensions();
    let x_range = x.max(0)..(x + i64::from(image.width())).min(i64::from(tw));
    let y_range = y.max(0)..(y + i64::from(image.height())).min(i64::from(th));

    for ty in y_range {
        for tx in x_range.clone() {
            let src = *image.get_pixel((tx - x) as u32, (ty - y) as u32);
            let dst = target.get_pixel_mut(tx as u32, ty as u32);
            *dst = source_over(src, *dst);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{ImageData, MemoryImageSource};
    use crate::model::BitmapLayer;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    fn images() -> MemoryImageSource {
        MemoryImageSource::new()
            .with_image("red4.png", ImageData::solid_color(4, 4, RED))
            .with_image("blue2.png", ImageData::solid_color(2, 2, BLUE))
            .with_image("wide.png", ImageData::solid_color(20, 10, BLUE))
    }

    fn instance_with(bitmaps: Vec<BitmapLayer>) -> StateInstance {
        StateInstance { bitmaps, ..Default::default() }
    }

    #[test]
    fn test_anchor_positions() {
        let bounds = (10, 8);
        let size = (4, 2);
        assert_eq!(anchor_position(Justification::TopLeft, bounds, size, (0, 0)), (0, 0));
        assert_eq!(anchor_position(Justification::TopRight, bounds, size, (0, 0)), (6, 0));
        assert_eq!(anchor_position(Justification::CenterMiddle, bounds, size, (0, 0)), (3, 3));
        assert_eq!(anchor_position(Justification::BottomCenter, bounds, size, (0, 0)), (3, 6));
        assert_eq!(anchor_position(Justification::BottomRight, bounds, size, (0, 0)), (6, 6));
        assert_eq!(anchor_position(Justification::Absolute, bounds, size, (-2, 5)), (-2, 5));
    }

    #[test]
    fn test_offset_ignored_unless_absolute() {
        assert_eq!(anchor_position(Justification::TopLeft, (10, 10), (2, 2), (7, 7)), (0, 0));
    }

    #[test]
    fn test_scaled_sizes() {
        assert_eq!(scaled_size(Justification::ScaleFit, (30, 10), (5, 5)), (30, 10));
        assert_eq!(scaled_size(Justification::ScaleAspect, (30, 10), (5, 5)), (10, 10));
        assert_eq!(scaled_size(Justification::ScaleAspect, (40, 40), (20, 10)), (40, 20));
        assert_eq!(scaled_size(Justification::TopLeft, (40, 40), (20, 10)), (20, 10));
    }

    #[test]
    fn test_layers_drawn_in_list_order() {
        let mut buffer = RasterBuffer::new(4, 4);
        let instance = instance_with(vec![
            BitmapLayer::new("red4.png", Justification::TopLeft),
            BitmapLayer::new("blue2.png", Justification::TopLeft),
        ]);
        composite_bitmaps(&mut buffer, &instance, &images(), &mut ());
        assert_eq!(buffer.pixel(0, 0), Color::from_rgba(image::Rgba(BLUE)));
        assert_eq!(buffer.pixel(3, 3), Color::from_rgba(image::Rgba(RED)));
    }

    #[test]
    fn test_absolute_offset() {
        let mut buffer = RasterBuffer::new(6, 6);
        let instance = instance_with(vec![BitmapLayer::absolute("blue2.png", 3, 4)]);
        composite_bitmaps(&mut buffer, &instance, &images(), &mut ());
        assert_eq!(buffer.pixel(3, 4).b, 255);
        assert_eq!(buffer.pixel(4, 5).b, 255);
        assert_eq!(buffer.pixel(2, 4), Color::TRANSPARENT);
    }

    #[test]
    fn test_scale_fit_covers_buffer() {
        let mut buffer = RasterBuffer::new(12, 7);
        let instance = instance_with(vec![BitmapLayer::new("blue2.png", Justification::ScaleFit)]);
        composite_bitmaps(&mut buffer, &instance, &images(), &mut ());
        assert!(buffer.is_uniform(Color::rgb(0, 0, 255)));
    }

    #[test]
    fn test_scale_aspect_letterboxes() {
        let mut buffer = RasterBuffer::new(10, 10);
        let instance = instance_with(vec![BitmapLayer::new("wide.png", Justification::ScaleAspect)]);
        composite_bitmaps(&mut buffer, &instance, &images(), &mut ());
        // 20x10 scaled into 10x10 is 10x5, centered vertically
        assert_eq!(buffer.pixel(5, 0), Color::TRANSPARENT);
        assert_eq!(buffer.pixel(5, 5), Color::rgb(0, 0, 255));
        assert_eq!(buffer.pixel(5, 9), Color::TRANSPARENT);
    }

    #[test]
    fn test_missing_bitmap_is_skipped() {
        let mut buffer = RasterBuffer::new(4, 4);
        let instance = instance_with(vec![
            BitmapLayer::new("gone.png", Justification::TopLeft),
            BitmapLayer::new("red4.png", Justification::TopLeft),
        ]);
        let mut sink = Vec::new();
        composite_bitmaps(&mut buffer, &instance, &images(), &mut sink);
        assert!(buffer.is_uniform(Color::rgb(255, 0, 0)));
        assert_eq!(sink.len(), 1);
        assert!(matches!(&sink[0], Diagnostic::MissingBitmap { slot: 0, file, .. } if file == "gone.png"));
    }

    #[test]
    fn test_only_first_five_layers_drawn() {
        let mut bitmaps = vec![BitmapLayer::new("red4.png", Justification::TopLeft); MAX_BITMAP_LAYERS];
        bitmaps.push(BitmapLayer::new("blue2.png", Justification::TopLeft));
        let mut buffer = RasterBuffer::new(4, 4);
        composite_bitmaps(&mut buffer, &instance_with(bitmaps), &images(), &mut ());
        assert!(buffer.is_uniform(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn test_overall_opacity_factor() {
        assert_eq!(overall_opacity_factor(-1), None);
        assert_eq!(overall_opacity_factor(-7), None);
        assert_eq!(overall_opacity_factor(0), Some(0.0));
        assert_eq!(overall_opacity_factor(100), Some(1.0));
        assert_eq!(overall_opacity_factor(250), Some(1.0));
    }

    #[test]
    fn test_zero_opacity_hides_bitmaps() {
        let mut buffer = RasterBuffer::new(4, 4);
        buffer.fill(Color::rgb(0, 255, 0));
        let mut instance = instance_with(vec![BitmapLayer::new("red4.png", Justification::TopLeft)]);
        instance.overall_opacity = 0;
        composite_bitmaps(&mut buffer, &instance, &images(), &mut ());
        assert!(buffer.is_uniform(Color::rgb(0, 255, 0)));
    }

    #[test]
    fn test_half_opacity_blends() {
        let mut buffer = RasterBuffer::new(4, 4);
        buffer.fill(Color::BLACK);
        let mut instance = instance_with(vec![BitmapLayer::new("red4.png", Justification::TopLeft)]);
        instance.overall_opacity = 50;
        composite_bitmaps(&mut buffer, &instance, &images(), &mut ());
        let px = buffer.pixel(1, 1);
        assert!(px.r > 110 && px.r < 145, "expected roughly half red, got {}", px);
        assert_eq!(px.a, 255);
    }

    #[test]
    fn test_translucent_source_keeps_opaque_destination_opaque() {
        let dst = Color::BLACK.to_rgba();
        for a in 0..=255u8 {
            let out = source_over(Rgba([255, 0, 0, a]), dst);
            assert_eq!(out.0[3], 255, "source alpha {} left {:?}", a, out);
        }
        assert_eq!(source_over(Rgba([255, 0, 0, 128]), dst).0, [128, 0, 0, 255]);
    }

    #[test]
    fn test_source_over_onto_transparent_copies_source() {
        let src = Rgba([10, 20, 30, 77]);
        assert_eq!(source_over(src, Color::TRANSPARENT.to_rgba()), src);
        assert_eq!(source_over(Color::TRANSPARENT.to_rgba(), Color::TRANSPARENT.to_rgba()).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_layer_opacity_over_opaque_fill() {
        for opacity in [1u8, 64, 128, 132, 200, 254] {
            let mut buffer = RasterBuffer::new(4, 4);
            buffer.fill(Color::BLACK);
            let mut layer = BitmapLayer::new("red4.png", Justification::TopLeft);
            layer.opacity = opacity;
            composite_bitmaps(&mut buffer, &instance_with(vec![layer]), &images(), &mut ());

            let px = buffer.pixel(2, 2);
            assert_eq!(px.a, 255, "opacity {} left the button translucent: {}", opacity, px);
            assert!(px.r.abs_diff(opacity) <= 1, "opacity {} gave {}", opacity, px);
        }
    }

    #[test]
    fn test_layer_opacity_over_transparent_buffer() {
        let mut buffer = RasterBuffer::new(4, 4);
        let mut layer = BitmapLayer::new("red4.png", Justification::TopLeft);
        layer.opacity = 100;
        composite_bitmaps(&mut buffer, &instance_with(vec![layer]), &images(), &mut ());
        assert!(buffer.is_uniform(Color::rgba(255, 0, 0, 100)));
    }

    #[test]
    fn test_chameleon_uses_its_own_justification() {
        let images = images().with_image("stencil.png", ImageData::solid_color(2, 2, [255, 0, 0, 255]));
        let instance = StateInstance {
            chameleon: Some(ChameleonImage {
                file: "stencil.png".to_string(),
                foreground: Color::rgb(0, 0, 255),
                background: Color::WHITE,
                justification: Justification::BottomRight,
            }),
            ..Default::default()
        };
        let mut buffer = RasterBuffer::new(4, 4);
        composite_bitmaps(&mut buffer, &instance, &images, &mut ());

        assert_eq!(buffer.pixel(3, 3), Color::rgb(0, 0, 255));
        assert_eq!(buffer.pixel(2, 2), Color::rgb(0, 0, 255));
        assert_eq!(buffer.pixel(1, 1), Color::TRANSPARENT);
        assert_eq!(buffer.pixel(0, 3), Color::TRANSPARENT);
    }

    #[test]
    fn test_missing_chameleon_reported_and_layers_still_drawn() {
        let instance = StateInstance {
            chameleon: Some(ChameleonImage {
                file: "no_stencil.png".to_string(),
                foreground: Color::BLACK,
                background: Color::WHITE,
                justification: Justification::CenterMiddle,
            }),
            bitmaps: vec![BitmapLayer::new("red4.png", Justification::TopLeft)],
            ..Default::default()
        };
        let mut buffer = RasterBuffer::new(4, 4);
        let mut sink = Vec::new();
        composite_bitmaps(&mut buffer, &instance, &images(), &mut sink);

        assert!(buffer.is_uniform(Color::rgb(255, 0, 0)));
        assert_eq!(sink.len(), 1);
        assert!(matches!(&sink[0], Diagnostic::MissingChameleon { file, .. } if file == "no_stencil.png"));
    }

    #[test]
    fn test_tint_chameleon() {
        let mut stencil = RgbaImage::new(3, 1);
        stencil.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        stencil.put_pixel(1, 0, image::Rgba([0, 255, 0, 128]));
        stencil.put_pixel(2, 0, image::Rgba([255, 255, 0, 255]));
        let tinted = tint_chameleon(&stencil, Color::rgb(200, 0, 0), Color::rgb(0, 100, 200));
        assert_eq!(tinted.get_pixel(0, 0).0, [200, 0, 0, 255]);
        assert_eq!(tinted.get_pixel(1, 0).0, [0, 100, 200, 128]);
        assert_eq!(tinted.get_pixel(2, 0).0, [200, 100, 200, 255]);
    }
}
