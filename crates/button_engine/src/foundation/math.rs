//! Math utilities and types
//!
//! Gradient geometry is computed in continuous pixel space: the top-left
//! corner of the buffer is `(0, 0)` and pixel `(x, y)` is sampled at its
//! center `(x + 0.5, y + 0.5)`.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Center of the pixel at integer coordinates `(x, y)`
#[inline]
pub fn pixel_center(x: u32, y: u32) -> Point2 {
    Point2::new(x as f32 + 0.5, y as f32 + 0.5)
}

/// Projection parameter of `p` onto the segment `start -> end`
///
/// Returns 0.0 at `start`, 1.0 at `end`, unclamped elsewhere. A degenerate
/// segment projects everything to 0.0.
pub fn project_onto_segment(p: &Point2, start: &Point2, end: &Point2) -> f32 {
    let axis: Vec2 = end - start;
    let len_sq = axis.norm_squared();
    if len_sq <= f32::EPSILON {
        return 0.0;
    }
    (p - start).dot(&axis) / len_sq
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pixel_center() {
        let p = pixel_center(3, 7);
        assert_relative_eq!(p.x, 3.5);
        assert_relative_eq!(p.y, 7.5);
    }

    #[test]
    fn test_projection_endpoints() {
        let start = Point2::new(0.0, 5.0);
        let end = Point2::new(10.0, 5.0);
        assert_relative_eq!(project_onto_segment(&start, &start, &end), 0.0);
        assert_relative_eq!(project_onto_segment(&end, &start, &end), 1.0);
        assert_relative_eq!(project_onto_segment(&Point2::new(5.0, 0.0), &start, &end), 0.5);
    }

    #[test]
    fn test_projection_degenerate_segment() {
        let p = Point2::new(1.0, 1.0);
        assert_relative_eq!(project_onto_segment(&Point2::new(4.0, 4.0), &p, &p), 0.0);
    }
}
