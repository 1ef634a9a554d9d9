//! Gradient kinds, stop generation and color sampling

use std::fmt;

use crate::foundation::color::Color;
use crate::foundation::math::{project_onto_segment, Point2};
use crate::render::diagnostics::{emit, Diagnostic, DiagnosticSink};

/// Gradient type names in table order; index + 1 is the kind index
const GRADIENT_NAMES: [&str; 10] = [
    "sweep",
    "radial",
    "linearCLCR",
    "linearTLBR",
    "linearCTCB",
    "linearTRBL",
    "linearCRCL",
    "linearBRTL",
    "linearCBCT",
    "linearBLTR",
];

/// Kind of background fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GradientKind {
    /// No gradient, flat fill color
    #[default]
    Solid,
    /// Conical sweep around the center
    Sweep,
    /// Circular around a configurable center
    Radial,
    /// Center left to center right
    LeftToRight,
    /// Top left to bottom right
    TopLeftToBottomRight,
    /// Center top to center bottom
    TopToBottom,
    /// Top right to bottom left
    TopRightToBottomLeft,
    /// Center right to center left
    RightToLeft,
    /// Bottom right to top left
    BottomRightToTopLeft,
    /// Center bottom to center top
    BottomToTop,
    /// Bottom left to top right
    BottomLeftToTopRight,
}

impl GradientKind {
    /// All kinds in index order
    pub const ALL: [Self; 11] = [
        Self::Solid,
        Self::Sweep,
        Self::Radial,
        Self::LeftToRight,
        Self::TopLeftToBottomRight,
        Self::TopToBottom,
        Self::TopRightToBottomLeft,
        Self::RightToLeft,
        Self::BottomRightToTopLeft,
        Self::BottomToTop,
        Self::BottomLeftToTopRight,
    ];

    /// Resolve a gradient type name
    ///
    /// Matching is exact and case sensitive; anything unknown is solid.
    pub fn from_name(name: &str) -> Self {
        GRADIENT_NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .map_or(Self::Solid, |i| Self::ALL[i + 1])
    }

    /// Index of this kind, 0 for solid
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|kind| *kind == self).unwrap_or(0)
    }

    /// Type name of this kind, `None` for solid
    pub fn name(self) -> Option<&'static str> {
        self.index().checked_sub(1).map(|i| GRADIENT_NAMES[i])
    }

    /// Whether this is one of the eight linear directions
    pub const fn is_linear(self) -> bool {
        !matches!(self, Self::Solid | Self::Sweep | Self::Radial)
    }

    /// Start and end points of a linear gradient over a `width` x `height` region
    ///
    /// Returns `None` for non-linear kinds.
    pub fn linear_endpoints(self, width: f32, height: f32) -> Option<(Point2, Point2)> {
        let (w, h) = (width, height);
        let (cx, cy) = (w / 2.0, h / 2.0);
        let (start, end) = match self {
            Self::LeftToRight => ((0.0, cy), (w, cy)),
            Self::TopLeftToBottomRight => ((0.0, 0.0), (w, h)),
            Self::TopToBottom => ((cx, 0.0), (cx, h)),
            Self::TopRightToBottomLeft => ((w, 0.0), (0.0, h)),
            Self::RightToLeft => ((w, cy), (0.0, cy)),
            Self::BottomRightToTopLeft => ((w, h), (0.0, 0.0)),
            Self::BottomToTop => ((cx, h), (cx, 0.0)),
            Self::BottomLeftToTopRight => ((0.0, h), (w, 0.0)),
            Self::Solid | Self::Sweep | Self::Radial => return None,
        };
        Some((Point2::new(start.0, start.1), Point2::new(end.0, end.1)))
    }
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("solid"))
    }
}

/// Resolve a gradient type name, see [`GradientKind::from_name`]
pub fn resolve_gradient_type(name: &str) -> GradientKind {
    GradientKind::from_name(name)
}

/// One color stop, `position` in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient
    pub position: f32,
    /// Color at that position
    pub color: Color,
}

/// Colors used when fewer than two are configured
pub const FALLBACK_GRADIENT: [Color; 2] = [Color::GRAY, Color::WHITE];

/// Gradient colors with the two-color fallback applied
pub fn gradient_colors(configured: &[Color], sink: &mut dyn DiagnosticSink) -> Vec<Color> {
    if configured.len() < 2 {
        emit(sink, Diagnostic::GradientStopFallback { configured: configured.len() });
        return FALLBACK_GRADIENT.to_vec();
    }
    configured.to_vec()
}

/// Compute gradient stops for a `width` x `height` region
///
/// Stops are spaced `1 / n` apart starting at 0. Exactly two colors span the
/// whole range with the second stop pinned to 1.0. Past the last stop the
/// last color continues.
pub fn gradient_stops(
    configured: &[Color],
    width: u32,
    height: u32,
    sink: &mut dyn DiagnosticSink,
) -> Vec<GradientStop> {
    let colors = gradient_colors(configured, sink);
    let count = colors.len();

    if count == 2 {
        return vec![
            GradientStop { position: 0.0, color: colors[0] },
            GradientStop { position: 1.0, color: colors[1] },
        ];
    }

    // Spacing relative to the longer side reduces to 1 / count.
    let entity = width.max(height).max(1) as f32;
    let step = entity / count as f32 / entity;
    log::trace!("Gradient of {} stops, spacing {:.4}", count, step);

    colors
        .into_iter()
        .enumerate()
        .map(|(i, color)| GradientStop { position: i as f32 * step, color })
        .collect()
}

/// Color at parameter `t`, clamped to the first and last stop
pub fn sample_stops(stops: &[GradientStop], t: f32) -> Color {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Color::TRANSPARENT;
    };

    if t.is_nan() || t <= first.position {
        return first.color;
    }
    if t >= last.position {
        return last.color;
    }

    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.position {
            let span = b.position - a.position;
            if span <= f32::EPSILON {
                return b.color;
            }
            return a.color.lerp(b.color, (t - a.position) / span);
        }
    }

    last.color
}

/// Gradient parameter of a linear gradient at point `p`
pub fn linear_parameter(p: &Point2, start: &Point2, end: &Point2) -> f32 {
    project_onto_segment(p, start, end)
}

/// Gradient parameter of a radial gradient at point `p`
///
/// A non-positive radius puts every point past the last stop.
pub fn radial_parameter(p: &Point2, center: &Point2, radius: f32) -> f32 {
    if radius <= 0.0 {
        return 1.0;
    }
    (p - center).norm() / radius
}

/// Gradient parameter of a sweep gradient at point `p`
///
/// Angle 0 points along +x and grows clockwise in y-down pixel space.
pub fn sweep_parameter(p: &Point2, center: &Point2) -> f32 {
    let d = p - center;
    let angle = d.y.atan2(d.x).rem_euclid(std::f32::consts::TAU);
    angle / std::f32::consts::TAU
}
