//! State instances and their bitmap layers

use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;

/// Maximum number of bitmap layers drawn per instance
pub const MAX_BITMAP_LAYERS: usize = 5;

/// Placement rule for a bitmap inside the button bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justification {
    /// Place at the layer's offset verbatim
    Absolute,
    /// Top left corner
    TopLeft,
    /// Top edge, horizontally centered
    TopCenter,
    /// Top right corner
    TopRight,
    /// Left edge, vertically centered
    CenterLeft,
    /// Centered on both axes
    #[default]
    CenterMiddle,
    /// Right edge, vertically centered
    CenterRight,
    /// Bottom left corner
    BottomLeft,
    /// Bottom edge, horizontally centered
    BottomCenter,
    /// Bottom right corner
    BottomRight,
    /// Stretch to the button bounds
    ScaleFit,
    /// Scale to the largest size that fits, keeping aspect ratio, centered
    ScaleAspect,
}

impl Justification {
    /// Map the numeric encoding (0 absolute, 1..=9 anchors, 10 fit, 11 aspect)
    ///
    /// Unknown codes fall back to absolute placement.
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::TopLeft,
            2 => Self::TopCenter,
            3 => Self::TopRight,
            4 => Self::CenterLeft,
            5 => Self::CenterMiddle,
            6 => Self::CenterRight,
            7 => Self::BottomLeft,
            8 => Self::BottomCenter,
            9 => Self::BottomRight,
            10 => Self::ScaleFit,
            11 => Self::ScaleAspect,
            _ => Self::Absolute,
        }
    }

    /// Numeric encoding of this justification
    pub const fn code(self) -> i32 {
        match self {
            Self::Absolute => 0,
            Self::TopLeft => 1,
            Self::TopCenter => 2,
            Self::TopRight => 3,
            Self::CenterLeft => 4,
            Self::CenterMiddle => 5,
            Self::CenterRight => 6,
            Self::BottomLeft => 7,
            Self::BottomCenter => 8,
            Self::BottomRight => 9,
            Self::ScaleFit => 10,
            Self::ScaleAspect => 11,
        }
    }

    /// Whether the image is resized rather than positioned
    pub const fn is_scaled(self) -> bool {
        matches!(self, Self::ScaleFit | Self::ScaleAspect)
    }
}

/// One bitmap layer of a state instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BitmapLayer {
    /// Image reference handed to the image source; empty means unused
    pub file: String,
    /// Placement rule
    pub justification: Justification,
    /// Horizontal offset, only used with [`Justification::Absolute`]
    pub offset_x: i32,
    /// Vertical offset, only used with [`Justification::Absolute`]
    pub offset_y: i32,
    /// Layer opacity, 255 leaves the image unchanged
    pub opacity: u8,
}

impl BitmapLayer {
    /// Layer drawing `file` with the given justification
    pub fn new(file: impl Into<String>, justification: Justification) -> Self {
        Self {
            file: file.into(),
            justification,
            ..Default::default()
        }
    }

    /// Layer drawing `file` at an absolute offset
    pub fn absolute(file: impl Into<String>, offset_x: i32, offset_y: i32) -> Self {
        Self {
            file: file.into(),
            justification: Justification::Absolute,
            offset_x,
            offset_y,
            opacity: 255,
        }
    }
}

impl Default for BitmapLayer {
    fn default() -> Self {
        Self {
            file: String::new(),
            justification: Justification::CenterMiddle,
            offset_x: 0,
            offset_y: 0,
            opacity: 255,
        }
    }
}

/// Grayscale stencil recolored at render time
///
/// The red channel of each stencil pixel weights `foreground`, the green
/// channel weights `background`; alpha is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChameleonImage {
    /// Stencil image reference
    pub file: String,
    /// Color selected by the red channel
    pub foreground: Color,
    /// Color selected by the green channel
    pub background: Color,
    /// Placement rule for the stencil
    #[serde(default)]
    pub justification: Justification,
}

/// One visual state of a button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateInstance {
    /// Custom layer order code, `None` selects the default order
    pub draw_order: Option<String>,
    /// Flat fill color
    pub fill_color: Color,
    /// Video fill color, takes priority over `fill_color` for solid fills
    pub video_fill: Option<Color>,
    /// Gradient type name; empty means flat fill
    pub gradient_type: String,
    /// Gradient stop colors in order
    pub gradient_colors: Vec<Color>,
    /// Radial gradient center, percent of width
    pub gradient_center_x: f32,
    /// Radial gradient center, percent of height
    pub gradient_center_y: f32,
    /// Radial gradient radius in pixels
    pub gradient_radius: f32,
    /// Bitmap layers, at most [`MAX_BITMAP_LAYERS`] are drawn
    pub bitmaps: Vec<BitmapLayer>,
    /// Chameleon stencil, ignored when a border style is set
    pub chameleon: Option<ChameleonImage>,
    /// Border style name
    pub border_style: Option<String>,
    /// Overall bitmap opacity in percent, -1 disables the blending pass
    pub overall_opacity: i32,
    /// Label text, drawn by an external text painter
    pub text: String,
}

impl StateInstance {
    /// Flat-filled instance
    pub fn filled(color: Color) -> Self {
        Self {
            fill_color: color,
            ..Default::default()
        }
    }

    /// Whether a non-empty border style is set
    pub fn has_border(&self) -> bool {
        self.border_style.as_deref().is_some_and(|s| !s.trim().is_empty())
    }

    /// Color used for a solid fill
    pub fn solid_fill(&self) -> Color {
        self.video_fill.unwrap_or(self.fill_color)
    }
}

impl Default for StateInstance {
    fn default() -> Self {
        Self {
            draw_order: None,
            fill_color: Color::TRANSPARENT,
            video_fill: None,
            gradient_type: String::new(),
            gradient_colors: Vec::new(),
            gradient_center_x: 50.0,
            gradient_center_y: 50.0,
            gradient_radius: 0.0,
            bitmaps: Vec::new(),
            chameleon: None,
            border_style: None,
            overall_opacity: -1,
            text: String::new(),
        }
    }
}
