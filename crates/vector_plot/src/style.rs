//! Drawing attributes shared by every primitive: colors, line styles, strokes.

use serde::{Deserialize, Serialize};

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
    /// Alpha component (1.0 = opaque)
    pub a: f32,
}

impl Color {
    /// Opaque black
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };

    /// Opaque white
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// Steel blue, the default face color for polyhedron faces
    pub const STEEL_BLUE: Color = Color {
        r: 70.0 / 255.0,
        g: 130.0 / 255.0,
        b: 180.0 / 255.0,
        a: 1.0,
    };

    /// Create an opaque color from float components
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 8-bit channel values
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: 1.0,
        }
    }

    /// Return this color with a different alpha
    pub const fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// CSS `rgb(...)` string for SVG attributes (alpha is emitted separately
    /// as an opacity attribute)
    pub fn to_css(&self) -> String {
        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("rgb({},{},{})", to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }
}

/// Line rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    /// Continuous stroke
    Solid,
    /// Dashed stroke, used for coordinate projection guides
    Dashed,
}

/// Stroke attributes for line-like primitives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Stroke color (its alpha is the stroke opacity)
    pub color: Color,
    /// Stroke width in output units
    pub width: f32,
    /// Solid or dashed
    pub style: LineStyle,
}

impl Stroke {
    /// Create a solid stroke
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width, style: LineStyle::Solid }
    }

    /// Create a dashed stroke
    pub const fn dashed(color: Color, width: f32) -> Self {
        Self { color, width, style: LineStyle::Dashed }
    }
}
