//! 2D drawing surface.

use crate::config::PlotStyle;
use crate::foundation::math::Vec2;
use crate::style::{Color, Stroke};

use super::{AxisRange, ShapeId};

/// Arrow head dimensions, in data units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowHead {
    /// Full width of the head across the shaft direction
    pub width: f32,
    /// Length of the head along the shaft direction
    pub length: f32,
}

/// Primitive retained on a 2D surface, in data coordinates.
#[derive(Clone, Debug)]
pub enum Shape2 {
    /// Directed segment with a head at `end`. The head is included in the
    /// arrow length (the tip sits exactly at `end`).
    Arrow {
        /// Tail position
        start: Vec2,
        /// Tip position
        end: Vec2,
        /// Shaft and head stroke
        stroke: Stroke,
        /// Head dimensions
        head: ArrowHead,
    },

    /// Plain segment, used for dashed projection guides
    Segment {
        /// Segment start
        start: Vec2,
        /// Segment end
        end: Vec2,
        /// Stroke attributes
        stroke: Stroke,
    },

    /// Filled polygon patch connecting points in order
    Polygon {
        /// Vertices in draw order
        points: Vec<Vec2>,
        /// Fill color
        fill: Color,
    },
}

/// 2D drawing surface: axis ranges plus an ordered list of primitives.
///
/// Callers pass the surface explicitly to every plot operation; there is no
/// ambient "current figure". The surface never resets or shrinks its ranges.
#[derive(Debug, Default)]
pub struct Axes2 {
    x: AxisRange,
    y: AxisRange,
    shapes: Vec<Shape2>,
    origin_lines: bool,
    style: PlotStyle,
}

impl Axes2 {
    /// Create a surface with default style and unit axis ranges
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface with a custom style
    pub fn with_style(style: PlotStyle) -> Self {
        Self { style, ..Self::default() }
    }

    /// Styling parameters used by plot operations on this surface
    pub fn style(&self) -> &PlotStyle {
        &self.style
    }

    /// Current x-axis range
    pub fn x_range(&self) -> AxisRange {
        self.x
    }

    /// Current y-axis range
    pub fn y_range(&self) -> AxisRange {
        self.y
    }

    /// Widen both axis ranges to cover a vector with the given component
    /// extremes. Both axes use the extremes of the whole vector, so the view
    /// stays roughly square around the plotted set.
    ///
    /// Once either lower bound drops below zero, faint reference lines
    /// through the origin are enabled for every later render pass.
    pub fn expand_limits(&mut self, min_component: f32, max_component: f32) {
        let expansion = self.style.limit_expansion;
        self.x.extend(min_component, max_component, expansion);
        self.y.extend(min_component, max_component, expansion);

        if self.x.lo.min(self.y.lo) < 0.0 {
            self.origin_lines = true;
        }
    }

    /// Whether the faint origin reference lines are enabled
    pub fn origin_lines(&self) -> bool {
        self.origin_lines
    }

    /// Add an arrow primitive
    pub fn arrow(&mut self, start: Vec2, end: Vec2, stroke: Stroke, head: ArrowHead) -> ShapeId {
        self.push(Shape2::Arrow { start, end, stroke, head })
    }

    /// Add a plain segment
    pub fn segment(&mut self, start: Vec2, end: Vec2, stroke: Stroke) -> ShapeId {
        self.push(Shape2::Segment { start, end, stroke })
    }

    /// Add a filled polygon connecting `points` in order. Convexity and
    /// closedness are not validated.
    pub fn polygon(&mut self, points: Vec<Vec2>, fill: Color) -> ShapeId {
        self.push(Shape2::Polygon { points, fill })
    }

    /// All retained shapes, in insertion order
    pub fn shapes(&self) -> &[Shape2] {
        &self.shapes
    }

    /// Look up a shape by handle
    pub fn shape(&self, id: ShapeId) -> Option<&Shape2> {
        self.shapes.get(id.as_u32() as usize)
    }

    fn push(&mut self, shape: Shape2) -> ShapeId {
        let id = ShapeId::new(self.shapes.len() as u32);
        self.shapes.push(shape);
        log::trace!("Axes2: retained shape {:?}", id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn handles_index_in_insertion_order() {
        let mut axes = Axes2::new();
        let a = axes.segment(Vec2::zeros(), Vec2::new(1.0, 0.0), Stroke::new(Color::BLACK, 1.0));
        let b = axes.polygon(vec![Vec2::zeros()], Color::BLACK);
        assert_eq!(a.as_u32(), 0);
        assert_eq!(b.as_u32(), 1);
        assert!(matches!(axes.shape(b), Some(Shape2::Polygon { .. })));
    }

    #[test]
    fn expand_limits_uses_whole_vector_extremes_on_both_axes() {
        let mut axes = Axes2::new();
        axes.expand_limits(3.0, 4.0);
        assert_relative_eq!(axes.x_range().hi, 4.8);
        assert_relative_eq!(axes.y_range().hi, 4.8);
    }

    #[test]
    fn origin_lines_latch_once_limits_cross_zero() {
        let mut axes = Axes2::new();
        axes.expand_limits(1.0, 2.0);
        assert!(!axes.origin_lines());

        axes.expand_limits(-1.0, 2.0);
        assert!(axes.origin_lines());

        // Later positive-only vectors must not clear the flag.
        axes.expand_limits(0.5, 0.5);
        assert!(axes.origin_lines());
    }
}
