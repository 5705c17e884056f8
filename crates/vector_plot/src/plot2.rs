//! 2D vector plotting operations.

use crate::foundation::math::Vec2;
use crate::style::{Color, Stroke};
use crate::surface::{ArrowHead, Axes2, ShapeId};

/// Per-vector rendering options, shared by the 2D and 3D renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorOptions {
    /// Arrow color
    pub color: Color,
    /// Arrow line width
    pub line_width: f32,
    /// Whether to draw dashed guide lines from the tip to each axis
    pub coordinate_projections: bool,
}

impl VectorOptions {
    /// Options with the given color and defaults otherwise
    pub fn colored(color: Color) -> Self {
        Self { color, ..Self::default() }
    }
}

impl Default for VectorOptions {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            line_width: 1.0,
            coordinate_projections: true,
        }
    }
}

/// Draw a vector as an arrow from the origin.
///
/// Widens the surface's axis ranges to cover the vector (never shrinking
/// them) and, when `options.coordinate_projections` is set, adds dashed
/// guide segments from the tip to each axis. Once the widened limits cross
/// zero the surface shows faint reference lines through the origin.
///
/// Returns the handle of the arrow shape.
pub fn plot_vector(axes: &mut Axes2, vector: Vec2, options: &VectorOptions) -> ShapeId {
    let (x, y) = (vector.x, vector.y);
    let style = axes.style().clone();

    let head = ArrowHead { width: style.head_width, length: style.head_length };
    let arrow = axes.arrow(
        Vec2::zeros(),
        vector,
        Stroke::new(options.color, options.line_width),
        head,
    );

    axes.expand_limits(x.min(y), x.max(y));

    if options.coordinate_projections {
        let guide = Stroke::dashed(options.color.with_alpha(style.guide_alpha), 1.0);
        // Horizontal guide from the y axis to the tip, vertical from the x axis.
        axes.segment(Vec2::new(0.0, y), vector, guide);
        axes.segment(Vec2::new(x, 0.0), vector, guide);
    }

    log::debug!("plot_vector: ({x}, {y}) -> {arrow:?}");
    arrow
}

/// Add a filled polygon patch connecting `points` in the given order.
///
/// Neither convexity nor closedness is validated; the patch is whatever the
/// point order implies.
pub fn plot_polygon(axes: &mut Axes2, points: &[Vec2]) -> ShapeId {
    let fill = axes.style().polygon_color;
    axes.polygon(points.to_vec(), fill)
}

/// Draw a set of vectors, then overlay the polygon of their endpoints.
///
/// With `Some(colors)`, vectors are paired with colors and iteration stops
/// at the shorter of the two sequences: vectors without a color are not
/// drawn at all. The polygon always spans every given vector.
pub fn plot_vectors_and_polygon(axes: &mut Axes2, vectors: &[Vec2], colors: Option<&[Color]>) {
    match colors {
        Some(colors) => {
            for (vector, color) in vectors.iter().zip(colors) {
                plot_vector(axes, *vector, &VectorOptions::colored(*color));
            }
        }
        None => {
            for vector in vectors {
                plot_vector(axes, *vector, &VectorOptions::default());
            }
        }
    }

    plot_polygon(axes, vectors);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Shape2;
    use approx::assert_relative_eq;

    fn arrow_count(axes: &Axes2) -> usize {
        axes.shapes()
            .iter()
            .filter(|s| matches!(s, Shape2::Arrow { .. }))
            .count()
    }

    fn polygons(axes: &Axes2) -> Vec<&[Vec2]> {
        axes.shapes()
            .iter()
            .filter_map(|s| match s {
                Shape2::Polygon { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn limits_cover_the_expanded_vector() {
        let mut axes = Axes2::new();
        plot_vector(&mut axes, Vec2::new(3.0, 4.0), &VectorOptions::default());

        assert!(axes.x_range().hi >= 3.6);
        assert!(axes.y_range().hi >= 4.8);
    }

    #[test]
    fn limits_never_shrink_across_vectors() {
        let mut axes = Axes2::new();
        plot_vector(&mut axes, Vec2::new(3.0, 4.0), &VectorOptions::default());
        let wide_x = axes.x_range();
        let wide_y = axes.y_range();

        plot_vector(&mut axes, Vec2::new(0.1, 0.1), &VectorOptions::default());
        assert_relative_eq!(axes.x_range().hi, wide_x.hi);
        assert_relative_eq!(axes.y_range().hi, wide_y.hi);
    }

    #[test]
    fn projections_add_two_dashed_guides() {
        let mut axes = Axes2::new();
        plot_vector(&mut axes, Vec2::new(2.0, 1.0), &VectorOptions::default());

        let guides: Vec<_> = axes
            .shapes()
            .iter()
            .filter(|s| matches!(s, Shape2::Segment { .. }))
            .collect();
        assert_eq!(guides.len(), 2);
    }

    #[test]
    fn projections_can_be_disabled() {
        let mut axes = Axes2::new();
        let options = VectorOptions { coordinate_projections: false, ..Default::default() };
        plot_vector(&mut axes, Vec2::new(2.0, 1.0), &options);

        assert_eq!(axes.shapes().len(), 1);
    }

    #[test]
    fn negative_vector_enables_origin_lines() {
        let mut axes = Axes2::new();
        plot_vector(&mut axes, Vec2::new(-1.0, 2.0), &VectorOptions::default());
        assert!(axes.origin_lines());
    }

    #[test]
    fn composite_adds_exactly_one_polygon_with_all_endpoints() {
        let vectors = [Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0)];
        let mut axes = Axes2::new();
        plot_vectors_and_polygon(&mut axes, &vectors, None);

        let polys = polygons(&axes);
        assert_eq!(polys.len(), 1);
        assert_eq!(polys[0], vectors.as_slice());
        assert_eq!(arrow_count(&axes), 3);
    }

    #[test]
    fn color_zip_stops_at_the_shorter_sequence() {
        let vectors = [Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0)];
        let colors = [Color::BLACK, Color::STEEL_BLUE];

        let mut axes = Axes2::new();
        plot_vectors_and_polygon(&mut axes, &vectors, Some(&colors));

        // Only the first len(colors) vectors are drawn; the polygon still
        // spans all endpoints.
        assert_eq!(arrow_count(&axes), 2);
        assert_eq!(polygons(&axes)[0].len(), 3);
    }
}
