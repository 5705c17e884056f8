//! 3D vector plotting operations.

use crate::foundation::math::Vec3;
use crate::plot2::VectorOptions;
use crate::style::{Color, Stroke};
use crate::surface::{Axes3, ShapeId};

/// Draw a 3D vector as an arrow from the origin.
///
/// Widens all three axis ranges to cover the vector, adds an arrow artist
/// that re-projects through the surface's camera on every render pass, and,
/// when requested, dashed guide segments from each axis foot point to the
/// tip. Also (re)labels the axes "x"/"y"/"z".
///
/// Returns the handle of the arrow artist.
pub fn plot_vector(axes: &mut Axes3, vector: Vec3, options: &VectorOptions) -> ShapeId {
    let (x, y, z) = (vector.x, vector.y, vector.z);
    let style = axes.style().clone();

    let min_component = x.min(y).min(z);
    let max_component = x.max(y).max(z);
    axes.expand_limits(min_component, max_component);

    let arrow = axes.arrow(
        Vec3::zeros(),
        vector,
        Stroke::new(options.color, options.line_width),
        style.head_scale_3d,
    );

    if options.coordinate_projections {
        let guide = Stroke::dashed(options.color.with_alpha(style.guide_alpha), 1.0);
        // From the foot of the tip on each axis up to the tip itself.
        axes.segment(Vec3::new(x, 0.0, 0.0), vector, guide);
        axes.segment(Vec3::new(0.0, y, 0.0), vector, guide);
        axes.segment(Vec3::new(0.0, 0.0, z), vector, guide);
    }

    axes.set_axis_labels(["x", "y", "z"], style.label_font_size);

    log::debug!("plot_vector: ({x}, {y}, {z}) -> {arrow:?}");
    arrow
}

/// Draw a set of 3D vectors, then every triangular face they span.
///
/// Color pairing follows the same zip-truncation rule as the 2D composite:
/// with `Some(colors)`, vectors beyond the color list are not drawn. Faces
/// are added for every unordered 3-combination of the input vectors —
/// C(n,3) semi-transparent triangles, with no deduplication or interior
/// culling. This is a heuristic hull visualization, not a convex hull.
pub fn plot_vectors_and_polyhedron(axes: &mut Axes3, vectors: &[Vec3], colors: Option<&[Color]>) {
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

    let style = axes.style().clone();
    let fill = style.face_color.with_alpha(style.face_alpha);
    let outline = Stroke::new(Color::BLACK, style.face_edge_width);

    for i in 0..vectors.len() {
        for j in (i + 1)..vectors.len() {
            for k in (j + 1)..vectors.len() {
                axes.face([vectors[i], vectors[j], vectors[k]], fill, outline);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Shape3;
    use approx::assert_relative_eq;

    fn count(axes: &Axes3, pred: fn(&Shape3) -> bool) -> usize {
        axes.shapes().iter().filter(|s| pred(s)).count()
    }

    #[test]
    fn limits_cover_all_three_axes() {
        let mut axes = Axes3::default();
        plot_vector(&mut axes, Vec3::new(1.0, -2.0, 3.0), &VectorOptions::default());

        for range in [axes.x_range(), axes.y_range(), axes.z_range()] {
            assert_relative_eq!(range.hi, 3.6);
            assert_relative_eq!(range.lo, -2.4);
        }
    }

    #[test]
    fn vector_adds_arrow_three_guides_and_labels() {
        let mut axes = Axes3::default();
        plot_vector(&mut axes, Vec3::new(1.0, 2.0, 3.0), &VectorOptions::default());

        assert_eq!(count(&axes, |s| matches!(s, Shape3::Arrow(_))), 1);
        assert_eq!(count(&axes, |s| matches!(s, Shape3::Segment(_))), 3);

        let (labels, size) = axes.axis_labels().unwrap();
        assert_eq!(labels, &["x".to_string(), "y".to_string(), "z".to_string()]);
        assert_relative_eq!(size, 15.0);
    }

    #[test]
    fn four_vectors_span_four_faces() {
        let vectors = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
        ];

        let mut axes = Axes3::default();
        plot_vectors_and_polyhedron(&mut axes, &vectors, None);

        // C(4, 3) triangular faces.
        assert_eq!(count(&axes, |s| matches!(s, Shape3::Face(_))), 4);
        assert_eq!(count(&axes, |s| matches!(s, Shape3::Arrow(_))), 4);
    }

    #[test]
    fn two_vectors_span_no_faces() {
        let mut axes = Axes3::default();
        plot_vectors_and_polyhedron(&mut axes, &[Vec3::x(), Vec3::y()], None);
        assert_eq!(count(&axes, |s| matches!(s, Shape3::Face(_))), 0);
    }

    #[test]
    fn color_zip_stops_at_the_shorter_sequence() {
        let vectors = [Vec3::x(), Vec3::y(), Vec3::z()];
        let colors = [Color::BLACK];

        let mut axes = Axes3::default();
        plot_vectors_and_polyhedron(&mut axes, &vectors, Some(&colors));

        assert_eq!(count(&axes, |s| matches!(s, Shape3::Arrow(_))), 1);
        // Faces still span every given vector: C(3,3) = 1.
        assert_eq!(count(&axes, |s| matches!(s, Shape3::Face(_))), 1);
    }
}
