//! 3D drawing surface.

use crate::artist::{Arrow3, Artist, Face3, Projected, Segment3};
use crate::camera::Camera;
use crate::config::PlotStyle;
use crate::foundation::math::Vec3;
use crate::style::{Color, Stroke};

use super::{AxisRange, ShapeId};

/// Artist retained on a 3D surface.
///
/// A closed set of artist kinds; each delegates to its [`Artist`]
/// implementation, so the render pass can treat them uniformly while tests
/// and callers can still match on the concrete kind.
#[derive(Clone, Debug)]
pub enum Shape3 {
    /// Directed arrow
    Arrow(Arrow3),
    /// Plain segment
    Segment(Segment3),
    /// Filled triangular face
    Face(Face3),
}

impl Artist for Shape3 {
    fn project(&self, camera: &Camera) -> Projected {
        match self {
            Shape3::Arrow(a) => a.project(camera),
            Shape3::Segment(s) => s.project(camera),
            Shape3::Face(f) => f.project(camera),
        }
    }
}

/// 3D drawing surface: axis ranges, retained artists, axis labels, and the
/// camera that supplies the projection transform at render time.
#[derive(Debug)]
pub struct Axes3 {
    x: AxisRange,
    y: AxisRange,
    z: AxisRange,
    shapes: Vec<Shape3>,
    labels: Option<([String; 3], f32)>,
    camera: Camera,
    style: PlotStyle,
}

impl Axes3 {
    /// Create a surface viewed through the given camera
    pub fn new(camera: Camera) -> Self {
        Self {
            x: AxisRange::default(),
            y: AxisRange::default(),
            z: AxisRange::default(),
            shapes: Vec::new(),
            labels: None,
            camera,
            style: PlotStyle::default(),
        }
    }

    /// Create a surface with a custom style
    pub fn with_style(camera: Camera, style: PlotStyle) -> Self {
        Self { style, ..Self::new(camera) }
    }

    /// Styling parameters used by plot operations on this surface
    pub fn style(&self) -> &PlotStyle {
        &self.style
    }

    /// The camera used to project artists at render time
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access, for rotating the view between render passes
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Current x-axis range
    pub fn x_range(&self) -> AxisRange {
        self.x
    }

    /// Current y-axis range
    pub fn y_range(&self) -> AxisRange {
        self.y
    }

    /// Current z-axis range
    pub fn z_range(&self) -> AxisRange {
        self.z
    }

    /// Widen all three axis ranges to cover a vector with the given
    /// component extremes (the same whole-vector rule as [`super::Axes2`])
    pub fn expand_limits(&mut self, min_component: f32, max_component: f32) {
        let expansion = self.style.limit_expansion;
        self.x.extend(min_component, max_component, expansion);
        self.y.extend(min_component, max_component, expansion);
        self.z.extend(min_component, max_component, expansion);
    }

    /// Set the axis labels and their font size. Idempotent; later calls
    /// overwrite earlier ones.
    pub fn set_axis_labels(&mut self, labels: [&str; 3], font_size: f32) {
        self.labels = Some((labels.map(String::from), font_size));
    }

    /// Axis labels with their font size, if set
    pub fn axis_labels(&self) -> Option<(&[String; 3], f32)> {
        self.labels.as_ref().map(|(labels, size)| (labels, *size))
    }

    /// Add an arrow artist
    pub fn arrow(&mut self, start: Vec3, end: Vec3, stroke: Stroke, head_scale: f32) -> ShapeId {
        self.push(Shape3::Arrow(Arrow3::new(start, end, stroke, head_scale)))
    }

    /// Add a plain segment artist
    pub fn segment(&mut self, start: Vec3, end: Vec3, stroke: Stroke) -> ShapeId {
        self.push(Shape3::Segment(Segment3 { start, end, stroke }))
    }

    /// Add a filled triangular face
    pub fn face(&mut self, vertices: [Vec3; 3], fill: Color, outline: Stroke) -> ShapeId {
        self.push(Shape3::Face(Face3 { vertices, fill, outline }))
    }

    /// All retained artists, in insertion order
    pub fn shapes(&self) -> &[Shape3] {
        &self.shapes
    }

    /// Look up an artist by handle
    pub fn shape(&self, id: ShapeId) -> Option<&Shape3> {
        self.shapes.get(id.as_u32() as usize)
    }

    fn push(&mut self, shape: Shape3) -> ShapeId {
        let id = ShapeId::new(self.shapes.len() as u32);
        self.shapes.push(shape);
        log::trace!("Axes3: retained shape {:?}", id);
        id
    }
}

impl Default for Axes3 {
    fn default() -> Self {
        Self::new(Camera::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn expand_limits_applies_to_all_three_axes() {
        let mut axes = Axes3::default();
        axes.expand_limits(-1.0, 2.0);
        for range in [axes.x_range(), axes.y_range(), axes.z_range()] {
            assert_relative_eq!(range.hi, 2.4);
            assert_relative_eq!(range.lo, -1.2);
        }
    }

    #[test]
    fn labels_overwrite_on_reset() {
        let mut axes = Axes3::default();
        assert!(axes.axis_labels().is_none());

        axes.set_axis_labels(["x", "y", "z"], 15.0);
        axes.set_axis_labels(["x", "y", "z"], 12.0);

        let (labels, size) = axes.axis_labels().unwrap();
        assert_eq!(labels[2], "z");
        assert_relative_eq!(size, 12.0);
    }

    #[test]
    fn shape_handles_resolve_to_their_kind() {
        let mut axes = Axes3::default();
        let id = axes.face(
            [Vec3::x(), Vec3::y(), Vec3::z()],
            Color::STEEL_BLUE,
            Stroke::new(Color::BLACK, 0.5),
        );
        assert!(matches!(axes.shape(id), Some(Shape3::Face(_))));
    }
}
