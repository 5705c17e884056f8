//! Render passes
//!
//! A render pass flattens a drawing surface into a screen-space
//! [`DisplayList`] that backends consume. The 2D pass maps data coordinates
//! through the axis ranges; the 3D pass fetches the camera's current
//! view-projection transform and asks every artist to project itself through
//! it, so nothing survives between passes — rotating the camera and
//! re-rendering yields freshly computed screen coordinates.

pub mod svg;

use crate::artist::{Artist, Projected};
use crate::foundation::math::{Vec2, Vec3};
use crate::style::{Color, Stroke};
use crate::surface::{Axes2, Axes3, Shape2};

/// Output viewport in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Viewport {
    /// Create a viewport
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width / height ratio
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Stroked segment in pixel coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenLine {
    /// Segment start in pixels
    pub start: Vec2,
    /// Segment end in pixels
    pub end: Vec2,
    /// Stroke attributes
    pub stroke: Stroke,
}

/// Filled polygon in pixel coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenPolygon {
    /// Vertices in pixels
    pub points: Vec<Vec2>,
    /// Fill color
    pub fill: Color,
    /// Optional edge stroke
    pub outline: Option<Stroke>,
}

/// Text label in pixel coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenText {
    /// Anchor position in pixels
    pub position: Vec2,
    /// Label text
    pub text: String,
    /// Font size in pixels
    pub size: f32,
}

/// One screen-space primitive
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenItem {
    /// Stroked segment
    Line(ScreenLine),
    /// Filled polygon
    Polygon(ScreenPolygon),
    /// Text label
    Text(ScreenText),
}

/// Flat, painter's-ordered list of screen primitives for one frame.
#[derive(Debug, Clone)]
pub struct DisplayList {
    viewport: Viewport,
    items: Vec<ScreenItem>,
}

impl DisplayList {
    /// Create an empty list for a viewport
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, items: Vec::new() }
    }

    /// The viewport this list was rendered for
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// All items in draw order
    pub fn items(&self) -> &[ScreenItem] {
        &self.items
    }

    /// Number of line items
    pub fn line_count(&self) -> usize {
        self.items.iter().filter(|i| matches!(i, ScreenItem::Line(_))).count()
    }

    /// Number of polygon items
    pub fn polygon_count(&self) -> usize {
        self.items.iter().filter(|i| matches!(i, ScreenItem::Polygon(_))).count()
    }

    /// Number of text items
    pub fn text_count(&self) -> usize {
        self.items.iter().filter(|i| matches!(i, ScreenItem::Text(_))).count()
    }

    fn line(&mut self, start: Vec2, end: Vec2, stroke: Stroke) {
        self.items.push(ScreenItem::Line(ScreenLine { start, end, stroke }));
    }

    fn polygon(&mut self, points: Vec<Vec2>, fill: Color, outline: Option<Stroke>) {
        self.items.push(ScreenItem::Polygon(ScreenPolygon { points, fill, outline }));
    }

    fn text(&mut self, position: Vec2, text: String, size: f32) {
        self.items.push(ScreenItem::Text(ScreenText { position, text, size }));
    }

    /// Expand an arrow into a shaft line plus a filled head triangle, all in
    /// pixel coordinates. `head_length`/`head_width` are in pixels; the tip
    /// sits exactly at `end` (the head is part of the arrow length).
    fn arrow(&mut self, start: Vec2, end: Vec2, stroke: Stroke, head_length: f32, head_width: f32) {
        let shaft = end - start;
        let len = shaft.norm();
        if len <= f32::EPSILON {
            return;
        }

        let dir = shaft / len;
        let head_length = head_length.min(len);
        let base = end - dir * head_length;
        let perp = Vec2::new(-dir.y, dir.x) * (head_width * 0.5);

        self.line(start, base, stroke);
        self.polygon(
            vec![end, base + perp, base - perp],
            stroke.color,
            None,
        );
    }
}

/// Linear data-to-pixel mapping through the axis ranges, y flipped so the
/// data origin corner sits at the bottom of the image.
struct DataMap {
    x_lo: f32,
    x_span: f32,
    y_lo: f32,
    y_span: f32,
    viewport: Viewport,
}

impl DataMap {
    fn for_axes(axes: &Axes2, viewport: Viewport) -> Self {
        Self {
            x_lo: axes.x_range().lo,
            x_span: axes.x_range().span().max(f32::EPSILON),
            y_lo: axes.y_range().lo,
            y_span: axes.y_range().span().max(f32::EPSILON),
            viewport,
        }
    }

    fn to_screen(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            (p.x - self.x_lo) / self.x_span * self.viewport.width,
            self.viewport.height - (p.y - self.y_lo) / self.y_span * self.viewport.height,
        )
    }

    /// Data-space length along x expressed in pixels
    fn x_scale(&self) -> f32 {
        self.viewport.width / self.x_span
    }
}

/// Flatten a 2D surface into a display list.
pub fn render_axes2(axes: &Axes2, viewport: Viewport) -> DisplayList {
    let map = DataMap::for_axes(axes, viewport);
    let mut list = DisplayList::new(viewport);

    // Reference lines go underneath the data.
    if axes.origin_lines() {
        let stroke = Stroke::new(
            Color::BLACK.with_alpha(axes.style().origin_line_alpha),
            1.0,
        );
        let x = axes.x_range();
        let y = axes.y_range();
        list.line(
            map.to_screen(Vec2::new(x.lo, 0.0)),
            map.to_screen(Vec2::new(x.hi, 0.0)),
            stroke,
        );
        list.line(
            map.to_screen(Vec2::new(0.0, y.lo)),
            map.to_screen(Vec2::new(0.0, y.hi)),
            stroke,
        );
    }

    for shape in axes.shapes() {
        match shape {
            Shape2::Arrow { start, end, stroke, head } => {
                // Head dimensions are in data units; convert along x.
                list.arrow(
                    map.to_screen(*start),
                    map.to_screen(*end),
                    *stroke,
                    head.length * map.x_scale(),
                    head.width * map.x_scale(),
                );
            }
            Shape2::Segment { start, end, stroke } => {
                list.line(map.to_screen(*start), map.to_screen(*end), *stroke);
            }
            Shape2::Polygon { points, fill } => {
                list.polygon(points.iter().map(|p| map.to_screen(*p)).collect(), *fill, None);
            }
        }
    }

    log::debug!(
        "render_axes2: {} shapes -> {} items",
        axes.shapes().len(),
        list.items().len()
    );
    list
}

fn ndc_to_screen(ndc: Vec2, viewport: Viewport) -> Vec2 {
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * viewport.width,
        viewport.height - (ndc.y + 1.0) * 0.5 * viewport.height,
    )
}

/// Flatten a 3D surface into a display list.
///
/// Every artist is projected through the camera's transform as it stands at
/// this call, with the aspect ratio taken from the viewport. Nothing is
/// cached: call again after rotating the camera and the screen coordinates
/// are recomputed.
pub fn render_axes3(axes: &Axes3, viewport: Viewport) -> DisplayList {
    let mut camera = axes.camera().clone();
    camera.set_aspect_ratio(viewport.aspect());

    let mut list = DisplayList::new(viewport);

    for shape in axes.shapes() {
        match shape.project(&camera) {
            Projected::Line { start, end, stroke } => {
                list.line(
                    ndc_to_screen(start, viewport),
                    ndc_to_screen(end, viewport),
                    stroke,
                );
            }
            Projected::Arrow { start, end, stroke, head_scale } => {
                list.arrow(
                    ndc_to_screen(start, viewport),
                    ndc_to_screen(end, viewport),
                    stroke,
                    head_scale,
                    head_scale * 0.7,
                );
            }
            Projected::Polygon { points, fill, outline } => {
                let points = points.into_iter().map(|p| ndc_to_screen(p, viewport)).collect();
                list.polygon(points, fill, outline);
            }
        }
    }

    if let Some((labels, size)) = axes.axis_labels() {
        let anchors = [
            Vec3::new(axes.x_range().hi, 0.0, 0.0),
            Vec3::new(0.0, axes.y_range().hi, 0.0),
            Vec3::new(0.0, 0.0, axes.z_range().hi),
        ];
        for (label, anchor) in labels.iter().zip(anchors) {
            let position = ndc_to_screen(camera.project_point(anchor), viewport);
            list.text(position, label.clone(), size);
        }
    }

    log::debug!(
        "render_axes3: {} artists -> {} items",
        axes.shapes().len(),
        list.items().len()
    );
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot2::{self, VectorOptions};
    use crate::plot3;
    use crate::style::LineStyle;
    use approx::assert_relative_eq;

    fn viewport() -> Viewport {
        Viewport::new(640.0, 480.0)
    }

    #[test]
    fn fresh_axes_map_unit_square_to_viewport_corners() {
        let mut axes = Axes2::new();
        axes.segment(Vec2::zeros(), Vec2::new(1.0, 1.0), Stroke::new(Color::BLACK, 1.0));

        let list = render_axes2(&axes, viewport());
        let ScreenItem::Line(line) = &list.items()[0] else {
            panic!("expected a line");
        };

        // Data origin is bottom-left; data (1,1) is top-right.
        assert_relative_eq!(line.start.x, 0.0);
        assert_relative_eq!(line.start.y, 480.0);
        assert_relative_eq!(line.end.x, 640.0);
        assert_relative_eq!(line.end.y, 0.0);
    }

    #[test]
    fn plotted_vector_expands_to_shaft_head_and_guides() {
        let mut axes = Axes2::new();
        plot2::plot_vector(&mut axes, Vec2::new(2.0, 1.0), &VectorOptions::default());

        let list = render_axes2(&axes, viewport());
        // Shaft + two dashed guides; head is the sole polygon.
        assert_eq!(list.line_count(), 3);
        assert_eq!(list.polygon_count(), 1);
    }

    #[test]
    fn guide_lines_stay_dashed_on_screen() {
        let mut axes = Axes2::new();
        plot2::plot_vector(&mut axes, Vec2::new(2.0, 1.0), &VectorOptions::default());

        let dashed = render_axes2(&axes, viewport())
            .items()
            .iter()
            .filter(|i| matches!(i, ScreenItem::Line(l) if l.stroke.style == LineStyle::Dashed))
            .count();
        assert_eq!(dashed, 2);
    }

    #[test]
    fn origin_lines_render_once_underneath() {
        let mut axes = Axes2::new();
        plot2::plot_vector(&mut axes, Vec2::new(-1.0, 1.0), &VectorOptions::default());
        plot2::plot_vector(&mut axes, Vec2::new(-2.0, 1.0), &VectorOptions::default());

        let list = render_axes2(&axes, viewport());
        let faint = list
            .items()
            .iter()
            .filter(|i| {
                matches!(i, ScreenItem::Line(l) if l.stroke.color.a == axes.style().origin_line_alpha)
            })
            .count();
        // One horizontal and one vertical reference line, regardless of how
        // many vectors pushed the limits negative.
        assert_eq!(faint, 2);
    }

    #[test]
    fn rotating_the_camera_reprojects_the_scene() {
        let mut axes = Axes3::default();
        plot3::plot_vector(&mut axes, Vec3::new(1.0, 2.0, 3.0), &VectorOptions::default());

        let before = render_axes3(&axes, viewport());

        *axes.camera_mut() = crate::camera::Camera::orbit(Vec3::zeros(), 95.0, 10.0, 8.0);
        let after = render_axes3(&axes, viewport());

        let ScreenItem::Line(line_before) = &before.items()[0] else {
            panic!("expected a line");
        };
        let ScreenItem::Line(line_after) = &after.items()[0] else {
            panic!("expected a line");
        };
        assert!((line_before.end - line_after.end).norm() > 1e-3);
    }

    #[test]
    fn axis_labels_become_text_items() {
        let mut axes = Axes3::default();
        plot3::plot_vector(&mut axes, Vec3::new(1.0, 2.0, 3.0), &VectorOptions::default());

        let list = render_axes3(&axes, viewport());
        assert_eq!(list.text_count(), 3);
    }

    #[test]
    fn degenerate_arrow_renders_nothing() {
        let mut axes = Axes2::new();
        let options = VectorOptions { coordinate_projections: false, ..Default::default() };
        plot2::plot_vector(&mut axes, Vec2::zeros(), &options);

        let list = render_axes2(&axes, viewport());
        assert_eq!(list.line_count(), 0);
        assert_eq!(list.polygon_count(), 0);
    }
}
