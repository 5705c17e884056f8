//! 3D artists with render-time projection.
//!
//! An artist holds raw 3D scene coordinates and nothing else. On every render
//! pass it is handed the camera and projects itself into normalized device
//! coordinates. No screen-space result is ever stored on the artist: the
//! camera can be rotated between passes, and the projection must follow it.

use crate::camera::Camera;
use crate::foundation::math::{Vec2, Vec3};
use crate::style::{Color, Stroke};

/// Screen-space output of projecting one artist, in NDC.
#[derive(Clone, Debug)]
pub enum Projected {
    /// A plain stroked segment
    Line {
        /// Segment start in NDC
        start: Vec2,
        /// Segment end in NDC
        end: Vec2,
        /// Stroke attributes
        stroke: Stroke,
    },

    /// A directed segment whose head is sized in output pixels
    Arrow {
        /// Tail in NDC
        start: Vec2,
        /// Tip in NDC
        end: Vec2,
        /// Stroke attributes
        stroke: Stroke,
        /// Head size in output pixels
        head_scale: f32,
    },

    /// A filled polygon
    Polygon {
        /// Vertices in NDC
        points: Vec<Vec2>,
        /// Fill color
        fill: Color,
        /// Optional edge stroke
        outline: Option<Stroke>,
    },
}

/// A drawable that projects itself through the camera at render time.
///
/// Implementations must recompute the projection on every call and must not
/// cache screen coordinates across frames.
pub trait Artist {
    /// Project this artist into NDC using the camera's current transform
    fn project(&self, camera: &Camera) -> Projected;
}

/// 3D arrow from `start` to `end`.
///
/// Holds only the raw 3D endpoints; the 2D screen position is derived from
/// the camera's current view-projection matrix on each render pass.
#[derive(Clone, Debug)]
pub struct Arrow3 {
    /// Tail position in scene coordinates
    pub start: Vec3,
    /// Tip position in scene coordinates
    pub end: Vec3,
    /// Shaft and head stroke
    pub stroke: Stroke,
    /// Head size in output pixels
    pub head_scale: f32,
}

impl Arrow3 {
    /// Create an arrow between two scene points
    pub fn new(start: Vec3, end: Vec3, stroke: Stroke, head_scale: f32) -> Self {
        Self { start, end, stroke, head_scale }
    }
}

impl Artist for Arrow3 {
    fn project(&self, camera: &Camera) -> Projected {
        Projected::Arrow {
            start: camera.project_point(self.start),
            end: camera.project_point(self.end),
            stroke: self.stroke,
            head_scale: self.head_scale,
        }
    }
}

/// Plain 3D segment, used for dashed coordinate projection guides.
#[derive(Clone, Debug)]
pub struct Segment3 {
    /// Segment start in scene coordinates
    pub start: Vec3,
    /// Segment end in scene coordinates
    pub end: Vec3,
    /// Stroke attributes
    pub stroke: Stroke,
}

impl Artist for Segment3 {
    fn project(&self, camera: &Camera) -> Projected {
        Projected::Line {
            start: camera.project_point(self.start),
            end: camera.project_point(self.end),
            stroke: self.stroke,
        }
    }
}

/// Filled triangular face spanning three scene points.
#[derive(Clone, Debug)]
pub struct Face3 {
    /// Face corners in scene coordinates
    pub vertices: [Vec3; 3],
    /// Fill color
    pub fill: Color,
    /// Edge stroke
    pub outline: Stroke,
}

impl Artist for Face3 {
    fn project(&self, camera: &Camera) -> Projected {
        Projected::Polygon {
            points: self.vertices.iter().map(|v| camera.project_point(*v)).collect(),
            fill: self.fill,
            outline: Some(self.outline),
        }
    }
}
