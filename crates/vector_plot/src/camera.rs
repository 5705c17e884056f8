//! # 3D Camera
//!
//! Perspective camera supplying the projection transform that maps scene
//! coordinates onto the 2D drawing plane.
//!
//! ## Design Principles
//! - **Backend-agnostic**: No output-format dependencies in camera math
//! - **Computed on demand**: Matrices are rebuilt on every query, never
//!   cached, so artists that project through the camera always see its
//!   current orientation

use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec2, Vec3, Vec4};

/// 3D camera for perspective projection onto the drawing plane.
///
/// Uses a right-handed Z-up world (the usual convention for mathematical
/// plots): azimuth rotates around the Z axis, elevation lifts the eye above
/// the XY plane.
///
/// # Performance Notes
/// Matrix calculations are performed on demand rather than cached. That is
/// deliberate: the surface re-projects every artist on every render pass, so
/// a camera rotated between passes must be picked up immediately.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 0, 1])
    pub up: Vec3,

    /// Field of view angle in radians
    pub fov: f32,

    /// Aspect ratio (width / height) for projection calculations
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a perspective camera at an explicit position, looking at the
    /// origin with Z up.
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 0.0, 1.0),
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
        }
    }

    /// Place the camera on an orbit around `target`.
    ///
    /// `azimuth_degrees` rotates around the Z axis (0 = along +X),
    /// `elevation_degrees` lifts the eye above the XY plane, `distance` is
    /// the eye-to-target distance. Mirrors the view-angle convention of
    /// interactive 3D plot windows.
    pub fn orbit(target: Vec3, azimuth_degrees: f32, elevation_degrees: f32, distance: f32) -> Self {
        let azimuth = utils::deg_to_rad(azimuth_degrees);
        let elevation = utils::deg_to_rad(elevation_degrees);

        let offset = Vec3::new(
            distance * elevation.cos() * azimuth.cos(),
            distance * elevation.cos() * azimuth.sin(),
            distance * elevation.sin(),
        );

        Self {
            position: target + offset,
            target,
            up: Vec3::new(0.0, 0.0, 1.0),
            fov: std::f32::consts::FRAC_PI_4,
            aspect: 4.0 / 3.0,
            near: 0.1,
            far: 100.0,
        }
    }

    /// Update camera position in world space
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        log::trace!("Camera position updated to: {:?}", position);
    }

    /// Configure camera to look at a specific point with a custom up vector
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        self.target = target;
        self.up = up;
        log::trace!("Camera look_at updated - target: {:?}, up: {:?}", target, up);
    }

    /// Update camera aspect ratio for viewport changes
    ///
    /// Only logs when the change is significant (> 0.01) to keep resize
    /// sequences quiet.
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        if (self.aspect - aspect).abs() > 0.01 {
            log::info!("Camera aspect ratio changed: {:.3} -> {:.3}", self.aspect, aspect);
        }
        self.aspect = aspect;
    }

    /// Generate the view matrix (world to camera space)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, self.up)
    }

    /// Generate the perspective projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov, self.aspect, self.near, self.far)
    }

    /// Generate the combined view-projection matrix (`P × V`)
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world-space point to normalized device coordinates.
    ///
    /// Returns the (x, y) position after the perspective divide, with x and
    /// y in `-1..=1` for points inside the view frustum. Depth is discarded;
    /// the drawing surface only needs the 2D screen position.
    pub fn project_point(&self, point: Vec3) -> Vec2 {
        let h = self.view_projection_matrix() * Vec4::new(point.x, point.y, point.z, 1.0);
        Vec2::new(h.x / h.w, h.y / h.w)
    }
}

impl Default for Camera {
    /// Default orbit view: 30 degrees elevation, -60 degrees azimuth, eight
    /// units out, looking at the origin.
    fn default() -> Self {
        Self::orbit(Vec3::zeros(), -60.0, 30.0, 8.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn target_projects_to_screen_center() {
        let camera = Camera::orbit(Vec3::zeros(), 35.0, 20.0, 6.0);
        let center = camera.project_point(Vec3::zeros());
        assert_relative_eq!(center.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(center.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn orbit_respects_distance() {
        let camera = Camera::orbit(Vec3::new(1.0, 2.0, 3.0), 45.0, 30.0, 6.0);
        assert_relative_eq!(
            (camera.position - camera.target).norm(),
            6.0,
            epsilon = 1e-4
        );
    }

    #[test]
    fn rotating_the_camera_changes_projection() {
        let point = Vec3::new(1.0, 0.5, 0.25);
        let before = Camera::orbit(Vec3::zeros(), 30.0, 20.0, 8.0).project_point(point);
        let after = Camera::orbit(Vec3::zeros(), 120.0, 20.0, 8.0).project_point(point);
        assert!((before - after).norm() > 1e-3);
    }

    #[test]
    fn higher_elevation_raises_the_eye() {
        let low = Camera::orbit(Vec3::zeros(), 0.0, 10.0, 5.0);
        let high = Camera::orbit(Vec3::zeros(), 0.0, 60.0, 5.0);
        assert!(high.position.z > low.position.z);
    }
}
