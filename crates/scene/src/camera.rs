//! The fixed camera rig looking at the figure.

use glam::Mat4;

use crate::config::Pose;
use crate::transform::Transform;

/// Camera that orbits with the figure's orientation.
///
/// The pose orientation is applied to the eye rather than to the trunk, so
/// rotating the figure swings the camera around it.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    /// Constant yaw of the rig in degrees, giving a three-quarter view.
    pub base_yaw: f32,
    /// Distance from the figure along the eye's Z axis.
    pub distance: f32,
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            base_yaw: 40.0,
            distance: 30.0,
            fov_y: 45.0,
            near: 0.5,
            far: 1000.0,
        }
    }
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Eye frame for the given pose.
    ///
    /// Composed as `Ry(base) * Ry(yaw) * Rx(pitch) * Rz(roll) * T(0, 0, distance)`.
    /// The root node's world transform is `inverse(eye) * local`.
    pub fn eye_transform(&self, pose: &Pose) -> Transform {
        let orientation = pose.orientation;
        Transform::rotation_y(self.base_yaw)
            * Transform::rotation_y(orientation.y)
            * Transform::rotation_x(orientation.x)
            * Transform::rotation_z(orientation.z)
            * Transform::translation(glam::Vec3::new(0.0, 0.0, self.distance))
    }

    /// Right-handed OpenGL-style perspective projection.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y.to_radians(), aspect, self.near, self.far)
    }
}
