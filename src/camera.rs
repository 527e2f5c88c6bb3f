use glam::{Mat4, Vec3};

use crate::kinematics::SWEEP_HALF_WIDTH;

pub const FOV_Y_DEGREES: f32 = 75.0;
const NEAR: f32 = 0.1;
/// Depth kept visible past the origin; particle depth jitter is a few units.
const FAR_MARGIN: f32 = 500.0;

/// Perspective camera on +Z looking at the origin, backed off far enough
/// that the whole horizontal sweep is visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub aspect: f32,
    pub distance: f32,
}

impl Camera {
    pub fn for_viewport(width: f32, height: f32) -> Self {
        let width = width.max(1.0);
        let height = height.max(1.0);
        let aspect = width / height;

        let half_fov_x = ((FOV_Y_DEGREES.to_radians() * 0.5).tan() * aspect).atan();
        let distance = SWEEP_HALF_WIDTH as f32 / half_fov_x.tan();

        Self { aspect, distance }
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.distance)
    }

    pub fn view_projection(&self) -> Mat4 {
        let far = self.distance + FAR_MARGIN;
        let proj = Mat4::perspective_rh_gl(FOV_Y_DEGREES.to_radians(), self.aspect, NEAR, far);
        let view = Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y);
        proj * view
    }
}
