//! Orbit camera around the globe centre

use glam::{Mat4, Vec2, Vec3, Vec4Swizzles};
use tracing::debug;

use super::config::GlobeConfig;

/// Keeps the camera from flipping over the poles
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.017;
/// Radians of orbit per pixel of drag
const ORBIT_SENSITIVITY: f32 = 0.005;
const ZOOM_SENSITIVITY: f32 = 0.0015;

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub fov_y: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_config(&GlobeConfig::default(), 1.0)
    }
}

impl OrbitCamera {
    /// Camera on +Z at `camera_distance`, looking at the origin.
    ///
    /// Inverted distance limits are swapped so clamping stays well defined.
    pub fn from_config(cfg: &GlobeConfig, aspect: f32) -> Self {
        let min_distance = cfg.min_distance.min(cfg.max_distance);
        let max_distance = cfg.min_distance.max(cfg.max_distance);
        Self {
            yaw: std::f32::consts::FRAC_PI_2,
            pitch: 0.0,
            distance: cfg.camera_distance.max(min_distance).min(max_distance),
            fov_y: cfg.fov_y_deg.to_radians(),
            aspect,
            z_near: cfg.z_near,
            z_far: cfg.z_far,
            min_distance,
            max_distance,
        }
    }

    /// Rotate around the target by a pointer drag in pixels
    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw += delta.x * ORBIT_SENSITIVITY;
        self.pitch = (self.pitch + delta.y * ORBIT_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Dolly in or out; positive scroll moves closer
    pub fn zoom(&mut self, scroll: f32) {
        if scroll == 0.0 {
            return;
        }
        let factor = (-scroll * ZOOM_SENSITIVITY).exp();
        self.distance = (self.distance * factor)
            .max(self.min_distance)
            .min(self.max_distance);
    }

    /// Track a new viewport size. Only the aspect ratio changes.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            debug!(width, height, "Ignoring degenerate viewport");
            return;
        }
        self.aspect = width / height;
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.distance * self.yaw.cos() * self.pitch.cos(),
            self.distance * self.pitch.sin(),
            self.distance * self.yaw.sin() * self.pitch.cos(),
        )
    }

    pub fn view_proj(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh(self.fov_y, self.aspect.max(1e-3), self.z_near, self.z_far);
        proj * view
    }

    /// Project a world point into a viewport given as `(min, size)` in
    /// screen pixels (y down). Returns `None` for points behind the near
    /// plane.
    pub fn project(&self, view_proj: &Mat4, point: Vec3, min: Vec2, size: Vec2) -> Option<Vec2> {
        let clip = *view_proj * point.extend(1.0);
        if clip.w <= self.z_near {
            return None;
        }
        let ndc = clip.xy() / clip.w;
        Some(Vec2::new(
            min.x + (ndc.x + 1.0) * 0.5 * size.x,
            min.y + (1.0 - ndc.y) * 0.5 * size.y,
        ))
    }
}
