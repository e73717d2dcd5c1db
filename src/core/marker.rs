//! Earthquake markers and their pulse animation

use glam::Vec3;

use super::config::GlobeConfig;
use super::feed::EarthquakeEvent;
use super::geo::{lat_lon_to_cartesian, tangent_frame};

/// Expanding translucent disc nested in a marker.
///
/// `scale` grows from `epsilon` toward 1 and wraps back to `epsilon`.
#[derive(Clone, Debug, PartialEq)]
pub struct Pulse {
    /// Radius at scale 1
    pub radius: f32,
    pub scale: f32,
    speed: f32,
    epsilon: f32,
}

impl Pulse {
    pub fn new(radius: f32, speed: f32, epsilon: f32) -> Self {
        Self {
            radius,
            scale: epsilon,
            speed,
            epsilon,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.scale += self.speed * dt;
        if self.scale >= 1.0 {
            self.scale = self.epsilon;
        }
    }

    /// Current drawn radius
    pub fn current_radius(&self) -> f32 {
        self.radius * self.scale
    }
}

/// Disc on the globe surface for one earthquake
#[derive(Clone, Debug)]
pub struct MarkerMesh {
    pub event: EarthquakeEvent,
    /// Position in the unrotated globe frame
    pub position: Vec3,
    /// Outward unit normal; the disc faces away from the globe centre
    pub normal: Vec3,
    pub east: Vec3,
    pub north: Vec3,
    pub radius: f32,
    pub pulse: Pulse,
}

impl MarkerMesh {
    pub fn new(event: EarthquakeEvent, cfg: &GlobeConfig) -> Self {
        let position =
            lat_lon_to_cartesian(event.latitude, event.longitude, cfg.earth_radius as f64)
                .as_vec3();
        let (east, north) = tangent_frame(event.latitude, event.longitude);
        let magnitude = event.magnitude as f32;

        Self {
            position,
            normal: position.normalize_or_zero(),
            east: east.as_vec3(),
            north: north.as_vec3(),
            radius: cfg.marker_size * magnitude,
            pulse: Pulse::new(cfg.pulse_size * magnitude, cfg.pulse_speed, cfg.pulse_epsilon),
            event,
        }
    }
}
