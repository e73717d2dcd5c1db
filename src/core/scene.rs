//! Scene context: camera, globe, starfield and markers
//!
//! The scene is created explicitly by the host (browser app or CLI), mutated
//! only through [`Scene::update`] and friends from a single thread, and torn
//! down with [`Scene::teardown`].

use glam::{Mat4, Vec3};
use tracing::{debug, error, info};

use super::camera::OrbitCamera;
use super::config::GlobeConfig;
use super::feed::{self, EarthquakeEvent};
use super::marker::MarkerMesh;
use super::mesh::{uv_sphere, SphereMesh};

/// Textured earth sphere
pub struct Globe {
    pub radius: f32,
    pub rotation_y: f32,
    pub mesh: SphereMesh,
}

/// Inward-facing sky sphere. Never rotates.
pub struct Starfield {
    pub radius: f32,
    pub mesh: SphereMesh,
}

/// Container for all markers, rotated together with the globe
#[derive(Default)]
pub struct MarkerGroup {
    pub rotation_y: f32,
    pub markers: Vec<MarkerMesh>,
}

impl MarkerGroup {
    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_y)
    }
}

pub struct Scene {
    pub config: GlobeConfig,
    pub camera: OrbitCamera,
    pub globe: Globe,
    pub stars: Starfield,
    pub marker_group: MarkerGroup,
    /// Seconds of animation applied so far
    elapsed: f64,
}

impl Scene {
    /// Build the scene graph for a viewport of `width` x `height` pixels
    pub fn init(config: GlobeConfig, width: f32, height: f32) -> Self {
        let aspect = if width > 0.0 && height > 0.0 {
            width / height
        } else {
            1.0
        };
        let camera = OrbitCamera::from_config(&config, aspect);

        let globe = Globe {
            radius: config.earth_radius,
            rotation_y: 0.0,
            mesh: uv_sphere(config.earth_radius, config.sphere_segments, config.sphere_segments),
        };
        let stars = Starfield {
            radius: config.stars_radius,
            mesh: uv_sphere(config.stars_radius, config.sphere_segments, config.sphere_segments),
        };

        info!(
            width,
            height,
            globe_triangles = globe.mesh.triangle_count(),
            "Scene initialised"
        );

        Self {
            config,
            camera,
            globe,
            stars,
            marker_group: MarkerGroup::default(),
            elapsed: 0.0,
        }
    }

    /// Consume a feed result. Success creates one marker per event and
    /// returns how many were added; failure is logged and adds nothing.
    pub fn apply_feed(&mut self, result: feed::Result<Vec<EarthquakeEvent>>) -> usize {
        match result {
            Ok(events) => self.add_markers(events),
            Err(e) => {
                error!(error = %e, "Earthquake feed unavailable");
                0
            }
        }
    }

    pub fn add_markers(&mut self, events: impl IntoIterator<Item = EarthquakeEvent>) -> usize {
        let before = self.marker_group.markers.len();
        for event in events {
            let marker = MarkerMesh::new(event, &self.config);
            self.marker_group.markers.push(marker);
        }
        let added = self.marker_group.markers.len() - before;
        info!(added, total = self.marker_group.markers.len(), "Markers created");
        added
    }

    /// Advance the whole scene by `dt` seconds: globe and marker group
    /// rotate by the same angle, then every pulse steps.
    pub fn update(&mut self, dt: f64) {
        let dt = dt.max(0.0) as f32;
        let delta = self.config.rotation_speed * dt;

        self.globe.rotation_y += delta;
        self.marker_group.rotation_y += delta;

        for marker in &mut self.marker_group.markers {
            marker.pulse.advance(dt);
        }

        self.elapsed += dt as f64;
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        debug!(width, height, "Viewport resized");
        self.camera.resize(width, height);
    }

    pub fn globe_transform(&self) -> Mat4 {
        Mat4::from_rotation_y(self.globe.rotation_y)
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn marker_count(&self) -> usize {
        self.marker_group.markers.len()
    }

    /// Markers on the hemisphere facing the camera, with their world-space
    /// centre and normal
    pub fn visible_markers(&self) -> impl Iterator<Item = (&MarkerMesh, Vec3, Vec3)> + '_ {
        let transform = self.marker_group.transform();
        let eye = self.camera.eye();
        self.marker_group.markers.iter().filter_map(move |marker| {
            let center = transform.transform_point3(marker.position);
            let normal = transform.transform_vector3(marker.normal);
            (normal.dot(eye - center) > 0.0).then_some((marker, center, normal))
        })
    }

    /// Drop every marker and reset the animation state
    pub fn teardown(&mut self) {
        info!(
            markers = self.marker_group.markers.len(),
            elapsed = self.elapsed,
            "Scene torn down"
        );
        self.marker_group.markers.clear();
        self.marker_group.rotation_y = 0.0;
        self.globe.rotation_y = 0.0;
        self.elapsed = 0.0;
    }
}
