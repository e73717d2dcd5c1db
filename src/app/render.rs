//! Globe painting: sky, earth, markers, plus orbit input and hover labels
//!
//! Everything is projected on the CPU through the orbit camera and handed
//! to egui as plain triangle meshes. The globe is convex, so back-face
//! culling is enough to order it; markers are painted on top.

use eframe::egui;
use glam::{Mat4, Vec2, Vec3};

use super::GlobeApp;
use crate::core::mesh::{disc, SphereMesh};
use crate::core::{MarkerMesh, OrbitCamera};
use crate::theme::{colors, marker_color};

/// Lifts marker discs off the surface so their rim is never culled with it
const MARKER_LIFT: f32 = 0.002;
/// Minimum hover radius around a marker, pixels
const HOVER_SLOP: f32 = 6.0;

/// Screen-space viewport the camera projects into
#[derive(Clone, Copy)]
struct Viewport {
    min: Vec2,
    size: Vec2,
}

impl Viewport {
    fn from_rect(rect: egui::Rect) -> Self {
        Self {
            min: Vec2::new(rect.min.x, rect.min.y),
            size: Vec2::new(rect.width(), rect.height()),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Facing {
    /// Solid globe seen from outside
    Outward,
    /// Sky sphere seen from inside
    Inward,
}

fn to_pos(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

/// Lambert-ish shade with the light at the camera
fn shade(base: egui::Color32, normal: Vec3, to_eye: Vec3) -> egui::Color32 {
    let k = 0.35 + 0.65 * normal.dot(to_eye.normalize_or_zero()).max(0.0);
    egui::Color32::from_rgb(
        (base.r() as f32 * k) as u8,
        (base.g() as f32 * k) as u8,
        (base.b() as f32 * k) as u8,
    )
}

#[allow(clippy::too_many_arguments)]
fn paint_sphere(
    painter: &egui::Painter,
    camera: &OrbitCamera,
    view_proj: &Mat4,
    viewport: Viewport,
    sphere: &SphereMesh,
    model: Mat4,
    texture: Option<egui::TextureId>,
    facing: Facing,
) {
    let eye = camera.eye();
    let world: Vec<Vec3> = sphere
        .positions
        .iter()
        .map(|&p| model.transform_point3(p))
        .collect();
    let projected: Vec<Option<Vec2>> = world
        .iter()
        .map(|&p| camera.project(view_proj, p, viewport.min, viewport.size))
        .collect();

    let mut mesh = match texture {
        Some(id) => egui::Mesh::with_texture(id),
        None => egui::Mesh::default(),
    };

    for (i, screen) in projected.iter().enumerate() {
        let (uv, color) = match texture {
            Some(_) => (
                egui::pos2(sphere.uvs[i][0], sphere.uvs[i][1]),
                egui::Color32::WHITE,
            ),
            None => (
                egui::epaint::WHITE_UV,
                shade(colors::OCEAN, world[i].normalize_or_zero(), eye - world[i]),
            ),
        };
        mesh.vertices.push(egui::epaint::Vertex {
            pos: to_pos(screen.unwrap_or(Vec2::ZERO)),
            uv,
            color,
        });
    }

    for tri in sphere.indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if projected[a].is_none() || projected[b].is_none() || projected[c].is_none() {
            continue;
        }
        if facing == Facing::Outward {
            let centroid = (world[a] + world[b] + world[c]) / 3.0;
            if centroid.dot(eye - centroid) <= 0.0 {
                continue;
            }
        }
        mesh.add_triangle(tri[0], tri[1], tri[2]);
    }

    painter.add(egui::Shape::mesh(mesh));
}

/// Paint a flat disc; returns its projected centre and rim radius in pixels
#[allow(clippy::too_many_arguments)]
fn paint_disc(
    painter: &egui::Painter,
    camera: &OrbitCamera,
    view_proj: &Mat4,
    viewport: Viewport,
    center: Vec3,
    east: Vec3,
    north: Vec3,
    radius: f32,
    segments: u32,
    color: egui::Color32,
) -> Option<(Vec2, f32)> {
    let verts = disc(center, east, north, radius, segments);
    let projected = verts
        .iter()
        .map(|&p| camera.project(view_proj, p, viewport.min, viewport.size))
        .collect::<Option<Vec<Vec2>>>()?;

    let mut mesh = egui::Mesh::default();
    for &p in &projected {
        mesh.colored_vertex(to_pos(p), color);
    }
    let rim = projected.len() as u32 - 1;
    for i in 1..=rim {
        let next = if i == rim { 1 } else { i + 1 };
        mesh.add_triangle(0, i, next);
    }
    painter.add(egui::Shape::mesh(mesh));

    let screen_radius = (projected[1] - projected[0]).length();
    Some((projected[0], screen_radius))
}

impl GlobeApp {
    pub(crate) fn render_globe(&mut self, ui: &mut egui::Ui, rect: egui::Rect) {
        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

        if response.dragged() {
            let d = response.drag_delta();
            self.scene.camera.orbit(Vec2::new(d.x, d.y));
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            self.scene.camera.zoom(scroll);
        }

        let painter = ui.painter_at(rect);
        let viewport = Viewport::from_rect(rect);
        let camera = &self.scene.camera;
        let view_proj = camera.view_proj();

        // Sky
        match &self.stars_texture {
            Some(tex) => paint_sphere(
                &painter,
                camera,
                &view_proj,
                viewport,
                &self.scene.stars.mesh,
                Mat4::IDENTITY,
                Some(tex.id()),
                Facing::Inward,
            ),
            None => {
                for &star in &self.star_points {
                    if let Some(p) = camera.project(&view_proj, star, viewport.min, viewport.size) {
                        painter.circle_filled(to_pos(p), 0.8, colors::STAR);
                    }
                }
            }
        }

        // Earth
        paint_sphere(
            &painter,
            camera,
            &view_proj,
            viewport,
            &self.scene.globe.mesh,
            self.scene.globe_transform(),
            self.earth_texture.as_ref().map(|t| t.id()),
            Facing::Outward,
        );

        // Markers and pulses
        let cfg = &self.scene.config;
        let group = self.scene.marker_group.transform();
        let marker_fill = marker_color(cfg.marker_opacity);
        let pulse_fill = marker_color(cfg.pulse_opacity);
        let mut hit_targets: Vec<(&MarkerMesh, Vec2, f32)> = Vec::new();

        for (marker, center, normal) in self.scene.visible_markers() {
            let east = group.transform_vector3(marker.east);
            let north = group.transform_vector3(marker.north);
            let lifted = center + normal * MARKER_LIFT;

            let drawn = paint_disc(
                &painter,
                camera,
                &view_proj,
                viewport,
                lifted,
                east,
                north,
                marker.radius,
                cfg.marker_segments,
                marker_fill,
            );
            paint_disc(
                &painter,
                camera,
                &view_proj,
                viewport,
                lifted,
                east,
                north,
                marker.pulse.current_radius(),
                cfg.marker_segments,
                pulse_fill,
            );

            if let Some((screen, screen_radius)) = drawn {
                hit_targets.push((marker, screen, screen_radius));
            }
        }

        let hovered = response.hover_pos().and_then(|pos| {
            let pointer = Vec2::new(pos.x, pos.y);
            hit_targets
                .iter()
                .map(|&(marker, screen, r)| (marker, screen.distance(pointer), r))
                .filter(|&(_, dist, r)| dist <= r.max(HOVER_SLOP))
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(marker, _, _)| marker)
        });

        if let Some(marker) = hovered {
            let place = marker.event.place.as_deref().unwrap_or("unknown location");
            response.on_hover_text_at_pointer(format!("M{:.1}  {}", marker.event.magnitude, place));
        }
    }
}
