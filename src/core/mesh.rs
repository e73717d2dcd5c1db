//! Triangle meshes for the globe, the starfield and marker discs

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Indexed triangle mesh with per-vertex texture coordinates
#[derive(Clone, Debug, Default)]
pub struct SphereMesh {
    pub positions: Vec<Vec3>,
    /// `[u, v]` with v = 0 at the north pole
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// UV sphere with `segments` columns and `rings` rows.
///
/// Vertex `(u, v)` sits at `lat = 90 - 180 v`, `lon = 360 u - 180`, using
/// the same axis convention as [`super::geo::lat_lon_to_cartesian`], so an
/// equirectangular texture lines up with geographic markers. Degenerate
/// triangles at the poles are skipped.
pub fn uv_sphere(radius: f32, segments: u32, rings: u32) -> SphereMesh {
    let segments = segments.max(3);
    let rings = rings.max(2);
    let row = segments + 1;

    let mut mesh = SphereMesh {
        positions: Vec::with_capacity((row * (rings + 1)) as usize),
        uvs: Vec::with_capacity((row * (rings + 1)) as usize),
        indices: Vec::with_capacity((segments * rings * 6) as usize),
    };

    for iy in 0..=rings {
        let v = iy as f32 / rings as f32;
        let phi = v * std::f32::consts::PI;
        for ix in 0..=segments {
            let u = ix as f32 / segments as f32;
            let theta = u * std::f32::consts::TAU;
            mesh.positions.push(Vec3::new(
                -radius * phi.sin() * theta.cos(),
                radius * phi.cos(),
                radius * phi.sin() * theta.sin(),
            ));
            mesh.uvs.push([u, v]);
        }
    }

    for iy in 0..rings {
        for ix in 0..segments {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != rings - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    mesh
}

/// Flat disc as a triangle fan: vertex 0 is the centre, the rim follows.
///
/// `east`/`north` span the disc plane; both must be unit length.
pub fn disc(center: Vec3, east: Vec3, north: Vec3, radius: f32, segments: u32) -> Vec<Vec3> {
    let segments = segments.max(3);
    let mut verts = Vec::with_capacity(segments as usize + 1);
    verts.push(center);
    for i in 0..segments {
        let a = i as f32 / segments as f32 * std::f32::consts::TAU;
        verts.push(center + (east * a.cos() + north * a.sin()) * radius);
    }
    verts
}

/// Uniformly scattered points on a sphere, used as a starfield when the sky
/// texture is unavailable. Deterministic for a given seed.
pub fn star_points(count: usize, radius: f32, seed: u64) -> Vec<Vec3> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let y: f32 = rng.gen_range(-1.0..=1.0);
            let theta: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
            let r = (1.0 - y * y).max(0.0).sqrt();
            Vec3::new(r * theta.cos(), y, r * theta.sin()) * radius
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::lat_lon_to_cartesian;

    #[test]
    fn sphere_vertices_on_radius() {
        let mesh = uv_sphere(2.0, 16, 8);
        assert_eq!(mesh.positions.len(), 17 * 9);
        for p in &mesh.positions {
            assert!((p.length() - 2.0).abs() < 1e-5);
        }
    }

    #[test]
    fn sphere_triangle_count_skips_pole_caps() {
        let mesh = uv_sphere(1.0, 64, 64);
        // Full grid minus one triangle per segment at each pole
        assert_eq!(mesh.triangle_count(), 64 * 64 * 2 - 2 * 64);
        let max = *mesh.indices.iter().max().unwrap() as usize;
        assert!(max < mesh.positions.len());
    }

    #[test]
    fn sphere_vertex_matches_geographic_transform() {
        let mesh = uv_sphere(1.0, 8, 4);
        // iy = 2 is the equator, ix = 4 is u = 0.5, i.e. lon 0
        let p = mesh.positions[2 * 9 + 4];
        let expected = lat_lon_to_cartesian(0.0, 0.0, 1.0).as_vec3();
        assert!((p - expected).length() < 1e-5);
        assert_eq!(mesh.uvs[2 * 9 + 4], [0.5, 0.5]);
    }

    #[test]
    fn disc_rim_has_radius() {
        let verts = disc(Vec3::X, Vec3::Z, Vec3::Y, 0.25, 32);
        assert_eq!(verts.len(), 33);
        for v in &verts[1..] {
            assert!(((*v - Vec3::X).length() - 0.25).abs() < 1e-5);
            assert!((v.x - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn stars_are_deterministic_and_on_sphere() {
        let a = star_points(200, 90.0, 7);
        let b = star_points(200, 90.0, 7);
        assert_eq!(a, b);
        for p in &a {
            assert!((p.length() - 90.0).abs() < 1e-3);
        }
        assert_ne!(a, star_points(200, 90.0, 8));
    }
}
