//! Geographic to cartesian conversion
//!
//! Axis convention (right-handed, Y up):
//! - `+Y` points at the north pole, `-Y` at the south pole.
//! - `(lat 0, lon 0)` lands on `+X`.
//! - `(lat 0, lon 90)` lands on `-Z`, `(lat 0, lon -90)` on `+Z`.
//!
//! The longitude is offset by 180° and `x` is negated, which lines the
//! globe up with an equirectangular texture whose left edge is lon -180.

use glam::DVec3;
use std::f64::consts::PI;

const DEG_TO_RAD: f64 = PI / 180.0;

/// Convert latitude/longitude (degrees) to a point on a sphere of `radius`.
///
/// ```text
/// phi   = (90 - lat) deg      polar angle measured from +Y
/// theta = (lon + 180) deg
/// x = -(r * sin(phi) * cos(theta))
/// z =   r * sin(phi) * sin(theta)
/// y =   r * cos(phi)
/// ```
pub fn lat_lon_to_cartesian(lat: f64, lon: f64, radius: f64) -> DVec3 {
    let phi = (90.0 - lat) * DEG_TO_RAD;
    let theta = (lon + 180.0) * DEG_TO_RAD;

    let x = -(radius * phi.sin() * theta.cos());
    let z = radius * phi.sin() * theta.sin();
    let y = radius * phi.cos();

    DVec3::new(x, y, z)
}

/// Unit outward normal at a geographic coordinate
pub fn surface_normal(lat: f64, lon: f64) -> DVec3 {
    lat_lon_to_cartesian(lat, lon, 1.0)
}

/// East and north unit vectors tangent to the sphere at `(lat, lon)`.
///
/// At the poles east is undefined; the frame falls back to a fixed axis so
/// discs placed there still have a valid orientation.
pub fn tangent_frame(lat: f64, lon: f64) -> (DVec3, DVec3) {
    let normal = surface_normal(lat, lon);
    let east = DVec3::Y.cross(normal);
    let east = if east.length_squared() < 1e-12 {
        DVec3::X
    } else {
        east.normalize()
    };
    let north = normal.cross(east).normalize();
    (east, north)
}

/// Equirectangular texture coordinate for a geographic coordinate.
///
/// `u` runs 0..1 from lon -180 to lon 180, `v` runs 0..1 from the north
/// pole (top row) to the south pole.
pub fn equirect_uv(lat: f64, lon: f64) -> [f64; 2] {
    let u = ((lon + 180.0) / 360.0).rem_euclid(1.0);
    let v = (90.0 - lat) / 180.0;
    [u, v]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: DVec3, b: DVec3) {
        assert!((a - b).length() < EPS, "{a:?} != {b:?}");
    }

    #[test]
    fn point_lies_on_sphere() {
        for &radius in &[0.5, 1.0, 6371.0] {
            for lat in (-90..=90).step_by(15) {
                for lon in (-180..=180).step_by(20) {
                    let p = lat_lon_to_cartesian(lat as f64, lon as f64, radius);
                    assert!(
                        (p.length() - radius).abs() < EPS * radius,
                        "lat={lat} lon={lon} r={radius} norm={}",
                        p.length()
                    );
                }
            }
        }
    }

    #[test]
    fn longitude_is_periodic() {
        for &(lat, lon) in &[(12.5, -33.0), (-47.1, 170.2), (0.0, 0.0), (89.0, -179.9)] {
            let a = lat_lon_to_cartesian(lat, lon, 1.0);
            let b = lat_lon_to_cartesian(lat, lon + 360.0, 1.0);
            let c = lat_lon_to_cartesian(lat, lon - 360.0, 1.0);
            assert_close(a, b);
            assert_close(a, c);
        }
    }

    #[test]
    fn poles_are_on_y_axis() {
        for lon in [-180.0, -75.0, 0.0, 42.0, 180.0] {
            let north = lat_lon_to_cartesian(90.0, lon, 2.0);
            let south = lat_lon_to_cartesian(-90.0, lon, 2.0);
            assert!((north.y - 2.0).abs() < EPS);
            assert!((south.y + 2.0).abs() < EPS);
            assert!(north.x.abs() < EPS && north.z.abs() < EPS);
        }
    }

    #[test]
    fn origin_maps_to_positive_x() {
        let p = lat_lon_to_cartesian(0.0, 0.0, 3.0);
        assert_close(p, DVec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn quarter_turns_follow_axis_convention() {
        assert_close(lat_lon_to_cartesian(0.0, 90.0, 1.0), DVec3::new(0.0, 0.0, -1.0));
        assert_close(lat_lon_to_cartesian(0.0, -90.0, 1.0), DVec3::new(0.0, 0.0, 1.0));
        assert_close(lat_lon_to_cartesian(0.0, 180.0, 1.0), DVec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn tangent_frame_is_orthonormal() {
        for &(lat, lon) in &[(0.0, 0.0), (35.0, 139.0), (-60.0, -70.0), (90.0, 10.0), (-90.0, 0.0)] {
            let n = surface_normal(lat, lon);
            let (east, north) = tangent_frame(lat, lon);
            assert!((east.length() - 1.0).abs() < EPS);
            assert!((north.length() - 1.0).abs() < EPS);
            assert!(east.dot(n).abs() < EPS);
            assert!(north.dot(n).abs() < EPS);
            assert!(east.dot(north).abs() < EPS);
        }
    }

    #[test]
    fn north_vector_points_toward_pole() {
        let (_, north) = tangent_frame(10.0, 20.0);
        assert!(north.y > 0.0);
    }

    #[test]
    fn uv_matches_texture_layout() {
        assert_eq!(equirect_uv(90.0, -180.0), [0.0, 0.0]);
        assert_eq!(equirect_uv(0.0, 0.0), [0.5, 0.5]);
        let [u, v] = equirect_uv(-90.0, 90.0);
        assert!((u - 0.75).abs() < EPS);
        assert!((v - 1.0).abs() < EPS);
    }
}
