//! Globe configuration
//!
//! Every tunable lives here. Rates are per second; the comments give the
//! per-frame equivalent at 60 fps.

use serde::Deserialize;
use thiserror::Error;

use super::feed::DEFAULT_FEED_URL;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlobeConfig {
    pub feed_url: String,
    pub earth_texture: String,
    pub stars_texture: String,

    pub earth_radius: f32,
    pub stars_radius: f32,
    /// Width and height segments for both sphere meshes
    pub sphere_segments: u32,

    pub fov_y_deg: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub camera_distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,

    /// Globe and marker rotation, rad/s (0.0005 rad per frame)
    pub rotation_speed: f32,

    /// Marker disc radius per unit of magnitude
    pub marker_size: f32,
    /// Pulse disc radius per unit of magnitude
    pub pulse_size: f32,
    pub marker_segments: u32,
    /// Pulse scale growth per second (0.005 per frame)
    pub pulse_speed: f32,
    /// Scale a pulse starts from and wraps back to
    pub pulse_epsilon: f32,
    pub marker_opacity: f32,
    pub pulse_opacity: f32,

    /// Upper bound on a single frame step, seconds
    pub max_frame_dt: f64,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            earth_texture: "./static/images/earth.jpg".to_string(),
            stars_texture: "./static/images/stars.jpg".to_string(),
            earth_radius: 1.0,
            stars_radius: 90.0,
            sphere_segments: 64,
            fov_y_deg: 70.0,
            z_near: 0.05,
            z_far: 1000.0,
            camera_distance: 3.0,
            min_distance: 1.2,
            max_distance: 3.0,
            rotation_speed: 0.03,
            marker_size: 0.001,
            pulse_size: 0.004,
            marker_segments: 32,
            pulse_speed: 0.3,
            pulse_epsilon: 0.001,
            marker_opacity: 0.8,
            pulse_opacity: 0.2,
            max_frame_dt: 0.25,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}

impl GlobeConfig {
    /// Parse a (possibly partial) JSON override; missing keys keep defaults.
    /// Values that would break the camera or the frame clock are rejected.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        for (name, value) in [
            ("earth_radius", self.earth_radius),
            ("stars_radius", self.stars_radius),
            ("min_distance", self.min_distance),
            ("max_distance", self.max_distance),
            ("z_near", self.z_near),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return invalid(format!("{name} must be positive, got {value}"));
            }
        }
        if self.min_distance > self.max_distance {
            return invalid(format!(
                "min_distance {} exceeds max_distance {}",
                self.min_distance, self.max_distance
            ));
        }
        if !self.camera_distance.is_finite() {
            return invalid(format!("camera_distance must be finite, got {}", self.camera_distance));
        }
        if !self.max_frame_dt.is_finite() || self.max_frame_dt < 0.0 {
            return invalid(format!("max_frame_dt must be >= 0, got {}", self.max_frame_dt));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let cfg = GlobeConfig::from_json_str(r#"{"rotation_speed": 0.1, "max_distance": 5.0}"#)
            .unwrap();
        assert_eq!(cfg.rotation_speed, 0.1);
        assert_eq!(cfg.max_distance, 5.0);
        assert_eq!(cfg.earth_radius, 1.0);
        assert_eq!(cfg.feed_url, DEFAULT_FEED_URL);
    }

    #[test]
    fn per_frame_rates_match_sixty_fps() {
        let cfg = GlobeConfig::default();
        assert!((cfg.rotation_speed / 60.0 - 0.0005).abs() < 1e-7);
        assert!((cfg.pulse_speed / 60.0 - 0.005).abs() < 1e-7);
    }

    #[test]
    fn rejects_wrong_types() {
        let err = GlobeConfig::from_json_str(r#"{"earth_radius": "big"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_inverted_distance_limits() {
        let err = GlobeConfig::from_json_str(r#"{"max_distance": 1.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(GlobeConfig::from_json_str(r#"{"min_distance": 1.0, "max_distance": 1.0}"#).is_ok());
    }

    #[test]
    fn rejects_bad_frame_dt() {
        assert!(matches!(
            GlobeConfig::from_json_str(r#"{"max_frame_dt": -1}"#).unwrap_err(),
            ConfigError::Invalid(_)
        ));
        assert!(GlobeConfig::from_json_str(r#"{"max_frame_dt": 0}"#).is_ok());
    }

    #[test]
    fn rejects_non_positive_radii() {
        for json in [
            r#"{"earth_radius": 0}"#,
            r#"{"stars_radius": -90}"#,
            r#"{"min_distance": 0}"#,
        ] {
            assert!(
                matches!(GlobeConfig::from_json_str(json), Err(ConfigError::Invalid(_))),
                "{json} should be rejected"
            );
        }
    }

    #[test]
    fn default_is_valid() {
        assert!(GlobeConfig::default().validate().is_ok());
    }
}
