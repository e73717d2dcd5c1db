//! Platform-agnostic core module - shared between the WASM app and CLI

pub mod camera;
pub mod config;
pub mod feed;
pub mod geo;
pub mod marker;
pub mod mesh;
pub mod scene;

pub use camera::OrbitCamera;
pub use config::{ConfigError, GlobeConfig};
pub use feed::{parse_feed, EarthquakeEvent, FeedError, DEFAULT_FEED_URL};
pub use geo::lat_lon_to_cartesian;
pub use marker::{MarkerMesh, Pulse};
pub use scene::Scene;
