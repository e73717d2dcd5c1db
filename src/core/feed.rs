//! USGS GeoJSON earthquake feed decoding
//!
//! Only the fields the globe needs are read; everything else in the
//! document is ignored by serde.

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Public feed: all magnitude 1.0+ events from the past day
pub const DEFAULT_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/1.0_day.geojson";

/// One earthquake record from the feed
#[derive(Clone, Debug, PartialEq)]
pub struct EarthquakeEvent {
    pub longitude: f64,
    pub latitude: f64,
    pub magnitude: f64,
    /// Human readable location, e.g. "10 km SW of Volcano, Hawaii"
    pub place: Option<String>,
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("failed to decode feed: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FeedError>;

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    geometry: Geometry,
    properties: Properties,
}

#[derive(Deserialize)]
struct Geometry {
    coordinates: Vec<f64>,
}

#[derive(Deserialize)]
struct Properties {
    mag: Option<f64>,
    #[serde(default)]
    place: Option<String>,
}

/// Decode a GeoJSON feed body into events, one per feature, in feed order.
///
/// Features without at least `[lon, lat]` are skipped with a warning.
pub fn parse_feed(body: &str) -> Result<Vec<EarthquakeEvent>> {
    trace!(len = body.len(), "Parsing feed body");

    let collection: FeatureCollection = serde_json::from_str(body)?;

    let events = collection
        .features
        .into_iter()
        .enumerate()
        .filter_map(|(index, feature)| {
            let (longitude, latitude) = match feature.geometry.coordinates[..] {
                [lon, lat, ..] => (lon, lat),
                ref coords => {
                    warn!(index, count = coords.len(), "Skipping feature without [lon, lat]");
                    return None;
                }
            };
            Some(EarthquakeEvent {
                longitude,
                latitude,
                // The feed occasionally reports `"mag": null`
                magnitude: feature.properties.mag.unwrap_or(0.0),
                place: feature.properties.place,
            })
        })
        .collect::<Vec<_>>();

    debug!(count = events.len(), "Decoded feed");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "metadata": {"generated": 1700000000000, "count": 3},
        "features": [
            {
                "type": "Feature",
                "properties": {"mag": 4.6, "place": "80 km S of Sand Point, Alaska", "time": 1700000000000},
                "geometry": {"type": "Point", "coordinates": [-160.4, 54.6, 35.2]},
                "id": "ak0001"
            },
            {
                "type": "Feature",
                "properties": {"mag": 1.2, "place": null},
                "geometry": {"type": "Point", "coordinates": [139.7, 35.7, 10.0]},
                "id": "us0002"
            },
            {
                "type": "Feature",
                "properties": {"mag": null},
                "geometry": {"type": "Point", "coordinates": [12.0, -3.5]},
                "id": "us0003"
            }
        ]
    }"#;

    #[test]
    fn test_parse_sample_feed() {
        let events = parse_feed(SAMPLE).unwrap();
        assert_eq!(events.len(), 3);

        assert_eq!(events[0].longitude, -160.4);
        assert_eq!(events[0].latitude, 54.6);
        assert_eq!(events[0].magnitude, 4.6);
        assert_eq!(events[0].place.as_deref(), Some("80 km S of Sand Point, Alaska"));

        assert_eq!(events[1].place, None);
        assert_eq!(events[2].magnitude, 0.0);
        assert_eq!(events[2].latitude, -3.5);
    }

    #[test]
    fn test_empty_feed() {
        let events = parse_feed(r#"{"type": "FeatureCollection", "features": []}"#).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_not_json_is_decode_error() {
        let err = parse_feed("<html>503</html>").unwrap_err();
        assert!(matches!(err, FeedError::Decode(_)));
    }

    #[test]
    fn test_missing_features_is_decode_error() {
        let err = parse_feed(r#"{"type": "FeatureCollection"}"#).unwrap_err();
        assert!(matches!(err, FeedError::Decode(_)));
    }

    #[test]
    fn test_short_coordinates_skipped() {
        let body = r#"{"features": [
            {"properties": {"mag": 2.0}, "geometry": {"coordinates": [1.0, 2.0]}},
            {"properties": {"mag": 3.0}, "geometry": {"coordinates": [1.0]}},
            {"properties": {"mag": 4.0}, "geometry": {"coordinates": []}},
            {"properties": {"mag": 5.0}, "geometry": {"coordinates": [7.0, 8.0, 10.0]}}
        ]}"#;
        let events = parse_feed(body).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].magnitude, 2.0);
        assert_eq!((events[1].longitude, events[1].latitude), (7.0, 8.0));
    }
}
