//! Headless CLI for the earthquake globe pipeline
//!
//! Fetches the live feed, builds the scene and steps it at 60 Hz, logging
//! stats once per second. Run with: cargo run --features cli --bin quake-cli

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use quake_globe::core::{GlobeConfig, Scene};
    use quake_globe::feed_state::FeedState;
    use quake_globe::fetch_native::fetch_feed;
    use quake_globe::time::{now_seconds, FrameClock};
    use std::time::Duration;
    use tracing::{info, warn};
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,quake_globe=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let mut config = GlobeConfig::default();
    if let Ok(url) = std::env::var("QUAKE_FEED_URL") {
        config.feed_url = url;
    }
    let seconds: u64 = match std::env::var("QUAKE_CLI_SECONDS") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(value = %raw, "Invalid QUAKE_CLI_SECONDS, using 5");
            5
        }),
        Err(_) => 5,
    };

    let mut scene = Scene::init(config, 1280.0, 720.0);

    let result = fetch_feed(&scene.config.feed_url).await;
    let state = match &result {
        Ok(events) => FeedState::Loaded(events.len()),
        Err(e) => FeedState::Failed(e.to_string()),
    };
    scene.apply_feed(result);
    info!(status = %state.label(), "Feed applied");

    if let Some(strongest) = scene
        .marker_group
        .markers
        .iter()
        .max_by(|a, b| a.event.magnitude.total_cmp(&b.event.magnitude))
    {
        info!(
            magnitude = strongest.event.magnitude,
            place = strongest.event.place.as_deref().unwrap_or("?"),
            lat = strongest.event.latitude,
            lon = strongest.event.longitude,
            "Strongest event"
        );
    }

    let mut clock = FrameClock::new(scene.config.max_frame_dt);
    let mut frame = tokio::time::interval(Duration::from_secs_f64(1.0 / 60.0));
    let mut stats = tokio::time::interval(Duration::from_secs(1));
    let deadline = tokio::time::sleep(Duration::from_secs(seconds));
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            _ = frame.tick() => {
                let dt = clock.tick(now_seconds());
                scene.update(dt);
            }
            _ = stats.tick() => {
                let visible = scene.visible_markers().count();
                info!(
                    elapsed = format!("{:.2}s", scene.elapsed()),
                    rotation = format!("{:.4} rad", scene.globe.rotation_y),
                    markers = scene.marker_count(),
                    visible,
                    "stats"
                );
            }
            _ = &mut deadline => break,
        }
    }

    scene.teardown();
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
