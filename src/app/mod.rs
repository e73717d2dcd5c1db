//! Browser globe app
//!
//! eframe calls `update()` once per animation frame; that callback is the
//! single scheduler for the whole scene: drain async results, step the
//! scene by the frame delta, then paint.

mod header;
mod render;

use eframe::egui;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};

use crate::core::feed::{self, EarthquakeEvent};
use crate::core::mesh::star_points;
use crate::core::{GlobeConfig, Scene};
use crate::feed_state::FeedState;
use crate::fetch_wasm::{spawn_feed_fetch, window_string, Inbox};
use crate::textures::{spawn_texture_load, TextureInbox, TextureSlot};
use crate::theme::{colors, minimal_visuals};
use crate::time::{now_seconds, FpsCounter, FrameClock};

const STAR_COUNT: usize = 1500;
const STAR_SEED: u64 = 0x5eed_57a2;

pub struct GlobeApp {
    pub(crate) scene: Scene,
    pub(crate) feed_state: FeedState,
    feed_inbox: Inbox<feed::Result<Vec<EarthquakeEvent>>>,
    texture_inbox: TextureInbox,
    pub(crate) earth_texture: Option<egui::TextureHandle>,
    pub(crate) stars_texture: Option<egui::TextureHandle>,
    /// Fallback sky when the stars texture is missing
    pub(crate) star_points: Vec<glam::Vec3>,
    clock: FrameClock,
    pub(crate) fps_counter: FpsCounter,
    /// Last canvas size pushed to the camera
    last_size: egui::Vec2,
}

impl GlobeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(minimal_visuals());

        let config = match window_string("__quake_globe_config") {
            Some(json) => GlobeConfig::from_json_str(&json).unwrap_or_else(|e| {
                warn!(error = %e, "Ignoring invalid config override");
                GlobeConfig::default()
            }),
            None => GlobeConfig::default(),
        };
        let feed_url = window_string("__quake_feed_url").unwrap_or_else(|| config.feed_url.clone());

        let screen = cc.egui_ctx.screen_rect().size();
        let scene = Scene::init(config, screen.x, screen.y);

        let feed_inbox: Inbox<_> = Rc::new(RefCell::new(None));
        spawn_feed_fetch(feed_url, feed_inbox.clone());

        let texture_inbox: TextureInbox = Rc::new(RefCell::new(Vec::new()));
        spawn_texture_load(TextureSlot::Earth, scene.config.earth_texture.clone(), texture_inbox.clone());
        spawn_texture_load(TextureSlot::Stars, scene.config.stars_texture.clone(), texture_inbox.clone());

        let star_points = star_points(STAR_COUNT, scene.stars.radius, STAR_SEED);
        let clock = FrameClock::new(scene.config.max_frame_dt);

        Self {
            scene,
            feed_state: FeedState::Loading,
            feed_inbox,
            texture_inbox,
            earth_texture: None,
            stars_texture: None,
            star_points,
            clock,
            fps_counter: FpsCounter::new(),
            last_size: screen,
        }
    }

    /// Apply anything the async tasks delivered since the last frame
    fn drain_inboxes(&mut self, ctx: &egui::Context) {
        let feed_result = self.feed_inbox.borrow_mut().take();
        if let Some(result) = feed_result {
            self.feed_state = match &result {
                Ok(events) => FeedState::Loaded(events.len()),
                Err(e) => FeedState::Failed(e.to_string()),
            };
            self.scene.apply_feed(result);
        }

        let textures: Vec<_> = self.texture_inbox.borrow_mut().drain(..).collect();
        for (slot, result) in textures {
            let Ok(image) = result else {
                continue;
            };
            let handle = ctx.load_texture(slot.name(), image, egui::TextureOptions::LINEAR);
            match slot {
                TextureSlot::Earth => self.earth_texture = Some(handle),
                TextureSlot::Stars => self.stars_texture = Some(handle),
            }
        }
    }
}

impl eframe::App for GlobeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Continuous repaint: the globe never stops turning
        ctx.request_repaint();

        let now = now_seconds();
        self.fps_counter.tick(now);
        self.drain_inboxes(ctx);

        let dt = self.clock.tick(now);
        self.scene.update(dt);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY))
            .show(ctx, |ui| {
                self.render_header(ui);

                let rect = ui.available_rect_before_wrap();
                if rect.size() != self.last_size {
                    self.last_size = rect.size();
                    self.scene.resize(rect.width(), rect.height());
                }

                self.render_globe(ui, rect);
            });
    }
}

impl Drop for GlobeApp {
    fn drop(&mut self) {
        info!("Globe app shutting down");
        self.scene.teardown();
    }
}
