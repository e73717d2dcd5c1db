//! Earthquake globe - rotating 3D earth with live USGS earthquake markers
//!
//! Fetches the past day of earthquakes and displays:
//! - A textured globe that slowly rotates, with an orbitable camera
//! - One red marker per earthquake, sized by magnitude, with a pulsing halo
//!
//! `core` is platform-agnostic and shared with the `quake-cli` binary; the
//! browser app is built with `--features wasm`.

pub mod core;
pub mod feed_state;
pub mod time;

#[cfg(all(feature = "cli", not(target_arch = "wasm32")))]
pub mod fetch_native;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod app;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod fetch_wasm;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod textures;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod theme;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod web {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::GlobeApp;

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();

        // Initialize tracing for browser console
        tracing_wasm::set_as_global_default();

        let web_options = eframe::WebOptions::default();

        wasm_bindgen_futures::spawn_local(async {
            let canvas = web_sys::window()
                .expect("no window")
                .document()
                .expect("no document")
                .get_element_by_id("canvas")
                .expect("no canvas element")
                .dyn_into::<web_sys::HtmlCanvasElement>()
                .expect("not a canvas element");

            eframe::WebRunner::new()
                .start(
                    canvas,
                    web_options,
                    Box::new(|cc| Ok(Box::new(GlobeApp::new(cc)))),
                )
                .await
                .expect("Failed to start eframe");
        });
    }
}
