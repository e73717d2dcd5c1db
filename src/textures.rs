//! Earth and sky texture loading

use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;
use tracing::{info, warn};

use crate::core::FeedError;
use crate::fetch_wasm::fetch_bytes;

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("failed to fetch texture: {0}")]
    Fetch(#[from] FeedError),

    #[error("failed to decode texture: {0}")]
    Decode(#[from] image::ImageError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureSlot {
    Earth,
    Stars,
}

impl TextureSlot {
    pub fn name(self) -> &'static str {
        match self {
            TextureSlot::Earth => "earth",
            TextureSlot::Stars => "stars",
        }
    }
}

/// Decoded images waiting to be uploaded by the next frame
pub type TextureInbox = Rc<RefCell<Vec<(TextureSlot, Result<egui::ColorImage, TextureError>)>>>;

pub fn decode_color_image(bytes: &[u8]) -> Result<egui::ColorImage, TextureError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Fetch and decode one texture in the background
pub fn spawn_texture_load(slot: TextureSlot, path: String, inbox: TextureInbox) {
    wasm_bindgen_futures::spawn_local(async move {
        let result = match fetch_bytes(&path).await {
            Ok(bytes) => decode_color_image(&bytes),
            Err(e) => Err(e.into()),
        };
        match &result {
            Ok(image) => info!(texture = slot.name(), size = ?image.size, "Texture decoded"),
            Err(e) => warn!(texture = slot.name(), path = %path, error = %e, "Texture unavailable, using fallback"),
        }
        inbox.borrow_mut().push((slot, result));
    });
}
