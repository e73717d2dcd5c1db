//! Browser fetch for the earthquake feed and texture assets
//!
//! Results land in single-slot inboxes that the app drains in `update()`,
//! so the scene is only ever touched from the frame callback.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::core::feed::{self, parse_feed, EarthquakeEvent, FeedError};

/// One-shot result slot filled by an async task
pub type Inbox<T> = Rc<RefCell<Option<T>>>;

fn js_error(e: wasm_bindgen::JsValue) -> FeedError {
    FeedError::Network(format!("{:?}", e))
}

async fn fetch_response(url: &str) -> Result<Response, FeedError> {
    let window = web_sys::window().ok_or_else(|| FeedError::Network("no window".into()))?;
    let value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let response: Response = value.dyn_into().map_err(js_error)?;

    if !response.ok() {
        return Err(FeedError::Status(response.status()));
    }
    Ok(response)
}

/// GET the feed and decode it
pub async fn fetch_feed(url: &str) -> feed::Result<Vec<EarthquakeEvent>> {
    info!(url, "Fetching earthquake feed");
    let response = fetch_response(url).await?;
    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .ok_or_else(|| FeedError::Network("response body is not text".into()))?;
    debug!(bytes = text.len(), "Feed body received");
    parse_feed(&text)
}

/// GET raw bytes, used for texture images
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, FeedError> {
    let response = fetch_response(url).await?;
    let buffer = JsFuture::from(response.array_buffer().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Fetch the feed in the background and park the result in `inbox`
pub fn spawn_feed_fetch(url: String, inbox: Inbox<feed::Result<Vec<EarthquakeEvent>>>) {
    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch_feed(&url).await;
        if let Err(e) = &result {
            warn!(error = %e, url = %url, "Feed fetch failed");
        }
        *inbox.borrow_mut() = Some(result);
    });
}

/// Read an optional string property set on `window` by the host page
pub fn window_string(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &key.into())
        .ok()
        .and_then(|v| v.as_string())
}
