//! Native feed fetch for the CLI, using reqwest

use std::time::Duration;
use tracing::{debug, info};

use crate::core::feed::{self, parse_feed, EarthquakeEvent, FeedError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => FeedError::Status(status.as_u16()),
            None => FeedError::Network(e.to_string()),
        }
    }
}

/// GET the feed and decode it
pub async fn fetch_feed(url: &str) -> feed::Result<Vec<EarthquakeEvent>> {
    info!(url, "Fetching earthquake feed");

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;

    debug!(bytes = body.len(), "Feed body received");
    parse_feed(&body)
}
