//! Scripted transport and fixtures shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;
use tokio::time::Instant;

use metbrowse::api::{Transport, TransportError, TransportResponse};
use metbrowse::config::Config;

/// Base URL every scripted test points at.
pub const TEST_API_BASE: &str = "https://collection.test/v1";

#[derive(Clone)]
enum Scripted {
    Response(TransportResponse),
    Error(String),
}

/// Transport double serving queued responses per URL.
///
/// Each URL has a FIFO queue; once a queue is down to its last entry, that
/// entry repeats for every further request. Every request is logged with the
/// tokio clock, so paused-clock tests can assert on exact timing.
pub struct ScriptedTransport {
    scripts: Mutex<HashMap<String, VecDeque<Scripted>>>,
    requests: Mutex<Vec<(String, Instant)>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            scripts: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a response for `url`.
    pub fn script(&self, url: &str, response: TransportResponse) {
        self.scripts
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(Scripted::Response(response));
    }

    /// Queue a transport-level failure for `url`.
    pub fn script_error(&self, url: &str, message: &str) {
        self.scripts
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(Scripted::Error(message.to_string()));
    }

    /// Every request made, in order, with its tokio timestamp.
    pub fn requests(&self) -> Vec<(String, Instant)> {
        self.requests.lock().unwrap().clone()
    }

    /// URLs requested, in order.
    pub fn requested_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    /// Number of requests made to `url`.
    pub fn hits(&self, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(requested, _)| requested == url)
            .count()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), Instant::now()));

        let entry = {
            let mut scripts = self.scripts.lock().unwrap();
            match scripts.get_mut(url) {
                Some(queue) if queue.len() > 1 => queue.pop_front(),
                Some(queue) => queue.front().cloned(),
                None => None,
            }
        };

        match entry {
            Some(Scripted::Response(response)) => Ok(response),
            Some(Scripted::Error(message)) => Err(TransportError::new(message)),
            None => Ok(response(500, &format!("unscripted URL: {}", url), &[])),
        }
    }
}

/// Build a response from status, body and headers.
pub fn response(status: u16, body: &str, headers: &[(&str, &str)]) -> TransportResponse {
    TransportResponse {
        status,
        headers: headers
            .iter()
            .map(|(name, value)| (name.to_lowercase(), value.to_string()))
            .collect(),
        body: body.to_string(),
    }
}

/// 200 with a JSON body.
pub fn ok_json(body: &str) -> TransportResponse {
    response(200, body, &[("content-type", "application/json")])
}

/// 429, optionally carrying `Retry-After`.
pub fn rate_limited(retry_after: Option<u64>) -> TransportResponse {
    match retry_after {
        Some(secs) => {
            let value = secs.to_string();
            response(429, "", &[("retry-after", &value)])
        }
        None => response(429, "", &[]),
    }
}

/// Listing body for `/objects` and `/search`.
pub fn listing_json(ids: &[u64]) -> String {
    json!({ "total": ids.len(), "objectIDs": ids }).to_string()
}

/// The body the API returns for zero hits (`objectIDs` is null).
pub fn empty_listing_json() -> String {
    json!({ "total": 0, "objectIDs": null }).to_string()
}

/// A complete, displayable detail body for one object.
pub fn artwork_json(id: u64, title: &str) -> String {
    json!({
        "objectID": id,
        "title": title,
        "artistDisplayName": "Test Artist",
        "department": "European Paintings",
        "primaryImage": format!("https://images.test/{}.jpg", id),
        "primaryImageSmall": format!("https://images.test/{}_small.jpg", id),
        "objectDate": "1889",
        "medium": "Oil on canvas",
        "objectURL": format!("https://collection.test/art/{}", id),
    })
    .to_string()
}

/// Detail body with no title or image; the normalizer must drop it.
pub fn unusable_artwork_json(id: u64) -> String {
    json!({
        "objectID": id,
        "title": "",
        "primaryImage": "",
    })
    .to_string()
}

pub fn objects_url() -> String {
    format!("{}/objects", TEST_API_BASE)
}

pub fn object_url(id: u64) -> String {
    format!("{}/objects/{}", TEST_API_BASE, id)
}

pub fn search_url(term: &str) -> String {
    format!(
        "{}/search?hasImages=true&q={}",
        TEST_API_BASE,
        urlencoding::encode(term)
    )
}

/// Config pointed at the scripted test host, defaults otherwise.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.api_base = TEST_API_BASE.to_string();
    config
}
