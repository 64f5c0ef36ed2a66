//! Fixtures for driving the search client against a mock Unsplash API.

use gallery_core::UnsplashClient;

use common::RedactedApiKey;

use std::time::Duration;

use serde_json::{Value, json};

pub const TEST_ACCESS_KEY: &str = "test-access-key-0123456789abcdef";

/// Client pointed at the mock server, with a valid key.
pub fn client_for(base_url: &str) -> UnsplashClient {
    client_with_timeout(base_url, Duration::from_secs(5))
}

pub fn client_with_timeout(base_url: &str, timeout: Duration) -> UnsplashClient {
    UnsplashClient::new(base_url, Some(RedactedApiKey::new(TEST_ACCESS_KEY)), timeout)
        .expect("mock server URL is valid")
}

/// One API-shaped photo record, including fields the gallery ignores.
pub fn photo_record(id: &str) -> Value {
    json!({
        "id": id,
        "created_at": "2024-05-01T10:00:00Z",
        "width": 4000,
        "height": 3000,
        "color": "#a0c0e0",
        "description": null,
        "alt_description": format!("alt text for {id}"),
        "urls": {
            "raw": format!("https://images.unsplash.com/{id}?raw"),
            "full": format!("https://images.unsplash.com/{id}?full"),
            "regular": format!("https://images.unsplash.com/{id}?w=1080"),
            "small": format!("https://images.unsplash.com/{id}?w=400"),
            "thumb": format!("https://images.unsplash.com/{id}?w=200")
        },
        "links": {
            "self": format!("https://api.unsplash.com/photos/{id}"),
            "html": format!("https://unsplash.com/photos/{id}"),
            "download": format!("https://unsplash.com/photos/{id}/download")
        },
        "user": {
            "id": format!("user-{id}"),
            "username": format!("user_{id}"),
            "name": format!("Photographer {id}")
        }
    })
}

/// A search body with `count` records named `<prefix>-<n>`.
pub fn search_body(prefix: &str, count: usize) -> Value {
    let results: Vec<Value> = (0..count)
        .map(|i| photo_record(&format!("{prefix}-{i}")))
        .collect();
    json!({
        "total": count,
        "total_pages": 1,
        "results": results
    })
}
