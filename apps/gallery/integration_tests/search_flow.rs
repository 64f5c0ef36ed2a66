use gallery::tui::{App, Focus};

use gallery_core::{
    FAVORITES_STORAGE_KEY, FavoritesStore, FileStore, KeyValueStore, SearchStatus,
    SessionController, UnsplashClient,
};

use common::RedactedApiKey;

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn record(id: &str) -> Value {
    json!({
        "id": id,
        "alt_description": format!("alt {id}"),
        "urls": {
            "small": format!("https://images.unsplash.com/{id}?w=400"),
            "thumb": format!("https://images.unsplash.com/{id}?w=200"),
            "regular": format!("https://images.unsplash.com/{id}?w=1080")
        },
        "links": { "html": format!("https://unsplash.com/photos/{id}") },
        "user": { "name": format!("Photographer {id}") }
    })
}

fn body(prefix: &str, count: usize) -> Value {
    let results: Vec<Value> = (0..count).map(|i| record(&format!("{prefix}-{i}"))).collect();
    json!({ "total": count, "total_pages": 1, "results": results })
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

/// **VALUE**: Runs the whole front-end path: submit, spawned request, channel,
/// completion, favorite, persistence.
///
/// **WHY THIS MATTERS**: Each piece is unit tested; this checks they are wired
/// together the way the binary wires them.
///
/// **BUG THIS CATCHES**: Would catch completions never reaching the UI loop, or
/// favorites toggled in the UI not reaching the file store.
#[tokio::test]
async fn given_mock_api_when_user_searches_and_favorites_then_favorite_persisted() {
    // GIVEN: A mock API and a file-backed favorites store
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .and(query_param("query", "nature"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body("nature", 24)))
        .mount(&server)
        .await;
    let data_dir = TempDir::new().unwrap();
    let client = UnsplashClient::new(
        &server.uri(),
        Some(RedactedApiKey::new("integration-access-key-0123456789")),
        Duration::from_secs(5),
    )
    .unwrap();
    let session =
        SessionController::new(FavoritesStore::load(FileStore::new(data_dir.path())), "nature");
    let (mut app, mut completions) = App::new(session, client);

    // WHEN: The user submits the prefilled query and favorites the second result
    app.start_search();
    assert_eq!(app.session().status(), SearchStatus::Loading);
    let completion = completions.recv().await.unwrap();
    app.apply_completion(completion);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char('f'));

    // THEN
    assert_eq!(app.focus(), Focus::Results);
    assert_eq!(app.session().photos().len(), 24);
    assert!(app.session().favorites().contains("nature-1"));
    let stored = FileStore::new(data_dir.path())
        .get(FAVORITES_STORAGE_KEY)
        .unwrap()
        .expect("favorites written to disk");
    assert!(stored.contains("nature-1"));
}

#[tokio::test]
async fn given_new_query_typed_when_submitted_then_results_replaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("query", "cat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body("cat", 2)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("query", "cats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body("cats", 5)))
        .mount(&server)
        .await;
    let client = UnsplashClient::new(
        &server.uri(),
        Some(RedactedApiKey::new("integration-access-key-0123456789")),
        Duration::from_secs(5),
    )
    .unwrap();
    let session = SessionController::new(
        FavoritesStore::load(gallery_core::MemoryStore::new()),
        "cat",
    );
    let (mut app, mut completions) = App::new(session, client);

    app.start_search();
    app.apply_completion(completions.recv().await.unwrap());
    assert_eq!(app.session().photos().len(), 2);

    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Enter);
    app.apply_completion(completions.recv().await.unwrap());

    assert_eq!(app.session().query(), "cats");
    assert_eq!(app.session().photos().len(), 5);
    assert!(app.session().photos()[0].id.starts_with("cats-"));
}
