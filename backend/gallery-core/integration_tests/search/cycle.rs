use super::helpers::{client_for, search_body};

use gallery_core::session::{EMPTY_RESULTS_MESSAGE, SEARCH_FAILED_MESSAGE};
use gallery_core::view::{self, ResultsBody};
use gallery_core::{FavoritesStore, MemoryStore, SearchStatus, SessionController};

use serde_json::json;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session(query: &str) -> SessionController {
    SessionController::new(FavoritesStore::load(MemoryStore::new()), query)
}

/// **VALUE**: Drives submit, a real HTTP round trip and completion end to end.
///
/// **WHY THIS MATTERS**: Submitting the prefilled query is the first thing a user does,
/// and the grid fills with the API's photos.
///
/// **BUG THIS CATCHES**: Would catch the ticket query and the request query drifting
/// apart, or the grid staying in Loading after a good response.
#[tokio::test]
async fn given_initial_query_when_cycle_runs_then_grid_shows_results() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("query", "design"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body("design", 24)))
        .mount(&server)
        .await;
    let client = client_for(&server.uri());
    let mut session = session("design");

    // WHEN
    let ticket = session.submit().expect("initial query is not blank");
    let result = client.search(ticket.query()).await;
    let applied = session.complete(&ticket, result);

    // THEN
    assert!(applied);
    assert_eq!(session.status(), SearchStatus::Results);
    let screen = view::render(&session);
    assert_eq!(screen.results.badge.as_deref(), Some("24 images"));
    let ResultsBody::Grid(cards) = screen.results.body else {
        panic!("expected a grid");
    };
    assert_eq!(cards.len(), 24);
}

#[tokio::test]
async fn given_no_matches_when_cycle_runs_then_empty_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&server)
        .await;
    let client = client_for(&server.uri());
    let mut session = session("qwxzv");

    let ticket = session.submit().unwrap();
    let result = client.search(ticket.query()).await;
    session.complete(&ticket, result);

    assert_eq!(session.status(), SearchStatus::Empty);
    assert_eq!(session.message(), Some(EMPTY_RESULTS_MESSAGE));
}

/// **VALUE**: Verifies a server failure ends the cycle in Error with the generic text.
///
/// **WHY THIS MATTERS**: The user must never be left on a spinner.
///
/// **BUG THIS CATCHES**: Would catch the raw API body leaking into the message.
#[tokio::test]
async fn given_server_error_when_cycle_runs_then_generic_failure_message() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream exploded"))
        .mount(&server)
        .await;
    let client = client_for(&server.uri());
    let mut session = session("nature");

    // WHEN
    let ticket = session.submit().unwrap();
    let result = client.search(ticket.query()).await;
    session.complete(&ticket, result);

    // THEN
    assert_eq!(session.status(), SearchStatus::Error);
    assert_eq!(session.message(), Some(SEARCH_FAILED_MESSAGE));
    assert!(session.photos().is_empty());
}

/// **VALUE**: Verifies that of two overlapping searches only the later one lands.
///
/// **WHY THIS MATTERS**: A slow first response must not overwrite the grid for
/// the query the user typed last.
///
/// **BUG THIS CATCHES**: Would catch completions being applied in arrival order.
#[tokio::test]
async fn given_overlapping_searches_when_first_completes_last_then_only_second_applied() {
    // GIVEN: Two searches issued back to back
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("query", "cats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body("cats", 3)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("query", "dogs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body("dogs", 5)))
        .mount(&server)
        .await;
    let client = client_for(&server.uri());
    let mut session = session("cats");
    let first = session.submit().unwrap();
    session.set_query("dogs");
    let second = session.submit().unwrap();

    // WHEN: The second finishes before the first
    let second_result = client.search(second.query()).await;
    let first_result = client.search(first.query()).await;
    let second_applied = session.complete(&second, second_result);
    let first_applied = session.complete(&first, first_result);

    // THEN
    assert!(second_applied);
    assert!(!first_applied);
    assert_eq!(session.photos().len(), 5);
    assert!(session.photos().iter().all(|p| p.id.starts_with("dogs-")));
}
