use super::helpers::{TEST_ACCESS_KEY, client_for, client_with_timeout, search_body};

use gallery_core::SearchOutcome;
use gallery_core::error::SearchError;

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the exact request sent to the API and the decoded result order.
///
/// **WHY THIS MATTERS**: The API contract fixes the path, the parameters and the
/// version header; the grid must keep the API's ranking.
///
/// **BUG THIS CATCHES**: Would catch a missing `per_page`, an unsent key, or results
/// being reordered during validation.
#[tokio::test]
async fn given_matching_api_when_searching_then_request_well_formed_and_order_kept() {
    // GIVEN: An API expecting exactly one well-formed request
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .and(query_param("query", "nature"))
        .and(query_param("per_page", "24"))
        .and(query_param("client_id", TEST_ACCESS_KEY))
        .and(header("Accept-Version", "v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body("nature", 24)))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN
    let outcome = client_for(&server.uri()).search("  nature ").await.unwrap();

    // THEN
    let SearchOutcome::Results(photos) = outcome else {
        panic!("expected results");
    };
    assert_eq!(photos.len(), 24);
    assert_eq!(photos[0].id, "nature-0");
    assert_eq!(photos[23].id, "nature-23");
    assert_eq!(photos[5].user.name, "Photographer nature-5");
}

/// **VALUE**: Verifies `results: []` is the Empty outcome, not an error.
///
/// **WHY THIS MATTERS**: The user gets "no results", not "try again".
///
/// **BUG THIS CATCHES**: Would catch an empty array surfacing as an error.
#[tokio::test]
async fn given_empty_results_when_searching_then_empty_outcome() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "total": 0, "total_pages": 0, "results": [] })),
        )
        .mount(&server)
        .await;

    // WHEN
    let outcome = client_for(&server.uri()).search("qwxzv").await.unwrap();

    // THEN
    assert_eq!(outcome, SearchOutcome::Empty);
}

#[tokio::test]
async fn given_body_without_results_field_when_searching_then_empty_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total": 0 })))
        .mount(&server)
        .await;

    let outcome = client_for(&server.uri()).search("anything").await.unwrap();

    assert_eq!(outcome, SearchOutcome::Empty);
}

/// **VALUE**: Verifies a non-success status becomes a Status error with the code.
///
/// **WHY THIS MATTERS**: The log needs the code to tell a bad key from an outage.
///
/// **BUG THIS CATCHES**: Would catch error bodies being parsed as search results.
#[tokio::test]
async fn given_unauthorized_response_when_searching_then_status_error() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "errors": ["OAuth error: The access token is invalid"] })),
        )
        .mount(&server)
        .await;

    // WHEN
    let error = client_for(&server.uri()).search("nature").await.unwrap_err();

    // THEN
    assert_eq!(error.status_code(), Some(401));
    assert_eq!(error.error_category(), "unauthorized");
    assert!(error.to_string().contains("access token is invalid"));
}

#[tokio::test]
async fn given_malformed_json_when_searching_then_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let error = client_for(&server.uri()).search("nature").await.unwrap_err();

    assert!(matches!(error, SearchError::Json { .. }));
}

/// **VALUE**: Verifies a record missing required fields fails the response.
///
/// **WHY THIS MATTERS**: The boundary is strict; a shape change must be noticed.
///
/// **BUG THIS CATCHES**: Would catch lenient defaults on required fields.
#[tokio::test]
async fn given_record_missing_urls_when_searching_then_json_error() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [ { "id": "x", "user": { "name": "n" }, "links": { "html": "h" } } ]
        })))
        .mount(&server)
        .await;

    // WHEN
    let error = client_for(&server.uri()).search("nature").await.unwrap_err();

    // THEN
    assert!(matches!(error, SearchError::Json { .. }));
}

#[tokio::test]
async fn given_unreachable_api_when_searching_then_http_error() {
    // GIVEN: Nothing listens on port 1
    let client = client_for("http://127.0.0.1:1/");

    // WHEN
    let error = client.search("nature").await.unwrap_err();

    // THEN
    assert!(matches!(error, SearchError::Http { .. }), "got {error:?}");
}

#[tokio::test]
async fn given_slow_api_when_searching_then_timeout_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(search_body("slow", 1))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = client_with_timeout(&server.uri(), Duration::from_millis(200));
    let error = client.search("nature").await.unwrap_err();

    assert_eq!(error.error_category(), "timeout");
}

/// **VALUE**: Verifies searches without a key never reach the network.
///
/// **WHY THIS MATTERS**: A missing key should fail fast, not spend a request on a 401.
///
/// **BUG THIS CATCHES**: Would catch the credential check moving after `send()`.
#[tokio::test]
async fn given_no_access_key_when_searching_then_missing_credential_and_no_request() {
    // GIVEN: An API that must not be called
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body("x", 1)))
        .expect(0)
        .mount(&server)
        .await;
    let client =
        gallery_core::UnsplashClient::new(&server.uri(), None, Duration::from_secs(5)).unwrap();

    // WHEN
    let error = client.search("nature").await.unwrap_err();

    // THEN
    assert!(matches!(error, SearchError::MissingCredential { .. }));
}
