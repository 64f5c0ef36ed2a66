use crate::SearchResponse;

#[test]
fn given_body_without_results_when_decoded_then_results_empty() {
    let response: SearchResponse = serde_json::from_str(r#"{ "total": 0 }"#).unwrap();

    assert!(response.results.is_empty());
    assert_eq!(response.total, Some(0));
    assert_eq!(response.total_pages, None);
}

#[test]
fn given_body_with_results_when_decoded_then_order_preserved() {
    let body = r#"{
        "total": 2,
        "total_pages": 1,
        "results": [
            { "id": "second", "urls": { "small": "s", "thumb": "t", "regular": "r" },
              "user": { "name": "B" }, "links": { "html": "https://unsplash.com/b" } },
            { "id": "first", "urls": { "small": "s", "thumb": "t", "regular": "r" },
              "user": { "name": "A" }, "links": { "html": "https://unsplash.com/a" } }
        ]
    }"#;

    let response: SearchResponse = serde_json::from_str(body).unwrap();

    let ids: Vec<&str> = response.results.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["second", "first"]);
}
