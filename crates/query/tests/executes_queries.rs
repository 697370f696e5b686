//! Query execution integration tests.
//!
//! These verify the observable behavior of the builder's three operations:
//! the exact request bodies it shapes, and the clear-scroll short-circuit
//! that issues no request when no scroll id is supplied. Nothing here
//! requires a live cluster.

use serde_json::json;

use elastic_query::{
    Connection, ConnectionConfig, DEFAULT_SCROLL_KEEPALIVE, Query, TrackTotalHits,
};

fn create_query() -> Query {
    let connection =
        Connection::connect(&ConnectionConfig::default()).expect("Failed to build connection");
    Query::new(connection)
        .index("my_index")
        .doc_type("my_type")
        .take(10)
        .skip(0)
}

// ============================================================================
// Clear-Scroll Tests
// ============================================================================

#[tokio::test]
async fn test_clear_without_scroll_id_issues_no_request() {
    // No request can be issued here: nothing listens on the default node,
    // so anything but the short-circuit path would error.
    let collection = create_query().clear(None).await.unwrap();
    assert!(collection.is_empty());
    assert_eq!(collection.len(), 0);
}

#[test]
fn test_clear_body_with_scroll_id() {
    let body = Query::clear_scroll_request_body(Some("abc123456789")).unwrap();
    assert_eq!(body, json!({ "scroll_id": ["abc123456789"] }));
}

#[test]
fn test_clear_body_without_scroll_id() {
    assert_eq!(Query::clear_scroll_request_body(None), None);
}

// ============================================================================
// Scroll Continuation Tests
// ============================================================================

#[test]
fn test_scroll_with_scroll_id() {
    let body = create_query().scroll_request_body("abc123456789");
    assert_eq!(
        body,
        json!({
            "scroll": null,
            "scroll_id": "abc123456789"
        })
    );
}

#[test]
fn test_scroll_with_scroll_id_and_keepalive_set() {
    let body = create_query()
        .scroll(DEFAULT_SCROLL_KEEPALIVE)
        .scroll_request_body("abc123456789");
    assert_eq!(
        body,
        json!({
            "scroll": "5m",
            "scroll_id": "abc123456789"
        })
    );
}

// ============================================================================
// Plain Search Tests
// ============================================================================

#[test]
fn test_search_body_carries_pagination() {
    let body = create_query().search_request_body();
    assert_eq!(body, json!({ "from": 0, "size": 10 }));
}

#[test]
fn test_search_body_merges_base_body() {
    let body = create_query()
        .body(json!({ "query": { "term": { "status": "published" } } }))
        .take(50)
        .skip(100)
        .search_request_body();

    assert_eq!(body["query"]["term"]["status"], json!("published"));
    assert_eq!(body["from"], json!(100));
    assert_eq!(body["size"], json!(50));
}

#[test]
fn test_track_total_hits_true_included() {
    let body = create_query().track_total_hits(true).search_request_body();
    assert_eq!(body["track_total_hits"], json!(true));
}

#[test]
fn test_track_total_hits_threshold_included() {
    let body = create_query()
        .track_total_hits(TrackTotalHits::Limit(10000))
        .search_request_body();
    assert_eq!(body["track_total_hits"], json!(10000));
}

#[test]
fn test_track_total_hits_omitted_when_unset() {
    let body = create_query().search_request_body();
    assert!(body.get("track_total_hits").is_none());
}

// ============================================================================
// Error Propagation Tests
// ============================================================================

#[tokio::test]
async fn test_search_against_unreachable_node_propagates_error() {
    // Loopback port 9 has nothing bound; the transport failure must
    // surface to the caller rather than being swallowed.
    let config = ConnectionConfig {
        nodes: vec!["http://127.0.0.1:9".to_string()],
        request_timeout_ms: 500,
        ..ConnectionConfig::default()
    };
    let connection = Connection::connect(&config).unwrap();
    let result = Query::new(connection).index("posts").get().await;
    assert!(result.is_err());
}
