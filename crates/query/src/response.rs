//! Serde bindings for the search API response body.
//!
//! These mirror the response shape documented for the search API and are
//! used to lift hits out of a raw response without interpreting them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A search API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Milliseconds the request took on the server.
    pub took: Option<i64>,

    /// Whether the request timed out.
    pub timed_out: Option<bool>,

    /// The scroll cursor id, present when a scroll was opened or continued.
    #[serde(rename = "_scroll_id")]
    pub scroll_id: Option<String>,

    /// Shard-level accounting.
    #[serde(rename = "_shards")]
    pub shards: Option<Shards>,

    /// The matching hits.
    pub hits: Hits,
}

/// Shard-level accounting for a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shards {
    /// Total shards queried.
    pub total: i64,
    /// Shards that answered successfully.
    pub successful: i64,
    /// Shards that were skipped.
    #[serde(default)]
    pub skipped: i64,
    /// Shards that failed.
    pub failed: i64,
}

/// The hits section of a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hits {
    /// The total matching-document count, when the server computed one.
    pub total: Option<HitsTotal>,

    /// The highest score among the hits.
    pub max_score: Option<f64>,

    /// The returned hits.
    #[serde(default)]
    pub hits: Vec<Hit>,
}

/// The total matching-document count and how precise it is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitsTotal {
    /// The count, or a lower bound on it.
    pub value: u64,
    /// Whether `value` is exact or a lower bound.
    pub relation: TotalRelation,
}

/// Precision of a [`HitsTotal`] count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TotalRelation {
    /// The count is exact.
    #[serde(rename = "eq")]
    Accurate,
    /// The count is a lower bound (capped by `track_total_hits`).
    #[serde(rename = "gte")]
    LowerBound,
}

/// A single hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hit {
    /// The index the hit came from.
    #[serde(rename = "_index")]
    pub index: String,

    /// The mapping type, only reported by pre-8 servers.
    #[serde(rename = "_type")]
    pub doc_type: Option<String>,

    /// The document id.
    #[serde(rename = "_id")]
    pub id: String,

    /// The relevance score.
    #[serde(rename = "_score")]
    pub score: Option<f64>,

    /// The stored document.
    #[serde(rename = "_source", default)]
    pub source: Value,

    /// Sort values, present when the request sorted.
    #[serde(default)]
    pub sort: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_search_response() {
        let body = json!({
            "took": 3,
            "timed_out": false,
            "_shards": { "total": 1, "successful": 1, "skipped": 0, "failed": 0 },
            "hits": {
                "total": { "value": 2, "relation": "eq" },
                "max_score": 1.0,
                "hits": [
                    { "_index": "posts", "_id": "1", "_score": 1.0, "_source": { "title": "first" } },
                    { "_index": "posts", "_id": "2", "_score": 0.5, "_source": { "title": "second" } }
                ]
            }
        });

        let response: SearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.took, Some(3));
        assert_eq!(response.hits.hits.len(), 2);
        let total = response.hits.total.unwrap();
        assert_eq!(total.value, 2);
        assert_eq!(total.relation, TotalRelation::Accurate);
        assert_eq!(response.hits.hits[0].source["title"], "first");
    }

    #[test]
    fn test_deserialize_scroll_response() {
        let body = json!({
            "_scroll_id": "abc123456789",
            "hits": {
                "total": { "value": 12000, "relation": "gte" },
                "max_score": null,
                "hits": []
            }
        });

        let response: SearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.scroll_id.as_deref(), Some("abc123456789"));
        assert_eq!(
            response.hits.total.unwrap().relation,
            TotalRelation::LowerBound
        );
        assert!(response.hits.hits.is_empty());
    }

    #[test]
    fn test_deserialize_hit_without_source() {
        let body = json!({ "_index": "posts", "_id": "9" });
        let hit: Hit = serde_json::from_value(body).unwrap();
        assert!(hit.source.is_null());
        assert!(hit.sort.is_empty());
        assert!(hit.doc_type.is_none());
    }
}
