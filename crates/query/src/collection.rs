//! Result collection for search responses.
//!
//! A [`Collection`] is a pass-through wrapper over the hits of a response:
//! it holds the `_source` documents and the response-level values a caller
//! most often reaches for (total, max score, scroll id). It performs no
//! transformation of its own.

use serde_json::Value;

use crate::response::{SearchResponse, TotalRelation};

/// A collection of documents returned by a search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    items: Vec<Value>,
    total: Option<u64>,
    total_is_lower_bound: bool,
    max_score: Option<f64>,
    scroll_id: Option<String>,
}

impl Collection {
    /// Creates an empty collection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a collection from a parsed search response.
    pub fn from_response(response: SearchResponse) -> Self {
        let total = response.hits.total.as_ref().map(|t| t.value);
        let total_is_lower_bound = response
            .hits
            .total
            .as_ref()
            .is_some_and(|t| t.relation == TotalRelation::LowerBound);
        let max_score = response.hits.max_score;
        let scroll_id = response.scroll_id;
        let items = response.hits.hits.into_iter().map(|h| h.source).collect();

        Self {
            items,
            total,
            total_is_lower_bound,
            max_score,
            scroll_id,
        }
    }

    /// Returns true if the collection holds no documents.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of documents in the collection.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the first document, if any.
    pub fn first(&self) -> Option<&Value> {
        self.items.first()
    }

    /// Iterates over the documents.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Returns the documents as a slice.
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// The total matching-document count reported by the server, if any.
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// Whether [`total`](Self::total) is a lower bound rather than exact
    /// (the count was capped by `track_total_hits`).
    pub fn total_is_lower_bound(&self) -> bool {
        self.total_is_lower_bound
    }

    /// The highest score among the hits, if any.
    pub fn max_score(&self) -> Option<f64> {
        self.max_score
    }

    /// The scroll cursor id, present when the search opened a scroll.
    pub fn scroll_id(&self) -> Option<&str> {
        self.scroll_id.as_deref()
    }
}

impl IntoIterator for Collection {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
