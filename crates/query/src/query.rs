//! The fluent query builder.
//!
//! [`Query`] accumulates request parameters through chainable setters and
//! translates them into the payload shapes the client expects for three
//! operations: plain search, scroll continuation, and clear-scroll. Body
//! assembly is split from dispatch so the exact payloads are inspectable
//! without a live cluster.

use elasticsearch::{ClearScrollParts, ScrollParts, SearchParts};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::collection::Collection;
use crate::connection::Connection;
use crate::error::{Error, Result};
use crate::response::SearchResponse;

/// Default number of documents per page.
pub const DEFAULT_TAKE: u64 = 10;

/// Default scroll cursor keep-alive.
pub const DEFAULT_SCROLL_KEEPALIVE: &str = "5m";

/// Controls whether and how precisely the total matching-document count is
/// computed. Serializes as a bare boolean or integer, the two forms the
/// search API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrackTotalHits {
    /// `true` for an exact count, `false` to skip counting.
    Enabled(bool),
    /// Count accurately up to this threshold, report a lower bound beyond.
    Limit(u64),
}

impl From<bool> for TrackTotalHits {
    fn from(enabled: bool) -> Self {
        TrackTotalHits::Enabled(enabled)
    }
}

impl From<u64> for TrackTotalHits {
    fn from(limit: u64) -> Self {
        TrackTotalHits::Limit(limit)
    }
}

impl From<u32> for TrackTotalHits {
    fn from(limit: u32) -> Self {
        TrackTotalHits::Limit(limit as u64)
    }
}

/// A fluent search request builder bound to a [`Connection`].
///
/// Setters consume and return the builder so calls chain; there is no
/// validation beyond type conversion. Failures from the underlying client
/// propagate unchanged to the caller.
#[derive(Debug)]
pub struct Query {
    connection: Connection,
    index: Option<String>,
    doc_type: Option<String>,
    take: u64,
    skip: u64,
    scroll: Option<String>,
    track_total_hits: Option<TrackTotalHits>,
    body: Value,
}

impl Query {
    /// Creates a query bound to the given connection.
    pub fn new(connection: Connection) -> Self {
        Self {
            connection,
            index: None,
            doc_type: None,
            take: DEFAULT_TAKE,
            skip: 0,
            scroll: None,
            track_total_hits: None,
            body: json!({}),
        }
    }

    /// Sets the index to search.
    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    /// Sets the document mapping type.
    ///
    /// Mapping types were removed from the wire protocol in Elasticsearch 8,
    /// so the 8.x client never transmits this. The setter is retained for
    /// source compatibility with code written against pre-8 clusters.
    pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = Some(doc_type.into());
        self
    }

    /// Sets the maximum number of documents to return (`size`).
    pub fn take(mut self, take: u64) -> Self {
        self.take = take;
        self
    }

    /// Sets the number of documents to skip (`from`).
    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = skip;
        self
    }

    /// Sets the scroll cursor keep-alive (e.g. [`DEFAULT_SCROLL_KEEPALIVE`]).
    ///
    /// A plain search issued with a keep-alive configured opens a scroll
    /// cursor; the keep-alive is also carried in scroll-continuation bodies.
    pub fn scroll(mut self, keep_alive: impl Into<String>) -> Self {
        self.scroll = Some(keep_alive.into());
        self
    }

    /// Sets `track_total_hits`: `true`/`false`, or an integer threshold.
    ///
    /// When never called, the key is omitted from the request entirely and
    /// the server default applies.
    pub fn track_total_hits(mut self, value: impl Into<TrackTotalHits>) -> Self {
        self.track_total_hits = Some(value.into());
        self
    }

    /// Sets a base request body (query DSL, sort, aggregations, ...).
    ///
    /// Pagination and `track_total_hits` from the builder are merged on top
    /// of it. Non-object values are ignored.
    pub fn body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    /// Returns the bound connection.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// The exact body a plain search request would carry.
    pub fn search_request_body(&self) -> Value {
        let mut body = match &self.body {
            Value::Object(map) => Value::Object(map.clone()),
            _ => json!({}),
        };

        body["from"] = json!(self.skip);
        body["size"] = json!(self.take);

        if let Some(track) = self.track_total_hits {
            body["track_total_hits"] = json!(track);
        }

        body
    }

    /// The exact body a scroll-continuation request would carry.
    ///
    /// `scroll` serializes as JSON null when no keep-alive was configured.
    pub fn scroll_request_body(&self, scroll_id: &str) -> Value {
        json!({
            "scroll": self.scroll,
            "scroll_id": scroll_id,
        })
    }

    /// The exact body a clear-scroll request would carry, or `None` when no
    /// scroll id is supplied (no request is issued at all in that case).
    pub fn clear_scroll_request_body(scroll_id: Option<&str>) -> Option<Value> {
        scroll_id.map(|id| json!({ "scroll_id": [id] }))
    }

    /// Executes the request and returns the raw response body.
    ///
    /// With a scroll id this continues an existing scroll cursor; without
    /// one it issues a plain search with the accumulated parameters (opening
    /// a cursor when a keep-alive is configured). The response is returned
    /// as-is, with no interpretation of hits, aggregations, or errors.
    pub async fn perform_search(&self, scroll_id: Option<&str>) -> Result<Value> {
        let client = self.connection.client();

        let response = match scroll_id {
            Some(id) => {
                tracing::debug!("continuing scroll cursor {}", id);
                client
                    .scroll(ScrollParts::None)
                    .body(self.scroll_request_body(id))
                    .send()
                    .await?
            }
            None => {
                let indices: Vec<&str> = self.index.as_deref().into_iter().collect();
                let parts = if indices.is_empty() {
                    SearchParts::None
                } else {
                    SearchParts::Index(&indices)
                };

                tracing::debug!("searching index {:?}", self.index);
                let mut request = client.search(parts).body(self.search_request_body());
                if let Some(ref keep_alive) = self.scroll {
                    request = request.scroll(keep_alive);
                }
                request.send().await?
            }
        };

        let status = response.status_code();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Request {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| Error::InvalidResponse {
                message: e.to_string(),
            })
    }

    /// Executes the search and wraps the hits in a [`Collection`].
    pub async fn get(&self) -> Result<Collection> {
        let raw = self.perform_search(None).await?;
        let response: SearchResponse =
            serde_json::from_value(raw).map_err(|e| Error::InvalidResponse {
                message: e.to_string(),
            })?;
        Ok(Collection::from_response(response))
    }

    /// Clears a scroll cursor.
    ///
    /// Without a scroll id no request is issued. Always returns an empty
    /// collection.
    pub async fn clear(&self, scroll_id: Option<&str>) -> Result<Collection> {
        let Some(body) = Self::clear_scroll_request_body(scroll_id) else {
            return Ok(Collection::empty());
        };

        tracing::debug!("clearing scroll cursor {:?}", scroll_id);
        let response = self
            .connection
            .client()
            .clear_scroll(ClearScrollParts::None)
            .body(body)
            .send()
            .await?;

        let status = response.status_code();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Request {
                status: status.as_u16(),
                body,
            });
        }

        Ok(Collection::empty())
    }
}
