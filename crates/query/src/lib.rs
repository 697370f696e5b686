//! Fluent query builder over the official Elasticsearch client.
//!
//! This crate is a thin convenience layer: it accumulates request parameters
//! through chainable setters, shapes them into the payloads the
//! [`elasticsearch`] client expects, and wraps responses in a simple result
//! collection. It implements no protocol, scoring, or index management of
//! its own — all of that lives in the wrapped client and the cluster.
//!
//! # Architecture
//!
//! - [`connection`] - Client construction and the connection handle
//! - [`query`] - The fluent request builder and its operations
//! - [`collection`] - Pass-through wrapper over response hits
//! - [`response`] - Serde bindings for the search response body
//! - [`error`] - Error types for all operations
//!
//! # Quick Start
//!
//! ```no_run
//! use elastic_query::{Connection, ConnectionConfig, Query};
//! use serde_json::json;
//!
//! # async fn run() -> elastic_query::Result<()> {
//! let connection = Connection::connect(&ConnectionConfig::default())?;
//!
//! let results = Query::new(connection)
//!     .index("posts")
//!     .take(25)
//!     .skip(0)
//!     .track_total_hits(true)
//!     .body(json!({ "query": { "match": { "title": "rust" } } }))
//!     .get()
//!     .await?;
//!
//! for doc in &results {
//!     println!("{}", doc["title"]);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Scroll pagination
//!
//! A search issued with a scroll keep-alive opens a cursor; passing the
//! returned `_scroll_id` back to [`Query::perform_search`] continues it, and
//! [`Query::clear`] releases it.
//!
//! ```no_run
//! use elastic_query::{Connection, ConnectionConfig, Query, DEFAULT_SCROLL_KEEPALIVE};
//!
//! # async fn run() -> elastic_query::Result<()> {
//! let connection = Connection::connect(&ConnectionConfig::default())?;
//! let query = Query::new(connection)
//!     .index("posts")
//!     .scroll(DEFAULT_SCROLL_KEEPALIVE);
//!
//! let mut response = query.perform_search(None).await?;
//! while let Some(scroll_id) = response["_scroll_id"].as_str().map(String::from) {
//!     let hits = &response["hits"]["hits"];
//!     if hits.as_array().is_none_or(|h| h.is_empty()) {
//!         query.clear(Some(&scroll_id)).await?;
//!         break;
//!     }
//!     response = query.perform_search(Some(&scroll_id)).await?;
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod collection;
pub mod connection;
pub mod error;
pub mod query;
pub mod response;

// Re-export commonly used types at crate root
pub use collection::Collection;
pub use connection::{Auth, Connection, ConnectionConfig};
pub use error::{Error, Result};
pub use query::{DEFAULT_SCROLL_KEEPALIVE, DEFAULT_TAKE, Query, TrackTotalHits};
pub use response::SearchResponse;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
