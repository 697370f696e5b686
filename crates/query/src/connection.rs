//! Connection handling for the query builder.
//!
//! A [`Connection`] owns an [`Elasticsearch`] client and hands out references
//! to it. The client is either constructed externally and wrapped with
//! [`Connection::new`], or built from a [`ConnectionConfig`] with
//! [`Connection::connect`]. There is no lifecycle beyond construction;
//! the client's HTTP transport manages connections internally.

use std::fmt::Debug;
use std::time::Duration;

use elasticsearch::Elasticsearch;
use elasticsearch::auth::Credentials;
use elasticsearch::cert::CertificateValidation;
use elasticsearch::http::transport::{SingleNodeConnectionPool, TransportBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Authentication configuration for Elasticsearch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Auth {
    /// Basic username/password authentication.
    Basic {
        /// The username for basic auth.
        username: String,
        /// The password for basic auth.
        password: String,
    },
    /// Bearer token authentication.
    Bearer {
        /// The bearer token.
        token: String,
    },
}

/// Configuration for building a [`Connection`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Elasticsearch node URLs (e.g., `["http://localhost:9200"]`).
    /// Currently uses the first node (single-node connection pool).
    pub nodes: Vec<String>,

    /// Request timeout in milliseconds (default: 30000).
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Optional authentication.
    #[serde(default)]
    pub auth: Option<Auth>,

    /// Whether to disable certificate validation (default: false).
    /// Only use for development/testing.
    #[serde(default)]
    pub disable_certificate_validation: bool,
}

fn default_request_timeout_ms() -> u64 {
    30000
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            nodes: vec!["http://localhost:9200".to_string()],
            request_timeout_ms: default_request_timeout_ms(),
            auth: None,
            disable_certificate_validation: false,
        }
    }
}

/// A handle to an Elasticsearch client shared by queries.
///
/// Construction performs no network I/O; the first request does.
pub struct Connection {
    client: Elasticsearch,
}

impl Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection").finish_non_exhaustive()
    }
}

impl Connection {
    /// Wraps an externally constructed client.
    pub fn new(client: Elasticsearch) -> Self {
        Self { client }
    }

    /// Builds a client from the given configuration and wraps it.
    pub fn connect(config: &ConnectionConfig) -> Result<Self> {
        let url = config
            .nodes
            .first()
            .cloned()
            .unwrap_or_else(|| "http://localhost:9200".to_string());

        let parsed_url: elasticsearch::http::Url =
            url.parse().map_err(|e| Error::ConnectionFailed {
                message: format!("invalid node URL: {}", e),
            })?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);

        let mut builder = TransportBuilder::new(conn_pool)
            .timeout(Duration::from_millis(config.request_timeout_ms));

        if config.disable_certificate_validation {
            builder = builder.cert_validation(CertificateValidation::None);
        }

        if let Some(ref auth) = config.auth {
            builder = match auth {
                Auth::Basic { username, password } => {
                    builder.auth(Credentials::Basic(username.clone(), password.clone()))
                }
                Auth::Bearer { token } => builder.auth(Credentials::Bearer(token.clone())),
            };
        }

        let transport = builder.build().map_err(|e| Error::ConnectionFailed {
            message: format!("failed to build transport: {}", e),
        })?;

        Ok(Self::new(Elasticsearch::new(transport)))
    }

    /// Returns the wrapped client.
    pub fn client(&self) -> &Elasticsearch {
        &self.client
    }

    /// Consumes the connection and returns the wrapped client.
    pub fn into_client(self) -> Elasticsearch {
        self.client
    }
}
