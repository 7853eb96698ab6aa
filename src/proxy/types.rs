//! Proxy server data structures.

use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared state for the proxy handlers
#[derive(Clone)]
pub struct ProxyState {
    pub client: Arc<reqwest::Client>,
    /// Upstream origin without a trailing slash
    pub upstream: String,
    pub competition_id: String,
    /// Directory with the built front end
    pub dist: PathBuf,
    /// Include error details in 502 bodies
    pub dev: bool,
}

/// JSON body of a failed proxy exchange
#[derive(Debug, Serialize)]
pub struct ProxyErrorBody {
    pub error: &'static str,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub path: String,
}

impl ProxyErrorBody {
    pub fn bad_gateway(path: &str, details: Option<String>) -> Self {
        Self {
            error: "Bad Gateway",
            message: "Failed to proxy request to upstream server",
            details,
            path: path.to_string(),
        }
    }
}
