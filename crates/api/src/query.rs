//! Query parameter types for API handlers.

use serde::Deserialize;

/// `GET /search?q=...`. A missing `q` behaves like an empty query.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}
