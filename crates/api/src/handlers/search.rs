//! Handler for catalog search.
//!
//! Always answers 200: upstream failures are swallowed by
//! [`search_catalog`] and surface as an empty list, and a malformed query
//! string is treated as an empty query.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;
use steamprobe_core::profile::SearchCandidate;
use steamprobe_core::search::search_catalog;

use crate::query::SearchParams;
use crate::state::AppState;

/// `{ "results": [...] }`
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchCandidate>,
}

/// GET /search?q=
pub async fn search_games(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Json<SearchResponse> {
    let params = match params {
        Ok(Query(params)) => params.q,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable search query, treating as empty");
            None
        }
    };
    let query = params.as_deref().unwrap_or("");
    let results = search_catalog(state.source.as_ref(), query, &state.config.cdn_base_url).await;

    tracing::debug!(query, results = results.len(), "Catalog search completed");

    Json(SearchResponse { results })
}
