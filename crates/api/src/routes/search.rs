//! Route definitions for catalog search.

use axum::routing::get;
use axum::Router;

use crate::handlers::search;
use crate::state::AppState;

/// ```text
/// GET /search?q=    -> search_games
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/search", get(search::search_games))
}
