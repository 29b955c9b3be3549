pub mod game;
pub mod health;
pub mod search;

use axum::Router;

use crate::state::AppState;

/// Build the public route tree.
///
/// Route hierarchy:
///
/// ```text
/// /search?q=                   catalog search
/// /game/{app_id}               resolved game profile
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(search::router())
        .merge(game::router())
}
