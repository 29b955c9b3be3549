//! Route definitions for game profiles.

use axum::routing::get;
use axum::Router;

use crate::handlers::game;
use crate::state::AppState;

/// ```text
/// GET /game/{app_id}    -> get_game
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/game/{app_id}", get(game::get_game))
}
