//! Handler for resolved game profiles.

use axum::extract::{Path, State};
use axum::Json;
use steamprobe_core::profile::GameProfile;
use steamprobe_core::resolver::resolve_game;
use steamprobe_core::types::AppId;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /game/{app_id}
///
/// 404 when the store has no record, 500 when the store-details request
/// fails, 400 when `app_id` is not numeric.
pub async fn get_game(
    State(state): State<AppState>,
    Path(app_id): Path<String>,
) -> AppResult<Json<GameProfile>> {
    let app_id = AppId::parse(&app_id)?;
    let profile = resolve_game(state.source.as_ref(), &app_id, &state.resolver).await?;
    Ok(Json(profile))
}
