//! Response envelopes of the Steam endpoints.
//!
//! These wrap the domain records in `steamprobe_core::store` and are only
//! used to peel them out of upstream JSON.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use steamprobe_core::profile::AchievementDescriptor;
use steamprobe_core::store::{AppDetails, StoreSearchItem};

/// One entry of the `appdetails` map, keyed by app id.
#[derive(Debug, Deserialize)]
pub struct AppDetailsEntry {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Pull the record for `app_id` out of an `appdetails` body.
///
/// `Ok(None)` when the entry is missing, unsuccessful, or has no `data`
/// object. The store answers unknown ids with `{"<id>": {"success": false}}`.
pub fn extract_app_details(body: &str, app_id: &str) -> Result<Option<AppDetails>, serde_json::Error> {
    let mut entries: HashMap<String, AppDetailsEntry> = serde_json::from_str(body)?;
    let Some(entry) = entries.remove(app_id) else {
        return Ok(None);
    };
    if !entry.success {
        return Ok(None);
    }
    match entry.data {
        Some(data @ Value::Object(_)) => serde_json::from_value(data).map(Some),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
pub struct StoreSearchResponse {
    #[serde(default)]
    pub items: Vec<StoreSearchItem>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SchemaResponse {
    #[serde(default)]
    pub game: Option<SchemaGame>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SchemaGame {
    #[serde(rename = "availableGameStats", default)]
    pub available_game_stats: Option<SchemaStats>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SchemaStats {
    #[serde(default)]
    pub achievements: Vec<AchievementDescriptor>,
}

impl SchemaResponse {
    pub fn into_achievements(self) -> Vec<AchievementDescriptor> {
        self.game
            .and_then(|game| game.available_game_stats)
            .map(|stats| stats.achievements)
            .unwrap_or_default()
    }
}
