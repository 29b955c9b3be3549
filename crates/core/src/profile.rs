//! Normalized records returned to API clients.
//!
//! Wire names match the JSON contract the web client already consumes,
//! hence the mix of snake_case and camelCase keys.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::deck::DeckCompatibility;
use crate::store::Platforms;
use crate::types::AppId;

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// One candidate title from a catalog search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchCandidate {
    #[serde(rename = "appid")]
    pub id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "img_icon_url")]
    pub thumbnail_url: Option<String>,
    pub capsule_image: String,
}

// ---------------------------------------------------------------------------
// Achievements
// ---------------------------------------------------------------------------

/// A single achievement from the game's stats schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementDescriptor {
    #[serde(rename = "name")]
    pub key: String,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "icon", default)]
    pub icon_url_unlocked: String,
    #[serde(rename = "icongray", default)]
    pub icon_url_locked: String,
}

/// Evidence that a game has achievements.
///
/// `total` is non-zero by construction: a zero count carries no signal and
/// must surface as "no achievements", so the constructors refuse it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AchievementSummary {
    pub total: NonZeroU32,
    pub list: Vec<AchievementDescriptor>,
}

impl AchievementSummary {
    /// Build a count-only summary. Returns `None` for zero.
    pub fn from_count(total: u64) -> Option<Self> {
        let total = u32::try_from(total).ok().and_then(NonZeroU32::new)?;
        Some(Self {
            total,
            list: Vec::new(),
        })
    }

    /// Build a summary from a full descriptor list. Returns `None` when the
    /// list is empty.
    pub fn from_descriptors(list: Vec<AchievementDescriptor>) -> Option<Self> {
        let total = u32::try_from(list.len()).ok().and_then(NonZeroU32::new)?;
        Some(Self { total, list })
    }
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// Troubleshooting details attached to a profile. Nothing reads these back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDiagnostics {
    pub has_store_api_deck_data: bool,
    pub store_api_deck_value: Option<Value>,
    pub detection_method: &'static str,
    pub achievement_source: Option<&'static str>,
    pub deck_source: Option<&'static str>,
    pub cloud_source: Option<&'static str>,
}

/// The merged view of one game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameProfile {
    #[serde(rename = "appid")]
    pub id: AppId,
    #[serde(rename = "name")]
    pub title: String,
    pub header_image: Option<String>,
    #[serde(rename = "capsule_image")]
    pub capsule_image_url: String,
    #[serde(rename = "hero_image")]
    pub hero_image_url: String,
    #[serde(rename = "screenshots")]
    pub screenshot_urls: Vec<String>,
    pub short_description: Option<String>,
    pub release_date: Option<String>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub achievements: Option<AchievementSummary>,
    #[serde(rename = "steamDeckCompatibility")]
    pub deck_compatibility: DeckCompatibility,
    #[serde(rename = "steamCloud")]
    pub cloud_supported: bool,
    pub categories: Vec<String>,
    pub genres: Vec<String>,
    #[serde(rename = "platforms")]
    pub platform_support: Platforms,
    #[serde(rename = "debug")]
    pub diagnostics: ProfileDiagnostics,
}
