//! Game profile resolution.
//!
//! Fetches the primary store record, runs the achievement, deck and cloud
//! probes in sequence, and merges everything into one [`GameProfile`].
//! Only a failed primary fetch is fatal; every probe degrades to "no
//! signal".

use std::fmt;
use std::sync::Arc;

use crate::achievements::probe_achievements;
use crate::cloud::{detect_cloud, CloudEvidence, CloudHeuristic, ReleaseYearLanguageHeuristic};
use crate::deck::{probe_deck, DeckCompatibility, TIER_STORE_FIELD, TIER_STORE_PAGE};
use crate::error::CoreError;
use crate::profile::{AchievementSummary, GameProfile, ProfileDiagnostics};
use crate::source::SteamSource;
use crate::store::AppDetails;
use crate::tiers::Signal;
use crate::types::AppId;

/// Steam's public image CDN.
pub const DEFAULT_CDN_BASE_URL: &str = "https://cdn.akamai.steamstatic.com";

/// Screenshots kept on a profile.
pub const MAX_SCREENSHOTS: usize = 4;

const DETECTION_API_OR_SCRAPING: &str = "api_or_scraping";
const DETECTION_FALLBACK_OR_UNKNOWN: &str = "fallback_or_unknown";

/// Knobs for [`resolve_game`].
#[derive(Clone)]
pub struct ResolverOptions {
    /// Base URL for generated capsule and hero image links.
    pub cdn_base_url: String,
    /// Speculative cloud rule; `None` disables it.
    pub cloud_heuristic: Option<Arc<dyn CloudHeuristic>>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            cdn_base_url: DEFAULT_CDN_BASE_URL.to_string(),
            cloud_heuristic: Some(Arc::new(ReleaseYearLanguageHeuristic)),
        }
    }
}

impl fmt::Debug for ResolverOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverOptions")
            .field("cdn_base_url", &self.cdn_base_url)
            .field("cloud_heuristic", &self.cloud_heuristic.is_some())
            .finish()
    }
}

impl ResolverOptions {
    pub fn without_cloud_heuristic(mut self) -> Self {
        self.cloud_heuristic = None;
        self
    }
}

/// Resolve one game into a merged profile.
///
/// Errors:
/// - [`CoreError::Upstream`] when the store-details request fails;
/// - [`CoreError::NotFound`] when the store has no record for `app_id`.
pub async fn resolve_game(
    source: &dyn SteamSource,
    app_id: &AppId,
    options: &ResolverOptions,
) -> Result<GameProfile, CoreError> {
    let details = match source.app_details(app_id.as_str()).await {
        Ok(Some(details)) => details,
        Ok(None) => {
            tracing::info!(%app_id, "Store has no record for app");
            return Err(CoreError::NotFound {
                entity: "Game",
                id: app_id.to_string(),
            });
        }
        Err(err) => {
            tracing::warn!(%app_id, error = %err, "Store details request failed");
            return Err(CoreError::Upstream(err.to_string()));
        }
    };

    let achievements = probe_achievements(source, app_id.as_str(), &details).await;
    let deck = probe_deck(source, app_id.as_str(), &details).await;
    let cloud = detect_cloud(&details, options.cloud_heuristic.as_deref()).await;

    let profile = assemble_profile(
        app_id,
        details,
        achievements,
        deck,
        cloud,
        &options.cdn_base_url,
    );

    tracing::info!(
        %app_id,
        name = %profile.title,
        achievements = profile.achievements.as_ref().map(|a| a.total.get()),
        deck = profile.deck_compatibility.as_str(),
        cloud = profile.cloud_supported,
        "Resolved game profile"
    );
    Ok(profile)
}

/// Merge the store record and probe results.
fn assemble_profile(
    app_id: &AppId,
    details: AppDetails,
    achievements: Option<Signal<AchievementSummary>>,
    deck: Option<Signal<DeckCompatibility>>,
    cloud: Option<Signal<CloudEvidence>>,
    cdn_base_url: &str,
) -> GameProfile {
    let cdn = cdn_base_url.trim_end_matches('/');

    let detection_method = match deck.as_ref().map(|signal| signal.tier) {
        Some(TIER_STORE_FIELD | TIER_STORE_PAGE) => DETECTION_API_OR_SCRAPING,
        _ => DETECTION_FALLBACK_OR_UNKNOWN,
    };
    let diagnostics = ProfileDiagnostics {
        has_store_api_deck_data: details.steam_deck_compatibility.is_some(),
        store_api_deck_value: details.steam_deck_compatibility.clone(),
        detection_method,
        achievement_source: achievements.as_ref().map(|signal| signal.tier),
        deck_source: deck.as_ref().map(|signal| signal.tier),
        cloud_source: cloud.as_ref().map(|signal| signal.tier),
    };

    GameProfile {
        id: app_id.clone(),
        title: details.name,
        header_image: details.header_image,
        capsule_image_url: format!("{cdn}/steam/apps/{app_id}/capsule_616x353.jpg"),
        hero_image_url: format!("{cdn}/steam/apps/{app_id}/page_bg_generated_v6b.jpg"),
        screenshot_urls: details
            .screenshots
            .into_iter()
            .take(MAX_SCREENSHOTS)
            .map(|shot| shot.path_thumbnail)
            .collect(),
        short_description: details.short_description,
        release_date: details.release_date.and_then(|release| release.date),
        developer: details.developers.into_iter().next(),
        publisher: details.publishers.into_iter().next(),
        achievements: achievements.map(|signal| signal.value),
        deck_compatibility: deck.map_or(DeckCompatibility::Unknown, |signal| signal.value),
        cloud_supported: cloud.is_some(),
        categories: unique_descriptions(details.categories.into_iter().map(|c| c.description)),
        genres: unique_descriptions(details.genres.into_iter().map(|g| g.description)),
        platform_support: details.platforms,
        diagnostics,
    }
}

/// Non-empty descriptions, first occurrence kept, upstream order preserved.
fn unique_descriptions(descriptions: impl Iterator<Item = String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for description in descriptions {
        if !description.is_empty() && !unique.contains(&description) {
            unique.push(description);
        }
    }
    unique
}
