//! Achievement-presence probe.
//!
//! Three tiers, first positive count wins:
//!
//! 1. `schema_api`: the stats schema, which also yields the full list.
//! 2. `store_details`: the count embedded in the store-details record.
//! 3. `community_page`: rows counted on the public achievements page.
//!
//! A tier only counts as a signal when it reports a positive count; a zero
//! from any tier is treated exactly like silence.

use serde_json::Value;

use crate::profile::AchievementSummary;
use crate::source::SteamSource;
use crate::store::AppDetails;
use crate::tiers::{first_signal, Signal, Tier};

pub const TIER_SCHEMA_API: &str = "schema_api";
pub const TIER_STORE_DETAILS: &str = "store_details";
pub const TIER_COMMUNITY_PAGE: &str = "community_page";

/// Markup class carried by each achievement row on the community page.
pub const ACHIEVEMENT_ROW_MARKER: &str = "achieveRow";

/// Run the achievement tiers for `app_id`.
pub async fn probe_achievements(
    source: &dyn SteamSource,
    app_id: &str,
    details: &AppDetails,
) -> Option<Signal<AchievementSummary>> {
    let tiers = vec![
        Tier::new(TIER_SCHEMA_API, move || async move {
            match source.achievement_schema(app_id).await {
                Ok(list) => AchievementSummary::from_descriptors(list),
                Err(err) => {
                    tracing::debug!(app_id, error = %err, "Achievement schema unavailable");
                    None
                }
            }
        }),
        Tier::sync(TIER_STORE_DETAILS, move || embedded_summary(details)),
        Tier::new(TIER_COMMUNITY_PAGE, move || async move {
            match source.achievements_page(app_id).await {
                Ok(markup) => AchievementSummary::from_count(count_achievement_rows(&markup)),
                Err(err) => {
                    tracing::debug!(app_id, error = %err, "Community achievements page unavailable");
                    None
                }
            }
        }),
    ];

    let signal = first_signal(tiers).await;
    match &signal {
        Some(found) => tracing::debug!(
            app_id,
            tier = found.tier,
            total = found.value.total.get(),
            "Achievements detected"
        ),
        None => tracing::debug!(app_id, "No achievement signal from any tier"),
    }
    signal
}

/// Summary from the store record's embedded `achievements.total`, accepted
/// only when it is present, an unsigned integer, and greater than zero.
pub fn embedded_summary(details: &AppDetails) -> Option<AchievementSummary> {
    let total = details
        .achievements
        .as_ref()?
        .total
        .as_ref()
        .and_then(Value::as_u64)?;
    AchievementSummary::from_count(total)
}

/// Count achievement rows in community page markup.
pub fn count_achievement_rows(markup: &str) -> u64 {
    markup.matches(ACHIEVEMENT_ROW_MARKER).count() as u64
}
