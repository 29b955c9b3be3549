//! Steam Deck compatibility probe.
//!
//! Tiers, first non-`Unknown` wins:
//!
//! 1. `store_field`: the structured `steam_deck_compatibility.category`.
//! 2. `store_page`: marker substrings scraped from the store page.
//! 3. `linux_fallback`: Linux support implies at least `Playable`. This is
//!    an under-approximation. Linux support does not guarantee the title
//!    runs on the Deck, it only sets a floor.

use serde::Serialize;
use serde_json::Value;

use crate::source::SteamSource;
use crate::store::AppDetails;
use crate::tiers::{first_signal, Signal, Tier};

pub const TIER_STORE_FIELD: &str = "store_field";
pub const TIER_STORE_PAGE: &str = "store_page";
pub const TIER_LINUX_FALLBACK: &str = "linux_fallback";

const VERIFIED_MARKERS: [&str; 3] = [
    "deck_compatibility_category_verified",
    "Steam Deck Verified",
    "deck_verified",
];
const PLAYABLE_MARKERS: [&str; 3] = [
    "deck_compatibility_category_playable",
    "Steam Deck Playable",
    "deck_playable",
];
const UNSUPPORTED_MARKERS: [&str; 3] = [
    "deck_compatibility_category_unsupported",
    "Steam Deck Unsupported",
    "deck_unsupported",
];

/// Header of the compatibility block on the store page.
const COMPAT_SECTION_MARKER: &str = "STEAM DECK COMPATIBILITY";

/// Coarse Steam Deck rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckCompatibility {
    Verified,
    Playable,
    Unsupported,
    #[default]
    Unknown,
}

impl DeckCompatibility {
    /// Map a store `category` value. Strings match case-insensitively;
    /// numbers follow Steam's resolved-category codes (3 verified,
    /// 2 playable, 1 unsupported). Anything else is `Unknown`.
    pub fn from_category(value: &Value) -> Self {
        match value {
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "verified" => Self::Verified,
                "playable" => Self::Playable,
                "unsupported" => Self::Unsupported,
                _ => Self::Unknown,
            },
            Value::Number(n) => match n.as_u64() {
                Some(3) => Self::Verified,
                Some(2) => Self::Playable,
                Some(1) => Self::Unsupported,
                _ => Self::Unknown,
            },
            _ => Self::Unknown,
        }
    }

    /// `None` for `Unknown`, so the rating can feed a tier chain.
    pub fn known(self) -> Option<Self> {
        match self {
            Self::Unknown => None,
            other => Some(other),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Playable => "playable",
            Self::Unsupported => "unsupported",
            Self::Unknown => "unknown",
        }
    }
}

/// Rating from the structured store field.
pub fn from_store_field(details: &AppDetails) -> DeckCompatibility {
    details
        .steam_deck_compatibility
        .as_ref()
        .and_then(|compat| compat.get("category"))
        .map_or(DeckCompatibility::Unknown, DeckCompatibility::from_category)
}

/// Scan store page markup for marker families. Verified is checked before
/// Playable before Unsupported, so a page carrying several resolves to the
/// strongest rating.
pub fn scan_store_page(markup: &str) -> DeckCompatibility {
    let families = [
        (DeckCompatibility::Verified, &VERIFIED_MARKERS),
        (DeckCompatibility::Playable, &PLAYABLE_MARKERS),
        (DeckCompatibility::Unsupported, &UNSUPPORTED_MARKERS),
    ];
    for (rating, markers) in families {
        if markers.iter().any(|marker| markup.contains(marker)) {
            return rating;
        }
    }
    if markup.contains(COMPAT_SECTION_MARKER) {
        tracing::debug!("Deck compatibility section present but no rating marker found");
    }
    DeckCompatibility::Unknown
}

/// Run the deck tiers for `app_id`.
pub async fn probe_deck(
    source: &dyn SteamSource,
    app_id: &str,
    details: &AppDetails,
) -> Option<Signal<DeckCompatibility>> {
    let linux = details.platforms.linux;
    let tiers = vec![
        Tier::sync(TIER_STORE_FIELD, move || from_store_field(details).known()),
        Tier::new(TIER_STORE_PAGE, move || async move {
            match source.store_page(app_id).await {
                Ok(markup) => scan_store_page(&markup).known(),
                Err(err) => {
                    tracing::debug!(app_id, error = %err, "Store page unavailable");
                    None
                }
            }
        }),
        Tier::sync(TIER_LINUX_FALLBACK, move || {
            linux.then_some(DeckCompatibility::Playable)
        }),
    ];

    let signal = first_signal(tiers).await;
    match &signal {
        Some(found) => tracing::debug!(
            app_id,
            tier = found.tier,
            rating = found.value.as_str(),
            "Deck compatibility detected"
        ),
        None => tracing::debug!(app_id, "No deck compatibility signal from any tier"),
    }
    signal
}
