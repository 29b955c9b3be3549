//! Steam Cloud detection.
//!
//! Rules, first applicable wins:
//!
//! 1. `category`: the store categories include the Steam Cloud id.
//! 2. `feature`: a legacy feature entry carries that id or mentions "cloud".
//! 3. `speculative`: a pluggable [`CloudHeuristic`]. The shipped
//!    [`ReleaseYearLanguageHeuristic`] is a low-confidence guess, not a
//!    verified fact, and can be disabled through configuration.
//!
//! No rule firing means no cloud support.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::store::AppDetails;
use crate::tiers::{first_signal, Signal, Tier};

/// Store category id for "Steam Cloud".
pub const STEAM_CLOUD_CATEGORY_ID: u32 = 23;

/// Earliest release year the speculative rule considers.
pub const SPECULATIVE_MIN_RELEASE_YEAR: i32 = 2018;

/// The speculative rule needs strictly more languages than this.
pub const SPECULATIVE_LANGUAGE_THRESHOLD: usize = 5;

const RELEASE_DATE_FORMATS: [&str; 9] = [
    "%d %b, %Y",
    "%b %d, %Y",
    "%d %B, %Y",
    "%B %d, %Y",
    "%Y-%m-%d",
    "%d %b %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%B %d %Y",
];

/// Which rule established cloud support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CloudEvidence {
    Category,
    Feature,
    /// Low confidence; produced by a [`CloudHeuristic`].
    Speculative,
}

impl CloudEvidence {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Feature => "feature",
            Self::Speculative => "speculative",
        }
    }
}

/// A guess at cloud support for records that carry no explicit signal.
pub trait CloudHeuristic: Send + Sync {
    fn guess(&self, details: &AppDetails) -> bool;
}

/// Recent, widely localized releases usually ship with cloud saves.
///
/// Fires when the release year is at least
/// [`SPECULATIVE_MIN_RELEASE_YEAR`] and the language list has more than
/// [`SPECULATIVE_LANGUAGE_THRESHOLD`] entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReleaseYearLanguageHeuristic;

impl CloudHeuristic for ReleaseYearLanguageHeuristic {
    fn guess(&self, details: &AppDetails) -> bool {
        let Some(languages) = details.supported_languages.as_deref() else {
            return false;
        };
        let year = details
            .release_date
            .as_ref()
            .and_then(|release| release.date.as_deref())
            .and_then(release_year);
        matches!(year, Some(y) if y >= SPECULATIVE_MIN_RELEASE_YEAR)
            && language_count(languages) > SPECULATIVE_LANGUAGE_THRESHOLD
    }
}

pub fn cloud_from_categories(details: &AppDetails) -> bool {
    details
        .categories
        .iter()
        .any(|category| category.id == STEAM_CLOUD_CATEGORY_ID)
}

pub fn cloud_from_features(details: &AppDetails) -> bool {
    details.features.as_deref().is_some_and(|features| {
        features.iter().any(|feature| {
            feature.id == Some(STEAM_CLOUD_CATEGORY_ID)
                || feature
                    .description
                    .as_deref()
                    .is_some_and(|text| text.to_lowercase().contains("cloud"))
        })
    })
}

/// Year from a store release-date string such as `21 Aug, 2020`,
/// `August 21, 2020`, `2020-08-21` or a bare `2020`. `None` for placeholders
/// like `Coming soon`.
pub fn release_year(date: &str) -> Option<i32> {
    let date = date.trim();
    if date.len() == 4 && date.bytes().all(|b| b.is_ascii_digit()) {
        return date.parse().ok();
    }
    RELEASE_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date, format).ok())
        .map(|parsed| parsed.year())
}

/// Number of entries in a comma-separated language list.
pub fn language_count(languages: &str) -> usize {
    languages
        .split(',')
        .filter(|entry| !entry.trim().is_empty())
        .count()
}

/// Run the cloud rules. `heuristic` is consulted last; pass `None` to
/// disable speculative detection entirely.
pub async fn detect_cloud(
    details: &AppDetails,
    heuristic: Option<&dyn CloudHeuristic>,
) -> Option<Signal<CloudEvidence>> {
    let mut tiers = vec![
        Tier::sync(CloudEvidence::Category.as_str(), move || {
            cloud_from_categories(details).then_some(CloudEvidence::Category)
        }),
        Tier::sync(CloudEvidence::Feature.as_str(), move || {
            cloud_from_features(details).then_some(CloudEvidence::Feature)
        }),
    ];
    if let Some(heuristic) = heuristic {
        tiers.push(Tier::sync(CloudEvidence::Speculative.as_str(), move || {
            heuristic
                .guess(details)
                .then_some(CloudEvidence::Speculative)
        }));
    }

    let signal = first_signal(tiers).await;
    if let Some(found) = &signal {
        if found.value == CloudEvidence::Speculative {
            tracing::debug!("Steam Cloud assumed from release year and localization (low confidence)");
        }
    }
    signal
}
