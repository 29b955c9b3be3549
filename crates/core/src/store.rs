//! Store-details record as returned by the Steam `appdetails` endpoint.
//!
//! Only the fields the resolver reads are modelled. Every field defaults so
//! sparse records (demos, DLC, delisted titles) still deserialize, and an
//! explicit `null` is read the same as a missing field.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The `data` object of an `appdetails` response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub header_image: Option<String>,
    pub short_description: Option<String>,
    pub release_date: Option<ReleaseDate>,
    #[serde(deserialize_with = "null_as_default")]
    pub developers: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub publishers: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub screenshots: Vec<Screenshot>,
    #[serde(deserialize_with = "null_as_default")]
    pub categories: Vec<StoreCategory>,
    #[serde(deserialize_with = "null_as_default")]
    pub genres: Vec<StoreGenre>,
    #[serde(deserialize_with = "null_as_default")]
    pub platforms: Platforms,
    /// Embedded achievement block. `total` is kept untyped because the
    /// store does not guarantee it is numeric.
    pub achievements: Option<EmbeddedAchievements>,
    /// Raw deck compatibility object, when the store includes one.
    pub steam_deck_compatibility: Option<Value>,
    /// Legacy feature list; absent from most modern records.
    pub features: Option<Vec<StoreFeature>>,
    /// Comma-separated, HTML-decorated language list.
    pub supported_languages: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReleaseDate {
    #[serde(deserialize_with = "null_as_default")]
    pub coming_soon: bool,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Screenshot {
    #[serde(deserialize_with = "null_as_default")]
    pub path_thumbnail: String,
    pub path_full: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreCategory {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreGenre {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreFeature {
    pub id: Option<u32>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EmbeddedAchievements {
    pub total: Option<Value>,
}

/// Operating systems the store lists as supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Platforms {
    #[serde(deserialize_with = "null_as_default")]
    pub windows: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub mac: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub linux: bool,
}

/// Read `null` as `T::default()`. Missing fields are covered by the
/// container-level `#[serde(default)]`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One hit from the `storesearch` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSearchItem {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub tiny_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sparse_record_deserializes_with_defaults() {
        let details: AppDetails = serde_json::from_value(json!({ "name": "Portal" })).unwrap();
        assert_eq!(details.name, "Portal");
        assert!(details.screenshots.is_empty());
        assert!(details.achievements.is_none());
        assert_eq!(details.platforms, Platforms::default());
    }

    #[test]
    fn null_fields_read_as_defaults() {
        let details: AppDetails = serde_json::from_value(json!({
            "name": null,
            "developers": null,
            "publishers": null,
            "screenshots": null,
            "categories": [{ "id": null, "description": null }],
            "genres": null,
            "platforms": { "windows": true, "mac": null, "linux": null },
            "release_date": { "coming_soon": null, "date": null },
            "achievements": null,
            "supported_languages": null
        }))
        .unwrap();

        assert!(details.name.is_empty());
        assert!(details.developers.is_empty());
        assert!(details.screenshots.is_empty());
        assert_eq!(details.categories[0].id, 0);
        assert!(details.genres.is_empty());
        assert!(details.platforms.windows);
        assert!(!details.platforms.linux);
        assert!(details.achievements.is_none());
    }

    #[test]
    fn null_platforms_object_reads_as_default() {
        let details: AppDetails =
            serde_json::from_value(json!({ "name": "X", "platforms": null })).unwrap();
        assert_eq!(details.platforms, Platforms::default());
    }

    #[test]
    fn full_record_deserializes() {
        let details: AppDetails = serde_json::from_value(json!({
            "name": "Half-Life 2",
            "header_image": "https://example.test/header.jpg",
            "release_date": { "coming_soon": false, "date": "16 Nov, 2004" },
            "developers": ["Valve"],
            "publishers": ["Valve"],
            "screenshots": [{ "id": 0, "path_thumbnail": "t0.jpg", "path_full": "f0.jpg" }],
            "categories": [{ "id": 23, "description": "Steam Cloud" }],
            "genres": [{ "id": "1", "description": "Action" }],
            "platforms": { "windows": true, "mac": true, "linux": true },
            "achievements": { "total": 33, "highlighted": [] },
            "supported_languages": "English, French"
        }))
        .unwrap();

        assert_eq!(details.developers, vec!["Valve"]);
        assert_eq!(details.categories[0].id, 23);
        assert_eq!(details.genres[0].description, "Action");
        assert!(details.platforms.linux);
        assert_eq!(
            details.achievements.unwrap().total,
            Some(json!(33))
        );
        assert_eq!(
            details.release_date.unwrap().date.as_deref(),
            Some("16 Nov, 2004")
        );
    }
}
