//! Catalog search constants and the search operation.

use crate::profile::SearchCandidate;
use crate::source::SteamSource;

/// Trimmed queries shorter than this never reach the upstream.
pub const MIN_QUERY_CHARS: usize = 2;

/// Maximum number of candidates returned.
pub const MAX_SEARCH_RESULTS: usize = 10;

/// Search the store catalog for `query`.
///
/// Never fails: an upstream error is logged and yields an empty list.
pub async fn search_catalog(
    source: &dyn SteamSource,
    query: &str,
    cdn_base_url: &str,
) -> Vec<SearchCandidate> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let items = match source.store_search(query).await {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(query, error = %err, "Store search failed");
            return Vec::new();
        }
    };

    let cdn = cdn_base_url.trim_end_matches('/');
    items
        .into_iter()
        .take(MAX_SEARCH_RESULTS)
        .map(|item| SearchCandidate {
            id: item.id.to_string(),
            capsule_image: format!("{cdn}/steam/apps/{}/capsule_231x87.jpg", item.id),
            display_name: item.name,
            thumbnail_url: item.tiny_image,
        })
        .collect()
}
