//! Upstream capability consumed by the resolver and catalog search.
//!
//! [`SteamSource`] is the seam between the reconciliation logic and the
//! network. The production implementation lives in `steamprobe-steam`;
//! tests substitute in-memory stand-ins.

use async_trait::async_trait;

use crate::profile::AchievementDescriptor;
use crate::store::{AppDetails, StoreSearchItem};

/// Errors an upstream source can report.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The request never produced a response (network, DNS, TLS, etc.).
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The upstream answered with a non-2xx status.
    #[error("Upstream returned status {status}")]
    Status { status: u16 },

    /// The response body could not be decoded.
    #[error("Malformed upstream payload: {0}")]
    Decode(String),
}

/// Read-only access to the Steam endpoints the service aggregates.
#[async_trait]
pub trait SteamSource: Send + Sync {
    /// Primary store-details record. `Ok(None)` means the upstream answered
    /// but has no usable record for `app_id`.
    async fn app_details(&self, app_id: &str) -> Result<Option<AppDetails>, SourceError>;

    /// Free-text store search, upstream relevance order.
    async fn store_search(&self, term: &str) -> Result<Vec<StoreSearchItem>, SourceError>;

    /// Achievement descriptors from the stats schema. An empty list means
    /// the schema has no achievements.
    async fn achievement_schema(
        &self,
        app_id: &str,
    ) -> Result<Vec<AchievementDescriptor>, SourceError>;

    /// Markup of the public store page.
    async fn store_page(&self, app_id: &str) -> Result<String, SourceError>;

    /// Markup of the public community achievements listing.
    async fn achievements_page(&self, app_id: &str) -> Result<String, SourceError>;
}
