//! Deterministic [`SteamSource`] stand-in for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::profile::AchievementDescriptor;
use crate::source::{SourceError, SteamSource};
use crate::store::{AppDetails, StoreSearchItem};

/// Canned upstream responses. `None` for any endpoint simulates a
/// transport failure.
#[derive(Default)]
pub(crate) struct FakeSource {
    pub details: Option<Result<Option<AppDetails>, u16>>,
    pub search: Option<Vec<StoreSearchItem>>,
    pub schema: Option<Vec<AchievementDescriptor>>,
    pub store_page: Option<String>,
    pub achievements_page: Option<String>,
    pub calls: AtomicUsize,
    pub schema_calls: AtomicUsize,
    pub store_page_calls: AtomicUsize,
    pub achievements_page_calls: AtomicUsize,
}

impl FakeSource {
    pub fn with_details(details: AppDetails) -> Self {
        Self {
            details: Some(Ok(Some(details))),
            ..Self::default()
        }
    }

    pub fn total_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self, counter: &AtomicUsize) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

fn transport() -> SourceError {
    SourceError::Transport("connection refused".to_string())
}

#[async_trait]
impl SteamSource for FakeSource {
    async fn app_details(&self, _app_id: &str) -> Result<Option<AppDetails>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.details {
            Some(Ok(details)) => Ok(details.clone()),
            Some(Err(status)) => Err(SourceError::Status { status: *status }),
            None => Err(transport()),
        }
    }

    async fn store_search(&self, _term: &str) -> Result<Vec<StoreSearchItem>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.search.clone().ok_or_else(transport)
    }

    async fn achievement_schema(
        &self,
        _app_id: &str,
    ) -> Result<Vec<AchievementDescriptor>, SourceError> {
        self.record(&self.schema_calls);
        self.schema.clone().ok_or_else(transport)
    }

    async fn store_page(&self, _app_id: &str) -> Result<String, SourceError> {
        self.record(&self.store_page_calls);
        self.store_page.clone().ok_or_else(transport)
    }

    async fn achievements_page(&self, _app_id: &str) -> Result<String, SourceError> {
        self.record(&self.achievements_page_calls);
        self.achievements_page.clone().ok_or_else(transport)
    }
}

pub(crate) fn descriptor(key: &str) -> AchievementDescriptor {
    AchievementDescriptor {
        key: key.to_string(),
        display_name: key.to_lowercase(),
        description: String::new(),
        icon_url_unlocked: format!("https://example.test/{key}.jpg"),
        icon_url_locked: format!("https://example.test/{key}_gray.jpg"),
    }
}
