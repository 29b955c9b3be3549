//! HTTP client for the public Steam endpoints.
//!
//! Implements [`SteamSource`] on top of [`reqwest`]. Every call is a single
//! unauthenticated GET; retries and caching are left out on purpose.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use steamprobe_core::profile::AchievementDescriptor;
use steamprobe_core::source::{SourceError, SteamSource};
use steamprobe_core::store::{AppDetails, StoreSearchItem};

use crate::config::SteamClientConfig;
use crate::payloads::{extract_app_details, SchemaResponse, StoreSearchResponse};

/// Errors from the Steam HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum SteamApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Steam returned a non-2xx status code.
    #[error("Steam API error ({status}) for {url}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Requested URL, without query parameters.
        url: String,
    },

    /// The body was not the JSON shape we expected.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<SteamApiError> for SourceError {
    fn from(err: SteamApiError) -> Self {
        match err {
            SteamApiError::Request(inner) if inner.is_decode() => Self::Decode(inner.to_string()),
            SteamApiError::Request(inner) => Self::Transport(inner.to_string()),
            SteamApiError::ApiError { status, .. } => Self::Status { status },
            SteamApiError::Decode(inner) => Self::Decode(inner.to_string()),
        }
    }
}

/// Client for the store, Web API and community hosts.
#[derive(Debug, Clone)]
pub struct SteamClient {
    client: reqwest::Client,
    config: SteamClientConfig,
}

impl SteamClient {
    /// Build a client with its own connection pool.
    pub fn new(config: SteamClientConfig) -> Result<Self, SteamApiError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, config })
    }

    /// Build a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: SteamClientConfig) -> Self {
        Self { client, config }
    }

    /// `GET /api/appdetails?appids={id}&l={language}` on the store host.
    pub async fn get_app_details(&self, app_id: &str) -> Result<Option<AppDetails>, SteamApiError> {
        let body = self
            .get_text(
                &self.store_url("api/appdetails"),
                &[("appids", app_id), ("l", self.config.language.as_str())],
            )
            .await?;
        Ok(extract_app_details(&body, app_id)?)
    }

    /// `GET /api/storesearch/?term=..&l=..&cc=..` on the store host.
    pub async fn search_store(&self, term: &str) -> Result<Vec<StoreSearchItem>, SteamApiError> {
        let response: StoreSearchResponse = self
            .get_json(
                &self.store_url("api/storesearch/"),
                &[
                    ("term", term),
                    ("l", self.config.language.as_str()),
                    ("cc", self.config.country_code.as_str()),
                ],
            )
            .await?;
        Ok(response.items)
    }

    /// `GET /ISteamUserStats/GetSchemaForGame/v2/?appid=..` on the Web API
    /// host. The configured key, if any, is sent as `key`.
    pub async fn get_achievement_schema(
        &self,
        app_id: &str,
    ) -> Result<Vec<AchievementDescriptor>, SteamApiError> {
        let url = format!(
            "{}/ISteamUserStats/GetSchemaForGame/v2/",
            self.config.web_api_base_url.trim_end_matches('/')
        );
        let mut query = vec![("appid", app_id)];
        if let Some(key) = self.config.web_api_key.as_deref() {
            query.push(("key", key));
        }
        let schema: SchemaResponse = self.get_json(&url, &query).await?;
        Ok(schema.into_achievements())
    }

    /// Markup of `/app/{id}/` on the store host.
    pub async fn get_store_page(&self, app_id: &str) -> Result<String, SteamApiError> {
        self.get_text(&self.store_url(&format!("app/{app_id}/")), &[])
            .await
    }

    /// Markup of `/stats/{id}/achievements/` on the community host.
    pub async fn get_achievements_page(&self, app_id: &str) -> Result<String, SteamApiError> {
        let url = format!(
            "{}/stats/{app_id}/achievements/",
            self.config.community_base_url.trim_end_matches('/')
        );
        self.get_text(&url, &[]).await
    }

    // ---- private helpers ----

    fn store_url(&self, path: &str) -> String {
        format!("{}/{path}", self.config.store_base_url.trim_end_matches('/'))
    }

    /// Send a GET and return the response if its status is a success.
    async fn send(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<reqwest::Response, SteamApiError> {
        tracing::debug!(url, "Steam request");
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SteamApiError::ApiError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }

    async fn get_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String, SteamApiError> {
        Ok(self.send(url, query).await?.text().await?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, SteamApiError> {
        let body = self.get_text(url, query).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl SteamSource for SteamClient {
    async fn app_details(&self, app_id: &str) -> Result<Option<AppDetails>, SourceError> {
        Ok(self.get_app_details(app_id).await?)
    }

    async fn store_search(&self, term: &str) -> Result<Vec<StoreSearchItem>, SourceError> {
        Ok(self.search_store(term).await?)
    }

    async fn achievement_schema(
        &self,
        app_id: &str,
    ) -> Result<Vec<AchievementDescriptor>, SourceError> {
        Ok(self.get_achievement_schema(app_id).await?)
    }

    async fn store_page(&self, app_id: &str) -> Result<String, SourceError> {
        Ok(self.get_store_page(app_id).await?)
    }

    async fn achievements_page(&self, app_id: &str) -> Result<String, SourceError> {
        Ok(self.get_achievements_page(app_id).await?)
    }
}
