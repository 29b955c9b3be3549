/// Default `User-Agent` sent upstream. The store serves reduced markup to
/// unknown agents, so a desktop browser string is used.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Endpoints and request parameters for [`crate::SteamClient`].
#[derive(Debug, Clone)]
pub struct SteamClientConfig {
    /// Store host serving `appdetails`, `storesearch` and app pages.
    pub store_base_url: String,
    /// Web API host serving `ISteamUserStats`.
    pub web_api_base_url: String,
    /// Community host serving the achievements listing.
    pub community_base_url: String,
    /// Store language (`l` parameter).
    pub language: String,
    /// Store country code (`cc` parameter) used for search.
    pub country_code: String,
    /// Optional Web API key forwarded to the schema endpoint.
    pub web_api_key: Option<String>,
    pub user_agent: String,
}

impl Default for SteamClientConfig {
    fn default() -> Self {
        Self {
            store_base_url: "https://store.steampowered.com".into(),
            web_api_base_url: "https://api.steampowered.com".into(),
            community_base_url: "https://steamcommunity.com".into(),
            language: "english".into(),
            country_code: "US".into(),
            web_api_key: None,
            user_agent: DEFAULT_USER_AGENT.into(),
        }
    }
}

impl SteamClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                          |
    /// |----------------------------|----------------------------------|
    /// | `STEAM_STORE_BASE_URL`     | `https://store.steampowered.com` |
    /// | `STEAM_WEB_API_BASE_URL`   | `https://api.steampowered.com`   |
    /// | `STEAM_COMMUNITY_BASE_URL` | `https://steamcommunity.com`     |
    /// | `STEAM_LANGUAGE`           | `english`                        |
    /// | `STEAM_COUNTRY_CODE`       | `US`                             |
    /// | `STEAM_WEB_API_KEY`        | unset                            |
    /// | `STEAM_USER_AGENT`         | desktop browser string           |
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let var = |name: &str, default: String| std::env::var(name).unwrap_or(default);

        Self {
            store_base_url: var("STEAM_STORE_BASE_URL", defaults.store_base_url),
            web_api_base_url: var("STEAM_WEB_API_BASE_URL", defaults.web_api_base_url),
            community_base_url: var("STEAM_COMMUNITY_BASE_URL", defaults.community_base_url),
            language: var("STEAM_LANGUAGE", defaults.language),
            country_code: var("STEAM_COUNTRY_CODE", defaults.country_code),
            web_api_key: std::env::var("STEAM_WEB_API_KEY")
                .ok()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            user_agent: var("STEAM_USER_AGENT", defaults.user_agent),
        }
    }
}
