use steamprobe_core::resolver::DEFAULT_CDN_BASE_URL;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`). Bounds every
    /// upstream call made while serving a request.
    pub request_timeout_secs: u64,
    /// Whether the speculative release-year/language cloud rule runs
    /// (default: `true`).
    pub speculative_cloud_heuristic: bool,
    /// Base URL for generated capsule and hero image links.
    pub cdn_base_url: String,
    /// Emit JSON log lines instead of human-readable ones.
    pub json_logs: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Default                              |
    /// |-------------------------------|--------------------------------------|
    /// | `HOST`                        | `0.0.0.0`                            |
    /// | `PORT`                        | `3000`                               |
    /// | `CORS_ORIGINS`                | `http://localhost:5173`              |
    /// | `REQUEST_TIMEOUT_SECS`        | `30`                                 |
    /// | `SPECULATIVE_CLOUD_HEURISTIC` | `true`                               |
    /// | `STEAM_CDN_BASE_URL`          | `https://cdn.akamai.steamstatic.com` |
    /// | `LOG_FORMAT`                  | `text` (`json` for JSON lines)       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let speculative_cloud_heuristic: bool = std::env::var("SPECULATIVE_CLOUD_HEURISTIC")
            .unwrap_or_else(|_| "true".into())
            .trim()
            .to_ascii_lowercase()
            .parse()
            .expect("SPECULATIVE_CLOUD_HEURISTIC must be true or false");

        let cdn_base_url =
            std::env::var("STEAM_CDN_BASE_URL").unwrap_or_else(|_| DEFAULT_CDN_BASE_URL.into());

        let json_logs = std::env::var("LOG_FORMAT")
            .map(|format| format.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            speculative_cloud_heuristic,
            cdn_base_url,
            json_logs,
        }
    }
}
