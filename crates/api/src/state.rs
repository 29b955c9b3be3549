use std::sync::Arc;

use steamprobe_core::resolver::ResolverOptions;
use steamprobe_core::source::SteamSource;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Upstream Steam endpoints.
    pub source: Arc<dyn SteamSource>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Resolver knobs derived from the configuration.
    pub resolver: Arc<ResolverOptions>,
}

impl AppState {
    pub fn new(source: Arc<dyn SteamSource>, config: ServerConfig) -> Self {
        let mut resolver = ResolverOptions {
            cdn_base_url: config.cdn_base_url.clone(),
            ..ResolverOptions::default()
        };
        if !config.speculative_cloud_heuristic {
            resolver = resolver.without_cloud_heuristic();
        }
        Self {
            source,
            config: Arc::new(config),
            resolver: Arc::new(resolver),
        }
    }
}
