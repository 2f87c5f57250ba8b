use std::sync::Arc;

use crate::assets::{AssetStore, FsAssetStore};
use crate::config::Config;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    /// Pluggable asset backend. Default: FsAssetStore rooted at `ASSETS_DIR`.
    pub assets: Arc<dyn AssetStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let assets = Arc::new(FsAssetStore::new(config.assets_dir.clone()));
        Self::with_assets(config, assets)
    }

    pub fn with_assets(config: Config, assets: Arc<dyn AssetStore>) -> Self {
        let sessions = SessionStore::new(config.session_ttl, config.metrics_seed);
        Self {
            config,
            sessions,
            assets,
        }
    }
}
