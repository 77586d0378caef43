//! Shared application state

use std::sync::Arc;

use crate::{
    config::Config,
    db::{MongoPolicyStore, PolicyStore},
    services::{SearchService, StatsService},
};

/// Process-wide state shared by all request handlers.
///
/// The store handle is established once at startup and reused by every
/// concurrent request; all access through it is read-only.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub search_service: Arc<SearchService>,
    pub stats_service: Arc<StatsService>,
}

impl AppState {
    /// Connect to the configured MongoDB deployment and build the services.
    pub async fn new(config: Config) -> crate::Result<Self> {
        let store = Arc::new(MongoPolicyStore::connect(&config.database).await?);
        Ok(Self::with_store(config, store))
    }

    /// Build state over an explicit store. Tests substitute the in-memory
    /// implementation here.
    pub fn with_store(config: Config, store: Arc<dyn PolicyStore>) -> Self {
        Self {
            config: Arc::new(config),
            search_service: Arc::new(SearchService::new(store.clone())),
            stats_service: Arc::new(StatsService::new(store)),
        }
    }
}
