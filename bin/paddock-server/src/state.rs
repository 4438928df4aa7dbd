//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use paddock_store::{EntityKind, Events, ListingRepo, Races};

use crate::config::Config;

/// State for one listing service.
#[derive(Debug)]
pub struct AppState<K: EntityKind> {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Read-only repository for the service's entity kind.
    pub repo: Arc<ListingRepo<K>>,
}

impl<K: EntityKind> AppState<K> {
    pub fn new(config: Config, repo: ListingRepo<K>) -> Self {
        Self {
            config: Arc::new(config),
            repo: Arc::new(repo),
        }
    }
}

pub type RacingState = AppState<Races>;
pub type SportsState = AppState<Events>;
