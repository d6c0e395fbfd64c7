mod helpers;
mod place_api;
mod stop_api;
mod trip_api;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{api::API, config::SearchSettings, entities::Trip, external::MapsProvider};

pub type DynProvider = Arc<dyn MapsProvider + Send + Sync>;

/// Trip planner backed by an in-memory trip table and a maps provider.
pub struct Engine {
    provider: DynProvider,
    trips: Mutex<HashMap<Uuid, Trip>>,
    settings: SearchSettings,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip(provider))]
    pub fn new(provider: DynProvider, settings: SearchSettings) -> Self {
        Self {
            provider,
            trips: Mutex::new(HashMap::new()),
            settings,
        }
    }
}

impl API for Engine {}
