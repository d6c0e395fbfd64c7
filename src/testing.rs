use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::entities::{Coordinates, NearbyPlace, PlaceDetails, PlaceSuggestion, Route};
use crate::error::{invalid_input_error, upstream_error, Error};
use crate::external::{AutocompleteProvider, PlacesProvider, RoutingProvider};

pub fn place(place_id: &str, latitude: f64, longitude: f64) -> NearbyPlace {
    NearbyPlace {
        place_id: place_id.into(),
        name: format!("{} name", place_id),
        vicinity: Some(format!("{} street", place_id)),
        coordinates: Some(Coordinates::new(latitude, longitude)),
    }
}

/// Scripted maps provider. Nearby answers are keyed by place type and
/// repeated for every sample point.
#[derive(Default)]
pub struct FakeMaps {
    path: Option<Vec<Coordinates>>,
    places: HashMap<String, Result<Vec<NearbyPlace>, Error>>,
    hangs: HashSet<String>,
    gate: Option<(String, watch::Receiver<bool>)>,
    details: HashMap<String, PlaceDetails>,
    calls: Mutex<Vec<(Coordinates, f64, String)>>,
}

impl FakeMaps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: Vec<Coordinates>) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_places(mut self, place_type: &str, places: Vec<NearbyPlace>) -> Self {
        self.places.insert(place_type.into(), Ok(places));
        self
    }

    pub fn with_failure(mut self, place_type: &str, err: Error) -> Self {
        self.places.insert(place_type.into(), Err(err));
        self
    }

    pub fn with_hang(mut self, place_type: &str) -> Self {
        self.hangs.insert(place_type.into());
        self
    }

    /// Holds nearby queries for `place_type` until `open` turns true.
    pub fn with_gate(mut self, place_type: &str, open: watch::Receiver<bool>) -> Self {
        self.gate = Some((place_type.into(), open));
        self
    }

    pub fn with_details(mut self, details: PlaceDetails) -> Self {
        self.details.insert(details.place_id.clone(), details);
        self
    }

    pub fn calls(&self) -> Vec<(Coordinates, f64, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RoutingProvider for FakeMaps {
    async fn find_route(&self, origin: &str, destination: &str) -> Result<Route, Error> {
        let path = self.path.clone().ok_or_else(upstream_error)?;
        Ok(Route::new(origin.into(), destination.into(), path))
    }
}

#[async_trait]
impl PlacesProvider for FakeMaps {
    async fn nearby_search(
        &self,
        location: Coordinates,
        radius: f64,
        place_type: &str,
    ) -> Result<Vec<NearbyPlace>, Error> {
        self.calls
            .lock()
            .unwrap()
            .push((location, radius, place_type.to_string()));

        if self.hangs.contains(place_type) {
            futures::future::pending::<()>().await;
        }

        if let Some((gated, open)) = &self.gate {
            if gated == place_type {
                let mut open = open.clone();
                while !*open.borrow() {
                    if open.changed().await.is_err() {
                        break;
                    }
                }
            }
        }

        self.places
            .get(place_type)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[async_trait]
impl AutocompleteProvider for FakeMaps {
    async fn find_place_suggestions(
        &self,
        input: String,
        _session_token: String,
        _bias: Option<(Coordinates, f64)>,
    ) -> Result<Vec<PlaceSuggestion>, Error> {
        Ok(self
            .details
            .values()
            .filter(|d| d.formatted_address.contains(&input))
            .map(|d| PlaceSuggestion {
                place_id: d.place_id.clone(),
                description: d.formatted_address.clone(),
            })
            .collect())
    }

    async fn find_place(
        &self,
        place_id: String,
        _session_token: String,
    ) -> Result<PlaceDetails, Error> {
        self.details
            .get(&place_id)
            .cloned()
            .ok_or_else(invalid_input_error)
    }
}
