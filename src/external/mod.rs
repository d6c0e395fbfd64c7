pub mod google_maps;

use async_trait::async_trait;

use crate::entities::{Coordinates, NearbyPlace, PlaceDetails, PlaceSuggestion, Route};
use crate::error::Error;

pub use google_maps::GoogleMaps;

#[async_trait]
pub trait RoutingProvider {
    async fn find_route(&self, origin: &str, destination: &str) -> Result<Route, Error>;
}

#[async_trait]
pub trait PlacesProvider {
    async fn nearby_search(
        &self,
        location: Coordinates,
        radius: f64,
        place_type: &str,
    ) -> Result<Vec<NearbyPlace>, Error>;
}

#[async_trait]
pub trait AutocompleteProvider {
    async fn find_place_suggestions(
        &self,
        input: String,
        session_token: String,
        bias: Option<(Coordinates, f64)>,
    ) -> Result<Vec<PlaceSuggestion>, Error>;

    async fn find_place(&self, place_id: String, session_token: String)
        -> Result<PlaceDetails, Error>;
}

pub trait MapsProvider: RoutingProvider + PlacesProvider + AutocompleteProvider {}

impl<T: RoutingProvider + PlacesProvider + AutocompleteProvider> MapsProvider for T {}
