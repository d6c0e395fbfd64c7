use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    Category, Coordinates, LocationSource, PlaceDetails, PlaceSuggestion, Trip,
};
use crate::error::Error;

#[async_trait]
pub trait TripAPI {
    async fn create_trip(&self) -> Result<Trip, Error>;
    async fn find_trip(&self, id: Uuid) -> Result<Trip, Error>;
    async fn update_origin(&self, id: Uuid, source: LocationSource) -> Result<Trip, Error>;
    async fn update_destination(&self, id: Uuid, source: LocationSource) -> Result<Trip, Error>;
    async fn update_categories(&self, id: Uuid, categories: Vec<Category>) -> Result<Trip, Error>;
    async fn toggle_category(&self, id: Uuid, category: Category) -> Result<Trip, Error>;
}

#[async_trait]
pub trait StopAPI {
    async fn search_stops(&self, id: Uuid) -> Result<Trip, Error>;
    async fn add_stop(&self, id: Uuid, place_id: String) -> Result<Trip, Error>;
    async fn remove_stop(&self, id: Uuid, place_id: String) -> Result<Trip, Error>;
}

#[async_trait]
pub trait PlaceAPI {
    async fn find_place_suggestions(
        &self,
        input: String,
        session_token: String,
        bias: Option<(Coordinates, f64)>,
    ) -> Result<Vec<PlaceSuggestion>, Error>;

    async fn find_place(&self, place_id: String, session_token: String)
        -> Result<PlaceDetails, Error>;
}

pub trait API: TripAPI + StopAPI + PlaceAPI {}
