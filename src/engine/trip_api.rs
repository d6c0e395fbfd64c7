use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::TripAPI,
    entities::{Category, LocationSource, Trip},
    error::Error,
};

#[async_trait]
impl TripAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_trip(&self) -> Result<Trip, Error> {
        let trip = Trip::new();

        self.trips.lock().await.insert(trip.id, trip.clone());
        tracing::info!(trip_id = %trip.id, "trip created");

        Ok(trip)
    }

    #[tracing::instrument(skip(self))]
    async fn find_trip(&self, id: Uuid) -> Result<Trip, Error> {
        self.with_trip(id, |trip| Ok(trip.clone())).await
    }

    #[tracing::instrument(skip(self))]
    async fn update_origin(&self, id: Uuid, source: LocationSource) -> Result<Trip, Error> {
        self.ensure_trip(id).await?;
        let location = self.resolve_location(source).await?;

        self.with_trip(id, |trip| {
            trip.set_origin(location);
            Ok(trip.clone())
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    async fn update_destination(&self, id: Uuid, source: LocationSource) -> Result<Trip, Error> {
        self.ensure_trip(id).await?;
        let location = self.resolve_location(source).await?;

        self.with_trip(id, |trip| {
            trip.set_destination(location);
            Ok(trip.clone())
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    async fn update_categories(&self, id: Uuid, categories: Vec<Category>) -> Result<Trip, Error> {
        self.with_trip(id, |trip| {
            trip.set_categories(categories);
            Ok(trip.clone())
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    async fn toggle_category(&self, id: Uuid, category: Category) -> Result<Trip, Error> {
        self.with_trip(id, |trip| {
            trip.toggle_category(category);
            Ok(trip.clone())
        })
        .await
    }
}
