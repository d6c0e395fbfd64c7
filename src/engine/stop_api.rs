use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::{StopAPI, TripAPI},
    entities::Trip,
    error::{invalid_input_error, Error},
    search::{find_stops_along_route, sample_route},
};

#[async_trait]
impl StopAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn search_stops(&self, id: Uuid) -> Result<Trip, Error> {
        let request = match self.with_trip(id, |trip| Ok(trip.begin_search())).await? {
            Some(request) => request,
            None => return self.find_trip(id).await,
        };

        let route = match self
            .provider
            .find_route(&request.origin.query(), &request.destination.query())
            .await
        {
            Ok(route) => route,
            Err(err) => {
                tracing::warn!(error = %err, "routing failed, search dropped");
                return self
                    .with_trip(id, |trip| {
                        trip.abandon_search(request.generation);
                        Ok(trip.clone())
                    })
                    .await;
            }
        };

        let samples = sample_route(&route.path, self.settings.sample_stride);
        let suggestions = find_stops_along_route(
            &*self.provider,
            &samples,
            &request.categories,
            &request.origin.coordinates,
            &self.settings,
        )
        .await;

        let found = suggestions.as_ref().map(Vec::len);

        self.with_trip(id, |trip| {
            if trip.complete_search(request.generation, route, suggestions) {
                tracing::info!(
                    generation = request.generation,
                    samples = samples.len(),
                    suggestions = ?found,
                    "search committed"
                );
            }

            Ok(trip.clone())
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    async fn add_stop(&self, id: Uuid, place_id: String) -> Result<Trip, Error> {
        self.with_trip(id, |trip| {
            if trip.added_stops.contains(&place_id) {
                return Ok(trip.clone());
            }

            let candidate = trip
                .suggestion(&place_id)
                .cloned()
                .ok_or_else(invalid_input_error)?;
            trip.add_stop(candidate);

            Ok(trip.clone())
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    async fn remove_stop(&self, id: Uuid, place_id: String) -> Result<Trip, Error> {
        self.with_trip(id, |trip| {
            trip.remove_stop(&place_id);
            Ok(trip.clone())
        })
        .await
    }
}
