use super::Engine;

use async_trait::async_trait;

use crate::{
    api::PlaceAPI,
    entities::{Coordinates, PlaceDetails, PlaceSuggestion},
    error::Error,
};

#[async_trait]
impl PlaceAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn find_place_suggestions(
        &self,
        input: String,
        session_token: String,
        bias: Option<(Coordinates, f64)>,
    ) -> Result<Vec<PlaceSuggestion>, Error> {
        self.provider
            .find_place_suggestions(input, session_token, bias)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn find_place(
        &self,
        place_id: String,
        session_token: String,
    ) -> Result<PlaceDetails, Error> {
        self.provider.find_place(place_id, session_token).await
    }
}
