use axum::extract::{Extension, Json, Path, Query};
use serde::{Deserialize, Serialize};

use crate::{
    entities::{Coordinates, PlaceDetails, PlaceSuggestion},
    error::Error,
    server::DynAPI,
};

#[derive(Serialize, Deserialize)]
pub struct SuggestionParams {
    input: String,
    session_token: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    radius: Option<f64>,
}

#[derive(Serialize, Deserialize)]
pub struct FindParams {
    session_token: String,
}

pub async fn find_suggestions(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<SuggestionParams>,
) -> Result<Json<Vec<PlaceSuggestion>>, Error> {
    let bias = match (params.latitude, params.longitude, params.radius) {
        (Some(latitude), Some(longitude), Some(radius)) => {
            Some((Coordinates::new(latitude, longitude), radius))
        }
        _ => None,
    };

    let data = api
        .find_place_suggestions(params.input, params.session_token, bias)
        .await?;

    Ok(data.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<String>,
    Query(params): Query<FindParams>,
) -> Result<Json<PlaceDetails>, Error> {
    let place = api.find_place(id, params.session_token).await?;

    Ok(place.into())
}
