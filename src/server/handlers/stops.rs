use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Trip;
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct AddParams {
    place_id: String,
}

pub async fn search(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Trip>, Error> {
    let trip = api.search_stops(id).await?;

    Ok(trip.into())
}

pub async fn add(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(params): Json<AddParams>,
) -> Result<Json<Trip>, Error> {
    let trip = api.add_stop(id, params.place_id).await?;

    Ok(trip.into())
}

pub async fn remove(
    Extension(api): Extension<DynAPI>,
    Path((id, place_id)): Path<(Uuid, String)>,
) -> Result<Json<Trip>, Error> {
    let trip = api.remove_stop(id, place_id).await?;

    Ok(trip.into())
}
