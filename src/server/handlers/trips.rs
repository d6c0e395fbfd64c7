use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Category, LocationSource, Trip};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct UpdateLocationParams {
    source: LocationSource,
}

#[derive(Serialize, Deserialize)]
pub struct UpdateCategoriesParams {
    categories: Vec<Category>,
}

pub async fn create(Extension(api): Extension<DynAPI>) -> Result<Json<Trip>, Error> {
    let trip = api.create_trip().await?;

    Ok(trip.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Trip>, Error> {
    let trip = api.find_trip(id).await?;

    Ok(trip.into())
}

pub async fn update_origin(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(params): Json<UpdateLocationParams>,
) -> Result<Json<Trip>, Error> {
    let trip = api.update_origin(id, params.source).await?;

    Ok(trip.into())
}

pub async fn update_destination(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(params): Json<UpdateLocationParams>,
) -> Result<Json<Trip>, Error> {
    let trip = api.update_destination(id, params.source).await?;

    Ok(trip.into())
}

pub async fn update_categories(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(params): Json<UpdateCategoriesParams>,
) -> Result<Json<Trip>, Error> {
    let trip = api.update_categories(id, params.categories).await?;

    Ok(trip.into())
}

pub async fn toggle_category(
    Extension(api): Extension<DynAPI>,
    Path((id, category)): Path<(Uuid, String)>,
) -> Result<Json<Trip>, Error> {
    let trip = api.toggle_category(id, category.parse()?).await?;

    Ok(trip.into())
}
