use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use async_trait::async_trait;

use crate::{
    config::Config,
    entities::{Coordinates, NearbyPlace, PlaceDetails, PlaceSuggestion, Route},
    error::{invalid_input_error, upstream_error, Error},
    external::{AutocompleteProvider, PlacesProvider, RoutingProvider},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct LatLng {
    lat: Option<f64>,
    lng: Option<f64>,
}

impl LatLng {
    fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Place {
    place_id: String,
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct NearbyResult {
    place_id: String,
    name: String,
    vicinity: Option<String>,
    geometry: Option<Geometry>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Polyline {
    points: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Quantity {
    value: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Leg {
    distance: Option<Quantity>,
    duration: Option<Quantity>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct DirectionsRoute {
    overview_polyline: Polyline,
    #[serde(default)]
    legs: Vec<Leg>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response<T> {
    status: String,
    result: Option<T>,
    results: Option<T>,
    predictions: Option<T>,
    routes: Option<T>,
}

/// Client for the Google Maps web services: directions, nearby search,
/// autocomplete and place details.
#[derive(Clone, Debug)]
pub struct GoogleMaps {
    client: Client,
    api_base: String,
    api_key: String,
}

impl GoogleMaps {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_base: config.google_maps_api_base.clone(),
            api_key: config.google_maps_api_key.clone(),
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Response<T>, Error> {
        let url = format!("https://{}/maps/api/{}/json", self.api_base, path);

        let res = self
            .client
            .get(url)
            .query(&[("key", &self.api_key)])
            .query(params)
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if (400..500).contains(&status_code) {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        Ok(res.json().await?)
    }
}

#[async_trait]
impl RoutingProvider for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn find_route(&self, origin: &str, destination: &str) -> Result<Route, Error> {
        let data: Response<Vec<DirectionsRoute>> = self
            .get(
                "directions",
                &[
                    ("origin", origin.to_string()),
                    ("destination", destination.to_string()),
                    ("mode", "driving".to_string()),
                ],
            )
            .await?;

        into_route(data, origin, destination)
    }
}

#[async_trait]
impl PlacesProvider for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn nearby_search(
        &self,
        location: Coordinates,
        radius: f64,
        place_type: &str,
    ) -> Result<Vec<NearbyPlace>, Error> {
        let location: String = location.into();

        let data: Response<Vec<NearbyResult>> = self
            .get(
                "place/nearbysearch",
                &[
                    ("location", location),
                    ("radius", radius.to_string()),
                    ("type", place_type.to_string()),
                ],
            )
            .await?;

        into_nearby_places(data)
    }
}

#[async_trait]
impl AutocompleteProvider for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn find_place_suggestions(
        &self,
        input: String,
        session_token: String,
        bias: Option<(Coordinates, f64)>,
    ) -> Result<Vec<PlaceSuggestion>, Error> {
        let mut params = vec![("input", input), ("sessiontoken", session_token)];
        if let Some((location, radius)) = bias {
            params.push(("location", location.into()));
            params.push(("radius", radius.to_string()));
        }

        let data: Response<Vec<PlaceSuggestion>> =
            self.get("place/autocomplete", &params).await?;

        into_place_suggestions(data)
    }

    #[tracing::instrument(skip(self))]
    async fn find_place(
        &self,
        place_id: String,
        session_token: String,
    ) -> Result<PlaceDetails, Error> {
        let data: Response<Place> = self
            .get(
                "place/details",
                &[("place_id", place_id), ("sessiontoken", session_token)],
            )
            .await?;

        into_place_details(data)
    }
}

fn into_route(
    data: Response<Vec<DirectionsRoute>>,
    origin: &str,
    destination: &str,
) -> Result<Route, Error> {
    if data.status != "OK" {
        tracing::warn!(status = %data.status, "directions request not ok");
        return Err(upstream_error());
    }

    let first = data
        .routes
        .and_then(|routes| routes.into_iter().next())
        .ok_or_else(upstream_error)?;

    let path = decode_polyline(&first.overview_polyline.points)?;

    let mut route = Route::new(origin.into(), destination.into(), path);
    for leg in &first.legs {
        route.distance_meters += leg.distance.as_ref().map(|q| q.value).unwrap_or(0);
        route.duration_seconds += leg.duration.as_ref().map(|q| q.value).unwrap_or(0);
    }

    Ok(route)
}

fn into_nearby_places(data: Response<Vec<NearbyResult>>) -> Result<Vec<NearbyPlace>, Error> {
    match data.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" => return Ok(Vec::new()),
        _ => return Err(upstream_error()),
    }

    let results = data.results.ok_or_else(upstream_error)?;

    Ok(results
        .into_iter()
        .map(|result| NearbyPlace {
            coordinates: result.geometry.and_then(|g| g.location.coordinates()),
            place_id: result.place_id,
            name: result.name,
            vicinity: result.vicinity,
        })
        .collect())
}

fn into_place_suggestions(
    data: Response<Vec<PlaceSuggestion>>,
) -> Result<Vec<PlaceSuggestion>, Error> {
    match data.status.as_str() {
        "OK" => Ok(data.predictions.unwrap_or_default()),
        "ZERO_RESULTS" => Ok(Vec::new()),
        _ => {
            tracing::warn!(status = %data.status, "autocomplete request not ok");
            Err(upstream_error())
        }
    }
}

fn into_place_details(data: Response<Place>) -> Result<PlaceDetails, Error> {
    if data.status != "OK" {
        return Err(upstream_error());
    }

    let place = data.result.ok_or_else(upstream_error)?;
    let coordinates = place
        .geometry
        .location
        .coordinates()
        .ok_or_else(upstream_error)?;

    Ok(PlaceDetails {
        place_id: place.place_id,
        formatted_address: place.formatted_address,
        coordinates,
    })
}

/// Decodes a Google encoded polyline (precision 1e5) into coordinates.
pub fn decode_polyline(encoded: &str) -> Result<Vec<Coordinates>, Error> {
    let bytes = encoded.as_bytes();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;
    let mut path = Vec::new();

    while index < bytes.len() {
        lat += next_delta(bytes, &mut index)?;
        lng += next_delta(bytes, &mut index)?;

        path.push(Coordinates::new(lat as f64 / 1e5, lng as f64 / 1e5));
    }

    Ok(path)
}

fn next_delta(bytes: &[u8], index: &mut usize) -> Result<i64, Error> {
    let mut result: i64 = 0;
    let mut shift = 0;

    loop {
        let byte = *bytes.get(*index).ok_or_else(upstream_error)?;
        *index += 1;

        if byte < 63 || shift > 60 {
            return Err(upstream_error());
        }

        let chunk = (byte - 63) as i64;
        result |= (chunk & 0x1f) << shift;
        shift += 5;

        if chunk < 0x20 {
            break;
        }
    }

    if result & 1 == 1 {
        Ok(!(result >> 1))
    } else {
        Ok(result >> 1)
    }
}
