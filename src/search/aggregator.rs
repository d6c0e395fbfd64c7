use std::collections::HashSet;

use futures::stream::{self, StreamExt};
use tokio::time::timeout;

use crate::{
    config::SearchSettings,
    entities::{Category, Coordinates, PlaceCandidate},
    error::{timeout_error, Error},
    external::PlacesProvider,
};

/// Queries the places provider once per sample point and category and merges
/// the answers into a ranked suggestion list.
///
/// Returns `None` when there is nothing to query, so callers can keep
/// whatever suggestions they already hold. Sub-queries that fail or time out
/// are dropped.
#[tracing::instrument(skip_all, fields(samples = samples.len(), categories = categories.len()))]
pub async fn find_stops_along_route<P>(
    provider: &P,
    samples: &[Coordinates],
    categories: &[Category],
    origin: &Coordinates,
    settings: &SearchSettings,
) -> Option<Vec<PlaceCandidate>>
where
    P: PlacesProvider + Sync + ?Sized,
{
    if samples.is_empty() || categories.is_empty() {
        return None;
    }

    let queries: Vec<(Coordinates, Category)> = samples
        .iter()
        .flat_map(|point| categories.iter().map(move |category| (*point, *category)))
        .collect();

    let responses: Vec<Vec<PlaceCandidate>> = stream::iter(queries)
        .map(|(point, category)| query(provider, point, category, origin, settings))
        .buffered(settings.max_concurrent_queries.max(1))
        .collect()
        .await;

    Some(merge_candidates(responses))
}

async fn query<P>(
    provider: &P,
    point: Coordinates,
    category: Category,
    origin: &Coordinates,
    settings: &SearchSettings,
) -> Vec<PlaceCandidate>
where
    P: PlacesProvider + Sync + ?Sized,
{
    let request = provider.nearby_search(point, category.search_radius(), category.place_type());

    let result: Result<_, Error> = match timeout(settings.query_timeout, request).await {
        Ok(result) => result,
        Err(_) => Err(timeout_error()),
    };

    match result {
        Ok(places) => places
            .into_iter()
            .map(|place| PlaceCandidate::new(place, category, origin))
            .collect(),
        Err(err) => {
            tracing::warn!(
                place_type = category.place_type(),
                latitude = point.latitude,
                longitude = point.longitude,
                "dropping nearby search: {}",
                err
            );
            Vec::new()
        }
    }
}

/// Flattens responses in order, keeps the first candidate seen for each place
/// id and sorts by distance from the origin. Ties keep their merge order.
pub fn merge_candidates<I>(responses: I) -> Vec<PlaceCandidate>
where
    I: IntoIterator<Item = Vec<PlaceCandidate>>,
{
    let mut seen = HashSet::new();

    let mut unique: Vec<PlaceCandidate> = responses
        .into_iter()
        .flatten()
        .filter(|candidate| seen.insert(candidate.place_id.clone()))
        .collect();

    unique.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    unique
}
