use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Category, Location, PlaceCandidate, Route, StopList};

/// A trip being planned: endpoints, what to look for, and the stops found.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub origin: Option<Location>,
    pub destination: Option<Location>,
    pub categories: BTreeSet<Category>,
    pub route: Option<Route>,
    pub suggested_stops: Vec<PlaceCandidate>,
    pub added_stops: StopList,
    pub search: SearchStatus,
    generation: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum SearchStatus {
    Idle,
    Pending {
        generation: u64,
        started_at: DateTime<Utc>,
    },
    Completed {
        generation: u64,
        completed_at: DateTime<Utc>,
    },
}

impl SearchStatus {
    pub fn name(&self) -> String {
        match self {
            Self::Idle => "idle".into(),
            Self::Pending { .. } => "pending".into(),
            Self::Completed { .. } => "completed".into(),
        }
    }
}

/// Snapshot of a trip taken when a search starts.
#[derive(Clone, Debug)]
pub struct SearchRequest {
    pub trip_id: Uuid,
    pub generation: u64,
    pub origin: Location,
    pub destination: Location,
    pub categories: Vec<Category>,
}

impl Trip {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            origin: None,
            destination: None,
            categories: BTreeSet::new(),
            route: None,
            suggested_stops: Vec::new(),
            added_stops: StopList::new(),
            search: SearchStatus::Idle,
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_origin(&mut self, location: Location) {
        self.origin = Some(location);
    }

    pub fn set_destination(&mut self, location: Location) {
        self.destination = Some(location);
    }

    /// Flips a category in or out of the selection. Returns whether it is now selected.
    pub fn toggle_category(&mut self, category: Category) -> bool {
        if self.categories.remove(&category) {
            return false;
        }

        self.categories.insert(category);
        true
    }

    pub fn set_categories<I: IntoIterator<Item = Category>>(&mut self, categories: I) {
        self.categories = categories.into_iter().collect();
    }

    /// Starts a new search generation, superseding any search in flight.
    /// Returns `None` without touching the trip when an endpoint is missing.
    #[tracing::instrument(skip(self), fields(trip_id = %self.id))]
    pub fn begin_search(&mut self) -> Option<SearchRequest> {
        let (origin, destination) = match (&self.origin, &self.destination) {
            (Some(origin), Some(destination)) => (origin.clone(), destination.clone()),
            _ => {
                tracing::debug!("search skipped, origin or destination not set");
                return None;
            }
        };

        self.generation += 1;
        self.search = SearchStatus::Pending {
            generation: self.generation,
            started_at: Utc::now(),
        };

        Some(SearchRequest {
            trip_id: self.id,
            generation: self.generation,
            origin,
            destination,
            categories: self.categories.iter().copied().collect(),
        })
    }

    /// Commits the outcome of a search. Results from a superseded generation
    /// are discarded. `None` suggestions leave the previous list in place.
    #[tracing::instrument(skip(self, route, suggestions), fields(trip_id = %self.id))]
    pub fn complete_search(
        &mut self,
        generation: u64,
        route: Route,
        suggestions: Option<Vec<PlaceCandidate>>,
    ) -> bool {
        if generation != self.generation {
            tracing::warn!(
                latest = self.generation,
                "discarding results of superseded search"
            );
            return false;
        }

        self.route = Some(route);
        if let Some(suggestions) = suggestions {
            self.suggested_stops = suggestions;
        }

        self.search = SearchStatus::Completed {
            generation,
            completed_at: Utc::now(),
        };

        true
    }

    /// Marks a failed search as settled so the trip does not look pending forever.
    pub fn abandon_search(&mut self, generation: u64) {
        if generation == self.generation {
            self.search = SearchStatus::Idle;
        }
    }

    pub fn suggestion(&self, place_id: &str) -> Option<&PlaceCandidate> {
        self.suggested_stops
            .iter()
            .find(|candidate| candidate.place_id == place_id)
    }

    pub fn add_stop(&mut self, candidate: PlaceCandidate) -> bool {
        self.added_stops.add(candidate)
    }

    pub fn remove_stop(&mut self, place_id: &str) -> bool {
        self.added_stops.remove(place_id)
    }
}

impl Default for Trip {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Coordinates;

    fn boston() -> Location {
        Location::new(Coordinates::new(42.3601, -71.0589), "Boston, MA".into())
    }

    fn portland() -> Location {
        Location::new(Coordinates::new(43.6591, -70.2568), "Portland, ME".into())
    }

    fn route() -> Route {
        Route::new("Boston, MA".into(), "Portland, ME".into(), vec![])
    }

    fn candidate(place_id: &str, distance: f64) -> PlaceCandidate {
        PlaceCandidate {
            place_id: place_id.into(),
            name: place_id.into(),
            vicinity: None,
            coordinates: None,
            category: Category::Restaurants,
            distance,
        }
    }

    fn planned_trip() -> Trip {
        let mut trip = Trip::new();
        trip.set_origin(boston());
        trip.set_destination(portland());
        trip
    }

    #[test]
    fn search_without_endpoints_is_skipped() {
        let mut trip = Trip::new();
        trip.set_origin(boston());

        assert!(trip.begin_search().is_none());
        assert_eq!(trip.generation(), 0);
        assert_eq!(trip.search, SearchStatus::Idle);
    }

    #[test]
    fn search_snapshots_selection() {
        let mut trip = planned_trip();
        trip.toggle_category(Category::Restaurants);
        trip.toggle_category(Category::GasStations);

        let request = trip.begin_search().unwrap();
        assert_eq!(request.generation, 1);
        assert_eq!(request.origin, boston());
        assert_eq!(
            request.categories,
            vec![Category::GasStations, Category::Restaurants]
        );
        assert_eq!(trip.search.name(), "pending");
    }

    #[test]
    fn toggle_flips_membership() {
        let mut trip = Trip::new();

        assert!(trip.toggle_category(Category::Groceries));
        assert!(trip.categories.contains(&Category::Groceries));
        assert!(!trip.toggle_category(Category::Groceries));
        assert!(trip.categories.is_empty());
    }

    #[test]
    fn superseded_results_are_discarded() {
        let mut trip = planned_trip();
        let first = trip.begin_search().unwrap();
        let second = trip.begin_search().unwrap();

        assert!(trip.complete_search(second.generation, route(), Some(vec![candidate("NEW", 1.0)])));
        assert!(!trip.complete_search(first.generation, route(), Some(vec![candidate("OLD", 1.0)])));

        assert_eq!(trip.suggested_stops.len(), 1);
        assert_eq!(trip.suggested_stops[0].place_id, "NEW");
    }

    #[test]
    fn empty_outcome_keeps_previous_suggestions() {
        let mut trip = planned_trip();

        let request = trip.begin_search().unwrap();
        trip.complete_search(request.generation, route(), Some(vec![candidate("P1", 1.0)]));

        let request = trip.begin_search().unwrap();
        assert!(trip.complete_search(request.generation, route(), None));

        assert_eq!(trip.suggested_stops, vec![candidate("P1", 1.0)]);
        assert_eq!(trip.search.name(), "completed");
    }

    #[test]
    fn abandoned_search_returns_to_idle() {
        let mut trip = planned_trip();
        let request = trip.begin_search().unwrap();

        trip.abandon_search(request.generation);
        assert_eq!(trip.search, SearchStatus::Idle);
    }

    #[test]
    fn stops_are_keyed_by_place_id() {
        let mut trip = Trip::new();

        assert!(trip.add_stop(candidate("P1", 2.0)));
        assert!(!trip.add_stop(candidate("P1", 2.0)));
        assert!(!trip.remove_stop("P2"));
        assert!(trip.remove_stop("P1"));
        assert!(trip.added_stops.is_empty());
    }
}
