use serde::{Deserialize, Serialize};

use crate::entities::{haversine_distance, Category, Coordinates};

/// A place record as returned by a nearby search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NearbyPlace {
    pub place_id: String,
    pub name: String,
    pub vicinity: Option<String>,
    pub coordinates: Option<Coordinates>,
}

/// A fully resolved place, as returned by a place details lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub place_id: String,
    pub formatted_address: String,
    pub coordinates: Coordinates,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceSuggestion {
    pub place_id: String,
    pub description: String,
}

/// A nearby place annotated for ranking against a trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    pub place_id: String,
    pub name: String,
    pub vicinity: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub category: Category,
    /// Miles from the trip origin.
    pub distance: f64,
}

impl PlaceCandidate {
    pub fn new(place: NearbyPlace, category: Category, origin: &Coordinates) -> Self {
        let distance = place
            .coordinates
            .as_ref()
            .map(|coordinates| haversine_distance(origin, coordinates))
            .unwrap_or(0.0);

        Self {
            place_id: place.place_id,
            name: place.name,
            vicinity: place.vicinity,
            coordinates: place.coordinates,
            category,
            distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_measured_from_origin() {
        let origin = Coordinates::new(42.3601, -71.0589);
        let place = NearbyPlace {
            place_id: "P1".into(),
            name: "Diner".into(),
            vicinity: Some("1 Main St".into()),
            coordinates: Some(Coordinates::new(42.3601, -71.0589)),
        };

        let candidate = PlaceCandidate::new(place, Category::Restaurants, &origin);
        assert_eq!(candidate.distance, 0.0);
        assert_eq!(candidate.category, Category::Restaurants);
    }

    #[test]
    fn missing_location_yields_zero_distance() {
        let origin = Coordinates::new(42.3601, -71.0589);
        let place = NearbyPlace {
            place_id: "P2".into(),
            name: "Nowhere".into(),
            vicinity: None,
            coordinates: None,
        };

        let candidate = PlaceCandidate::new(place, Category::Groceries, &origin);
        assert_eq!(candidate.distance, 0.0);
    }
}
