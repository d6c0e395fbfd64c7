use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, PlaceDetails};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub description: String,
    pub coordinates: Coordinates,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationSource {
    Coordinates(Coordinates),
    GooglePlaces {
        place_id: String,
        session_token: String,
    },
}

impl Location {
    pub fn new(coordinates: Coordinates, description: String) -> Self {
        Self {
            description,
            coordinates,
        }
    }

    /// Text handed to the routing provider. Falls back to raw coordinates
    /// when no address is known.
    pub fn query(&self) -> String {
        if self.description.is_empty() {
            return self.coordinates.into();
        }

        self.description.clone()
    }
}

impl From<PlaceDetails> for Location {
    fn from(place: PlaceDetails) -> Self {
        Location::new(place.coordinates, place.formatted_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_prefers_address() {
        let location = Location::new(Coordinates::new(1.0, 2.0), "Boston, MA".into());
        assert_eq!(location.query(), "Boston, MA");

        let location = Location::new(Coordinates::new(1.0, 2.0), "".into());
        assert_eq!(location.query(), "1,2");
    }
}
