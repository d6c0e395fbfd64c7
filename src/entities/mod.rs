mod category;
mod coordinates;
mod location;
mod place;
mod route;
mod stops;
mod trip;

pub use category::{Category, CategoryInfo, DEFAULT_SEARCH_RADIUS, WIDE_SEARCH_RADIUS};
pub use coordinates::{haversine_distance, Coordinates, EARTH_RADIUS_MILES};
pub use location::{Location, LocationSource};
pub use place::{NearbyPlace, PlaceCandidate, PlaceDetails, PlaceSuggestion};
pub use route::Route;
pub use stops::StopList;
pub use trip::{SearchRequest, SearchStatus, Trip};
