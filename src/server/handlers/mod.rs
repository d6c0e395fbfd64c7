pub mod categories;
pub mod google_places;
pub mod stops;
pub mod trips;
