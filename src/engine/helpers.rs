use super::Engine;

use uuid::Uuid;

use crate::{
    entities::{Location, LocationSource, Trip},
    error::{invalid_input_error, not_found_error, Error},
};

impl Engine {
    /// Runs `f` against the stored trip while holding the table lock.
    /// Never call into the provider from `f`.
    pub(super) async fn with_trip<F, R>(&self, id: Uuid, f: F) -> Result<R, Error>
    where
        F: FnOnce(&mut Trip) -> Result<R, Error>,
    {
        let mut trips = self.trips.lock().await;
        let trip = trips.get_mut(&id).ok_or_else(not_found_error)?;

        f(trip)
    }

    pub(super) async fn ensure_trip(&self, id: Uuid) -> Result<(), Error> {
        self.with_trip(id, |_| Ok(())).await
    }

    #[tracing::instrument(skip(self))]
    pub(super) async fn resolve_location(&self, source: LocationSource) -> Result<Location, Error> {
        match source {
            LocationSource::Coordinates(coordinates) => {
                if !coordinates.is_valid() {
                    return Err(invalid_input_error());
                }

                Ok(Location::new(coordinates, "".into()))
            }
            LocationSource::GooglePlaces {
                place_id,
                session_token,
            } => {
                let place = self.provider.find_place(place_id, session_token).await?;
                Ok(place.into())
            }
        }
    }
}
