use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

/// A driving route between two addresses, as planned by the routing provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub origin: String,
    pub destination: String,
    pub path: Vec<Coordinates>,
    pub distance_meters: u64,
    pub duration_seconds: u64,
}

impl Route {
    pub fn new(origin: String, destination: String, path: Vec<Coordinates>) -> Self {
        Route {
            origin,
            destination,
            path,
            distance_meters: 0,
            duration_seconds: 0,
        }
    }
}
