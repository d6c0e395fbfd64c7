use serde::{Deserialize, Serialize};

use crate::entities::PlaceCandidate;

/// Stops the traveller has confirmed, in the order they were added.
/// Holds at most one entry per place id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopList(Vec<PlaceCandidate>);

impl StopList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, place_id: &str) -> bool {
        self.0.iter().any(|stop| stop.place_id == place_id)
    }

    /// Appends the candidate unless one with the same place id is present.
    pub fn add(&mut self, candidate: PlaceCandidate) -> bool {
        if self.contains(&candidate.place_id) {
            return false;
        }

        self.0.push(candidate);
        true
    }

    pub fn remove(&mut self, place_id: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|stop| stop.place_id != place_id);
        self.0.len() != before
    }

    pub fn as_slice(&self) -> &[PlaceCandidate] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
