use crate::error::Result;
use crate::math::TOLERANCE;
use crate::topology::{FaceId, TopologyStore};

use super::min_distance::{MinDistance, DEFAULT_SAMPLES};

/// Tunable parameters for face-adjacency tests.
#[derive(Debug, Clone, Copy)]
pub struct AdjacencyParams {
    /// Distance at or below which two faces count as touching. A value of
    /// `0.0` demands exact contact; the default is the global [`TOLERANCE`].
    pub tolerance: f64,
    /// Grid resolution per axis for the underlying distance query.
    pub samples: usize,
}

impl Default for AdjacencyParams {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
            samples: DEFAULT_SAMPLES,
        }
    }
}

/// Decides whether two faces are neighbours, i.e. touch along a shared
/// boundary.
///
/// Two faces are neighbours iff they are distinct, both present in the
/// store, and their minimum distance does not exceed the adjacency
/// tolerance. An absent (stale) face is nobody's neighbour: the query
/// answers `false` rather than erroring.
pub struct AreNeighbours {
    face_a: FaceId,
    face_b: FaceId,
    params: AdjacencyParams,
}

impl AreNeighbours {
    /// Creates a new `AreNeighbours` query with default parameters.
    #[must_use]
    pub fn new(face_a: FaceId, face_b: FaceId) -> Self {
        Self {
            face_a,
            face_b,
            params: AdjacencyParams::default(),
        }
    }

    /// Overrides the adjacency parameters.
    #[must_use]
    pub fn with_params(mut self, params: AdjacencyParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error only if surface evaluation fails during the distance
    /// computation; identity and missing-face cases resolve to `Ok(false)`.
    pub fn execute(&self, store: &TopologyStore) -> Result<bool> {
        if self.face_a == self.face_b {
            return Ok(false);
        }
        if !store.contains_face(self.face_a) || !store.contains_face(self.face_b) {
            return Ok(false);
        }
        let distance = MinDistance::new(self.face_a, self.face_b)
            .with_samples(self.params.samples)
            .execute(store)?;
        Ok(distance <= self.params.tolerance)
    }
}
