use tracing::trace;

use crate::error::Result;
use crate::operations::query::{AdjacencyParams, AreNeighbours};
use crate::topology::{FaceId, TopologyStore};

use super::borders::{is_border, BorderMatch};

/// Worklist-based flood fill over the face-adjacency graph.
///
/// Candidate faces are consumed through index-based liveness flags; a face
/// can be discovered at most once, which bounds the traversal by the
/// candidate count and breaks adjacency cycles. Expansion order is LIFO
/// (depth-first); membership of the result is the adjacency closure and does
/// not depend on that order.
pub(crate) struct FloodFill<'a> {
    store: &'a TopologyStore,
    params: AdjacencyParams,
}

impl<'a> FloodFill<'a> {
    pub(crate) fn new(store: &'a TopologyStore, params: AdjacencyParams) -> Self {
        Self { store, params }
    }

    /// Grows from `seed` through `candidates`.
    ///
    /// Returns the connected region in discovery order (seed first) and the
    /// candidates left unreached.
    pub(crate) fn run(
        &self,
        seed: FaceId,
        candidates: Vec<FaceId>,
    ) -> Result<(Vec<FaceId>, Vec<FaceId>)> {
        let mut alive = vec![true; candidates.len()];
        let mut worklist = vec![seed];
        let mut done: Vec<FaceId> = Vec::new();

        while let Some(face) = worklist.pop() {
            for (index, &candidate) in candidates.iter().enumerate() {
                if !alive[index] {
                    continue;
                }
                let touches = AreNeighbours::new(face, candidate)
                    .with_params(self.params)
                    .execute(self.store)?;
                if touches {
                    alive[index] = false;
                    worklist.push(candidate);
                }
            }
            done.push(face);
            trace!(marked = worklist.len(), done = done.len(), "expanded face");
        }

        let unreached = candidates
            .into_iter()
            .zip(alive)
            .filter_map(|(face, live)| live.then_some(face))
            .collect();
        Ok((done, unreached))
    }
}

/// Builds the candidate list for a traversal: the given faces minus the
/// seed, the borders, and any repeated entries.
pub(crate) fn collect_candidates(
    store: &TopologyStore,
    faces: &[FaceId],
    seed: FaceId,
    borders: &[FaceId],
    matching: BorderMatch,
) -> Result<Vec<FaceId>> {
    let mut candidates = Vec::with_capacity(faces.len());
    for &face in faces {
        if face == seed || candidates.contains(&face) {
            continue;
        }
        if is_border(store, face, borders, matching)? {
            continue;
        }
        candidates.push(face);
    }
    Ok(candidates)
}
