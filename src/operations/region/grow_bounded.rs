use tracing::debug;

use crate::error::{OperationError, Result};
use crate::operations::query::{AdjacencyParams, AreNeighbours, MinDistance};
use crate::topology::{FaceId, ShellId, TopologyStore};

use super::borders::{is_border, BorderMatch, Borders};
use super::frontier::{collect_candidates, FloodFill};

/// Radius-bounded region growth for large shells.
///
/// Instead of rescanning every remaining candidate on each step, the
/// traversal grows in passes: candidates within `radius` of the current
/// frontier face are flooded first, then the frontier advances to the next
/// unexplored face adjacent to the grown region (scanning the most recently
/// grown faces first). Faces a pass leaves unreached return to the candidate
/// pool, so the result matches the unbounded traversal whenever every
/// adjacency eventually falls inside some pass's radius — which it does,
/// because touching faces are at distance zero from each other.
pub struct GrowRegionBounded {
    shell: ShellId,
    seed: FaceId,
    radius: f64,
    borders: Borders,
    matching: BorderMatch,
    adjacency: AdjacencyParams,
}

impl GrowRegionBounded {
    /// Creates a new bounded region-growth traversal.
    #[must_use]
    pub fn new(shell: ShellId, seed: FaceId, radius: f64, borders: Borders) -> Self {
        Self {
            shell,
            seed,
            radius,
            borders,
            matching: BorderMatch::default(),
            adjacency: AdjacencyParams::default(),
        }
    }

    /// Overrides how candidates are matched against the border set.
    #[must_use]
    pub fn with_match(mut self, matching: BorderMatch) -> Self {
        self.matching = matching;
        self
    }

    /// Overrides the adjacency parameters.
    #[must_use]
    pub fn with_adjacency(mut self, adjacency: AdjacencyParams) -> Self {
        self.adjacency = adjacency;
        self
    }

    /// Executes the traversal, returning the connected region.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not finite and positive, the border
    /// strategy cannot be resolved, the seed is missing or listed as a
    /// border, a referenced entity is not found, or a geometric query fails.
    pub fn execute(&self, store: &TopologyStore) -> Result<Vec<FaceId>> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(OperationError::InvalidInput(
                "growth radius must be finite and positive".into(),
            )
            .into());
        }
        let borders = self.borders.resolve()?;
        store.face(self.seed)?;
        if is_border(store, self.seed, borders, self.matching)? {
            return Err(OperationError::InvalidInput(
                "seed face is listed as a border face".into(),
            )
            .into());
        }

        let faces = store.shell(self.shell)?.faces.clone();
        let mut candidates =
            collect_candidates(store, &faces, self.seed, borders, self.matching)?;

        let flood = FloodFill::new(store, self.adjacency);
        let mut region: Vec<FaceId> = Vec::new();
        let mut frontier = self.seed;

        loop {
            // Restrict this pass to candidates near the frontier face
            let mut near = Vec::new();
            let mut far = Vec::new();
            for face in std::mem::take(&mut candidates) {
                let distance = MinDistance::new(frontier, face)
                    .with_samples(self.adjacency.samples)
                    .execute(store)?;
                if distance <= self.radius {
                    near.push(face);
                } else {
                    far.push(face);
                }
            }

            let (grown, unreached) = flood.run(frontier, near)?;
            debug!(
                grown = grown.len(),
                remaining = far.len() + unreached.len(),
                "bounded growth pass"
            );
            region.extend(grown);
            candidates = far;
            candidates.extend(unreached);

            // Advance: the first remaining candidate adjacent to the region,
            // newest region faces first
            let mut next = None;
            'scan: for &region_face in region.iter().rev() {
                for (index, &candidate) in candidates.iter().enumerate() {
                    let touches = AreNeighbours::new(region_face, candidate)
                        .with_params(self.adjacency)
                        .execute(store)?;
                    if touches {
                        next = Some(index);
                        break 'scan;
                    }
                }
            }
            match next {
                Some(index) => frontier = candidates.remove(index),
                None => return Ok(region),
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::surface::{Plane, SurfaceDomain};
    use crate::math::{Point3, Vector3};
    use crate::operations::region::GrowRegion;
    use crate::topology::{FaceData, FaceSurface, ShellData};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn patch(
        store: &mut TopologyStore,
        origin: Point3,
        u_dir: Vector3,
        v_dir: Vector3,
    ) -> FaceId {
        let plane = Plane::new(origin, u_dir, v_dir).unwrap();
        store.add_face(
            FaceData::new(
                FaceSurface::Plane(plane),
                SurfaceDomain::new(0.0, 1.0, 0.0, 1.0),
                true,
            )
            .unwrap(),
        )
    }

    fn cube_shell(store: &mut TopologyStore) -> (ShellId, [FaceId; 6]) {
        let faces = [
            patch(store, p(0.0, 0.0, 0.0), Vector3::x(), Vector3::y()),
            patch(store, p(0.0, 0.0, 1.0), Vector3::x(), Vector3::y()),
            patch(store, p(0.0, 0.0, 0.0), Vector3::x(), Vector3::z()),
            patch(store, p(0.0, 1.0, 0.0), Vector3::x(), Vector3::z()),
            patch(store, p(0.0, 0.0, 0.0), Vector3::y(), Vector3::z()),
            patch(store, p(1.0, 0.0, 0.0), Vector3::y(), Vector3::z()),
        ];
        let shell = store.add_shell(ShellData {
            faces: faces.to_vec(),
            is_closed: true,
        });
        (shell, faces)
    }

    /// A strip of squares along x plus one distant face used as border.
    fn strip_shell(store: &mut TopologyStore) -> (ShellId, Vec<FaceId>, FaceId) {
        let strip: Vec<FaceId> = (0..4)
            .map(|i| {
                patch(
                    store,
                    p(f64::from(i), 0.0, 0.0),
                    Vector3::x(),
                    Vector3::y(),
                )
            })
            .collect();
        let rim = patch(store, p(10.0, 0.0, 0.0), Vector3::x(), Vector3::y());
        let mut faces = strip.clone();
        faces.push(rim);
        let shell = store.add_shell(ShellData {
            faces,
            is_closed: false,
        });
        (shell, strip, rim)
    }

    #[test]
    fn generous_radius_matches_unbounded_growth() {
        let mut store = TopologyStore::new();
        let (shell, faces) = cube_shell(&mut store);
        let [bottom, top, ..] = faces;

        let bounded = GrowRegionBounded::new(shell, bottom, 10.0, Borders::Explicit(vec![top]))
            .execute(&store)
            .unwrap();
        let unbounded = GrowRegion::new(shell, bottom, Borders::Explicit(vec![top]))
            .execute(&store)
            .unwrap();

        let mut bounded_sorted = bounded.clone();
        let mut unbounded_sorted = unbounded.clone();
        bounded_sorted.sort();
        unbounded_sorted.sort();
        assert_eq!(bounded_sorted, unbounded_sorted);
    }

    #[test]
    fn growth_crosses_multiple_radius_passes() {
        let mut store = TopologyStore::new();
        let (shell, strip, rim) = strip_shell(&mut store);

        // Radius 1.5 sees two squares ahead at most; the far end of the
        // strip is only reachable after the frontier advances.
        let region =
            GrowRegionBounded::new(shell, strip[0], 1.5, Borders::Explicit(vec![rim]))
                .execute(&store)
                .unwrap();

        assert_eq!(region.len(), 4);
        for face in &strip {
            assert!(region.contains(face));
        }
        assert!(!region.contains(&rim));
    }

    #[test]
    fn tight_radius_still_reaches_the_whole_chain() {
        let mut store = TopologyStore::new();
        let (shell, strip, rim) = strip_shell(&mut store);

        let region =
            GrowRegionBounded::new(shell, strip[0], 0.1, Borders::Explicit(vec![rim]))
                .execute(&store)
                .unwrap();

        assert_eq!(region.len(), 4);
    }

    #[test]
    fn region_faces_are_unique() {
        let mut store = TopologyStore::new();
        let (shell, strip, rim) = strip_shell(&mut store);

        let region =
            GrowRegionBounded::new(shell, strip[0], 1.5, Borders::Explicit(vec![rim]))
                .execute(&store)
                .unwrap();

        for (i, a) in region.iter().enumerate() {
            assert!(!region[i + 1..].contains(a), "face listed twice");
        }
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        let mut store = TopologyStore::new();
        let (shell, faces) = cube_shell(&mut store);
        let [bottom, top, ..] = faces;

        let zero = GrowRegionBounded::new(shell, bottom, 0.0, Borders::Explicit(vec![top]))
            .execute(&store);
        assert!(zero.is_err());
        let nan = GrowRegionBounded::new(shell, bottom, f64::NAN, Borders::Explicit(vec![top]))
            .execute(&store);
        assert!(nan.is_err());
    }

    #[test]
    fn empty_borders_are_rejected() {
        let mut store = TopologyStore::new();
        let (shell, faces) = cube_shell(&mut store);
        let result = GrowRegionBounded::new(shell, faces[0], 1.0, Borders::Explicit(vec![]))
            .execute(&store);
        assert!(result.is_err());
    }
}
