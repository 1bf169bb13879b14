use tracing::debug;

use crate::error::{OperationError, Result};
use crate::operations::query::AdjacencyParams;
use crate::topology::{FaceId, ShellData, ShellId, TopologyStore};

use super::borders::{is_border, BorderMatch, Borders};
use super::frontier::{collect_candidates, FloodFill};

/// Source of the candidate faces for a region-growth traversal.
#[derive(Debug, Clone)]
pub enum RegionSource {
    /// Explode a shell from the store.
    Shell(ShellId),
    /// Use an already-exploded face list.
    Faces(Vec<FaceId>),
}

impl From<ShellId> for RegionSource {
    fn from(shell: ShellId) -> Self {
        RegionSource::Shell(shell)
    }
}

impl From<Vec<FaceId>> for RegionSource {
    fn from(faces: Vec<FaceId>) -> Self {
        RegionSource::Faces(faces)
    }
}

/// Extracts the connected face region reachable from a seed face without
/// crossing a border.
///
/// Typical use: picking one wall side of a closed shell — a pipe's inner
/// surface, a tank's outer surface — by seeding on that side and declaring
/// the rim faces as borders.
///
/// The traversal floods outward from the seed over pairwise face adjacency.
/// Every returned face is reachable from the seed through a chain of
/// touching, non-border faces; each face appears at most once; the seed
/// comes first.
pub struct GrowRegion {
    source: RegionSource,
    seed: FaceId,
    borders: Borders,
    matching: BorderMatch,
    adjacency: AdjacencyParams,
}

impl GrowRegion {
    /// Creates a new region-growth traversal.
    #[must_use]
    pub fn new(source: impl Into<RegionSource>, seed: FaceId, borders: Borders) -> Self {
        Self {
            source: source.into(),
            seed,
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
    /// Returns an error if the border strategy cannot be resolved, the seed
    /// is missing or listed as a border, a referenced entity is not found,
    /// or a geometric query fails.
    pub fn execute(&self, store: &TopologyStore) -> Result<Vec<FaceId>> {
        let borders = self.borders.resolve()?;
        store.face(self.seed)?;
        if is_border(store, self.seed, borders, self.matching)? {
            return Err(OperationError::InvalidInput(
                "seed face is listed as a border face".into(),
            )
            .into());
        }

        let faces = match &self.source {
            RegionSource::Shell(shell) => store.shell(*shell)?.faces.clone(),
            RegionSource::Faces(faces) => faces.clone(),
        };
        let candidates = collect_candidates(store, &faces, self.seed, borders, self.matching)?;
        debug!(candidates = candidates.len(), "growing region");

        let (done, _unreached) = FloodFill::new(store, self.adjacency).run(self.seed, candidates)?;
        Ok(done)
    }

    /// Executes the traversal and registers the region as a new open shell.
    ///
    /// # Errors
    ///
    /// Same conditions as [`GrowRegion::execute`].
    pub fn execute_to_shell(&self, store: &mut TopologyStore) -> Result<ShellId> {
        let faces = self.execute(store)?;
        Ok(store.add_shell(ShellData {
            faces,
            is_closed: false,
        }))
    }
}
