use crate::error::Result;
use crate::math::Vector3;
use crate::topology::{FaceId, TopologyStore};

/// Computes the outward unit normal of a face.
///
/// The normal is evaluated at the parametric midpoint of the face domain (a
/// representative sample; exact everywhere for planes, local for curved
/// faces) and negated when the face opposes its surface orientation.
pub struct FaceNormal {
    face: FaceId,
}

impl FaceNormal {
    /// Creates a new `FaceNormal` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the query, returning the unit outward normal.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is not found or the surface normal is
    /// degenerate at the sample point.
    pub fn execute(&self, store: &TopologyStore) -> Result<Vector3> {
        let face = store.face(self.face)?;
        let (u, v) = face.domain.midpoint();
        let normal = face.surface().normal(u, v)?;
        Ok(if face.same_sense { normal } else { -normal })
    }
}
