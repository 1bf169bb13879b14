use crate::error::{GeometryError, Result};
use crate::math::Point3;
use crate::topology::{FaceId, TopologyStore};

/// Evaluates a 3D point on a face at normalized parameters.
///
/// `(u, v)` range over `[0, 1]²` and are mapped affinely onto the face's
/// bounded parameter domain, so `(0, 0)` and `(1, 1)` hit the domain corners
/// regardless of the underlying surface parametrization.
pub struct PointOnFace {
    face: FaceId,
    u: f64,
    v: f64,
}

impl PointOnFace {
    /// Creates a new `PointOnFace` query.
    #[must_use]
    pub fn new(face: FaceId, u: f64, v: f64) -> Self {
        Self { face, u, v }
    }

    /// Executes the query, returning the 3D point.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is outside `[0, 1]`, the face is not
    /// found, or surface evaluation fails.
    pub fn execute(&self, store: &TopologyStore) -> Result<Point3> {
        if !(0.0..=1.0).contains(&self.u) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "u",
                value: self.u,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        if !(0.0..=1.0).contains(&self.v) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "v",
                value: self.v,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }

        let face = store.face(self.face)?;
        let (u, v) = face.domain.lerp(self.u, self.v);
        face.surface().evaluate(u, v)
    }
}
