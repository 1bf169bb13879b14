use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::operations::query::PointOnFace;
use crate::topology::{FaceId, TopologyStore};

/// A dense, row-major grid of 3D points sampled over a parametric square.
///
/// Row index `i` follows the U direction, column index `j` the V direction.
#[derive(Debug, Clone)]
pub struct PointGrid {
    u_count: usize,
    v_count: usize,
    points: Vec<Point3>,
}

impl PointGrid {
    /// Number of samples in the U direction.
    #[must_use]
    pub fn u_count(&self) -> usize {
        self.u_count
    }

    /// Number of samples in the V direction.
    #[must_use]
    pub fn v_count(&self) -> usize {
        self.v_count
    }

    /// Returns the point at grid position `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= u_count` or `j >= v_count`.
    #[must_use]
    pub fn at(&self, i: usize, j: usize) -> &Point3 {
        assert!(i < self.u_count && j < self.v_count, "grid index out of range");
        &self.points[i * self.v_count + j]
    }

    /// All points in row-major order.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }
}

/// Samples the blended mid-surface of two parallel faces.
///
/// Both faces are evaluated on the same uniform normalized grid over
/// `[0, 1]²` (endpoints inclusive, `u_i = i / (n - 1)`), and each grid node
/// of the result is the arithmetic midpoint of the corresponding pair of
/// points. The output is a point grid, not a reconstructed surface.
///
/// The faces must be parallel — sharing an outward normal direction, both
/// pointing away from the material — and parametrized consistently; this is
/// the caller's responsibility and is not checked here.
pub struct ParallelMidsurface {
    lower: FaceId,
    upper: FaceId,
    u_samples: usize,
    v_samples: usize,
}

impl ParallelMidsurface {
    /// Creates a new mid-surface sampling between `lower` and `upper`.
    #[must_use]
    pub fn new(lower: FaceId, upper: FaceId, u_samples: usize, v_samples: usize) -> Self {
        Self {
            lower,
            upper,
            u_samples,
            v_samples,
        }
    }

    /// Executes the sampling, returning the midpoint grid.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two samples are requested in either
    /// direction, a face is not found, or surface evaluation fails.
    pub fn execute(&self, store: &TopologyStore) -> Result<PointGrid> {
        if self.u_samples < 2 || self.v_samples < 2 {
            return Err(OperationError::InvalidInput(
                "mid-surface sampling needs at least two samples per direction".into(),
            )
            .into());
        }

        let mut points = Vec::with_capacity(self.u_samples * self.v_samples);
        for i in 0..self.u_samples {
            let u = i as f64 / (self.u_samples - 1) as f64;
            for j in 0..self.v_samples {
                let v = j as f64 / (self.v_samples - 1) as f64;
                let lower = PointOnFace::new(self.lower, u, v).execute(store)?;
                let upper = PointOnFace::new(self.upper, u, v).execute(store)?;
                points.push(Point3::from((lower.coords + upper.coords) / 2.0));
            }
        }

        Ok(PointGrid {
            u_count: self.u_samples,
            v_count: self.v_samples,
            points,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::surface::{Cylinder, Plane, SurfaceDomain};
    use crate::math::{Point3, Vector3};
    use crate::topology::{FaceData, FaceSurface};
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn flat_face(store: &mut TopologyStore, z: f64) -> FaceId {
        let plane = Plane::new(Point3::new(0.0, 0.0, z), Vector3::x(), Vector3::y()).unwrap();
        store.add_face(
            FaceData::new(
                FaceSurface::Plane(plane),
                SurfaceDomain::new(0.0, 1.0, 0.0, 1.0),
                true,
            )
            .unwrap(),
        )
    }

    #[test]
    fn midsurface_of_flat_walls_lies_halfway() {
        let mut store = TopologyStore::new();
        let lower = flat_face(&mut store, 0.0);
        let upper = flat_face(&mut store, 2.0);

        let grid = ParallelMidsurface::new(lower, upper, 3, 3)
            .execute(&store)
            .unwrap();

        assert_eq!(grid.u_count(), 3);
        assert_eq!(grid.v_count(), 3);
        for i in 0..3 {
            for j in 0..3 {
                let point = grid.at(i, j);
                assert_relative_eq!(point.z, 1.0);
                assert_relative_eq!(point.x, i as f64 / 2.0);
                assert_relative_eq!(point.y, j as f64 / 2.0);
            }
        }
    }

    #[test]
    fn grid_is_row_major() {
        let mut store = TopologyStore::new();
        let lower = flat_face(&mut store, 0.0);
        let upper = flat_face(&mut store, 0.0);

        let grid = ParallelMidsurface::new(lower, upper, 2, 3)
            .execute(&store)
            .unwrap();

        assert_eq!(grid.points().len(), 6);
        // Second row starts at u = 1
        assert_relative_eq!(grid.points()[3].x, 1.0);
        assert_relative_eq!(grid.points()[3].y, 0.0);
        assert_eq!(grid.at(1, 0), &grid.points()[3]);
    }

    #[test]
    fn pipe_walls_average_to_the_mean_radius() {
        let mut store = TopologyStore::new();
        let inner = Cylinder::new(Point3::origin(), 1.0, Vector3::z(), Vector3::x()).unwrap();
        let outer = Cylinder::new(Point3::origin(), 2.0, Vector3::z(), Vector3::x()).unwrap();
        let quarter = SurfaceDomain::new(0.0, FRAC_PI_2, 0.0, 1.0);
        let inner_face = store.add_face(
            FaceData::new(FaceSurface::Cylinder(inner), quarter, true).unwrap(),
        );
        let outer_face = store.add_face(
            FaceData::new(FaceSurface::Cylinder(outer), quarter, true).unwrap(),
        );

        let grid = ParallelMidsurface::new(inner_face, outer_face, 5, 2)
            .execute(&store)
            .unwrap();

        // Matching angles on both walls: midpoints sit at radius 1.5
        for point in grid.points() {
            let radial = (point.x * point.x + point.y * point.y).sqrt();
            assert_relative_eq!(radial, 1.5, max_relative = 1e-12);
        }
    }

    #[test]
    fn too_few_samples_is_rejected() {
        let mut store = TopologyStore::new();
        let lower = flat_face(&mut store, 0.0);
        let upper = flat_face(&mut store, 2.0);

        assert!(ParallelMidsurface::new(lower, upper, 1, 3)
            .execute(&store)
            .is_err());
        assert!(ParallelMidsurface::new(lower, upper, 3, 0)
            .execute(&store)
            .is_err());
    }

    #[test]
    fn missing_face_is_an_error() {
        let mut store = TopologyStore::new();
        let lower = flat_face(&mut store, 0.0);
        let upper = flat_face(&mut store, 2.0);
        store.remove_face(upper);

        assert!(ParallelMidsurface::new(lower, upper, 3, 3)
            .execute(&store)
            .is_err());
    }
}
