use crate::error::{Capability, OperationError, Result};
use crate::geometry::surface::Plane;
use crate::operations::query::FaceNormal;
use crate::topology::{FaceId, ShellId, TopologyStore};

/// Coordinate frame in which face normals are compared against the plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NormalFrame {
    /// Compare normals in global coordinates.
    #[default]
    Global,
    /// Compare normals in a face-local coordinate system. No strategy is
    /// implemented for this frame; requesting it fails with a tagged
    /// unsupported-capability error.
    Local,
}

/// Partitions a shell's faces by normal direction relative to a plane.
///
/// A face is turned away from the plane iff the inner product of its outward
/// normal with the plane normal is non-negative — strictly positive in
/// strict mode, which excludes faces tangential to the plane. With
/// `toward_plane` set, the plane normal is negated first, selecting the
/// faces that look into the plane instead.
pub struct TurnedAwayFaces {
    shell: ShellId,
    plane: Plane,
    toward_plane: bool,
    strict: bool,
    frame: NormalFrame,
}

impl TurnedAwayFaces {
    /// Creates a new classification over the faces of `shell`.
    #[must_use]
    pub fn new(shell: ShellId, plane: Plane, toward_plane: bool, strict: bool) -> Self {
        Self {
            shell,
            plane,
            toward_plane,
            strict,
            frame: NormalFrame::default(),
        }
    }

    /// Overrides the comparison frame.
    #[must_use]
    pub fn with_frame(mut self, frame: NormalFrame) -> Self {
        self.frame = frame;
        self
    }

    /// Executes the classification, returning the kept faces in shell order.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame is unsupported, the shell is not found,
    /// or a face normal cannot be computed (degenerate faces fail fast
    /// rather than classify arbitrarily).
    pub fn execute(&self, store: &TopologyStore) -> Result<Vec<FaceId>> {
        if self.frame == NormalFrame::Local {
            return Err(
                OperationError::Unsupported(Capability::LocalFrameClassification).into(),
            );
        }

        let reference = if self.toward_plane {
            -self.plane.plane_normal()
        } else {
            *self.plane.plane_normal()
        };

        let faces = store.shell(self.shell)?.faces.clone();
        let mut kept = Vec::new();
        for face in faces {
            let alignment = FaceNormal::new(face).execute(store)?.dot(&reference);
            let turned_away = if self.strict {
                alignment > 0.0
            } else {
                alignment >= 0.0
            };
            if turned_away {
                kept.push(face);
            }
        }
        Ok(kept)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::surface::{Surface, SurfaceDomain};
    use crate::math::{Point3, Vector3};
    use crate::topology::{FaceData, FaceSurface, ShellData};

    fn oriented_face(store: &mut TopologyStore, normal: Vector3) -> FaceId {
        let plane = Plane::from_normal(Point3::origin(), normal).unwrap();
        store.add_face(
            FaceData::new(
                FaceSurface::Plane(plane),
                SurfaceDomain::new(0.0, 1.0, 0.0, 1.0),
                true,
            )
            .unwrap(),
        )
    }

    /// Shell with faces looking up, down, and sideways.
    fn mixed_shell(store: &mut TopologyStore) -> (ShellId, FaceId, FaceId, FaceId) {
        let up = oriented_face(store, Vector3::z());
        let down = oriented_face(store, -Vector3::z());
        let side = oriented_face(store, Vector3::x());
        let shell = store.add_shell(ShellData {
            faces: vec![up, down, side],
            is_closed: false,
        });
        (shell, up, down, side)
    }

    fn z_plane() -> Plane {
        Plane::from_normal(Point3::origin(), Vector3::z()).unwrap()
    }

    #[test]
    fn aligned_face_kept_in_both_modes() {
        let mut store = TopologyStore::new();
        let disc = oriented_face(&mut store, Vector3::z());
        let shell = store.add_shell(ShellData {
            faces: vec![disc],
            is_closed: false,
        });

        let lax = TurnedAwayFaces::new(shell, z_plane(), false, false)
            .execute(&store)
            .unwrap();
        assert_eq!(lax, vec![disc]);

        let strict = TurnedAwayFaces::new(shell, z_plane(), false, true)
            .execute(&store)
            .unwrap();
        assert_eq!(strict, vec![disc]);
    }

    #[test]
    fn strict_mode_drops_exactly_the_tangential_faces() {
        let mut store = TopologyStore::new();
        let (shell, up, _down, side) = mixed_shell(&mut store);

        let lax = TurnedAwayFaces::new(shell, z_plane(), false, false)
            .execute(&store)
            .unwrap();
        let strict = TurnedAwayFaces::new(shell, z_plane(), false, true)
            .execute(&store)
            .unwrap();

        assert_eq!(lax, vec![up, side]);
        assert_eq!(strict, vec![up]);
        // The strict result is a subset; the difference is the tangential face
        assert!(strict.iter().all(|f| lax.contains(f)));
        let dropped: Vec<_> = lax.iter().filter(|f| !strict.contains(f)).collect();
        assert_eq!(dropped, vec![&side]);
    }

    #[test]
    fn toward_plane_flips_the_selection() {
        let mut store = TopologyStore::new();
        let (shell, _up, down, _side) = mixed_shell(&mut store);

        let toward = TurnedAwayFaces::new(shell, z_plane(), true, true)
            .execute(&store)
            .unwrap();
        assert_eq!(toward, vec![down]);
    }

    #[test]
    fn flipping_the_plane_equals_toward_mode() {
        let mut store = TopologyStore::new();
        let (shell, _, _, _) = mixed_shell(&mut store);

        let toward = TurnedAwayFaces::new(shell, z_plane(), true, false)
            .execute(&store)
            .unwrap();
        let flipped = TurnedAwayFaces::new(shell, z_plane().flipped(), false, false)
            .execute(&store)
            .unwrap();
        assert_eq!(toward, flipped);
    }

    #[test]
    fn classification_is_idempotent() {
        let mut store = TopologyStore::new();
        let (shell, _, _, _) = mixed_shell(&mut store);

        let first = TurnedAwayFaces::new(shell, z_plane(), false, false)
            .execute(&store)
            .unwrap();
        let second = TurnedAwayFaces::new(shell, z_plane(), false, false)
            .execute(&store)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn local_frame_is_unsupported() {
        let mut store = TopologyStore::new();
        let (shell, _, _, _) = mixed_shell(&mut store);

        let result = TurnedAwayFaces::new(shell, z_plane(), false, false)
            .with_frame(NormalFrame::Local)
            .execute(&store);
        assert!(result.is_err());
    }

    #[test]
    fn curved_face_classified_by_representative_normal() {
        let mut store = TopologyStore::new();
        let sphere = crate::geometry::surface::Sphere::new(
            Point3::origin(),
            1.0,
            Vector3::z(),
            Vector3::x(),
        )
        .unwrap();
        // Upper cap: latitudes [pi/4, pi/2); midpoint normal points up-ish
        let cap = store.add_face(
            FaceData::new(
                FaceSurface::Sphere(sphere.clone()),
                SurfaceDomain::new(0.0, std::f64::consts::TAU, 0.8, 1.5),
                true,
            )
            .unwrap(),
        );
        let shell = store.add_shell(ShellData {
            faces: vec![cap],
            is_closed: false,
        });

        let kept = TurnedAwayFaces::new(shell, z_plane(), false, true)
            .execute(&store)
            .unwrap();
        assert_eq!(kept, vec![cap]);

        // Sanity: the representative normal really does tilt upward
        let n = sphere.normal(std::f64::consts::PI, 1.15).unwrap();
        assert!(n.z > 0.0);
    }
}
