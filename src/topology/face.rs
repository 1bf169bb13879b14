use crate::error::{GeometryError, Result};
use crate::geometry::surface::{Cylinder, Plane, Sphere, SurfaceDomain};
use crate::math::TOLERANCE;

slotmap::new_key_type! {
    /// Unique identifier for a face in the topology store.
    pub struct FaceId;
}

/// The geometric surface associated with a face.
#[derive(Debug, Clone)]
pub enum FaceSurface {
    /// A planar surface.
    Plane(Plane),
    /// A cylindrical surface.
    Cylinder(Cylinder),
    /// A spherical surface.
    Sphere(Sphere),
}

/// Data associated with a topological face.
///
/// A face is a bounded patch on a surface, trimmed to a rectangular region
/// of the surface's parameter space.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// The geometric surface on which this face lies.
    pub surface: FaceSurface,
    /// The bounded parameter region the face occupies on its surface.
    pub domain: SurfaceDomain,
    /// If `true`, the face normal agrees with the surface normal.
    pub same_sense: bool,
}

impl FaceData {
    /// Creates a new face on the given surface, trimmed to `domain`.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain is unbounded or degenerate (zero
    /// parametric area): such a face has no well-defined extent and would
    /// poison every downstream query, so it is rejected up front.
    pub fn new(surface: FaceSurface, domain: SurfaceDomain, same_sense: bool) -> Result<Self> {
        if !domain.is_bounded() {
            return Err(
                GeometryError::Degenerate("face domain must be bounded".into()).into(),
            );
        }
        if domain.u_max - domain.u_min < TOLERANCE || domain.v_max - domain.v_min < TOLERANCE {
            return Err(
                GeometryError::Degenerate("face domain has zero parametric area".into()).into(),
            );
        }
        Ok(Self {
            surface,
            domain,
            same_sense,
        })
    }

    /// Returns the underlying surface as a trait object.
    #[must_use]
    pub fn surface(&self) -> &dyn crate::geometry::surface::Surface {
        match &self.surface {
            FaceSurface::Plane(plane) => plane,
            FaceSurface::Cylinder(cylinder) => cylinder,
            FaceSurface::Sphere(sphere) => sphere,
        }
    }
}
