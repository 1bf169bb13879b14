use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// Computes the unit normal of a linear (mesh) element from its first three
/// node coordinates.
///
/// The normal is the normalized cross product of the edge vectors `p1 - p0`
/// and `p2 - p0`; node order determines its direction (right-hand rule).
///
/// # Errors
///
/// Returns an error if the nodes are coincident or collinear, so that no
/// well-defined normal exists.
pub fn triangle_normal(p0: &Point3, p1: &Point3, p2: &Point3) -> Result<Vector3> {
    let edge1 = p1 - p0;
    let edge2 = p2 - p0;
    let normal = edge1.cross(&edge2);
    let len = normal.norm();
    if len < TOLERANCE {
        return Err(GeometryError::Degenerate(
            "element nodes are coincident or collinear".into(),
        )
        .into());
    }
    Ok(normal / len)
}
