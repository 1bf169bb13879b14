use crate::error::{Capability, OperationError, Result};
use crate::math::{Point3, TOLERANCE};
use crate::topology::{FaceId, TopologyStore};

/// How the borders of a region-growth traversal are obtained.
#[derive(Debug, Clone)]
pub enum Borders {
    /// The caller names the border faces.
    Explicit(Vec<FaceId>),
    /// Derive the borders from the shell itself. No strategy is implemented
    /// for this; requesting it fails with a tagged unsupported-capability
    /// error.
    Detect,
}

impl Borders {
    /// Resolves the border face list.
    ///
    /// # Errors
    ///
    /// `Detect` is an unsupported capability; an explicit empty list is
    /// invalid input (a traversal without borders would flood the whole
    /// shell).
    pub(crate) fn resolve(&self) -> Result<&[FaceId]> {
        match self {
            Borders::Explicit(faces) if faces.is_empty() => Err(OperationError::InvalidInput(
                "border face list is empty".into(),
            )
            .into()),
            Borders::Explicit(faces) => Ok(faces),
            Borders::Detect => {
                Err(OperationError::Unsupported(Capability::AutomaticBorderDetection).into())
            }
        }
    }
}

/// How candidate faces are matched against the border set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BorderMatch {
    /// By store identity: a candidate is a border iff its ID is in the set.
    #[default]
    Handle,
    /// By geometric coincidence: additionally treats a candidate as a border
    /// when its probe points (domain corners and midpoint) all coincide with
    /// a border face's within [`TOLERANCE`]. Catches the same patch
    /// registered twice under distinct IDs.
    Coincidence,
}

pub(crate) fn is_border(
    store: &TopologyStore,
    candidate: FaceId,
    borders: &[FaceId],
    matching: BorderMatch,
) -> Result<bool> {
    if borders.contains(&candidate) {
        return Ok(true);
    }
    if matching == BorderMatch::Coincidence {
        let probes = probe_points(store, candidate)?;
        for &border in borders {
            if coincides(&probes, &probe_points(store, border)?) {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Sample points characterizing a face: the four domain corners plus the
/// parametric midpoint.
fn probe_points(store: &TopologyStore, face: FaceId) -> Result<[Point3; 5]> {
    let data = store.face(face)?;
    let mut points = [Point3::origin(); 5];
    for (slot, (s, t)) in points.iter_mut().zip([
        (0.0, 0.0),
        (0.0, 1.0),
        (1.0, 0.0),
        (1.0, 1.0),
        (0.5, 0.5),
    ]) {
        let (u, v) = data.domain.lerp(s, t);
        *slot = data.surface().evaluate(u, v)?;
    }
    Ok(points)
}

fn coincides(a: &[Point3; 5], b: &[Point3; 5]) -> bool {
    a.iter().zip(b).all(|(pa, pb)| (pa - pb).norm() < TOLERANCE)
}
