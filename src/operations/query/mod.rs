mod face_normal;
mod min_distance;
mod neighbours;
mod point_on_face;

pub use face_normal::FaceNormal;
pub use min_distance::{MinDistance, DEFAULT_SAMPLES};
pub use neighbours::{AdjacencyParams, AreNeighbours};
pub use point_on_face::PointOnFace;
