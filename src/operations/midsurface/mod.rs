mod parallel;

pub use parallel::{ParallelMidsurface, PointGrid};
