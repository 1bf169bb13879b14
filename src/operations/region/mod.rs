mod borders;
mod frontier;
mod grow;
mod grow_bounded;

pub use borders::{BorderMatch, Borders};
pub use grow::{GrowRegion, RegionSource};
pub use grow_bounded::GrowRegionBounded;
