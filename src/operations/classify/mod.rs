mod turned_away;

pub use turned_away::{NormalFrame, TurnedAwayFaces};
