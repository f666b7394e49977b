pub mod distance;

pub use distance::{ConstraintSet, DistanceConstraint};
