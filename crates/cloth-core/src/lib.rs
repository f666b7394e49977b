//! Tearable cloth simulation.
//!
//! A grid of Verlet particles joined by distance constraints, hanging from
//! its pinned top row. The pointer can drag, push and cut the fabric, and
//! constraints tear on their own when stretched too far.
//!
//! Per frame: host events are folded into [`Interaction`], then
//! [`Cloth::update`] integrates, applies the pointer and relaxes the
//! constraints. [`SimulationSession`] ties both together.

pub mod cloth;
pub mod config;
pub mod constraints;
pub mod error;
pub mod forces;
pub mod geometry;
pub mod input;
pub mod integrator;
pub mod interaction;
pub mod math;
pub mod particle;
pub mod session;
pub mod solver;

pub use cloth::{Cloth, StepStats};
pub use config::{ClothConfig, InteractionConfig, SessionConfig};
pub use constraints::{ConstraintSet, DistanceConstraint};
pub use error::ClothError;
pub use forces::pointer::{PointerOutcome, PointerParams};
pub use geometry::LineSegment;
pub use input::{Button, HostCommand, InputEvent, Key};
pub use interaction::{Interaction, InteractionMode};
pub use particle::ParticleSet;
pub use session::{FrameReport, SimulationSession};
