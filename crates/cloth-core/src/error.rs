use std::fmt;

/// Errors raised while validating a cloth or interaction configuration.
///
/// The simulation itself never fails once built: degenerate geometry is
/// skipped by the solver and out-of-range scroll input is clamped.
#[derive(Clone, Debug, PartialEq)]
pub enum ClothError {
    /// The grid needs at least two columns and two rows.
    InvalidGridDimensions { cols: usize, rows: usize },
    /// Particle spacing must be positive and finite.
    InvalidSpacing(f32),
    /// Damping must lie in [0, 1].
    InvalidDamping(f32),
    /// The tear multiplier must be greater than 1.
    InvalidTearFactor(f32),
    /// At least one solver pass is required per frame.
    InvalidSolverPasses,
    /// Interaction radius or force settings are out of range.
    InvalidInteraction { reason: &'static str },
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGridDimensions { cols, rows } => {
                write!(f, "cloth grid needs at least one column and one row, got {cols}x{rows}")
            }
            Self::InvalidSpacing(s) => write!(f, "spacing must be positive and finite, got {s}"),
            Self::InvalidDamping(d) => write!(f, "damping must be in [0, 1], got {d}"),
            Self::InvalidTearFactor(t) => write!(f, "tear factor must be greater than 1, got {t}"),
            Self::InvalidSolverPasses => write!(f, "solver needs at least one pass per frame"),
            Self::InvalidInteraction { reason } => write!(f, "invalid interaction config: {reason}"),
        }
    }
}

impl std::error::Error for ClothError {}
