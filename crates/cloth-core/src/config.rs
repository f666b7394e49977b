use crate::error::ClothError;
use glam::Vec2;

/// Physical and topological parameters of the cloth.
///
/// Screen space is assumed: `x` grows to the right, `y` grows downward, so
/// the default gravity points toward positive `y`.
#[derive(Clone, Debug, PartialEq)]
pub struct ClothConfig {
    pub cols: usize,
    pub rows: usize,
    /// Rest distance between neighbouring particles, in pixels.
    pub spacing: f32,
    /// Fraction of the implicit velocity kept each step.
    pub damping: f32,
    /// Acceleration in pixels per second squared.
    pub gravity: Vec2,
    /// A constraint tears once stretched past `rest_length * tear_factor`.
    pub tear_factor: f32,
    pub solver_passes: u32,
    /// Add diagonal shear constraints to every grid cell.
    pub shear: bool,
}

impl Default for ClothConfig {
    fn default() -> Self {
        // 1.3 x 940 by 0.4 x 580 window pixels
        Self::from_pixel_size(1222.0, 232.0, 8.0)
    }
}

impl ClothConfig {
    /// Size the grid so it covers `width` x `height` pixels at `spacing`.
    pub fn from_pixel_size(width: f32, height: f32, spacing: f32) -> Self {
        let per_axis = |extent: f32| {
            if spacing > 0.0 && extent.is_finite() && extent >= 0.0 {
                (extent / spacing) as usize + 1
            } else {
                0
            }
        };
        Self {
            cols: per_axis(width),
            rows: per_axis(height),
            spacing,
            damping: 0.99,
            gravity: Vec2::new(0.0, 1200.0),
            tear_factor: 6.0,
            solver_passes: 3,
            shear: false,
        }
    }

    pub fn with_grid(mut self, cols: usize, rows: usize) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_tear_factor(mut self, tear_factor: f32) -> Self {
        self.tear_factor = tear_factor;
        self
    }

    pub fn with_solver_passes(mut self, passes: u32) -> Self {
        self.solver_passes = passes;
        self
    }

    pub fn with_shear(mut self, shear: bool) -> Self {
        self.shear = shear;
        self
    }

    /// Width of the cloth in pixels when every constraint is at rest.
    pub fn pixel_width(&self) -> f32 {
        self.cols.saturating_sub(1) as f32 * self.spacing
    }

    pub fn pixel_height(&self) -> f32 {
        self.rows.saturating_sub(1) as f32 * self.spacing
    }

    pub fn validate(&self) -> Result<(), ClothError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(ClothError::InvalidGridDimensions {
                cols: self.cols,
                rows: self.rows,
            });
        }
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(ClothError::InvalidSpacing(self.spacing));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(ClothError::InvalidDamping(self.damping));
        }
        if !(self.tear_factor.is_finite() && self.tear_factor > 1.0) {
            return Err(ClothError::InvalidTearFactor(self.tear_factor));
        }
        if self.solver_passes == 0 {
            return Err(ClothError::InvalidSolverPasses);
        }
        Ok(())
    }
}

/// Pointer tuning: interaction radius and the press-and-hold force curve.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionConfig {
    /// Starting interaction radius in pixels.
    pub radius: f32,
    /// Upper bound for scroll adjustments of the radius.
    pub max_radius: f32,
    /// Force gained per second of holding the left button.
    pub force_rate: f32,
    pub max_force: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            radius: 20.0,
            max_radius: 200.0,
            force_rate: 4.0,
            max_force: 20.0,
        }
    }
}

impl InteractionConfig {
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_max_radius(mut self, max_radius: f32) -> Self {
        self.max_radius = max_radius;
        self
    }

    pub fn with_force_curve(mut self, force_rate: f32, max_force: f32) -> Self {
        self.force_rate = force_rate;
        self.max_force = max_force;
        self
    }

    pub fn validate(&self) -> Result<(), ClothError> {
        if !(self.max_radius.is_finite() && self.max_radius >= 0.0) {
            return Err(ClothError::InvalidInteraction {
                reason: "max radius must be finite and non-negative",
            });
        }
        if !(self.radius >= 0.0 && self.radius <= self.max_radius) {
            return Err(ClothError::InvalidInteraction {
                reason: "radius must lie in [0, max_radius]",
            });
        }
        if !(self.force_rate.is_finite() && self.force_rate >= 0.0) {
            return Err(ClothError::InvalidInteraction {
                reason: "force rate must be finite and non-negative",
            });
        }
        if !(self.max_force.is_finite() && self.max_force >= 0.0) {
            return Err(ClothError::InvalidInteraction {
                reason: "max force must be finite and non-negative",
            });
        }
        Ok(())
    }
}

/// Everything a [`SimulationSession`](crate::session::SimulationSession) needs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionConfig {
    pub cloth: ClothConfig,
    pub interaction: InteractionConfig,
}
