use crate::config::ClothConfig;
use crate::constraints::ConstraintSet;
use crate::error::ClothError;
use crate::forces::pointer::{apply_pointer, PointerOutcome, PointerParams};
use crate::geometry::LineSegment;
use crate::integrator::integrate;
use crate::interaction::Interaction;
use crate::particle::ParticleSet;
use crate::solver::relax;
use glam::Vec2;
use log::{debug, info, warn};

/// Counters from one [`Cloth::update`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Particles moved by the pointer.
    pub dragged: usize,
    /// Constraints cut by the tear gesture.
    pub cut: usize,
    /// Constraints torn by over-stretch in the solver.
    pub torn: usize,
}

impl StepStats {
    pub fn broken(&self) -> usize {
        self.cut + self.torn
    }
}

/// A rectangular piece of cloth hanging from its top row.
pub struct Cloth {
    pub particles: ParticleSet,
    pub constraints: ConstraintSet,
    config: ClothConfig,
    origin: Vec2,
    initialized: bool,
}

impl Cloth {
    /// Validate `config` and create an empty, uninitialized cloth.
    pub fn new(config: ClothConfig) -> Result<Self, ClothError> {
        config.validate()?;
        Ok(Self {
            particles: ParticleSet::allocate(0),
            constraints: ConstraintSet::default(),
            config,
            origin: Vec2::ZERO,
            initialized: false,
        })
    }

    /// Build the grid with its top-left particle at `(start_x, start_y)`.
    ///
    /// Particle (col, row) sits at `origin + (col, row) * spacing` and has
    /// index `row * cols + col`. Row 0 is pinned.
    pub fn init(&mut self, start_x: f32, start_y: f32) {
        let ClothConfig {
            cols,
            rows,
            spacing,
            shear,
            ..
        } = self.config;
        let origin = Vec2::new(start_x, start_y);

        let mut particles = ParticleSet::allocate(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                let pos = origin + Vec2::new(col as f32, row as f32) * spacing;
                particles.place(row * cols + col, pos, row == 0);
            }
        }

        self.particles = particles;
        self.constraints = ConstraintSet::build(cols, rows, spacing, shear);
        self.origin = origin;
        self.initialized = true;

        info!(
            "cloth initialized: {}x{} particles, {} constraints at ({}, {})",
            cols,
            rows,
            self.constraints.len(),
            start_x,
            start_y
        );
    }

    /// Throw away every particle and constraint and build a fresh grid.
    pub fn reset(&mut self, start_x: f32, start_y: f32) {
        self.particles = ParticleSet::allocate(0);
        self.constraints = ConstraintSet::default();
        self.initialized = false;
        info!("cloth reset");
        self.init(start_x, start_y);
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Advance one frame: integrate, apply the pointer, relax constraints.
    pub fn update(&mut self, dt: f32, interaction: &Interaction) -> StepStats {
        self.step(dt, &PointerParams::from(interaction))
    }

    /// [`update`](Self::update) with an explicit pointer snapshot.
    pub fn step(&mut self, dt: f32, pointer: &PointerParams) -> StepStats {
        if !self.initialized {
            warn!("cloth update before init, skipping frame");
            return StepStats::default();
        }

        integrate(&mut self.particles, self.config.gravity, self.config.damping, dt);

        let outcome = self.apply_interaction(pointer);

        let torn = relax(
            &mut self.constraints,
            &mut self.particles,
            self.config.solver_passes,
            self.config.tear_factor,
        );

        let stats = StepStats {
            dragged: outcome.moved,
            cut: outcome.torn,
            torn,
        };
        if stats.broken() > 0 {
            debug!(
                "{} constraints broken ({} cut, {} stretched), {} active",
                stats.broken(),
                stats.cut,
                stats.torn,
                self.constraints.active_count()
            );
        }
        stats
    }

    /// Apply only the pointer effect, without integrating or solving.
    pub fn apply_interaction(&mut self, pointer: &PointerParams) -> PointerOutcome {
        apply_pointer(&mut self.particles, &mut self.constraints, pointer)
    }

    /// Endpoint positions of every active constraint.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.constraints.active().map(|(_, c)| {
            let (a, b) = c.endpoints();
            (self.particles.position(a), self.particles.position(b))
        })
    }

    /// Refill `out` with the active constraints as GPU-ready segments.
    pub fn write_segments(&self, out: &mut Vec<LineSegment>) {
        out.clear();
        out.extend(self.segments().map(|(a, b)| LineSegment::new(a, b)));
    }

    pub fn pinned_points(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.particles.count)
            .filter(|&i| self.particles.is_pinned(i))
            .map(|i| self.particles.position(i))
    }

    /// Store index of the particle at grid cell (col, row).
    #[inline]
    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.config.cols + col
    }

    pub fn position_at(&self, col: usize, row: usize) -> Vec2 {
        self.particles.position(self.index(col, row))
    }

    pub fn config(&self) -> &ClothConfig {
        &self.config
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn cols(&self) -> usize {
        self.config.cols
    }

    pub fn rows(&self) -> usize {
        self.config.rows
    }
}
