/// Distance constraint between two grid particles.
///
/// Endpoints are stored as indices into the cloth's
/// [`ParticleSet`](crate::particle::ParticleSet); the constraint never
/// borrows particle data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceConstraint {
    /// Particle index A.
    pub a: u32,
    /// Particle index B.
    pub b: u32,
    /// Rest length, fixed at build time.
    pub rest_length: f32,
    /// `false` once torn. Stays `false` until the cloth is rebuilt.
    pub active: bool,
}

impl DistanceConstraint {
    pub fn new(a: u32, b: u32, rest_length: f32) -> Self {
        Self {
            a,
            b,
            rest_length,
            active: true,
        }
    }

    #[inline]
    pub fn endpoints(&self) -> (usize, usize) {
        (self.a as usize, self.b as usize)
    }

    #[inline]
    pub fn touches(&self, i: usize) -> bool {
        self.a as usize == i || self.b as usize == i
    }
}

/// Every distance constraint of one cloth.
#[derive(Clone, Debug, Default)]
pub struct ConstraintSet {
    constraints: Vec<DistanceConstraint>,
}

impl ConstraintSet {
    /// Build the constraint topology of a `cols` x `rows` grid whose
    /// particle at (col, row) has index `row * cols + col`.
    ///
    /// Order is deterministic: horizontal pairs row by row, then vertical
    /// pairs, then (when `shear` is set) both diagonals of every cell.
    pub fn build(cols: usize, rows: usize, spacing: f32, shear: bool) -> Self {
        let idx = |col: usize, row: usize| (row * cols + col) as u32;
        let structural = rows * cols.saturating_sub(1) + cols * rows.saturating_sub(1);
        let diagonal = if shear {
            2 * cols.saturating_sub(1) * rows.saturating_sub(1)
        } else {
            0
        };
        let mut constraints = Vec::with_capacity(structural + diagonal);

        // Structural: horizontal (col, col+1)
        for row in 0..rows {
            for col in 0..cols.saturating_sub(1) {
                constraints.push(DistanceConstraint::new(idx(col, row), idx(col + 1, row), spacing));
            }
        }

        // Structural: vertical (row, row+1)
        for row in 0..rows.saturating_sub(1) {
            for col in 0..cols {
                constraints.push(DistanceConstraint::new(idx(col, row), idx(col, row + 1), spacing));
            }
        }

        if shear {
            let diag = spacing * std::f32::consts::SQRT_2;
            for row in 0..rows.saturating_sub(1) {
                for col in 0..cols.saturating_sub(1) {
                    constraints.push(DistanceConstraint::new(idx(col, row), idx(col + 1, row + 1), diag));
                    constraints.push(DistanceConstraint::new(idx(col + 1, row), idx(col, row + 1), diag));
                }
            }
        }

        Self { constraints }
    }

    /// Active constraints with their indices. Each call starts a fresh pass.
    pub fn active(&self) -> impl Iterator<Item = (usize, &DistanceConstraint)> + '_ {
        self.constraints.iter().enumerate().filter(|(_, c)| c.active)
    }

    /// Tear constraint `i`. Returns `true` if it was still active.
    pub fn deactivate(&mut self, i: usize) -> bool {
        let c = &mut self.constraints[i];
        let was_active = c.active;
        c.active = false;
        was_active
    }

    #[inline]
    pub fn get(&self, i: usize) -> &DistanceConstraint {
        &self.constraints[i]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DistanceConstraint> {
        self.constraints.iter()
    }

    /// Index of the constraint joining particles `a` and `b`, in either order.
    pub fn find(&self, a: usize, b: usize) -> Option<usize> {
        self.constraints
            .iter()
            .position(|c| c.touches(a) && c.touches(b) && a != b)
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.constraints.iter().filter(|c| c.active).count()
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [DistanceConstraint] {
        &mut self.constraints
    }
}
