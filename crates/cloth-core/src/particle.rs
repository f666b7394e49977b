use glam::Vec2;

/// SoA particle storage
///
/// Velocity is never stored: it is reconstructed from `position - previous`.
pub struct ParticleSet {
    pub count: usize,
    pub position: Vec<Vec2>,
    /// Position at the start of the previous step (Verlet history)
    pub previous: Vec<Vec2>,
    /// Position assigned at build time; pinned particles are held here
    pub anchor: Vec<Vec2>,
    pub pinned: Vec<bool>,
}

impl ParticleSet {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            position: vec![Vec2::ZERO; count],
            previous: vec![Vec2::ZERO; count],
            anchor: vec![Vec2::ZERO; count],
            pinned: vec![false; count],
        }
    }

    /// Pre-sized store for `count` particles.
    pub fn allocate(count: usize) -> Self {
        Self::new(count)
    }

    /// Initialisation write. Ignores the pin guard and resets the history,
    /// so the particle starts at rest.
    pub fn place(&mut self, i: usize, pos: Vec2, pinned: bool) {
        self.position[i] = pos;
        self.previous[i] = pos;
        self.anchor[i] = pos;
        self.pinned[i] = pinned;
    }

    #[inline]
    pub fn position(&self, i: usize) -> Vec2 {
        self.position[i]
    }

    /// Move a free particle. Pinned particles keep their position.
    #[inline]
    pub fn set_position(&mut self, i: usize, pos: Vec2) {
        if !self.pinned[i] {
            self.position[i] = pos;
        }
    }

    #[inline]
    pub fn is_pinned(&self, i: usize) -> bool {
        self.pinned[i]
    }

    #[inline]
    pub fn anchor(&self, i: usize) -> Vec2 {
        self.anchor[i]
    }

    /// Per-step displacement, i.e. the implicit Verlet velocity.
    #[inline]
    pub fn displacement(&self, i: usize) -> Vec2 {
        self.position[i] - self.previous[i]
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
