use crate::particle::ParticleSet;
use glam::Vec2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Advance every particle one Verlet step.
///
/// For a free particle:
/// 1. velocity = (position - previous) * damping
/// 2. previous = position
/// 3. position += velocity + gravity * dt^2
///
/// Pinned particles are snapped back to their anchor with zero history, so
/// drift from any earlier write cannot accumulate.
pub fn integrate(particles: &mut ParticleSet, gravity: Vec2, damping: f32, dt: f32) {
    let gravity_term = gravity * (dt * dt);

    let step = |pos: &mut Vec2, prev: &mut Vec2, anchor: Vec2, pinned: bool| {
        if pinned {
            *pos = anchor;
            *prev = anchor;
            return;
        }
        let velocity = (*pos - *prev) * damping;
        *prev = *pos;
        *pos += velocity + gravity_term;
    };

    let ParticleSet {
        position,
        previous,
        anchor,
        pinned,
        ..
    } = particles;

    #[cfg(feature = "parallel")]
    {
        position
            .par_iter_mut()
            .zip(previous.par_iter_mut())
            .zip(anchor.par_iter().zip(pinned.par_iter()))
            .for_each(|((pos, prev), (a, p))| step(pos, prev, *a, *p));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (((pos, prev), a), p) in position
            .iter_mut()
            .zip(previous.iter_mut())
            .zip(anchor.iter())
            .zip(pinned.iter())
        {
            step(pos, prev, *a, *p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_particle_falls_one_gravity_step() {
        let mut particles = ParticleSet::new(1);
        particles.place(0, Vec2::new(5.0, 5.0), false);

        integrate(&mut particles, Vec2::new(0.0, 100.0), 0.99, 0.1);

        // At rest: only the gravity term contributes, 100 * 0.1^2 = 1.0
        assert!((particles.position[0] - Vec2::new(5.0, 6.0)).length() < 1e-5);
        assert_eq!(particles.previous[0], Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_velocity_is_damped() {
        let mut particles = ParticleSet::new(1);
        particles.place(0, Vec2::ZERO, false);
        particles.position[0] = Vec2::new(2.0, 0.0);

        integrate(&mut particles, Vec2::ZERO, 0.5, 0.016);

        assert!((particles.position[0].x - 3.0).abs() < 1e-6, "got {}", particles.position[0].x);
    }

    #[test]
    fn test_pinned_particle_snaps_to_anchor() {
        let mut particles = ParticleSet::new(1);
        particles.place(0, Vec2::new(1.0, 1.0), true);
        particles.position[0] = Vec2::new(50.0, 50.0);

        integrate(&mut particles, Vec2::new(0.0, 1000.0), 0.99, 0.016);

        assert_eq!(particles.position[0], Vec2::new(1.0, 1.0));
        assert_eq!(particles.previous[0], Vec2::new(1.0, 1.0));
    }
}
