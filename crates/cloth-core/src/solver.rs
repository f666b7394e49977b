use crate::constraints::ConstraintSet;
use crate::particle::ParticleSet;

/// Below this length a constraint has no usable direction and is skipped.
const DEGENERATE_LENGTH: f32 = 1e-6;

/// Relax all active constraints toward their rest length.
///
/// Gauss-Seidel: each constraint sees the corrections already made by the
/// ones before it in the same pass. For every visit:
/// 1. measure the current length
/// 2. tear the constraint if it exceeds `rest_length * tear_factor`
/// 3. project both endpoints toward the rest length, half each; a pinned
///    endpoint stays put and the free one takes the whole correction
///
/// Returns the number of constraints torn by stretch.
pub fn relax(
    constraints: &mut ConstraintSet,
    particles: &mut ParticleSet,
    passes: u32,
    tear_factor: f32,
) -> usize {
    let mut torn = 0;

    for _pass in 0..passes {
        for c in constraints.as_mut_slice().iter_mut() {
            if !c.active {
                continue;
            }
            let (a, b) = c.endpoints();

            let delta = particles.position[b] - particles.position[a];
            let dist = delta.length();

            if dist > c.rest_length * tear_factor {
                c.active = false;
                torn += 1;
                continue;
            }
            if dist < DEGENERATE_LENGTH {
                continue;
            }

            // Full correction that would bring the pair to rest length
            let correction = delta * ((dist - c.rest_length) / dist);

            match (particles.pinned[a], particles.pinned[b]) {
                (false, false) => {
                    particles.position[a] += correction * 0.5;
                    particles.position[b] -= correction * 0.5;
                }
                (true, false) => particles.position[b] -= correction,
                (false, true) => particles.position[a] += correction,
                (true, true) => {}
            }
        }
    }

    torn
}
