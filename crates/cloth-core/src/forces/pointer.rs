use crate::constraints::ConstraintSet;
use crate::interaction::{Interaction, InteractionMode};
use crate::math::{direction_or, falloff};
use crate::particle::ParticleSet;
use glam::Vec2;

/// Per-frame snapshot of the pointer, as consumed by the cloth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerParams {
    pub mode: InteractionMode,
    pub position: Vec2,
    /// Pointer movement during this frame.
    pub motion: Vec2,
    pub radius: f32,
    /// Accumulated press-and-hold force.
    pub force: f32,
}

impl Default for PointerParams {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            position: Vec2::ZERO,
            motion: Vec2::ZERO,
            radius: 0.0,
            force: 0.0,
        }
    }
}

impl From<&Interaction> for PointerParams {
    fn from(interaction: &Interaction) -> Self {
        Self {
            mode: interaction.mode(),
            position: interaction.position(),
            motion: interaction.motion(),
            radius: interaction.radius(),
            force: interaction.force(),
        }
    }
}

/// What one pointer application did to the cloth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerOutcome {
    /// Particles displaced by drag or push.
    pub moved: usize,
    /// Constraints cut by the tear gesture.
    pub torn: usize,
}

/// Displacement the pointer applies to a free particle at `pos`.
///
/// Only drag and force-push move particles:
///   Drag      = pull toward the pointer, weight 1 - d/radius
///   ForcePush = the same pull plus `force` along the pointer motion, or
///               straight outward while the pointer is still
pub fn compute_pointer_displacement(pos: Vec2, params: &PointerParams) -> Vec2 {
    let to_pointer = params.position - pos;
    let weight = falloff(to_pointer.length(), params.radius);
    if weight <= 0.0 {
        return Vec2::ZERO;
    }

    match params.mode {
        InteractionMode::Drag => to_pointer * weight,
        InteractionMode::ForcePush => {
            let outward = direction_or(-to_pointer, Vec2::Y);
            let dir = direction_or(params.motion, outward);
            to_pointer * weight + dir * (params.force * weight)
        }
        InteractionMode::Tear | InteractionMode::Select | InteractionMode::Idle => Vec2::ZERO,
    }
}

/// Apply the current pointer mode to the cloth.
///
/// Pinned particles never move. Tear cuts every active constraint with an
/// endpoint strictly inside the radius, however slack it is.
pub fn apply_pointer(
    particles: &mut ParticleSet,
    constraints: &mut ConstraintSet,
    params: &PointerParams,
) -> PointerOutcome {
    let mut outcome = PointerOutcome::default();

    match params.mode {
        InteractionMode::Drag | InteractionMode::ForcePush => {
            for i in 0..particles.count {
                if particles.is_pinned(i) {
                    continue;
                }
                let pos = particles.position(i);
                let offset = compute_pointer_displacement(pos, params);
                if offset != Vec2::ZERO {
                    particles.set_position(i, pos + offset);
                    outcome.moved += 1;
                }
            }
        }
        InteractionMode::Tear => {
            let inside = |i: usize| particles.position(i).distance(params.position) < params.radius;
            let cut: Vec<usize> = constraints
                .active()
                .filter(|(_, c)| {
                    let (a, b) = c.endpoints();
                    inside(a) || inside(b)
                })
                .map(|(idx, _)| idx)
                .collect();
            for idx in cut {
                if constraints.deactivate(idx) {
                    outcome.torn += 1;
                }
            }
        }
        InteractionMode::Select | InteractionMode::Idle => {}
    }

    outcome
}
