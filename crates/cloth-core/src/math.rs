use glam::Vec2;

/// Linear falloff: 1 at the center, 0 at and beyond `radius`.
#[inline]
pub fn falloff(dist: f32, radius: f32) -> f32 {
    if radius <= 0.0 || dist >= radius {
        return 0.0;
    }
    1.0 - dist / radius
}

/// Unit vector of `v`, or `fallback` when `v` is too short to normalize.
#[inline]
pub fn direction_or(v: Vec2, fallback: Vec2) -> Vec2 {
    let len = v.length();
    if len > 1e-6 {
        v / len
    } else {
        fallback
    }
}
