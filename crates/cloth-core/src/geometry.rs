use glam::Vec2;

/// One renderable cloth edge, laid out for direct upload as two `vec2`
/// vertices (16 bytes).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineSegment {
    pub from: [f32; 2],
    pub to: [f32; 2],
}

impl LineSegment {
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self {
            from: from.to_array(),
            to: to.to_array(),
        }
    }

    pub fn length(&self) -> f32 {
        Vec2::from(self.from).distance(Vec2::from(self.to))
    }
}

/// Reinterpret a segment buffer as raw floats (`x0, y0, x1, y1, ...`).
pub fn as_floats(segments: &[LineSegment]) -> &[f32] {
    bytemuck::cast_slice(segments)
}
