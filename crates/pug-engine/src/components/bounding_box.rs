use glam::Vec2;

/// Axis-aligned collision box centered on the entity position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub size: Vec2,
    pub half_size: Vec2,
}

impl BoundingBox {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            half_size: size / 2.0,
        }
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}
