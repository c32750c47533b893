use glam::Vec2;

use crate::core::geometry::Rect;

/// Axis-aligned view onto the world (Y grows downward), optionally held
/// inside world bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Visible width in world units.
    pub width: f32,
    pub height: f32,
    /// World-space point at the middle of the screen.
    pub center: Vec2,
    /// World area the view may not leave: (min_x, min_y, max_x, max_y).
    pub bounds: Option<[f32; 4]>,
}

impl Camera2D {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            center: Vec2::new(width / 2.0, height / 2.0),
            bounds: None,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// World-space rectangle currently on screen.
    pub fn visible_rect(&self) -> Rect {
        Rect::from_center(self.center, self.size())
    }

    /// Scale the visible area: factors above 1 zoom out, below 1 zoom in.
    pub fn zoom(&mut self, factor: f32) {
        if factor <= 0.0 {
            return;
        }
        self.width *= factor;
        self.height *= factor;
        self.clamp_to_bounds();
    }

    pub fn set_bounds(&mut self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) {
        self.bounds = Some([min_x, min_y, max_x, max_y]);
        self.clamp_to_bounds();
    }

    /// Center the view on `target`, then pull it back inside the bounds.
    pub fn look_at(&mut self, target: Vec2) {
        self.center = target;
        self.clamp_to_bounds();
    }

    fn clamp_to_bounds(&mut self) {
        if let Some([min_x, min_y, max_x, max_y]) = self.bounds {
            // A view wider than the bounds sits on their middle.
            self.center.x = if self.width >= max_x - min_x {
                (min_x + max_x) / 2.0
            } else {
                self.center.x.clamp(min_x + self.width / 2.0, max_x - self.width / 2.0)
            };
            self.center.y = if self.height >= max_y - min_y {
                (min_y + max_y) / 2.0
            } else {
                self.center.y.clamp(min_y + self.height / 2.0, max_y - self.height / 2.0)
            };
        }
    }

    /// Clamp a box of `half_size` centered at `pos` so it stays inside the view.
    /// Plain per-axis min/max: applying it twice changes nothing.
    pub fn clamp_inside(&self, pos: Vec2, half_size: Vec2) -> Vec2 {
        let view = self.visible_rect();
        let x = pos.x.max(view.left + half_size.x).min(view.right() - half_size.x);
        let y = pos.y.max(view.top + half_size.y).min(view.bottom() - half_size.y);
        Vec2::new(x, y)
    }
}
