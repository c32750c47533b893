use glam::Vec2;

/// Axis-aligned rectangle anchored at its top-left corner (Y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rectangle of `size` centered on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center.x - size.x / 2.0, center.y - size.y / 2.0, size.x, size.y)
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left && point.x < self.right() && point.y >= self.top && point.y < self.bottom()
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

/// Per-axis penetration depth of two centered boxes.
/// A component is positive only when the boxes overlap on that axis.
pub fn overlap(a_center: Vec2, a_half: Vec2, b_center: Vec2, b_half: Vec2) -> Vec2 {
    let delta = (a_center - b_center).abs();
    a_half + b_half - delta
}

/// True when two centered boxes overlap on both axes.
pub fn boxes_intersect(a_center: Vec2, a_half: Vec2, b_center: Vec2, b_half: Vec2) -> bool {
    let o = overlap(a_center, a_half, b_center, b_half);
    o.x > 0.0 && o.y > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Rect::new(9.0, 9.0, 5.0, 5.0)));
    }

    #[test]
    fn from_center_round_trips() {
        let r = Rect::from_center(Vec2::new(50.0, 50.0), Vec2::new(20.0, 10.0));
        assert_eq!(r, Rect::new(40.0, 45.0, 20.0, 10.0));
        assert_eq!(r.center(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn overlap_reports_penetration_per_axis() {
        let o = overlap(Vec2::ZERO, Vec2::splat(10.0), Vec2::new(15.0, 2.0), Vec2::splat(10.0));
        assert_eq!(o, Vec2::new(5.0, 18.0));
        assert!(boxes_intersect(Vec2::ZERO, Vec2::splat(10.0), Vec2::new(15.0, 2.0), Vec2::splat(10.0)));
        assert!(!boxes_intersect(Vec2::ZERO, Vec2::splat(10.0), Vec2::new(25.0, 0.0), Vec2::splat(5.0)));
    }
}
