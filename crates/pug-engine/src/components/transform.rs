use glam::Vec2;

/// Position, velocity and rotation of an entity in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    /// Current position (entity center).
    pub pos: Vec2,
    /// Position at the start of the current movement step.
    pub prev_pos: Vec2,
    /// Velocity in world units per second.
    pub vel: Vec2,
    /// Rotation in degrees.
    pub angle: f32,
    /// Angular velocity in degrees per second.
    pub ang_vel: f32,
}

impl Transform {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            prev_pos: pos,
            ..Default::default()
        }
    }

    pub fn with_vel(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    /// Integrate velocity over `dt` seconds, remembering where we started.
    pub fn integrate(&mut self, dt: f32) {
        self.prev_pos = self.pos;
        self.pos += self.vel * dt;
        self.angle += self.ang_vel * dt;
    }

    /// Undo the last integration step.
    pub fn revert(&mut self) {
        self.pos = self.prev_pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrate_moves_by_velocity() {
        let mut t = Transform::new(Vec2::new(10.0, 10.0)).with_vel(Vec2::new(100.0, -50.0));
        t.integrate(0.5);
        assert_eq!(t.pos, Vec2::new(60.0, -15.0));
        assert_eq!(t.prev_pos, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn revert_restores_previous_position() {
        let mut t = Transform::new(Vec2::ZERO).with_vel(Vec2::X);
        t.integrate(1.0);
        t.revert();
        assert_eq!(t.pos, Vec2::ZERO);
    }
}
