use glam::Vec2;

/// Held direction flags, driven by START/END commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Input {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Input {
    /// Un-normalized heading from the held flags (Y grows downward).
    pub fn heading(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        dir
    }

    /// Set the flag matching a movement action name. Returns false for other names.
    pub fn set(&mut self, action: &str, held: bool) -> bool {
        match action {
            "LEFT" => self.left = held,
            "RIGHT" => self.right = held,
            "UP" => self.up = held,
            "DOWN" => self.down = held,
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_flags_cancel() {
        let input = Input {
            left: true,
            right: true,
            up: true,
            down: false,
        };
        assert_eq!(input.heading(), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn set_ignores_non_movement_actions() {
        let mut input = Input::default();
        assert!(input.set("LEFT", true));
        assert!(!input.set("BARK", true));
        assert!(input.left);
    }
}
