//! Axis-aligned collision responses.
//!
//! Neither response is physically accurate: both nudge a box by a fixed or
//! minimal amount and never touch velocity.

use glam::Vec2;

use crate::core::geometry::{boxes_intersect, overlap, Rect};

/// Push a box away from an obstacle it overlaps by a fixed `magnitude` on
/// each axis. The push direction per axis comes from comparing centers.
/// Deep overlaps may need several frames to separate.
pub fn push_apart(pos: Vec2, half: Vec2, obstacle_pos: Vec2, obstacle_half: Vec2, magnitude: f32) -> Vec2 {
    if !boxes_intersect(pos, half, obstacle_pos, obstacle_half) {
        return pos;
    }
    let sign_x = if pos.x < obstacle_pos.x { -1.0 } else { 1.0 };
    let sign_y = if pos.y < obstacle_pos.y { -1.0 } else { 1.0 };
    pos + Vec2::new(sign_x, sign_y) * magnitude
}

/// Resolve a box against static blocks.
///
/// Each overlapped block pushes the box out along its axis of smaller
/// penetration. If the box still overlaps any block afterwards, the move is
/// undone and `prev_pos` is returned.
pub fn resolve_static(pos: Vec2, prev_pos: Vec2, half: Vec2, blocks: &[Rect]) -> Vec2 {
    let mut resolved = pos;
    let mut hit = false;

    for block in blocks {
        let block_center = block.center();
        let block_half = block.size() / 2.0;
        if !boxes_intersect(resolved, half, block_center, block_half) {
            continue;
        }
        hit = true;

        let depth = overlap(resolved, half, block_center, block_half);
        if depth.x < depth.y {
            resolved.x += if resolved.x < block_center.x { -depth.x } else { depth.x };
        } else {
            resolved.y += if resolved.y < block_center.y { -depth.y } else { depth.y };
        }
    }

    if hit && intersects_any(resolved, half, blocks) {
        return prev_pos;
    }
    resolved
}

/// True if the box overlaps at least one block.
pub fn intersects_any(pos: Vec2, half: Vec2, blocks: &[Rect]) -> bool {
    blocks
        .iter()
        .any(|b| boxes_intersect(pos, half, b.center(), b.size() / 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_apart_moves_away_on_both_axes() {
        let pos = push_apart(Vec2::new(0.0, 0.0), Vec2::splat(10.0), Vec2::new(5.0, -5.0), Vec2::splat(10.0), 5.0);
        assert_eq!(pos, Vec2::new(-5.0, 5.0));
    }

    #[test]
    fn push_apart_ignores_separated_boxes() {
        let pos = Vec2::new(0.0, 0.0);
        assert_eq!(push_apart(pos, Vec2::splat(5.0), Vec2::new(50.0, 0.0), Vec2::splat(5.0), 5.0), pos);
    }

    #[test]
    fn static_resolution_uses_shallow_axis() {
        // Box [0,20]x[0,20] against block [18,28]x[-100,100]: x depth 2, y depth huge.
        let block = Rect::new(18.0, -100.0, 10.0, 200.0);
        let pos = resolve_static(Vec2::new(10.0, 0.0), Vec2::new(5.0, 0.0), Vec2::splat(10.0), &[block]);
        assert_eq!(pos, Vec2::new(8.0, 0.0));
    }

    #[test]
    fn static_resolution_reverts_when_still_stuck() {
        // Wedged between two blocks: pushing out of one lands in the other.
        let left = Rect::new(-12.0, -100.0, 10.0, 200.0);
        let right = Rect::new(2.0, -100.0, 10.0, 200.0);
        let prev = Vec2::new(0.0, 300.0);
        let pos = resolve_static(Vec2::new(0.0, 0.0), prev, Vec2::new(3.0, 3.0), &[left, right]);
        assert_eq!(pos, prev);
    }

    #[test]
    fn no_blocks_hit_keeps_position() {
        let block = Rect::new(100.0, 100.0, 10.0, 10.0);
        let pos = resolve_static(Vec2::ZERO, Vec2::ONE, Vec2::splat(5.0), &[block]);
        assert_eq!(pos, Vec2::ZERO);
    }
}
