//! Per-level race layouts: checkpoints, finish line, spawns and the colors
//! the background art uses for tarmac and grass.

use std::path::Path;

use glam::Vec2;
use pug_engine::Rect;

/// An ordered gate and the seconds it adds to the race clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckpointSpec {
    pub area: Rect,
    pub bonus: f32,
}

impl CheckpointSpec {
    pub const fn new(area: Rect, bonus: f32) -> Self {
        Self { area, bonus }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackLayout {
    pub name: &'static str,
    pub checkpoints: &'static [CheckpointSpec],
    pub finish_line: Rect,
    pub barrels: &'static [Vec2],
    pub bones: &'static [Vec2],
    /// Exact RGB of drivable track pixels in the background image.
    pub track_color: [u8; 3],
    /// Exact RGB of off-track pixels.
    pub grass_color: [u8; 3],
}

pub const PARK: TrackLayout = TrackLayout {
    name: "park",
    checkpoints: &[
        CheckpointSpec::new(Rect::new(0.0, 1900.0, 1280.0, 40.0), 5.0),
        CheckpointSpec::new(Rect::new(0.0, 1100.0, 1280.0, 40.0), 4.0),
        CheckpointSpec::new(Rect::new(0.0, 300.0, 1280.0, 40.0), 3.0),
    ],
    finish_line: Rect::new(0.0, 2500.0, 1280.0, 30.0),
    barrels: &[Vec2::new(600.0, 2300.0), Vec2::new(900.0, 1500.0), Vec2::new(400.0, 700.0)],
    bones: &[Vec2::new(700.0, 2000.0), Vec2::new(300.0, 1300.0)],
    track_color: [195, 195, 195],
    grass_color: [34, 177, 76],
};

pub const BEACH: TrackLayout = TrackLayout {
    name: "beach",
    checkpoints: &[
        CheckpointSpec::new(Rect::new(0.0, 2000.0, 1280.0, 40.0), 4.0),
        CheckpointSpec::new(Rect::new(0.0, 1400.0, 1280.0, 40.0), 4.0),
        CheckpointSpec::new(Rect::new(0.0, 800.0, 1280.0, 40.0), 3.0),
        CheckpointSpec::new(Rect::new(0.0, 200.0, 1280.0, 40.0), 2.0),
    ],
    finish_line: Rect::new(0.0, 2500.0, 1280.0, 30.0),
    barrels: &[
        Vec2::new(500.0, 2200.0),
        Vec2::new(800.0, 1700.0),
        Vec2::new(450.0, 1100.0),
        Vec2::new(700.0, 500.0),
    ],
    bones: &[Vec2::new(640.0, 1850.0), Vec2::new(400.0, 900.0)],
    track_color: [127, 127, 127],
    grass_color: [239, 228, 176],
};

pub const SNOW: TrackLayout = TrackLayout {
    name: "snow",
    checkpoints: &[
        CheckpointSpec::new(Rect::new(0.0, 1700.0, 1280.0, 40.0), 6.0),
        CheckpointSpec::new(Rect::new(0.0, 600.0, 1280.0, 40.0), 5.0),
    ],
    finish_line: Rect::new(0.0, 2500.0, 1280.0, 30.0),
    barrels: &[
        Vec2::new(640.0, 2250.0),
        Vec2::new(350.0, 1900.0),
        Vec2::new(900.0, 1300.0),
        Vec2::new(600.0, 900.0),
        Vec2::new(300.0, 400.0),
    ],
    bones: &[Vec2::new(900.0, 2100.0), Vec2::new(500.0, 1200.0), Vec2::new(750.0, 300.0)],
    track_color: [112, 146, 190],
    grass_color: [255, 255, 255],
};

impl TrackLayout {
    /// Layout for a level file, chosen by its name (`level2.txt` -> beach).
    /// Anything unrecognised races on the park layout.
    pub fn for_level(path: &Path) -> &'static TrackLayout {
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        match stem {
            "level2" => &BEACH,
            "level3" => &SNOW,
            _ => &PARK,
        }
    }

    pub fn total_bonus(&self) -> f32 {
        self.checkpoints.iter().map(|c| c.bonus).sum()
    }
}

/// Player spawn: horizontally centered, one view height above the bottom of the world.
pub fn spawn_point(world: Vec2, view: Vec2) -> Vec2 {
    Vec2::new(view.x / 2.0, world.y - view.y / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_by_level_name() {
        assert_eq!(TrackLayout::for_level(Path::new("levels/level2.txt")).name, "beach");
        assert_eq!(TrackLayout::for_level(Path::new("level3.txt")).name, "snow");
        assert_eq!(TrackLayout::for_level(Path::new("custom.txt")).name, "park");
    }

    #[test]
    fn total_bonus_sums_checkpoints() {
        assert_eq!(PARK.total_bonus(), 12.0);
        assert_eq!(BEACH.total_bonus(), 13.0);
        assert_eq!(SNOW.total_bonus(), 11.0);
    }

    #[test]
    fn finish_line_is_between_spawn_and_first_checkpoint() {
        let spawn = spawn_point(Vec2::new(1280.0, 3072.0), Vec2::new(1280.0, 768.0));
        assert_eq!(spawn, Vec2::new(640.0, 2688.0));
        for layout in [PARK, BEACH, SNOW] {
            assert!(layout.finish_line.bottom() < spawn.y, "{}", layout.name);
            assert!(layout.checkpoints[0].area.bottom() < layout.finish_line.top, "{}", layout.name);
        }
    }

    #[test]
    fn checkpoints_climb_the_track() {
        for layout in [PARK, BEACH, SNOW] {
            for pair in layout.checkpoints.windows(2) {
                assert!(pair[1].area.top < pair[0].area.top, "{}", layout.name);
            }
        }
    }
}
