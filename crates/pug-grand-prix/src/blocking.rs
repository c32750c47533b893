//! Off-track barriers derived from color-coded background art.
//!
//! Instead of an authored collision layer, the background image is sampled on
//! a coarse grid. Every grass pixel that lies near (but not right next to) a
//! track pixel becomes a small blocking square. Colors must match exactly:
//! anti-aliased edges simply leave gaps.

use std::collections::BTreeSet;

use glam::Vec2;
use image::RgbaImage;
use pug_engine::Rect;

pub const GRID_STEP: u32 = 10;
pub const SCAN_RADIUS: i64 = 30;
pub const MIN_DISTANCE: f32 = 20.0;
pub const SQUARE_SIZE: f32 = 10.0;

/// RGB of the pixel at `(x, y)`, or `None` outside the image.
pub fn sample(image: &RgbaImage, x: i64, y: i64) -> Option<[u8; 3]> {
    if x < 0 || y < 0 || x >= image.width() as i64 || y >= image.height() as i64 {
        return None;
    }
    let [r, g, b, _] = image.get_pixel(x as u32, y as u32).0;
    Some([r, g, b])
}

/// RGB under a world position, for an image whose top-left sits at `origin`.
pub fn sample_world(image: &RgbaImage, origin: Vec2, pos: Vec2) -> Option<[u8; 3]> {
    let local = (pos - origin).floor();
    sample(image, local.x as i64, local.y as i64)
}

/// Blocking squares for `image`, placed in world space at `origin`.
/// Sorted by row, then column, with no duplicates.
pub fn generate_blocking_squares(
    image: &RgbaImage,
    origin: Vec2,
    track_color: [u8; 3],
    grass_color: [u8; 3],
) -> Vec<Rect> {
    let step = GRID_STEP as usize;
    let mut cells: BTreeSet<(i64, i64)> = BTreeSet::new();

    for y in (0..image.height() as i64).step_by(step) {
        for x in (0..image.width() as i64).step_by(step) {
            if sample(image, x, y) != Some(track_color) {
                continue;
            }
            for dy in (-SCAN_RADIUS..=SCAN_RADIUS).step_by(step) {
                for dx in (-SCAN_RADIUS..=SCAN_RADIUS).step_by(step) {
                    let distance = ((dx * dx + dy * dy) as f32).sqrt();
                    if distance < MIN_DISTANCE {
                        continue;
                    }
                    let (nx, ny) = (x + dx, y + dy);
                    if sample(image, nx, ny) == Some(grass_color) {
                        cells.insert((ny, nx));
                    }
                }
            }
        }
    }

    log::debug!("generated {} blocking squares", cells.len());
    cells
        .into_iter()
        .map(|(y, x)| Rect::new(origin.x + x as f32, origin.y + y as f32, SQUARE_SIZE, SQUARE_SIZE))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const TRACK: [u8; 3] = [195, 195, 195];
    const GRASS: [u8; 3] = [34, 177, 76];

    /// 100x10 strip: track on x < 50, grass from x >= 50.
    fn strip() -> RgbaImage {
        RgbaImage::from_fn(100, 10, |x, _| {
            let [r, g, b] = if x < 50 { TRACK } else { GRASS };
            Rgba([r, g, b, 255])
        })
    }

    #[test]
    fn grass_near_track_is_blocked() {
        let squares = generate_blocking_squares(&strip(), Vec2::ZERO, TRACK, GRASS);
        let lefts: Vec<f32> = squares.iter().map(|r| r.left).collect();
        // Track at x=40 reaches grass at 60 and 70; track at 30 reaches 50 and 60; track at 20 reaches 50.
        assert_eq!(lefts, vec![50.0, 60.0, 70.0]);
        assert!(squares.iter().all(|r| r.top == 0.0 && r.width == SQUARE_SIZE));
    }

    #[test]
    fn squares_follow_origin() {
        let squares = generate_blocking_squares(&strip(), Vec2::new(100.0, -50.0), TRACK, GRASS);
        assert_eq!(squares[0], Rect::new(150.0, -50.0, SQUARE_SIZE, SQUARE_SIZE));
    }

    #[test]
    fn inexact_colors_produce_no_barrier() {
        let squares = generate_blocking_squares(&strip(), Vec2::ZERO, TRACK, [34, 177, 77]);
        assert!(squares.is_empty());
    }

    #[test]
    fn sampling_outside_is_none() {
        let image = strip();
        assert_eq!(sample(&image, 0, 0), Some(TRACK));
        assert_eq!(sample(&image, -1, 0), None);
        assert_eq!(sample(&image, 100, 0), None);
        assert_eq!(sample_world(&image, Vec2::new(10.0, 10.0), Vec2::new(70.5, 12.0)), Some(GRASS));
        assert_eq!(sample_world(&image, Vec2::new(10.0, 10.0), Vec2::new(5.0, 12.0)), None);
    }
}
