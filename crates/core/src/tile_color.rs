//! Procedural tile coloring.
//!
//! Every world tile gets a fixed color derived only from its coordinates: a
//! two-tone checkerboard nudged brighter or darker by a cheap coordinate hash.

use crate::types::{Rgb, COLOR_VARIATION_SCALE};

const EVEN_BASE: [f64; 3] = [40.0, 80.0, 40.0];
const ODD_BASE: [f64; 3] = [60.0, 100.0, 60.0];

/// Coordinate hash in `-99..=99` (truncating remainder, so negative
/// coordinates may hash negative).
pub fn tile_hash(x: i32, y: i32) -> i64 {
    (x as i64 * 31 + y as i64 * 17) % 100
}

/// Color of the tile at world `(x, y)`.
pub fn color_of(x: i32, y: i32) -> Rgb {
    let base = if (x as i64 + y as i64) % 2 == 0 {
        EVEN_BASE
    } else {
        ODD_BASE
    };
    let variation = (tile_hash(x, y) - 50) as f64 * COLOR_VARIATION_SCALE;
    let channel = |b: f64| (b + variation).clamp(0.0, 255.0).floor() as u8;

    Rgb::new(channel(base[0]), channel(base[1]), channel(base[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tiles() {
        assert_eq!(color_of(0, 0), Rgb::new(35, 75, 35));
        assert_eq!(color_of(1, 0), Rgb::new(58, 98, 58));
        assert_eq!(color_of(2, 3), Rgb::new(56, 96, 56));
    }

    #[test]
    fn negative_coordinates_use_truncating_remainder() {
        assert_eq!(tile_hash(-1, 0), -31);
        assert_eq!(color_of(-1, 0), Rgb::new(51, 91, 51));
        assert_eq!(color_of(-3, -5), Rgb::new(27, 67, 27));
    }

    #[test]
    fn floor_matches_float_rounding_of_the_scale() {
        // hash 20 -> variation -3.0
        assert_eq!(tile_hash(1, 17), 20);
        assert_eq!(color_of(1, 17), Rgb::new(37, 77, 37));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let _ = color_of(i32::MAX, i32::MAX);
        let _ = color_of(i32::MIN, i32::MAX);
        let _ = color_of(i32::MIN, i32::MIN);
    }
}
