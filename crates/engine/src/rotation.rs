use tracing::debug;

use crate::animation::Facing;

/// Maps a cell through one 90-degree clockwise world rotation.
///
/// `w` and `h` are the PRE-rotation grid dimensions. In-bounds cells map
/// exactly to `(y, w - 1 - x)`, the same bijection the grid rotation
/// applies, so entities and tiles stay in lockstep. The clamp into the
/// rotated bounds only fires for out-of-range input and is logged, never an
/// error.
pub fn rotate_point_90_cw(x: i32, y: i32, w: u32, h: u32) -> (i32, i32) {
    let new_x = y as i64;
    let new_y = w as i64 - 1 - x as i64;
    let clamped_x = new_x.clamp(0, h as i64 - 1);
    let clamped_y = new_y.clamp(0, w as i64 - 1);
    if (clamped_x, clamped_y) != (new_x, new_y) {
        debug!(x, y, new_x, new_y, "rotation_clamped_to_bounds");
    }
    (clamped_x as i32, clamped_y as i32)
}

/// Facing through one clockwise world rotation, so a sprite keeps pointing
/// at the same world-relative heading after the grid turns under it. A
/// direction delta transforms as `(dx, dy) -> (dy, -dx)`, hence north
/// becomes west.
pub fn rotate_facing_90_cw(facing: Facing) -> Facing {
    match facing {
        Facing::North => Facing::West,
        Facing::West => Facing::South,
        Facing::South => Facing::East,
        Facing::East => Facing::North,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facing_delta(facing: Facing) -> (i32, i32) {
        match facing {
            Facing::North => (0, -1),
            Facing::South => (0, 1),
            Facing::West => (-1, 0),
            Facing::East => (1, 0),
        }
    }

    #[test]
    fn interior_point_returns_after_four_rotations() {
        let (mut w, mut h) = (7_u32, 5_u32);
        let (mut x, mut y) = (2_i32, 3_i32);
        for _ in 0..4 {
            let next = rotate_point_90_cw(x, y, w, h);
            x = next.0;
            y = next.1;
            std::mem::swap(&mut w, &mut h);
        }
        assert_eq!((x, y), (2, 3));
    }

    #[test]
    fn matches_grid_cell_mapping_for_every_cell() {
        let (w, h) = (4_u32, 3_u32);
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let expected = (y, w as i32 - 1 - x);
                assert_eq!(rotate_point_90_cw(x, y, w, h), expected);
            }
        }
    }

    #[test]
    fn corner_of_square_grid_stays_in_bounds() {
        let (x, y) = rotate_point_90_cw(9, 9, 10, 10);
        assert!((0..10).contains(&x));
        assert!((0..10).contains(&y));
        assert_eq!((x, y), (9, 0));
    }

    #[test]
    fn out_of_range_input_clamps_into_rotated_bounds() {
        let (x, y) = rotate_point_90_cw(-3, 12, 10, 10);
        assert!((0..10).contains(&x));
        assert!((0..10).contains(&y));
    }

    #[test]
    fn huge_dimensions_keep_integer_exactness() {
        let side = 50_000_000_u32;
        let (x, y) = rotate_point_90_cw(40_000_000, 12, side, side);
        assert_eq!((x, y), (12, 9_999_999));
    }

    #[test]
    fn rotated_facing_tracks_the_cell_it_faced() {
        let (w, h) = (6_u32, 4_u32);
        let pos = (2, 2);
        for facing in [Facing::North, Facing::South, Facing::West, Facing::East] {
            let (dx, dy) = facing_delta(facing);
            let faced = (pos.0 + dx, pos.1 + dy);
            let new_pos = rotate_point_90_cw(pos.0, pos.1, w, h);
            let new_faced = rotate_point_90_cw(faced.0, faced.1, w, h);
            let rotated = rotate_facing_90_cw(facing);
            assert_eq!(
                facing_delta(rotated),
                (new_faced.0 - new_pos.0, new_faced.1 - new_pos.1),
                "{facing:?}"
            );
        }
    }

    #[test]
    fn facing_returns_after_four_rotations() {
        assert_eq!(rotate_facing_90_cw(Facing::North), Facing::West);
        let mut facing = Facing::East;
        for _ in 0..4 {
            facing = rotate_facing_90_cw(facing);
        }
        assert_eq!(facing, Facing::East);
    }
}
