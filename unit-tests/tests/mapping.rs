//! Host-level tests for the cube coordinate mapping.

use cubert::{CUBE_SIZE, VOXEL_COUNT, pixel_offset};

/// The wiring formula, step by step
fn wired_offset(x: i32, y: i32, z: i32) -> i32 {
    let x = if z % 2 == 1 { 7 - x } else { x };
    let y = if x % 2 == 1 { 7 - x } else { y };
    z * 64 + x * 8 + y
}

#[test]
fn every_voxel_maps_inside_the_chain() {
    for z in 0..CUBE_SIZE {
        for y in 0..CUBE_SIZE {
            for x in 0..CUBE_SIZE {
                let offset = pixel_offset(x, y, z);
                assert!(
                    (0..VOXEL_COUNT as i32).contains(&offset),
                    "({x}, {y}, {z}) -> {offset}"
                );
            }
        }
    }
}

#[test]
fn mapping_follows_wiring_formula() {
    for z in 0..CUBE_SIZE {
        for y in 0..CUBE_SIZE {
            for x in 0..CUBE_SIZE {
                assert_eq!(pixel_offset(x, y, z), wired_offset(x, y, z));
            }
        }
    }
}

#[test]
fn known_offsets() {
    assert_eq!(pixel_offset(0, 0, 0), 0);
    assert_eq!(pixel_offset(0, 5, 0), 5);
    assert_eq!(pixel_offset(1, 0, 0), 14);
    assert_eq!(pixel_offset(1, 2, 0), 14);
    assert_eq!(pixel_offset(0, 0, 1), 120);
    assert_eq!(pixel_offset(7, 3, 1), 64 + 3);
    assert_eq!(pixel_offset(7, 7, 7), 7 * 64 + 7);
}

#[test]
fn odd_columns_reflect_y_from_x() {
    // y is replaced by 7 - x, so a whole odd column lands on one offset
    let column: Vec<i32> = (0..CUBE_SIZE).map(|y| pixel_offset(3, y, 0)).collect();
    assert!(column.iter().all(|&offset| offset == 3 * 8 + 4));
}

#[test]
fn odd_layers_reverse_x() {
    assert_eq!(pixel_offset(0, 2, 3), wired_offset(0, 2, 3));
    assert_eq!(pixel_offset(0, 2, 3), 3 * 64 + 7 * 8 + 0);
    assert_eq!(pixel_offset(6, 2, 3), 3 * 64 + 8 + 6);
}

#[test]
fn out_of_range_coordinates_are_not_validated() {
    assert_eq!(pixel_offset(0, 0, 8), 512);
    assert_eq!(pixel_offset(0, -1, 0), -1);
}

#[test]
fn extreme_coordinates_wrap_instead_of_failing() {
    // 7 - i32::MIN wraps to i32::MIN + 7, and * 8 wraps to 56
    assert_eq!(pixel_offset(i32::MIN, 0, 1), pixel_offset(0, 0, 1));
    assert_eq!(pixel_offset(0, 0, 40_000_000), 40_000_000_i32.wrapping_mul(64));
    assert!(pixel_offset(0, 0, 40_000_000) < 0);
    assert_eq!(pixel_offset(i32::MAX, i32::MAX, i32::MAX), i32::MAX);
    assert_eq!(pixel_offset(0, i32::MAX, 0), i32::MAX);
    assert_eq!(pixel_offset(0, i32::MIN, 0), i32::MIN);
}
