// Pattern library: coverage and per-layout semantics.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use wheel_core::{CellGrid, ColorSlot, Orientation, Pattern, PatternParams, Shape, Viewport};

const CELL: f32 = 20.0;

fn grid(width: f32, height: f32) -> CellGrid {
    CellGrid::new(Viewport::new(width, height), CELL)
}

fn all_patterns() -> Vec<Pattern> {
    vec![
        Pattern::HalfSplitHorizontal,
        Pattern::HalfSplitVertical,
        Pattern::DiagonalSplit,
        Pattern::Checkerboard,
        Pattern::Blocks { size: 7 },
        Pattern::Rings { thickness: 4 },
        Pattern::Quadrants,
        Pattern::TriangleWave { period: 5 },
        Pattern::Stripes { width: 3 },
    ]
}

#[test]
fn every_pattern_writes_every_cell() {
    let sizes = [(1.0, 1.0), (40.0, 20.0), (130.0, 75.0), (1000.0, 600.0), (20.0, 400.0)];
    for (w, h) in sizes {
        for pattern in all_patterns() {
            let mut g = grid(w, h);
            // start from the opposite shape so an unwritten cell would show
            let primer = if matches!(pattern, Pattern::TriangleWave { .. }) {
                Pattern::Checkerboard
            } else {
                Pattern::TriangleWave { period: 3 }
            };
            primer.apply(&mut g);
            pattern.apply(&mut g);
            let dims = g.dims();
            let mut count = 0;
            for (r, c, cell) in g.iter() {
                assert_eq!(
                    cell,
                    pattern.cell_at(r, c, dims),
                    "{} mismatch at ({r},{c}) on {}x{}",
                    pattern.name(),
                    dims.rows,
                    dims.cols
                );
                count += 1;
            }
            assert_eq!(count, dims.len());
        }
    }
}

#[test]
fn checkerboard_matches_fresh_grid() {
    let fresh = grid(1000.0, 600.0);
    let mut g = grid(1000.0, 600.0);
    Pattern::Stripes { width: 4 }.apply(&mut g);
    Pattern::Checkerboard.apply(&mut g);
    for (r, c, cell) in g.iter() {
        assert_eq!(cell.slot.index(), (r + c) % 2);
        assert_eq!(cell, fresh.get(r, c));
    }
}

#[test]
fn half_splits_divide_at_floor_midpoint() {
    let mut g = grid(1000.0, 600.0); // 31 x 51
    Pattern::HalfSplitVertical.apply(&mut g);
    assert_eq!(g.get(0, 24).slot, ColorSlot::Primary);
    assert_eq!(g.get(30, 25).slot, ColorSlot::Secondary);

    Pattern::HalfSplitHorizontal.apply(&mut g);
    assert_eq!(g.get(14, 50).slot, ColorSlot::Primary);
    assert_eq!(g.get(15, 0).slot, ColorSlot::Secondary);
}

#[test]
fn diagonal_split_is_primary_below_diagonal() {
    let mut g = grid(200.0, 200.0);
    Pattern::DiagonalSplit.apply(&mut g);
    for (r, c, cell) in g.iter() {
        let expected = if r > c { ColorSlot::Primary } else { ColorSlot::Secondary };
        assert_eq!(cell.slot, expected);
        assert_eq!(cell.shape, Shape::Square);
    }
}

#[test]
fn quadrants_pair_opposite_corners() {
    let mut g = grid(1000.0, 600.0);
    Pattern::Quadrants.apply(&mut g);
    let (rows, cols) = (g.rows(), g.cols());
    assert_eq!(g.get(0, 0).slot, ColorSlot::Primary);
    assert_eq!(g.get(rows - 1, cols - 1).slot, ColorSlot::Primary);
    assert_eq!(g.get(0, cols - 1).slot, ColorSlot::Secondary);
    assert_eq!(g.get(rows - 1, 0).slot, ColorSlot::Secondary);
}

#[test]
fn rings_start_primary_at_centre() {
    let mut g = grid(1000.0, 600.0);
    Pattern::Rings { thickness: 3 }.apply(&mut g);
    let (cr, cc) = (g.rows() / 2, g.cols() / 2);
    assert_eq!(g.get(cr, cc).slot, ColorSlot::Primary);
    assert_eq!(g.get(cr, cc + 2).slot, ColorSlot::Primary);
    assert_eq!(g.get(cr, cc + 3).slot, ColorSlot::Secondary);
    assert_eq!(g.get(cr + 6, cc).slot, ColorSlot::Primary);
}

#[test]
fn stripes_alternate_every_width_columns() {
    let mut g = grid(400.0, 100.0);
    Pattern::Stripes { width: 4 }.apply(&mut g);
    for (_, c, cell) in g.iter() {
        assert_eq!(cell.slot, ColorSlot::from_parity(c / 4));
    }
}

#[test]
fn blocks_tile_in_squares() {
    let mut g = grid(400.0, 400.0);
    Pattern::Blocks { size: 6 }.apply(&mut g);
    assert_eq!(g.get(5, 5).slot, ColorSlot::Primary);
    assert_eq!(g.get(5, 6).slot, ColorSlot::Secondary);
    assert_eq!(g.get(6, 6).slot, ColorSlot::Primary);
}

#[test]
fn triangle_wave_rotates_orientation_by_period() {
    let mut g = grid(400.0, 400.0);
    Pattern::TriangleWave { period: 3 }.apply(&mut g);
    assert!(g.iter().all(|(_, _, c)| c.shape == Shape::Triangle));
    assert_eq!(g.get(0, 0).orientation, Orientation::NorthEast);
    assert_eq!(g.get(0, 3).orientation, Orientation::SouthEast);
    assert_eq!(g.get(3, 3).orientation, Orientation::SouthWest);
    assert_eq!(g.get(4, 5).orientation, Orientation::NorthWest);
    assert_eq!(g.get(6, 6).orientation, Orientation::NorthEast);
}

#[test]
fn zero_parameters_do_not_divide_by_zero() {
    let mut g = grid(100.0, 100.0);
    for p in [
        Pattern::Blocks { size: 0 },
        Pattern::Rings { thickness: 0 },
        Pattern::TriangleWave { period: 0 },
        Pattern::Stripes { width: 0 },
    ] {
        p.apply(&mut g);
    }
}

#[test]
fn global_shift_covers_all_eight_layouts_with_ranged_params() {
    let params = PatternParams::default();
    let mut rng = StdRng::seed_from_u64(11);
    let mut names = HashSet::new();
    for _ in 0..500 {
        let p = Pattern::global_shift(&mut rng, &params);
        match p {
            Pattern::Blocks { size } => assert!((6..12).contains(&size)),
            Pattern::Rings { thickness } => assert!((3..6).contains(&thickness)),
            Pattern::TriangleWave { period } => assert!((3..7).contains(&period)),
            Pattern::Stripes { .. } => panic!("stripes are not a global layout"),
            _ => {}
        }
        names.insert(p.name());
    }
    assert_eq!(names.len(), 8);
}

#[test]
fn entrance_split_draws_from_four_two_block_layouts() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut seen = HashSet::new();
    for _ in 0..200 {
        seen.insert(Pattern::entrance_split(&mut rng));
    }
    let expected: HashSet<_> = [
        Pattern::HalfSplitHorizontal,
        Pattern::HalfSplitVertical,
        Pattern::DiagonalSplit,
        Pattern::Quadrants,
    ]
    .into_iter()
    .collect();
    assert_eq!(seen, expected);
}
