//! Whole-grid layouts applied by the mutation engine.
//!
//! Each variant is a pure function of `(row, col, dims)`. Randomized
//! parameters are drawn once when the pattern is chosen, so applying the same
//! `Pattern` value twice always yields the same grid.

use crate::config::PatternParams;
use crate::grid::{Cell, CellGrid, ColorSlot, GridDims, Orientation};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Top half primary, bottom half secondary.
    HalfSplitHorizontal,
    /// Left half primary, right half secondary.
    HalfSplitVertical,
    /// Primary strictly below the main diagonal.
    DiagonalSplit,
    Checkerboard,
    Blocks { size: usize },
    /// Rings around the grid centre.
    Rings { thickness: usize },
    /// Top-left and bottom-right quadrants primary.
    Quadrants,
    /// Every cell a triangle; orientation rotates every `period` diagonals.
    TriangleWave { period: usize },
    /// Vertical stripes `width` columns wide.
    Stripes { width: usize },
}

impl Pattern {
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::HalfSplitHorizontal => "half-split-horizontal",
            Pattern::HalfSplitVertical => "half-split-vertical",
            Pattern::DiagonalSplit => "diagonal-split",
            Pattern::Checkerboard => "checkerboard",
            Pattern::Blocks { .. } => "blocks",
            Pattern::Rings { .. } => "rings",
            Pattern::Quadrants => "quadrants",
            Pattern::TriangleWave { .. } => "triangle-wave",
            Pattern::Stripes { .. } => "stripes",
        }
    }

    /// Cell this pattern places at `(row, col)` on a grid of `dims`.
    pub fn cell_at(&self, row: usize, col: usize, dims: GridDims) -> Cell {
        let mid_row = dims.rows / 2;
        let mid_col = dims.cols / 2;
        match *self {
            Pattern::HalfSplitHorizontal => Cell::square(split(row < mid_row)),
            Pattern::HalfSplitVertical => Cell::square(split(col < mid_col)),
            Pattern::DiagonalSplit => Cell::square(split(row > col)),
            Pattern::Checkerboard => Cell::square(ColorSlot::from_parity(row + col)),
            Pattern::Blocks { size } => {
                let size = size.max(1);
                Cell::square(ColorSlot::from_parity(row / size + col / size))
            }
            Pattern::Rings { thickness } => {
                let dr = row as f32 - mid_row as f32;
                let dc = col as f32 - mid_col as f32;
                let dist = (dr * dr + dc * dc).sqrt().floor() as usize;
                Cell::square(ColorSlot::from_parity(dist / thickness.max(1)))
            }
            Pattern::Quadrants => {
                let top_left = row < mid_row && col < mid_col;
                let bottom_right = row >= mid_row && col >= mid_col;
                Cell::square(split(top_left || bottom_right))
            }
            Pattern::TriangleWave { period } => Cell::triangle(
                Orientation::from_index((row + col) / period.max(1)),
                ColorSlot::from_parity(row + col),
            ),
            Pattern::Stripes { width } => {
                Cell::square(ColorSlot::from_parity(col / width.max(1)))
            }
        }
    }

    /// Repopulates the whole grid in a single pass.
    pub fn apply(&self, grid: &mut CellGrid) {
        let dims = grid.dims();
        grid.repopulate(|row, col| self.cell_at(row, col, dims));
    }

    /// Uniform choice over the eight global layouts, drawing any size
    /// parameter from `params`.
    pub fn global_shift<R: Rng + ?Sized>(rng: &mut R, params: &PatternParams) -> Pattern {
        match rng.gen_range(0..8) {
            0 => Pattern::HalfSplitHorizontal,
            1 => Pattern::HalfSplitVertical,
            2 => Pattern::DiagonalSplit,
            3 => Pattern::Checkerboard,
            4 => Pattern::Blocks {
                size: params.block_size.sample(rng),
            },
            5 => Pattern::Rings {
                thickness: params.ring_thickness.sample(rng),
            },
            6 => Pattern::Quadrants,
            _ => Pattern::TriangleWave {
                period: params.wave_period.sample(rng),
            },
        }
    }

    /// Uniform choice over the four two-block entrance layouts.
    pub fn entrance_split<R: Rng + ?Sized>(rng: &mut R) -> Pattern {
        match rng.gen_range(0..4) {
            0 => Pattern::HalfSplitHorizontal,
            1 => Pattern::HalfSplitVertical,
            2 => Pattern::DiagonalSplit,
            _ => Pattern::Quadrants,
        }
    }

    pub fn stripes<R: Rng + ?Sized>(rng: &mut R, params: &PatternParams) -> Pattern {
        Pattern::Stripes {
            width: params.stripe_width.sample(rng),
        }
    }
}

#[inline]
fn split(primary: bool) -> ColorSlot {
    if primary {
        ColorSlot::Primary
    } else {
        ColorSlot::Secondary
    }
}
