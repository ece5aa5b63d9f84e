//! Cell grid covering the viewport.
//!
//! The grid is always fully populated. It is rebuilt from scratch on resize
//! and repopulated wholesale by pattern application; there is no API for
//! patching a single cell.

/// Geometric primitive used to draw a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Square,
    Triangle,
}

/// Direction of the diagonal split for triangle cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::NorthEast,
        Orientation::SouthEast,
        Orientation::SouthWest,
        Orientation::NorthWest,
    ];

    /// Maps any index onto the four orientations, wrapping modulo 4.
    #[inline]
    pub fn from_index(i: usize) -> Self {
        Self::ALL[i % 4]
    }
}

/// Which of the two palette colours a cell uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    Primary,
    Secondary,
}

impl ColorSlot {
    /// Slot 0 for even values, slot 1 for odd ones.
    #[inline]
    pub fn from_parity(v: usize) -> Self {
        if v % 2 == 0 {
            ColorSlot::Primary
        } else {
            ColorSlot::Secondary
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            ColorSlot::Primary => 0,
            ColorSlot::Secondary => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub shape: Shape,
    /// Only meaningful for `Shape::Triangle`.
    pub orientation: Orientation,
    pub slot: ColorSlot,
}

impl Cell {
    #[inline]
    pub fn square(slot: ColorSlot) -> Self {
        Self {
            shape: Shape::Square,
            orientation: Orientation::NorthEast,
            slot,
        }
    }

    #[inline]
    pub fn triangle(orientation: Orientation, slot: ColorSlot) -> Self {
        Self {
            shape: Shape::Triangle,
            orientation,
            slot,
        }
    }
}

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDims {
    pub rows: usize,
    pub cols: usize,
}

impl GridDims {
    /// `ceil(side / cell) + 1` in each direction so partially visible cells
    /// at the right and bottom edges are always covered.
    pub fn for_viewport(viewport: Viewport, cell_size: f32) -> Self {
        assert!(
            cell_size.is_finite() && cell_size > 0.0,
            "cell size must be positive, got {cell_size}"
        );
        assert!(
            viewport.width.is_finite() && viewport.width > 0.0,
            "viewport width must be positive, got {}",
            viewport.width
        );
        assert!(
            viewport.height.is_finite() && viewport.height > 0.0,
            "viewport height must be positive, got {}",
            viewport.height
        );
        Self {
            rows: (viewport.height / cell_size).ceil() as usize + 1,
            cols: (viewport.width / cell_size).ceil() as usize + 1,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug)]
pub struct CellGrid {
    dims: GridDims,
    cells: Vec<Cell>,
    generation: u64,
}

impl CellGrid {
    pub fn new(viewport: Viewport, cell_size: f32) -> Self {
        let mut grid = Self {
            dims: GridDims { rows: 0, cols: 0 },
            cells: Vec::new(),
            generation: 0,
        };
        grid.rebuild(GridDims::for_viewport(viewport, cell_size));
        grid
    }

    /// Recomputes the dimensions and resets every cell to a checkerboard of
    /// squares. Prior content is discarded.
    pub fn resize(&mut self, viewport: Viewport, cell_size: f32) {
        self.rebuild(GridDims::for_viewport(viewport, cell_size));
        self.generation += 1;
    }

    fn rebuild(&mut self, dims: GridDims) {
        self.dims = dims;
        self.cells.clear();
        self.cells.reserve(dims.len());
        for row in 0..dims.rows {
            for col in 0..dims.cols {
                self.cells.push(Cell::square(ColorSlot::from_parity(row + col)));
            }
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Bumped on every resize.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Panics when `(row, col)` lies outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.dims.rows && col < self.dims.cols,
            "cell ({row}, {col}) out of range for {}x{} grid",
            self.dims.rows,
            self.dims.cols
        );
        self.cells[row * self.dims.cols + col]
    }

    /// Row-major iteration as `(row, col, cell)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.dims.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (i / cols, i % cols, *c))
    }

    /// Replaces every cell in one row-major pass.
    pub(crate) fn repopulate(&mut self, mut f: impl FnMut(usize, usize) -> Cell) {
        let cols = self.dims.cols;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = f(i / cols, i % cols);
        }
    }
}
