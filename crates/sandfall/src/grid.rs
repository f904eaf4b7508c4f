//! Grid store: one contiguous arena of cells addressed by `y * width + x`.

use crate::cell::{Cell, Color, Species};
use crate::error::SimError;

/// Out-of-bounds reads return `None`, writes and swaps are no-ops.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    background: Color,
    cells: Vec<Cell>,
}

impl Grid {
    /// # Errors
    ///
    /// `SimError::Allocation` if the backing store cannot be reserved.
    pub fn new(width: usize, height: usize, background: Color) -> Result<Self, SimError> {
        let len = width
            .checked_mul(height)
            .ok_or(SimError::Allocation { cells: usize::MAX })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| SimError::Allocation { cells: len })?;
        cells.resize(len, Cell::empty(background));
        Ok(Self {
            width,
            height,
            background,
            cells,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    /// Linear index of `(x, y)`. Columns never wrap into the neighbouring row.
    #[must_use]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.width + x as usize)
    }

    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    #[must_use]
    pub fn cell(&self, idx: usize) -> Option<&Cell> {
        self.cells.get(idx)
    }

    pub fn cell_mut(&mut self, idx: usize) -> Option<&mut Cell> {
        self.cells.get_mut(idx)
    }

    /// Exchange the contents of two cells.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a < self.cells.len() && b < self.cells.len() {
            self.cells.swap(a, b);
        }
    }

    /// Reset every cell to background Empty without reallocating.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::empty(self.background));
    }

    #[must_use]
    pub fn count(&self, species: Species) -> usize {
        self.cells.iter().filter(|c| c.species == species).count()
    }
}
