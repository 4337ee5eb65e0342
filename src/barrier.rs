//! The destructible barrier: a fixed grid of occupied/empty cells laid over
//! the middle of the field.
//!
//! Lookups outside the grid are never a fault.  They read as empty and
//! clearing them does nothing, so callers can map any field position
//! straight onto the grid without range checks of their own.

use rand::Rng;

use crate::consts::{
    BARRIER_CELL_HEIGHT, BARRIER_CELL_WIDTH, BARRIER_COLS, BARRIER_DENSITY, BARRIER_ORIGIN_X,
    BARRIER_ROWS,
};

#[derive(Clone, Debug, PartialEq)]
pub struct BarrierGrid {
    cells: Vec<[bool; BARRIER_COLS]>,
}

impl BarrierGrid {
    /// A grid with every cell occupied.
    pub fn full() -> Self {
        BarrierGrid {
            cells: vec![[true; BARRIER_COLS]; BARRIER_ROWS],
        }
    }

    /// A grid with every cell empty.
    pub fn empty() -> Self {
        BarrierGrid {
            cells: vec![[false; BARRIER_COLS]; BARRIER_ROWS],
        }
    }

    /// Fresh grid for a new round: each cell is drawn independently and
    /// survives with probability `BARRIER_DENSITY`.
    pub fn reinitialize(rng: &mut impl Rng) -> Self {
        let mut grid = Self::empty();
        for row in grid.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = rng.gen_bool(BARRIER_DENSITY);
            }
        }
        grid
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Set a single cell.  Out-of-range coordinates are ignored.
    pub fn set(&mut self, row: usize, col: usize, occupied: bool) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = occupied;
        }
    }

    /// Clear a cell.  Returns `true` only if an occupied cell was cleared.
    pub fn clear(&mut self, row: usize, col: usize) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) if *cell => {
                *cell = false;
                true
            }
            _ => false,
        }
    }

    /// Map a field position onto `(row, col)`, or `None` when the position
    /// lies outside the grid.
    pub fn cell_at(x: f32, y: f32) -> Option<(usize, usize)> {
        let col = ((x - BARRIER_ORIGIN_X) / BARRIER_CELL_WIDTH).floor();
        let row = (y / BARRIER_CELL_HEIGHT).floor();
        if col < 0.0 || row < 0.0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row < BARRIER_ROWS && col < BARRIER_COLS {
            Some((row, col))
        } else {
            None
        }
    }

    /// Clear whatever cell lies under a field position.
    pub fn clear_at(&mut self, x: f32, y: f32) -> bool {
        match Self::cell_at(x, y) {
            Some((row, col)) => self.clear(row, col),
            None => false,
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .map(|r| r.iter().filter(|&&c| c).count())
            .sum()
    }

    /// Rows top to bottom, for the renderer.
    pub fn rows(&self) -> impl Iterator<Item = &[bool; BARRIER_COLS]> {
        self.cells.iter()
    }
}

impl Default for BarrierGrid {
    fn default() -> Self {
        Self::full()
    }
}
