use super::{compute_row, Engine};
use crate::Grid;

/// Writes the next generation into a second full field and swaps it in.
#[derive(Default)]
pub struct DoubleBufferEngine {
    cells_next: Vec<bool>,
    size: (usize, usize),
}

impl DoubleBufferEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for DoubleBufferEngine {
    fn step(&mut self, grid: &mut Grid) {
        // only the playable part is ever written, so a buffer laid out for
        // this size keeps a dead border across swaps
        if self.size != grid.size() {
            self.cells_next = vec![false; grid.storage_len()];
            self.size = grid.size();
        }
        let stride = grid.stride();
        for y in 1..=grid.height() {
            let dst = &mut self.cells_next[y * stride..(y + 1) * stride];
            compute_row(grid, y, dst);
        }
        grid.swap_cells(&mut self.cells_next);
    }
}
