use super::{next_state, Engine};
use crate::Grid;

/// Reference engine: bounds-checks every neighbour instead of relying on the
/// dead border, and goes through the public accessors only. Neighbours past
/// an edge read as `None` from [`Grid::get`] and are not counted.
#[derive(Default)]
pub struct NaiveEngine {
    cells_next: Vec<bool>,
}

impl NaiveEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn count_neibs(grid: &Grid, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for dy in -1isize..=1 {
            for dx in -1isize..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let neighbour = x
                    .checked_add_signed(dx)
                    .zip(y.checked_add_signed(dy))
                    .and_then(|(nx, ny)| grid.get(nx, ny));
                if neighbour == Some(true) {
                    count += 1;
                }
            }
        }
        count
    }
}

impl Engine for NaiveEngine {
    fn step(&mut self, grid: &mut Grid) {
        let (w, h) = grid.size();
        let positions = (0..h).flat_map(|y| (0..w).map(move |x| (x, y)));
        self.cells_next.clear();
        for (x, y) in positions.clone() {
            let alive = grid.get(x, y) == Some(true);
            let neibs = Self::count_neibs(grid, x, y);
            self.cells_next.push(next_state(alive, neibs));
        }
        for ((x, y), &state) in positions.zip(&self.cells_next) {
            if let Some(cell) = grid.get_mut(x, y) {
                *cell = state;
            }
        }
    }
}
