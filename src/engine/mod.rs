mod double_buffer;
mod naive;
mod row_buffer;

pub use double_buffer::DoubleBufferEngine;
pub use naive::NaiveEngine;
pub use row_buffer::RowBufferEngine;

use crate::Grid;

/// Engine advancing a [`Grid`] under the B3/S23 rule.
///
/// Every cell of a generation is computed from the previous generation only;
/// implementations differ in how they keep that snapshot around.
pub trait Engine {
    /// Advances the field by one generation.
    fn step(&mut self, grid: &mut Grid);

    /// Advances the field by `generations` generations; `0` leaves it untouched.
    fn tick(&mut self, grid: &mut Grid, generations: usize) {
        for _ in 0..generations {
            self.step(grid);
        }
    }
}

/// B3/S23: born with exactly three neighbours, survives with two or three.
#[inline]
pub fn next_state(alive: bool, neighbours: u8) -> bool {
    neighbours == 3 || (alive && neighbours == 2)
}

/// Computes the next state of stored row `y` into `dst`.
///
/// `dst` has the stored row length; only its playable part is written.
/// Relies on the dead border, so `y` must be in `1..=height`.
fn compute_row(grid: &Grid, y: usize, dst: &mut [bool]) {
    let (above, here, below) = (grid.row(y - 1), grid.row(y), grid.row(y + 1));
    for x in 1..=grid.width() {
        let neibs = above[x - 1] as u8
            + above[x] as u8
            + above[x + 1] as u8
            + here[x - 1] as u8
            + here[x + 1] as u8
            + below[x - 1] as u8
            + below[x] as u8
            + below[x + 1] as u8;
        dst[x] = next_state(here[x], neibs);
    }
}
