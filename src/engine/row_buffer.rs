use super::{compute_row, Engine};
use crate::Grid;

/// Updates the field in place, holding back one computed row at a time.
///
/// Row `y` of the next generation depends on rows `y - 1..=y + 1` of the
/// current one, so once row `y` is computed, row `y - 1` is no longer read and
/// its pending result can be written over it. The last pending row is
/// flushed after the scan.
#[derive(Default)]
pub struct RowBufferEngine {
    computed: Vec<bool>,
    pending: Vec<bool>,
    /// Stored index of the row held in `pending`, if any.
    pending_row: Option<usize>,
}

impl RowBufferEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn flush(&mut self, grid: &mut Grid) {
        if let Some(y) = self.pending_row.take() {
            grid.commit_row(y, &self.pending);
        }
    }
}

impl Engine for RowBufferEngine {
    fn step(&mut self, grid: &mut Grid) {
        let stride = grid.stride();
        if self.computed.len() != stride {
            self.computed = vec![false; stride];
            self.pending = vec![false; stride];
        }
        debug_assert!(self.pending_row.is_none());

        for y in 1..=grid.height() {
            compute_row(grid, y, &mut self.computed);
            self.flush(grid);
            std::mem::swap(&mut self.computed, &mut self.pending);
            self.pending_row = Some(y);
        }
        self.flush(grid);
    }
}
