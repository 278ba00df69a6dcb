use std::fmt;

use crate::error::{Error, Result};

/// Cells of a bounded field, stored row-major together with a one-cell
/// border that is always dead.
///
/// Playable coordinates `(x, y)` satisfy `x < width` and `y < height`;
/// internally they live at `(x + 1, y + 1)`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Creates a blank `width x height` field.
    ///
    /// Fails with [`Error::InvalidDimension`] on a zero side or when the
    /// bordered storage does not fit into the address space.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = Self::storage_size(width, height).ok_or(Error::InvalidDimension { width, height })?;
        Ok(Self {
            cells: vec![false; len],
            width,
            height,
        })
    }

    /// Number of stored cells, border included, if the field can exist.
    fn storage_size(width: usize, height: usize) -> Option<usize> {
        if width == 0 || height == 0 {
            return None;
        }
        width
            .checked_add(2)?
            .checked_mul(height.checked_add(2)?)
            .filter(|&len| len <= isize::MAX as usize)
    }

    /// Cell state, or `None` outside of the playable area.
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.check_bounds(x, y).ok()?;
        Some(self.cells[self.index(x, y)])
    }

    /// Mutable cell state, or `None` outside of the playable area.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut bool> {
        self.check_bounds(x, y).ok()?;
        let idx = self.index(x, y);
        Some(&mut self.cells[idx])
    }

    /// Creates a field with the given cells alive, stopping at the first
    /// coordinate that does not fit.
    pub fn from_cells(
        width: usize,
        height: usize,
        cells: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self> {
        let mut grid = Self::new(width, height)?;
        for (x, y) in cells {
            grid.set_live(x, y)?;
        }
        Ok(grid)
    }

    /// Creates a field with random cells
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(width: usize, height: usize, seed: Option<u64>, fill_rate: f64) -> Result<Self> {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let mut result = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                let idx = result.index(x, y);
                result.cells[idx] = rng.gen_bool(fill_rate);
            }
        }
        Ok(result)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_live(&self, x: usize, y: usize) -> Result<bool> {
        self.check_bounds(x, y)?;
        Ok(self.cells[self.index(x, y)])
    }

    pub fn set_live(&mut self, x: usize, y: usize) -> Result<()> {
        self.set(x, y, true)
    }

    pub fn set(&mut self, x: usize, y: usize, state: bool) -> Result<()> {
        self.check_bounds(x, y)?;
        let idx = self.index(x, y);
        self.cells[idx] = state;
        Ok(())
    }

    /// Live playable cells in row-major order (`y` ascending, then `x`).
    pub fn live_cells(&self) -> LiveCells<'_> {
        LiveCells { grid: self, pos: 0 }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Returns `true` if no cell of the border is alive.
    pub fn border_is_dead(&self) -> bool {
        let stride = self.stride();
        let rows = self.cells.chunks_exact(stride);
        let last = self.height + 1;
        rows.enumerate().all(|(y, row)| {
            if y == 0 || y == last {
                row.iter().all(|&c| !c)
            } else {
                !row[0] && !row[stride - 1]
            }
        })
    }

    /// Number of stored cells per row, border included.
    pub(crate) fn stride(&self) -> usize {
        self.width + 2
    }

    /// Stored row `y` (border coordinates, so `0..=height + 1`).
    pub(crate) fn row(&self, y: usize) -> &[bool] {
        let stride = self.stride();
        &self.cells[y * stride..(y + 1) * stride]
    }

    /// Overwrites the playable part of stored row `y` with the playable part
    /// of `src`; border columns are left untouched.
    pub(crate) fn commit_row(&mut self, y: usize, src: &[bool]) {
        debug_assert!(y >= 1 && y <= self.height);
        let stride = self.stride();
        let start = y * stride + 1;
        self.cells[start..start + self.width].copy_from_slice(&src[1..=self.width]);
    }

    /// Replaces the whole storage with `other`, which must have the same
    /// layout and a dead border.
    pub(crate) fn swap_cells(&mut self, other: &mut Vec<bool>) {
        debug_assert_eq!(other.len(), self.cells.len());
        std::mem::swap(&mut self.cells, other);
    }

    pub(crate) fn storage_len(&self) -> usize {
        self.cells.len()
    }

    fn index(&self, x: usize, y: usize) -> usize {
        x + 1 + (y + 1) * self.stride()
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<()> {
        if x < self.width && y < self.height {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 1..=self.height {
            for &cell in &self.row(y)[1..=self.width] {
                f.write_str(if cell { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the live playable cells of a [`Grid`], see [`Grid::live_cells`].
#[derive(Clone)]
pub struct LiveCells<'a> {
    grid: &'a Grid,
    /// Next playable position to inspect, `x + y * width`.
    pos: usize,
}

impl Iterator for LiveCells<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (w, h) = self.grid.size();
        while self.pos < w * h {
            let (x, y) = (self.pos % w, self.pos / w);
            self.pos += 1;
            if self.grid.cells[self.grid.index(x, y)] {
                return Some((x, y));
            }
        }
        None
    }
}
