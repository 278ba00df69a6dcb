use std::fmt;
use std::str::FromStr;

use crate::engine::{DoubleBufferEngine, Engine, NaiveEngine, RowBufferEngine};
use crate::Grid;

/// Describes the strategy of updating the field.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Strategy {
    /// Next generation is written into a second field which is then swapped in.
    DoubleBuffer,
    /// Field is updated in place, one computed row behind the scan.
    #[default]
    RowBuffer,
    /// Bounds-checked reference without the sentinel border.
    Naive,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Self::DoubleBuffer, Self::RowBuffer, Self::Naive];

    pub fn engine(self) -> Box<dyn Engine> {
        match self {
            Self::DoubleBuffer => Box::new(DoubleBufferEngine::new()),
            Self::RowBuffer => Box::new(RowBufferEngine::new()),
            Self::Naive => Box::new(NaiveEngine::new()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::DoubleBuffer => "double",
            Self::RowBuffer => "row",
            Self::Naive => "naive",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s.to_ascii_lowercase())
            .ok_or_else(|| format!("unknown strategy: {s} (expected double, row, or naive)"))
    }
}

impl Grid {
    /// Advances the field in place by `generations` generations.
    pub fn tick(&mut self, generations: usize) {
        self.tick_with(Strategy::default(), generations);
    }

    pub fn tick_with(&mut self, strategy: Strategy, generations: usize) {
        strategy.engine().tick(self, generations);
    }
}

/// Returns the field `generations` generations after `grid`, leaving `grid` as is.
pub fn evolve(grid: &Grid, generations: usize, strategy: Strategy) -> Grid {
    let mut next = grid.clone();
    next.tick_with(strategy, generations);
    next
}
