#![warn(clippy::all)]

//! Conway's Game of Life (B3/S23) on a bounded field surrounded by a
//! permanently dead border.

pub mod config;
pub mod engine;
mod error;
mod grid;
pub mod io;
mod strategy;

pub use config::Config;
pub use engine::{next_state, DoubleBufferEngine, Engine, NaiveEngine, RowBufferEngine};
pub use error::{Error, Result};
pub use grid::{Grid, LiveCells};
pub use strategy::{evolve, Strategy};
