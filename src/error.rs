use thiserror::Error;

/// Errors produced while building, accessing, loading or saving a grid.
#[derive(Debug, Error)]
pub enum Error {
    /// Width or height is zero.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// The first line does not hold exactly two non-negative integers.
    #[error("invalid size header on line {line}")]
    InvalidHeader { line: usize },

    /// A coordinate line does not hold exactly two non-negative integers.
    #[error("invalid cell on line {line}")]
    InvalidCellLine { line: usize },

    #[error("cell ({x}, {y}) is outside of the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Stable name of the error kind, reported by the command driver.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidDimension { .. } => "InvalidDimension",
            Self::InvalidHeader { .. } => "InvalidHeader",
            Self::InvalidCellLine { .. } => "InvalidCellLine",
            Self::OutOfBounds { .. } => "OutOfBounds",
            Self::Io(_) => "Io",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
