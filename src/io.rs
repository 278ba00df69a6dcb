//! Sparse cell-list format.
//!
//! The first line holds `width height`; every following line names one live
//! cell as `y x` (row first), zero-indexed:
//!
//! ```text
//! 5 5
//! 0 1
//! 1 2
//! 2 0
//! 2 1
//! 2 2
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::Grid;

/// Parses a field from the sparse format, failing on the first bad line.
pub fn parse(data: &str) -> Result<Grid> {
    let mut lines = data.lines().enumerate().map(|(i, line)| (i + 1, line));

    let (width, height) = match lines.next() {
        Some((_, line)) => parse_pair(line).ok_or(Error::InvalidHeader { line: 1 })?,
        None => return Err(Error::InvalidHeader { line: 1 }),
    };
    let mut grid = Grid::new(width, height)?;

    for (line_no, line) in lines {
        let (y, x) = parse_pair(line).ok_or(Error::InvalidCellLine { line: line_no })?;
        grid.set_live(x, y)?;
    }
    debug!(width, height, population = grid.population(), "parsed field");
    Ok(grid)
}

/// Serializes a field into the sparse format, cells in row-major order.
pub fn write(grid: &Grid) -> String {
    let mut output = format!("{} {}\n", grid.width(), grid.height());
    for (x, y) in grid.live_cells() {
        output.push_str(&format!("{} {}\n", y, x));
    }
    output
}

pub fn load(path: impl AsRef<Path>) -> Result<Grid> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading field");
    parse(&fs::read_to_string(path)?)
}

pub fn save(grid: &Grid, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), "saving field");
    fs::write(path, write(grid))?;
    Ok(())
}

/// Exactly two whitespace-separated non-negative integers.
fn parse_pair(line: &str) -> Option<(usize, usize)> {
    let mut tokens = line.split_whitespace();
    let a = tokens.next()?.parse().ok()?;
    let b = tokens.next()?.parse().ok()?;
    match tokens.next() {
        Some(_) => None,
        None => Some((a, b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLIDER: &str = "5 5\n0 1\n1 2\n2 0\n2 1\n2 2\n";

    #[test]
    fn parse_glider() {
        let grid = parse(GLIDER).unwrap();
        assert_eq!(grid.size(), (5, 5));
        assert_eq!(
            grid.live_cells().collect::<Vec<_>>(),
            [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn write_is_row_major() {
        let grid = Grid::from_cells(4, 3, [(3, 2), (0, 0), (2, 0)]).unwrap();
        assert_eq!(write(&grid), "4 3\n0 0\n0 2\n2 3\n");
    }

    #[test]
    fn write_parse_identity() {
        assert_eq!(write(&parse(GLIDER).unwrap()), GLIDER);
    }

    #[test]
    fn header_errors() {
        for data in ["", "5\n", "a 5\n", "-1 5\n", "5 5 5\n"] {
            let err = parse(data).unwrap_err();
            assert!(matches!(err, Error::InvalidHeader { line: 1 }), "{:?}: {:?}", data, err);
        }
        assert!(matches!(parse("0 4\n"), Err(Error::InvalidDimension { width: 0, height: 4 })));
    }

    #[test]
    fn huge_header_is_rejected() {
        assert!(matches!(
            parse("18446744073709551615 1\n0 0\n"),
            Err(Error::InvalidDimension { height: 1, .. })
        ));
        assert!(matches!(
            parse("4611686018427387904 4611686018427387904\n"),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn cell_line_errors() {
        let cases = [
            ("3 3\n0 0\n-1 2\n", 3),
            ("3 3\n1 x\n", 2),
            ("3 3\n0 0\n1 1\n2\n", 4),
            ("3 3\n\n", 2),
            ("3 3\n1 1 1\n", 2),
            ("3 3\n1.5 1\n", 2),
        ];
        for (data, expected) in cases {
            match parse(data) {
                Err(Error::InvalidCellLine { line }) => assert_eq!(line, expected, "{:?}", data),
                other => panic!("{:?}: unexpected {:?}", data, other),
            }
        }
    }

    #[test]
    fn cell_outside_declared_size() {
        // `y x` order: x = 3 does not fit into width 3
        assert!(matches!(
            parse("3 5\n4 3\n"),
            Err(Error::OutOfBounds { x: 3, y: 4, width: 3, height: 5 })
        ));
        assert!(parse("3 5\n4 2\n").is_ok());
    }

    #[test]
    fn crlf_lines() {
        let grid = parse("2 2\r\n1 0\r\n").unwrap();
        assert!(grid.is_live(0, 1).unwrap());
    }
}
