use std::collections::HashSet;
use std::path::PathBuf;

use bounded_life::{io, Error, Grid};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("bounded-life-{}-{}", std::process::id(), name))
}

fn live_set(grid: &Grid) -> HashSet<(usize, usize)> {
    grid.live_cells().collect()
}

#[test]
fn round_trip_random_fields() {
    for (w, h, seed) in [(1, 1, 1), (3, 9, 2), (40, 25, 3), (64, 1, 4)] {
        let grid = Grid::random(w, h, Some(seed), 0.35).unwrap();
        let reloaded = io::parse(&io::write(&grid)).unwrap();
        assert_eq!(reloaded.size(), grid.size());
        assert_eq!(live_set(&reloaded), live_set(&grid));
        assert_eq!(reloaded, grid);
    }
}

#[test]
fn round_trip_after_ticks() {
    let mut grid = Grid::random(30, 20, Some(11), 0.3).unwrap();
    grid.tick(15);
    let reloaded = io::parse(&io::write(&grid)).unwrap();
    assert_eq!(reloaded, grid);
}

#[test]
fn unordered_input_is_accepted() {
    let grid = io::parse("4 4\n3 3\n0 1\n3 0\n0 1\n").unwrap();
    assert_eq!(io::write(&grid), "4 4\n0 1\n3 0\n3 3\n");
}

#[test]
fn save_and_load_file() {
    let path = temp_path("blinker.txt");
    let grid = Grid::from_cells(5, 3, [(1, 1), (2, 1), (3, 1)]).unwrap();

    io::save(&grid, &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "5 3\n1 1\n1 2\n1 3\n");
    let loaded = io::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded, grid);
}

#[test]
fn load_missing_file() {
    let err = io::load(temp_path("does-not-exist.txt")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert_eq!(err.kind(), "Io");
}

#[test]
fn malformed_lines_name_their_line() {
    let cases = [
        ("6 6\n1 1\n2 -2\n", 3),
        ("6 6\nfoo 1\n", 2),
        ("6 6\n1 1\n2 2\n3\n", 4),
    ];
    for (data, expected) in cases {
        let err = io::parse(data).unwrap_err();
        assert_eq!(err.kind(), "InvalidCellLine");
        assert_eq!(err.to_string(), format!("invalid cell on line {}", expected));
    }
}

#[test]
fn failed_load_leaves_output_untouched() {
    let path = temp_path("untouched.txt");
    std::fs::write(&path, "3 3\n0 0\n0 zero\n").unwrap();

    let err = io::load(&path).unwrap_err();
    let contents = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(err, Error::InvalidCellLine { line: 3 }));
    assert_eq!(contents, "3 3\n0 0\n0 zero\n");
}
