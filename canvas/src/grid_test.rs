use super::*;
use crate::consts::{GRID_CELLS, GRID_SIZE};

#[test]
fn default_grid_is_all_white() {
    let grid = Grid::default();
    assert_eq!(grid.len(), GRID_CELLS);
    assert_eq!(grid.get(0).expect("cell"), 0);
    assert_eq!(grid.get(GRID_CELLS - 1).expect("cell"), 0);
}

#[test]
fn filled_sets_every_cell() {
    let grid = Grid::filled(7).expect("fill");
    assert!(grid.cells().all(|(_, c)| c == 7));
}

#[test]
fn filled_rejects_invalid_color() {
    assert_eq!(Grid::filled(10), Err(GridError::InvalidColor(10)));
}

#[test]
fn set_changes_only_the_target_cell() {
    let grid = Grid::default();
    let next = grid.set(4_242, 3).expect("set");
    assert_eq!(next.get(4_242).expect("cell"), 3);
    for (index, color) in next.cells() {
        if index != 4_242 {
            assert_eq!(color, 0, "cell {index} should be untouched");
        }
    }
}

#[test]
fn set_leaves_the_original_snapshot_unchanged() {
    let grid = Grid::default();
    let _next = grid.set(17, 9).expect("set");
    assert_eq!(grid.get(17).expect("cell"), 0);
}

#[test]
fn set_rejects_out_of_range_index() {
    let grid = Grid::default();
    assert_eq!(grid.set(GRID_CELLS, 1), Err(GridError::OutOfRange(GRID_CELLS)));
}

#[test]
fn set_rejects_invalid_color() {
    let grid = Grid::default();
    assert_eq!(grid.set(0, 10), Err(GridError::InvalidColor(10)));
}

#[test]
fn get_rejects_out_of_range_index() {
    let grid = Grid::default();
    assert_eq!(grid.get(GRID_CELLS), Err(GridError::OutOfRange(GRID_CELLS)));
}

#[test]
fn from_digits_round_trips_cell_values() {
    let mut data = "0".repeat(GRID_CELLS);
    data.replace_range(42..43, "3");
    data.replace_range((GRID_CELLS - 1)..GRID_CELLS, "9");
    let grid = Grid::from_digits(&data).expect("parse");
    assert_eq!(grid.get(42).expect("cell"), 3);
    assert_eq!(grid.get(GRID_CELLS - 1).expect("cell"), 9);
    assert_eq!(grid.get(0).expect("cell"), 0);
}

#[test]
fn from_digits_rejects_wrong_length() {
    assert_eq!(Grid::from_digits("123"), Err(GridError::BadSnapshotLength(3)));
}

#[test]
fn from_digits_rejects_non_digit() {
    let mut data = "0".repeat(GRID_CELLS);
    data.replace_range(0..1, "x");
    assert!(matches!(Grid::from_digits(&data), Err(GridError::InvalidColor(_))));
}

#[test]
fn color_counts_sum_to_grid_size() {
    let grid = Grid::default().set(0, 1).expect("set").set(1, 1).expect("set");
    let counts = grid.color_counts();
    assert_eq!(counts[1], 2);
    assert_eq!(counts[0], (GRID_CELLS - 2) as u32);
    assert_eq!(counts.iter().sum::<u32>(), GRID_CELLS as u32);
}

#[test]
fn row_and_col_decompose_an_index() {
    let index = 42 * GRID_SIZE + 7;
    assert_eq!(row_of(index), 42);
    assert_eq!(col_of(index), 7);
}

#[test]
fn clone_is_a_shared_snapshot() {
    let grid = Grid::filled(5).expect("fill");
    let alias = grid.clone();
    assert_eq!(grid, alias);
}
