//! Grid tests - occupancy, bounds, and row clearing

use blockfall::core::{score_for_lines, Grid};
use blockfall::types::GridConfig;

fn grid(cols: u16, rows: u16) -> Grid {
    Grid::new(GridConfig::new(cols, rows).unwrap())
}

fn fill_row(grid: &mut Grid, y: i16) {
    for x in 0..grid.cols() as i16 {
        grid.set_occupied(x, y, true);
    }
}

#[test]
fn test_grid_new_empty() {
    let g = grid(10, 20);
    assert_eq!(g.cols(), 10);
    assert_eq!(g.rows(), 20);
    assert_eq!(g.cells().len(), 200);
    assert_eq!(g.occupied_count(), 0);
    for y in 0..20 {
        for x in 0..10 {
            assert!(!g.is_occupied(x, y), "cell ({}, {}) should be empty", x, y);
        }
    }
}

#[test]
fn test_out_of_bounds_reads_as_occupied() {
    let g = grid(10, 20);
    assert!(g.is_occupied(-1, 0));
    assert!(g.is_occupied(10, 0));
    assert!(g.is_occupied(0, -1));
    assert!(g.is_occupied(0, 20));
    assert!(g.is_occupied(i16::MIN, i16::MAX));
}

#[test]
fn test_set_and_read_back() {
    let mut g = grid(10, 20);
    g.set_occupied(3, 7, true);
    assert!(g.is_occupied(3, 7));
    assert!(g.row(7)[3]);
    g.set_occupied(3, 7, false);
    assert!(!g.is_occupied(3, 7));
}

#[test]
#[should_panic(expected = "set_occupied(-1, 0)")]
fn test_out_of_range_write_is_fatal() {
    grid(10, 20).set_occupied(-1, 0, true);
}

#[test]
fn test_clear_nothing() {
    let mut g = grid(10, 20);
    g.set_occupied(0, 19, true);
    let before = g.clone();
    assert_eq!(g.clear_completed_rows(), 0);
    assert_eq!(g, before);
}

#[test]
fn test_clear_two_middle_rows_of_ten() {
    let mut g = grid(6, 10);
    // Partial rows above, between nothing, and below the full pair.
    g.set_occupied(0, 0, true);
    g.set_occupied(1, 1, true);
    fill_row(&mut g, 2);
    fill_row(&mut g, 3);
    g.set_occupied(5, 4, true);
    g.set_occupied(2, 9, true);
    g.set_occupied(3, 9, true);

    let cleared = g.clear_completed_rows();
    assert_eq!(cleared, 2);
    assert_eq!(score_for_lines(cleared), 4);

    // Rows 0 and 1 moved down by two; the top two rows are new and empty.
    assert!(g.row(0).iter().all(|&c| !c));
    assert!(g.row(1).iter().all(|&c| !c));
    assert_eq!(g.row(2), &[true, false, false, false, false, false]);
    assert_eq!(g.row(3), &[false, true, false, false, false, false]);
    // Rows below the cleared pair stay where they were.
    assert_eq!(g.row(4), &[false, false, false, false, false, true]);
    assert_eq!(g.row(9), &[false, false, true, true, false, false]);
    assert_eq!(g.occupied_count(), 5);
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut g = grid(4, 6);
    g.set_occupied(1, 0, true);
    fill_row(&mut g, 1);
    g.set_occupied(2, 2, true);
    fill_row(&mut g, 3);
    g.set_occupied(3, 4, true);

    assert_eq!(g.clear_completed_rows(), 2);
    assert_eq!(g.row(2), &[false, true, false, false]);
    assert_eq!(g.row(3), &[false, false, true, false]);
    assert_eq!(g.row(4), &[false, false, false, true]);
    assert_eq!(g.occupied_count(), 3);
}

#[test]
fn test_clear_whole_grid() {
    let mut g = grid(4, 4);
    for y in 0..4 {
        fill_row(&mut g, y);
    }
    assert_eq!(g.clear_completed_rows(), 4);
    assert_eq!(g.occupied_count(), 0);
}
