//! Placement tests - spawn, moves, and hard drop against the grid

use blockfall::core::{apply_move, hard_drop, shape_for, spawn, spawn_anchor, Grid, Piece};
use blockfall::types::{GridConfig, MoveKind, PieceKind};

fn grid() -> Grid {
    Grid::new(GridConfig::default())
}

fn marked(grid: &Grid, piece: &Piece) -> bool {
    piece.cells().iter().all(|&(x, y)| grid.is_occupied(x, y))
}

#[test]
fn test_o_spawns_in_columns_four_and_five() {
    let mut g = grid();
    let piece = spawn(&mut g, PieceKind::O).unwrap();
    let mut cols: Vec<i16> = piece.cells().iter().map(|&(x, _)| x).collect();
    cols.sort_unstable();
    cols.dedup();
    assert_eq!(cols, vec![4, 5]);
    assert_eq!(spawn_anchor(10, &shape_for(PieceKind::O)), (4, 0));
}

#[test]
fn test_every_kind_spawns_with_top_cell_on_row_zero() {
    for kind in PieceKind::ALL {
        let mut g = grid();
        let piece = spawn(&mut g, kind).unwrap();
        let top = piece.cells().iter().map(|&(_, y)| y).min().unwrap();
        assert_eq!(top, 0, "{:?}", kind);
        assert_eq!(g.occupied_count(), 4);
        assert!(marked(&g, &piece));
    }
}

#[test]
fn test_spawn_on_full_top_row_is_game_over() {
    let mut g = grid();
    for x in 0..10 {
        g.set_occupied(x, 0, true);
    }
    let before = g.clone();
    for kind in PieceKind::ALL {
        assert_eq!(spawn(&mut g, kind), None);
        assert_eq!(g, before);
    }
}

#[test]
fn test_translate_moves_anchor_only() {
    let mut g = grid();
    let piece = spawn(&mut g, PieceKind::L).unwrap();
    let out = apply_move(&mut g, piece, MoveKind::TranslateRight);
    assert!(out.moved);
    assert_eq!(out.piece.x, piece.x + 1);
    assert_eq!(out.piece.shape, piece.shape);
    assert!(marked(&g, &out.piece));
    assert_eq!(g.occupied_count(), 4);
}

#[test]
fn test_walls_and_floor_reject_moves() {
    let mut g = grid();
    let mut piece = spawn(&mut g, PieceKind::O).unwrap();

    for _ in 0..4 {
        piece = apply_move(&mut g, piece, MoveKind::TranslateLeft).piece;
    }
    let before = g.clone();
    let out = apply_move(&mut g, piece, MoveKind::TranslateLeft);
    assert!(!out.moved);
    assert_eq!(out.piece, piece);
    assert_eq!(g, before);

    for _ in 0..8 {
        piece = apply_move(&mut g, piece, MoveKind::TranslateRight).piece;
    }
    assert_eq!(piece.x, 8);
    assert!(!apply_move(&mut g, piece, MoveKind::TranslateRight).moved);

    let (landed, _) = hard_drop(&mut g, piece);
    let before = g.clone();
    let out = apply_move(&mut g, landed, MoveKind::TranslateDown);
    assert!(!out.moved);
    assert_eq!(g, before);
}

#[test]
fn test_blocked_move_is_idempotent() {
    let mut g = grid();
    let piece = spawn(&mut g, PieceKind::I).unwrap();
    g.set_occupied(piece.x + 1, piece.y, true);

    let before = g.clone();
    for _ in 0..5 {
        let out = apply_move(&mut g, piece, MoveKind::TranslateRight);
        assert!(!out.moved);
        assert_eq!(out.piece, piece);
        assert_eq!(g, before);
    }
}

#[test]
fn test_rotation_blocked_near_wall() {
    let mut g = grid();
    let mut piece = spawn(&mut g, PieceKind::I).unwrap();
    loop {
        let out = apply_move(&mut g, piece, MoveKind::TranslateLeft);
        if !out.moved {
            break;
        }
        piece = out.piece;
    }
    assert_eq!(piece.x, 0);
    piece = apply_move(&mut g, piece, MoveKind::TranslateRight).piece;

    // Clockwise turns the column into a row reaching x = -1.
    let before = g.clone();
    let out = apply_move(&mut g, piece, MoveKind::RotateCw);
    assert!(!out.moved);
    assert_eq!(g, before);

    // Counter-clockwise extends to the right instead and fits.
    let out = apply_move(&mut g, piece, MoveKind::RotateCcw);
    assert!(out.moved);
    let mut cols: Vec<i16> = out.piece.cells().iter().map(|&(x, _)| x).collect();
    cols.sort_unstable();
    assert_eq!(cols, vec![0, 1, 2, 3]);
}

#[test]
fn test_hard_drop_lands_on_bottom_row() {
    for kind in PieceKind::ALL {
        let mut g = grid();
        let piece = spawn(&mut g, kind).unwrap();
        let (landed, distance) = hard_drop(&mut g, piece);
        let bottom = landed.cells().iter().map(|&(_, y)| y).max().unwrap();
        assert_eq!(bottom, 19, "{:?}", kind);
        assert!(distance < 20);
        assert_eq!(landed.y, piece.y + distance as i16);
        assert_eq!(g.occupied_count(), 4);
        assert!(marked(&g, &landed));
    }
}

#[test]
fn test_hard_drop_stops_on_stack() {
    let mut g = grid();
    for x in 0..10 {
        g.set_occupied(x, 15, true);
    }
    let piece = spawn(&mut g, PieceKind::T).unwrap();
    let (landed, _) = hard_drop(&mut g, piece);
    let bottom = landed.cells().iter().map(|&(_, y)| y).max().unwrap();
    assert_eq!(bottom, 14);
}
