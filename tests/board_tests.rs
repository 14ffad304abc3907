//! Board tests - placement, clears and fit scanning through the public API

use lumelines::core::{catalog, piece_by_id, Board};
use lumelines::types::{Cell, Point, BOARD_SIZE};

fn fill_row_except(board: &mut Board, y: i8, skip: &[i8]) {
    for x in 0..BOARD_SIZE as i8 {
        if !skip.contains(&x) {
            board.set(x, y, Cell::Filled);
        }
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.size(), BOARD_SIZE);
    assert_eq!(board.filled_count(), 0);
    for y in 0..BOARD_SIZE as i8 {
        for x in 0..BOARD_SIZE as i8 {
            assert_eq!(board.get(x, y), Some(Cell::Empty), "cell ({x}, {y})");
        }
    }
}

#[test]
fn test_board_out_of_bounds() {
    let mut board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, 10), None);
    assert!(!board.set(10, 0, Cell::Filled));
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_can_place_edges() {
    let board = Board::new();
    let line4 = piece_by_id("line_4_h").unwrap();
    assert!(board.can_place(line4, Point::new(6, 9)));
    assert!(!board.can_place(line4, Point::new(7, 9)));
    assert!(!board.can_place(line4, Point::new(-1, 0)));
}

#[test]
fn test_can_place_rejects_overlap() {
    let mut board = Board::new();
    board.set(4, 4, Cell::Filled);
    let square = piece_by_id("square_2").unwrap();
    assert!(!board.can_place(square, Point::new(3, 3)));
    assert!(board.can_place(square, Point::new(5, 5)));
}

#[test]
fn test_row_and_column_clear_together() {
    let mut board = Board::new();
    fill_row_except(&mut board, 0, &[0]);
    for y in 1..BOARD_SIZE as i8 {
        board.set(0, y, Cell::Filled);
    }

    let dot = piece_by_id("dot").unwrap();
    let placement = board.apply_placement(dot, Point::new(0, 0)).unwrap();
    assert_eq!(placement.rows.as_slice(), &[0]);
    assert_eq!(placement.cols.as_slice(), &[0]);
    assert_eq!(placement.lines_cleared(), 2);
    assert_eq!(placement.placed.filled_count(), 19);
    assert_eq!(placement.board.filled_count(), 0);
}

#[test]
fn test_clear_leaves_other_cells() {
    let mut board = Board::new();
    fill_row_except(&mut board, 9, &[9]);
    board.set(3, 5, Cell::Filled);

    let dot = piece_by_id("dot").unwrap();
    let placement = board.apply_placement(dot, Point::new(9, 9)).unwrap();
    assert_eq!(placement.lines_cleared(), 1);
    assert_eq!(placement.board.filled_count(), 1);
    assert!(placement.board.is_occupied(3, 5));
}

#[test]
fn test_failed_placement_leaves_board() {
    let mut board = Board::new();
    board.set(0, 0, Cell::Filled);
    let before = board;
    assert!(board
        .apply_placement(piece_by_id("dot").unwrap(), Point::new(0, 0))
        .is_none());
    assert_eq!(board, before);
}

#[test]
fn test_fit_scanning_on_nearly_full_board() {
    let mut board = Board::new();
    for y in 0..BOARD_SIZE as i8 {
        fill_row_except(&mut board, y, &[]);
    }
    board.set(5, 5, Cell::Empty);

    let dot = piece_by_id("dot").unwrap();
    let domino = piece_by_id("domino_h").unwrap();
    assert_eq!(board.first_fit(dot), Some(Point::new(5, 5)));
    assert!(!board.fits_anywhere(domino));
    assert!(board.can_any_piece_fit([domino, dot]));
    assert!(!board.can_any_piece_fit([domino]));
    assert!(!board.can_any_piece_fit(std::iter::empty()));
}

#[test]
fn test_can_place_agrees_with_apply_placement() {
    let mut board = Board::new();
    for y in 0..BOARD_SIZE as i8 {
        for x in 0..BOARD_SIZE as i8 {
            if (x * 3 + y * 7) % 4 == 0 {
                board.set(x, y, Cell::Filled);
            }
        }
    }

    for piece in catalog() {
        for y in -2..BOARD_SIZE as i8 + 2 {
            for x in -2..BOARD_SIZE as i8 + 2 {
                let origin = Point::new(x, y);
                assert_eq!(
                    board.can_place(piece, origin),
                    board.apply_placement(piece, origin).is_some(),
                    "{} at ({x}, {y})",
                    piece.id()
                );
            }
        }
    }
}
