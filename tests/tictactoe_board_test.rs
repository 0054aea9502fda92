//! Tests for board validation, placement and win detection.

use tictactoe_patterns::{Board, Cell, GameError, Position, Symbol};

fn all_positions(board: &Board) -> Vec<Position> {
    (0..board.rows())
        .flat_map(|row| (0..board.cols()).map(move |col| Position::new(row, col)))
        .collect()
}

#[test]
fn test_valid_move_matches_bounds_and_occupancy() {
    let mut board = Board::new(3, 4).unwrap();
    board.place_move(Position::new(2, 3), Symbol::X).unwrap();
    board.place_move(Position::new(0, 1), Symbol::O).unwrap();

    for row in 0..6 {
        for col in 0..6 {
            let pos = Position::new(row, col);
            let expected = row < 3 && col < 4 && board.get(pos) == Some(Cell::Empty);
            assert_eq!(board.is_valid_move(pos), expected, "{}", pos);
        }
    }
}

#[test]
fn test_full_exactly_when_every_cell_taken() {
    let mut board = Board::new(2, 2).unwrap();
    let mut symbol = Symbol::X;
    let positions = all_positions(&board);

    for (i, pos) in positions.iter().enumerate() {
        assert!(!board.is_full());
        board.place_move(*pos, symbol).unwrap();
        assert_eq!(board.moves_made(), i + 1);
        symbol = symbol.opponent();
    }
    assert!(board.is_full());
}

#[test]
fn test_occupied_placement_rejected_and_board_unchanged() {
    let mut board = Board::default();
    board.place_move(Position::new(1, 1), Symbol::X).unwrap();
    let before = board.clone();

    assert_eq!(
        board.place_move(Position::new(1, 1), Symbol::O),
        Err(GameError::InvalidMove(Position::new(1, 1)))
    );
    assert_eq!(board, before);
    assert_eq!(board.moves_made(), 1);
    assert_eq!(board.get(Position::new(1, 1)), Some(Cell::Occupied(Symbol::X)));
}

#[test]
fn test_every_line_detected_on_3x3() {
    let lines: Vec<[(usize, usize); 3]> = vec![
        [(0, 0), (0, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2)],
        [(2, 0), (2, 1), (2, 2)],
        [(0, 0), (1, 0), (2, 0)],
        [(0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 2), (2, 2)],
        [(0, 0), (1, 1), (2, 2)],
        [(0, 2), (1, 1), (2, 0)],
    ];

    for line in lines {
        let mut board = Board::default();
        for (i, &(r, c)) in line.iter().enumerate() {
            let pos = Position::new(r, c);
            board.place_move(pos, Symbol::O).unwrap();
            assert_eq!(board.is_winning_cell(pos, Symbol::O), i == 2, "{:?}", line);
        }
    }
}

#[test]
fn test_mixed_lines_never_win() {
    let mut board = Board::default();
    // X O X / O X X / O X O: every line mixed.
    let layout = [
        [Symbol::X, Symbol::O, Symbol::X],
        [Symbol::O, Symbol::X, Symbol::X],
        [Symbol::O, Symbol::X, Symbol::O],
    ];
    for (r, row) in layout.iter().enumerate() {
        for (c, symbol) in row.iter().enumerate() {
            board.place_move(Position::new(r, c), *symbol).unwrap();
        }
    }

    for pos in all_positions(&board) {
        let Some(Cell::Occupied(symbol)) = board.get(pos) else {
            panic!("board should be full");
        };
        assert!(!board.is_winning_cell(pos, symbol), "{}", pos);
    }
    assert!(board.is_full());
}

#[test]
fn test_larger_square_board_diagonal() {
    let mut board = Board::new(4, 4).unwrap();
    for i in 0..4 {
        board.place_move(Position::new(i, 3 - i), Symbol::X).unwrap();
    }
    assert!(board.is_winning_cell(Position::new(3, 0), Symbol::X));
}

#[test]
fn test_rendering_is_idempotent() {
    let mut board = Board::default();
    board.place_move(Position::new(2, 1), Symbol::O).unwrap();
    let before = board.clone();

    let first = board.to_string();
    let second = board.to_string();
    assert_eq!(first, second);
    assert_eq!(first, ". . .\n. . .\n. O .\n");
    assert_eq!(board, before);
}
