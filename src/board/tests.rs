use super::*;

#[test]
fn test_cell_opponent() {
    assert_eq!(Cell::White.opponent(), Cell::Black);
    assert_eq!(Cell::Black.opponent(), Cell::White);
    assert_eq!(Cell::Empty.opponent(), Cell::Empty);
}

#[test]
fn test_cell_direction() {
    assert_eq!(Cell::White.direction(), 1);
    assert_eq!(Cell::Black.direction(), -1);
    assert_eq!(Cell::Empty.direction(), 0);
}

#[test]
fn test_initial_position() {
    let board = Board::new();
    for i in 0..6 {
        assert_eq!(board.get(i), Cell::White);
    }
    assert_eq!(board.get(CENTER), Cell::Empty);
    for i in 7..13 {
        assert_eq!(board.get(i), Cell::Black);
    }
}

#[test]
fn test_initial_counts() {
    let board = Board::new();
    assert_eq!(board.count(Cell::White), 6);
    assert_eq!(board.count(Cell::Black), 6);
    assert_eq!(board.count(Cell::Empty), 1);
}

#[test]
fn test_initial_is_not_goal() {
    assert!(!Board::new().is_goal());
}

#[test]
fn test_goal_detection() {
    let mut cells = [Cell::Empty; BOARD_CELLS];
    for i in 0..6 {
        cells[i] = Cell::Black;
        cells[i + 7] = Cell::White;
    }
    assert!(Board::from_cells(cells).is_goal());
}

#[test]
fn test_partial_swap_is_not_goal() {
    // All Black pieces home but White still one short
    let mut cells = [Cell::Empty; BOARD_CELLS];
    for i in 0..6 {
        cells[i] = Cell::Black;
    }
    for i in 8..13 {
        cells[i] = Cell::White;
    }
    cells[6] = Cell::White;
    let board = Board::from_cells(cells);
    assert!(!board.is_goal());
}

#[test]
fn test_move_distance() {
    assert_eq!(Move::new(5, 6).distance(), 1);
    assert_eq!(Move::new(7, 5).distance(), 2);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_move_index_out_of_range() {
    let _ = Move::new(0, 13);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_board_get_out_of_range() {
    let _ = Board::new().get(13);
}
