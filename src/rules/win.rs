//! Terminal detection
//!
//! A game ends in one of two ways:
//! 1. The goal position is reached (the sides have fully swapped
//!    halves) — the player who completed the swap wins.
//! 2. The side to move has no legal move — that side loses.
//!
//! Both conditions apply to either side; there is no asymmetry
//! between the human and the AI.

use crate::board::{Board, Cell};
use crate::movegen::has_no_moves;

/// Check whether the board is the goal position.
///
/// Stalemate (no legal moves) depends on whose turn it is and is
/// reported by [`winner`] instead.
#[inline]
pub fn is_terminal(board: &Board) -> bool {
    board.is_goal()
}

/// Determine the winner, if any, with `side_to_move` next to play.
///
/// The goal position can only have been completed by the previous
/// mover, and a side with no legal move loses on the spot, so both
/// terminal cases award the game to the opponent of `side_to_move`.
pub fn winner(board: &Board, side_to_move: Cell) -> Option<Cell> {
    if board.is_goal() || has_no_moves(board, side_to_move) {
        Some(side_to_move.opponent())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_CELLS;

    fn goal_board() -> Board {
        let mut cells = [Cell::Empty; BOARD_CELLS];
        for i in 0..6 {
            cells[i] = Cell::Black;
            cells[i + 7] = Cell::White;
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_initial_board_not_terminal() {
        let board = Board::new();
        assert!(!is_terminal(&board));
        assert_eq!(winner(&board, Cell::White), None);
        assert_eq!(winner(&board, Cell::Black), None);
    }

    #[test]
    fn test_goal_board_is_terminal() {
        let board = goal_board();
        assert!(is_terminal(&board));
        // Whoever is to move, the other side completed the swap
        assert_eq!(winner(&board, Cell::White), Some(Cell::Black));
        assert_eq!(winner(&board, Cell::Black), Some(Cell::White));
    }

    #[test]
    fn test_blocked_side_loses() {
        // Black packed on 0..=5, White on 6..=11: Black cannot move
        let mut cells = [Cell::Empty; BOARD_CELLS];
        for i in 0..6 {
            cells[i] = Cell::Black;
            cells[i + 6] = Cell::White;
        }
        let board = Board::from_cells(cells);
        assert!(!is_terminal(&board));
        assert_eq!(winner(&board, Cell::Black), Some(Cell::White));
        // White still has 11 -> 12
        assert_eq!(winner(&board, Cell::White), None);
    }
}
