//! Fixed-depth minimax search
//!
//! Black maximizes, White minimizes. The tree is expanded
//! exhaustively to the requested depth; the branching factor is at
//! most twelve and the default depth four, so a full expansion is
//! always fast.
//!
//! Two details shape the move choice:
//! - A child reached by a jump has 5 subtracted from its score at a
//!   maximizing node and 5 added at a minimizing node, before the
//!   comparison. The engine leans on steady steps over jumps.
//! - Comparisons are strict, so equal scores keep the move generated
//!   first (lowest source cell, step before jump).
//!
//! # Example
//!
//! ```
//! use sixpawns::board::Board;
//! use sixpawns::search::{Searcher, DEFAULT_DEPTH};
//!
//! let board = Board::new();
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&board, DEFAULT_DEPTH, true);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Cell, Move, MoveKind};
use crate::eval::evaluate;
use crate::movegen::generate_moves;

/// Search depth matching the reference engine's strength
pub const DEFAULT_DEPTH: u8 = 4;

/// Score adjustment applied to children reached by a jump
const JUMP_TAX: i32 = 5;

/// Result of a search: the chosen move, its score and the number of
/// nodes expanded.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` when the side to move has none
    pub best_move: Option<Move>,
    /// Minimax score of the best line, from Black's perspective
    pub score: i32,
    /// Nodes visited, for diagnostics
    pub nodes: u64,
}

/// Plain minimax searcher.
///
/// Holds only a node counter; every call starts from scratch and two
/// searches of the same position always return the same move.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Search `board` to `depth` plies. `maximizing` selects the side
    /// to move: `true` for Black, `false` for White.
    pub fn search(&mut self, board: &Board, depth: u8, maximizing: bool) -> SearchResult {
        self.nodes = 0;
        let (score, best_move) = self.minimax(board, depth, maximizing);
        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        }
    }

    fn minimax(&mut self, board: &Board, depth: u8, maximizing: bool) -> (i32, Option<Move>) {
        self.nodes += 1;

        if depth == 0 || board.is_goal() {
            return (evaluate(board), None);
        }

        let side = if maximizing { Cell::Black } else { Cell::White };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        // An empty candidate set falls through and returns the
        // untouched bound with no move; the root treats that as a
        // loss for the side to move.
        for cand in generate_moves(board, side) {
            let (child, _) = self.minimax(&cand.board, depth - 1, !maximizing);

            // Saturating keeps the unbeatable bounds unbeatable when
            // a dead-end child gets the jump adjustment.
            let score = match cand.kind {
                MoveKind::Jump if maximizing => child.saturating_sub(JUMP_TAX),
                MoveKind::Jump => child.saturating_add(JUMP_TAX),
                MoveKind::Step => child,
            };

            if maximizing {
                if score > best {
                    best = score;
                    best_move = Some(cand.mv);
                }
            } else if score < best {
                best = score;
                best_move = Some(cand.mv);
            }
        }

        (best, best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_CELLS;
    use crate::eval::WIN_SCORE;
    use crate::rules::try_move;

    #[test]
    fn test_depth_zero_returns_static_eval() {
        let board = Board::new();
        let mut searcher = Searcher::new();
        let result = searcher.search(&board, 0, true);
        assert_eq!(result.score, evaluate(&board));
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_goal_position_is_a_leaf() {
        let mut cells = [Cell::Empty; BOARD_CELLS];
        for i in 0..6 {
            cells[i] = Cell::Black;
            cells[i + 7] = Cell::White;
        }
        let board = Board::from_cells(cells);
        let mut searcher = Searcher::new();
        let result = searcher.search(&board, 4, true);
        assert_eq!(result.score, WIN_SCORE);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_forced_reply_found_at_depth_4() {
        // After White's opening step, Black's only move is the jump
        // 7 -> 5 over the White pawn on 6.
        let mut board = Board::new();
        assert!(try_move(&mut board, 5, 6, Cell::White));

        let mut searcher = Searcher::new();
        let result = searcher.search(&board, DEFAULT_DEPTH, true);
        assert_eq!(result.best_move, Some(Move::new(7, 5)));
    }

    #[test]
    fn test_search_is_deterministic() {
        let mut board = Board::new();
        assert!(try_move(&mut board, 5, 6, Cell::White));
        assert!(try_move(&mut board, 7, 5, Cell::Black));

        let first = Searcher::new().search(&board, DEFAULT_DEPTH, false);
        let second = Searcher::new().search(&board, DEFAULT_DEPTH, false);
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
        assert_eq!(first.nodes, second.nodes);
    }

    #[test]
    fn test_tie_keeps_first_generated_move() {
        // Two Black pawns with a free step each; at depth 1 both
        // children evaluate identically, so the move from the lower
        // source cell must win the tie.
        let mut cells = [Cell::Empty; BOARD_CELLS];
        for i in 0..6 {
            cells[i] = Cell::White;
        }
        cells[8] = Cell::Black;
        cells[10] = Cell::Black;
        let board = Board::from_cells(cells);

        let mut searcher = Searcher::new();
        let result = searcher.search(&board, 1, true);
        assert_eq!(result.best_move, Some(Move::new(8, 7)));
    }

    #[test]
    fn test_no_moves_yields_no_best_move() {
        // Black packed on its home edge cannot move at all
        let mut cells = [Cell::Empty; BOARD_CELLS];
        for i in 0..6 {
            cells[i] = Cell::Black;
            cells[i + 6] = Cell::White;
        }
        let board = Board::from_cells(cells);

        let mut searcher = Searcher::new();
        let result = searcher.search(&board, DEFAULT_DEPTH, true);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, i32::MIN);
    }

    #[test]
    fn test_jump_tax_prefers_equal_step() {
        // Black can step from 9 or jump from 7 over the White pawn
        // on 6. At depth 1 the jump's raw score is higher by one
        // point but the tax of 5 tips the choice to the step.
        let mut cells = [Cell::Empty; BOARD_CELLS];
        for i in 0..5 {
            cells[i] = Cell::White;
        }
        cells[6] = Cell::White;
        cells[7] = Cell::Black;
        cells[9] = Cell::Black;
        let board = Board::from_cells(cells);

        let moves: Vec<_> = generate_moves(&board, Cell::Black)
            .into_iter()
            .map(|c| (c.mv, c.kind))
            .collect();
        assert!(moves.contains(&(Move::new(7, 5), MoveKind::Jump)));
        assert!(moves.contains(&(Move::new(9, 8), MoveKind::Step)));

        let mut searcher = Searcher::new();
        let result = searcher.search(&board, 1, true);
        assert_eq!(result.best_move, Some(Move::new(9, 8)));
    }

    #[test]
    fn test_white_minimizes() {
        // From the opening position White's only move is 5 -> 6
        let board = Board::new();
        let mut searcher = Searcher::new();
        let result = searcher.search(&board, DEFAULT_DEPTH, false);
        assert_eq!(result.best_move, Some(Move::new(5, 6)));
    }
}
