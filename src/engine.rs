//! Engine facade over the minimax search
//!
//! The UI talks to the engine through [`Engine::decide_move`] (or
//! [`decide_move`] for a one-off call): hand it a position and a
//! side, get back the move to play. `None` means the side has no
//! legal move and has lost.
//!
//! # Example
//!
//! ```
//! use sixpawns::board::{Board, Cell};
//! use sixpawns::engine::Engine;
//! use sixpawns::rules::try_move;
//!
//! let mut board = Board::new();
//! assert!(try_move(&mut board, 5, 6, Cell::White));
//!
//! let engine = Engine::new();
//! if let Some(mv) = engine.decide_move(&board, Cell::Black) {
//!     assert!(try_move(&mut board, mv.from, mv.to, Cell::Black));
//! }
//! ```

use std::time::Instant;

use crate::board::{Board, Cell, Move};
use crate::search::{Searcher, DEFAULT_DEPTH};

/// Result of a move decision with search statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` when the side has no legal move
    pub best_move: Option<Move>,
    /// Minimax score of the chosen line, from Black's perspective
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Move-deciding engine.
///
/// Black is searched as the maximizing side and White as the
/// minimizing side, so the same engine can play either color (or
/// both, for AI-vs-AI). Strength is tuned by depth alone.
#[derive(Debug, Clone)]
pub struct Engine {
    depth: u8,
}

impl Engine {
    /// Create an engine at the reference depth of 4 plies.
    #[must_use]
    pub fn new() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }

    /// Create an engine searching to a custom depth.
    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        Self { depth }
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Decide the move for `side` in the given position.
    ///
    /// Synchronous and potentially CPU-bound; callers that must not
    /// block (a render loop, say) run it on a worker thread.
    #[must_use]
    pub fn decide_move(&self, board: &Board, side: Cell) -> Option<Move> {
        self.decide_move_with_stats(board, side).best_move
    }

    /// Decide the move for `side`, with timing and node statistics.
    #[must_use]
    pub fn decide_move_with_stats(&self, board: &Board, side: Cell) -> MoveResult {
        let start = Instant::now();
        let mut searcher = Searcher::new();
        let result = searcher.search(board, self.depth, side == Cell::Black);

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            time_ms: start.elapsed().as_millis() as u64,
            nodes: result.nodes,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// One-off move decision at an explicit depth.
#[must_use]
pub fn decide_move(board: &Board, depth: u8, side: Cell) -> Option<Move> {
    Engine::with_depth(depth).decide_move(board, side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_CELLS;
    use crate::rules::{try_move, winner};

    #[test]
    fn test_engine_default_depth() {
        assert_eq!(Engine::new().depth(), 4);
        assert_eq!(Engine::with_depth(2).depth(), 2);
    }

    #[test]
    fn test_decide_move_is_deterministic() {
        let mut board = Board::new();
        assert!(try_move(&mut board, 5, 6, Cell::White));

        let first = decide_move(&board, 4, Cell::Black);
        let second = decide_move(&board, 4, Cell::Black);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_reply_to_opening_is_legal() {
        let mut board = Board::new();
        assert!(try_move(&mut board, 5, 6, Cell::White));

        let mv = decide_move(&board, 4, Cell::Black).unwrap();
        assert!((7..13).contains(&mv.from));
        assert!(mv.to == mv.from - 1 || mv.to == mv.from - 2);
        assert!(try_move(&mut board, mv.from, mv.to, Cell::Black));
        assert_eq!(board.count(Cell::White), 6);
        assert_eq!(board.count(Cell::Black), 6);
        assert_eq!(board.count(Cell::Empty), 1);
    }

    #[test]
    fn test_blocked_side_gets_no_move() {
        let mut cells = [Cell::Empty; BOARD_CELLS];
        for i in 0..6 {
            cells[i] = Cell::Black;
            cells[i + 6] = Cell::White;
        }
        let board = Board::from_cells(cells);

        assert_eq!(decide_move(&board, 4, Cell::Black), None);
        assert_eq!(winner(&board, Cell::Black), Some(Cell::White));
    }

    #[test]
    fn test_engine_plays_either_side() {
        let board = Board::new();
        // White's only opening move
        let mv = decide_move(&board, 4, Cell::White).unwrap();
        assert_eq!(mv, Move::new(5, 6));
    }

    #[test]
    fn test_stats_are_populated() {
        let board = Board::new();
        let engine = Engine::new();
        let result = engine.decide_move_with_stats(&board, Cell::White);
        assert!(result.best_move.is_some());
        assert!(result.nodes > 1);
    }

    // Self-play smoke test: the invariant must hold after every
    // accepted move, and the game must stay well-formed throughout.
    #[test]
    fn test_self_play_preserves_invariants() {
        let mut board = Board::new();
        let mut side = Cell::White;
        let engine = Engine::with_depth(2);

        for _ in 0..60 {
            if winner(&board, side).is_some() {
                break;
            }
            let mv = engine
                .decide_move(&board, side)
                .expect("non-terminal position must yield a move");
            assert!(try_move(&mut board, mv.from, mv.to, side));
            assert_eq!(board.count(Cell::White), 6);
            assert_eq!(board.count(Cell::Black), 6);
            assert_eq!(board.count(Cell::Empty), 1);
            side = side.opponent();
        }
    }
}
