//! Six Pawns game engine
//!
//! A two-player race game on a line of 13 cells: six White pawns
//! face six Black pawns across a single gap, and each side tries to
//! reach the other's home half first. Pawns step one cell forward or
//! jump two cells over an opponent pawn. The AI plays Black with a
//! fixed-depth minimax search.
//!
//! # Architecture
//!
//! - [`board`]: the 13-cell board, cells, moves
//! - [`rules`]: move legality, application and terminal detection
//! - [`movegen`]: ordered legal-move enumeration
//! - [`eval`]: static position scoring from Black's perspective
//! - [`search`]: plain fixed-depth minimax (no pruning, no caching)
//! - [`engine`]: the move-deciding facade the UI calls
//! - [`ui`]: egui front end (board strip, two-click input, menus)
//!
//! # Quick Start
//!
//! ```
//! use sixpawns::{Board, Cell, Engine};
//! use sixpawns::rules::try_move;
//!
//! let mut board = Board::new();
//!
//! // Human plays White: step into the gap
//! assert!(try_move(&mut board, 5, 6, Cell::White));
//!
//! // AI answers as Black
//! let engine = Engine::new();
//! if let Some(mv) = engine.decide_move(&board, Cell::Black) {
//!     assert!(try_move(&mut board, mv.from, mv.to, Cell::Black));
//! }
//! ```
//!
//! # Reproducibility
//!
//! The engine is deterministic by construction: moves are generated
//! in a fixed order, score ties keep the first candidate, and the
//! search has no randomness or hidden state. The same position and
//! depth always produce the same move.

pub mod board;
pub mod engine;
pub mod eval;
pub mod movegen;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Move, MoveKind, BOARD_CELLS};
pub use engine::{decide_move, Engine, MoveResult};
