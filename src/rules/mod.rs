//! Game rules for the six-pawns line game
//!
//! This module implements:
//! - Move legality and application (step, capture-style jump)
//! - Terminal detection (goal position, no-legal-moves loss)

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{classify, is_legal, try_move};
pub use win::{is_terminal, winner};
