//! Move legality and application
//!
//! Each side only ever moves forward: White toward higher indices,
//! Black toward lower ones. Two kinds of move exist:
//! - **Step**: one cell forward into an empty cell
//! - **Jump**: two cells forward into an empty cell, over an
//!   intermediate cell holding an opponent pawn
//!
//! The jump requires an *opponent* pawn underneath. Jumping over a
//! pawn of one's own color is illegal.

use crate::board::{Board, Cell, Move, MoveKind};

/// Classify a forward move by its offset, ignoring occupancy of the
/// source and destination cells.
///
/// Returns the move kind if the offset matches a step or a legal
/// jump for `side`, `None` for any other offset. The jump check
/// reads the intermediate cell, which must hold an opponent pawn.
#[inline]
pub fn classify(board: &Board, mv: Move, side: Cell) -> Option<MoveKind> {
    let dir = side.direction();
    let from = mv.from as i32;
    let to = mv.to as i32;

    if to == from + dir {
        return Some(MoveKind::Step);
    }

    if to == from + 2 * dir {
        let over = board.get((from + dir) as usize);
        if over == side.opponent() {
            return Some(MoveKind::Jump);
        }
    }

    None
}

/// Check whether `side` may move a pawn from `from` to `to`.
///
/// Legal iff the source holds one of `side`'s pawns, the destination
/// is empty, and the offset is a step or a jump over an opponent
/// pawn. Pure; the board is not touched.
///
/// # Panics
///
/// Panics if either index is outside the board (caller bug, not a
/// rule rejection).
#[inline]
pub fn is_legal(board: &Board, from: usize, to: usize, side: Cell) -> bool {
    let mv = Move::new(from, to);
    side.is_piece()
        && board.get(mv.from) == side
        && board.is_empty(mv.to)
        && classify(board, mv, side).is_some()
}

/// Validate a move and apply it on success.
///
/// Returns `true` and relocates the pawn if the move is legal for
/// `side`; returns `false` and leaves the board untouched otherwise.
/// The boolean is the entire contract: rejections are not
/// distinguished by reason.
///
/// # Panics
///
/// Panics if either index is outside the board.
pub fn try_move(board: &mut Board, from: usize, to: usize, side: Cell) -> bool {
    if !is_legal(board, from, to, side) {
        return false;
    }
    board.relocate(from, to);
    true
}
