//! Legal-move enumeration
//!
//! Candidates are produced in a fixed order: source cells ascending,
//! and for each pawn its step before its jump. The search breaks
//! score ties by keeping the first candidate seen, so this order is
//! part of the engine's observable behavior and must stay stable.

use crate::board::{Board, Cell, Move, MoveKind, BOARD_CELLS};

/// A legal move together with the position it produces.
///
/// The board is an independent copy; generating candidates never
/// touches the input position.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub board: Board,
    pub mv: Move,
    pub kind: MoveKind,
}

/// Enumerate every legal move for `side`.
///
/// Each pawn contributes at most a step and a jump, so the result
/// holds at most twelve candidates. Jumps follow the capture-style
/// rule: the intermediate cell must hold an opponent pawn.
pub fn generate_moves(board: &Board, side: Cell) -> Vec<Candidate> {
    let dir = side.direction();
    let mut candidates = Vec::new();

    for from in 0..BOARD_CELLS {
        if board.get(from) != side {
            continue;
        }

        let step = from as i32 + dir;
        if in_range(step) && board.is_empty(step as usize) {
            candidates.push(candidate(board, from, step as usize, MoveKind::Step));
        }

        let jump = from as i32 + 2 * dir;
        if in_range(jump)
            && board.is_empty(jump as usize)
            && board.get((from as i32 + dir) as usize) == side.opponent()
        {
            candidates.push(candidate(board, from, jump as usize, MoveKind::Jump));
        }
    }

    candidates
}

/// True when `side` has no legal move at all
#[inline]
pub fn has_no_moves(board: &Board, side: Cell) -> bool {
    generate_moves(board, side).is_empty()
}

#[inline]
fn in_range(index: i32) -> bool {
    index >= 0 && index < BOARD_CELLS as i32
}

fn candidate(board: &Board, from: usize, to: usize, kind: MoveKind) -> Candidate {
    let mut next = board.clone();
    next.relocate(from, to);
    Candidate {
        board: next,
        mv: Move::new(from, to),
        kind,
    }
}
