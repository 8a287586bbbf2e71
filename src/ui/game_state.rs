//! Game state management for the Six Pawns GUI
//!
//! The human plays White, the AI plays Black. Input is two clicks:
//! select one of your pawns, then click its destination cell.

use crate::rules::{try_move, winner};
use crate::{Board, Cell, Engine, Move, MoveResult};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// Artificial pause before the search starts, so the AI appears to
/// think even though the search itself is near-instant.
const THINKING_DELAY: Duration = Duration::from_millis(600);

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub current_turn: Cell,
    /// Cell index of the currently selected White pawn
    pub selected: Option<usize>,
    pub winner: Option<Cell>,
    pub last_move: Option<Move>,
    pub move_count: u32,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,

    ai_depth: u8,
}

impl GameState {
    /// Start a new game with the given side moving first.
    pub fn new(first_mover: Cell) -> Self {
        Self {
            board: Board::new(),
            current_turn: first_mover,
            selected: None,
            winner: None,
            last_move: None,
            move_count: 0,
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
            ai_depth: 4,
        }
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.current_turn == Cell::White
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.current_turn == Cell::Black
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Handle a click on a board cell.
    ///
    /// First click selects one of the human's pawns, second click
    /// names the destination. Clicking the selected pawn again
    /// deselects it.
    pub fn handle_click(&mut self, index: usize) {
        if self.winner.is_some() || self.is_ai_thinking() || !self.is_human_turn() {
            return;
        }

        match self.selected {
            None => {
                if self.board.get(index) == Cell::White {
                    self.selected = Some(index);
                    self.message = None;
                }
            }
            Some(from) if from == index => {
                self.selected = None;
            }
            Some(from) => {
                if try_move(&mut self.board, from, index, Cell::White) {
                    self.after_move(Move::new(from, index));
                } else {
                    self.message = Some("Illegal move".to_string());
                }
                self.selected = None;
            }
        }
    }

    /// Record an accepted move and hand the turn over.
    fn after_move(&mut self, mv: Move) {
        let mover = self.current_turn;
        self.last_move = Some(mv);
        self.move_count += 1;
        self.message = None;
        self.current_turn = mover.opponent();

        // Goal reached, or the new side to move is stuck
        self.winner = winner(&self.board, self.current_turn);
    }

    /// Start AI thinking on a worker thread.
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.winner.is_some() {
            return;
        }

        let board = self.board.clone();
        let depth = self.ai_depth;

        let (tx, rx) = channel();

        thread::spawn(move || {
            thread::sleep(THINKING_DELAY);
            let engine = Engine::with_depth(depth);
            let result = engine.decide_move_with_stats(&board, Cell::Black);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking and apply its move.
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => Some(result),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some(move_result) = result {
            self.ai_state = AiState::Idle;

            match move_result.best_move {
                Some(mv) => {
                    self.last_ai_result = Some(move_result);
                    // The engine only returns legal moves
                    if try_move(&mut self.board, mv.from, mv.to, Cell::Black) {
                        self.after_move(mv);
                    } else {
                        self.message = Some("AI produced an illegal move".to_string());
                    }
                }
                None => {
                    // No legal move for Black: the human wins
                    self.last_ai_result = Some(move_result);
                    self.winner = Some(Cell::White);
                }
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}
