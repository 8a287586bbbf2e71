//! Position evaluation

pub mod heuristic;

pub use heuristic::{evaluate, WIN_SCORE};
