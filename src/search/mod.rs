//! Search module
//!
//! Contains the fixed-depth minimax searcher. There is deliberately
//! no pruning, caching or move ordering beyond the generator's fixed
//! order: the engine's play is fully reproducible from the position
//! and depth alone.

pub mod minimax;

pub use minimax::{SearchResult, Searcher, DEFAULT_DEPTH};
