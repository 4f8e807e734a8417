//! Move advisory for the tetrad engine.
//!
//! Ranks every legal placement of the active piece by a fixed board-quality
//! heuristic and returns the best candidates. The advisory is strictly
//! read-only: landings are simulated against the live grid and committed
//! only to per-candidate copies.
//!
//! # Pipeline
//!
//! 1. **Enumerate** - every (rotation, anchor column) pair of the active
//!    piece ([`search::suggest`])
//! 2. **Simulate** - hard-drop each candidate against the live grid
//! 3. **Score** - write the landing into a grid copy and evaluate it
//!    ([`evaluator::evaluate_board`] over [`board_metrics::BoardMetrics`])
//! 4. **Rank** - sort by score, best first, ties in enumeration order

pub use self::{
    board_metrics::BoardMetrics,
    evaluator::evaluate_board,
    search::{Suggestion, suggest, suggest_placements},
};

pub mod board_metrics;
pub mod evaluator;
pub mod search;
