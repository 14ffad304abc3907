//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules for the 10x10 placement puzzle.
//! It has **no dependencies** on UI, storage, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences (daily challenges)
//! - **Testable**: Every rule is a plain function or value transition
//! - **Portable**: Can run in any host (terminal, browser bridge, headless)
//!
//! # Module Structure
//!
//! - [`rng`]: seeded float sequence from a string seed
//! - [`pieces`]: the 16-shape polyomino catalog
//! - [`board`]: 10x10 grid, placement checks, row/column clears, fit scanning
//! - [`generator`]: 3-piece trays with large-piece fairness and early-game placeability
//! - [`scoring`]: placement/clear points, combo multiplier, token conversion
//! - [`game_state`]: immutable per-run state and `apply_move`
//! - [`daily`]: date keys and daily seeds
//! - [`snapshot`]: serializable views for hosts
//!
//! # Example
//!
//! ```
//! use lumelines_core::{piece_by_id, GameState};
//! use lumelines_core::types::{GameMode, Point};
//!
//! let state = GameState::new(GameMode::Free, "run_1", 0);
//! let line = piece_by_id("line_3_h").unwrap();
//!
//! let result = state.apply_move(line, Point::new(0, 0)).unwrap();
//! assert_eq!(result.state.score(), 15);
//! assert_eq!(result.lines_cleared, 0);
//!
//! // Overlapping placements are rejected without touching the state.
//! assert!(result.state.apply_move(line, Point::new(1, 0)).is_none());
//! ```

pub mod board;
pub mod daily;
pub mod game_state;
pub mod generator;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use lumelines_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LineIndices, Placement};
pub use daily::{create_daily_seed, daily_best_key, format_date_key, free_play_seed, today_local};
pub use game_state::{GameState, MoveResult};
pub use generator::{ActivePiece, InstanceId, PieceGenerator, PieceSet};
pub use pieces::{catalog, continue_set, piece_by_id, Bounds, PieceDef};
pub use rng::{SeededRng, SequenceSource};
pub use scoring::{
    calculate_clear_score, calculate_placement_score, calculate_score, tokens_from_score, Combo,
    InvalidCombo, ScoreResult,
};
pub use snapshot::{GameSnapshot, PieceSnapshot};
