//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with serde derives only, making them usable in any
//! context (core logic, session layer, host persistence).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed square grid:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 10 rows (indexed 0-9)
//! - Coordinates are `(x, y)` with `(0, 0)` in the top-left corner
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PLACEMENT_SCORE_PER_CELL` | 5 | Points per placed cell |
//! | `LINE_CLEAR_SCORE` | 120 | Points per cleared row or column |
//! | `LINE_MULTI_BONUS` | 80 | Bonus per extra line in one placement |
//! | `COMBO_START` | 1.0 | Combo multiplier after a non-clearing move |
//! | `COMBO_STEP` | 0.25 | Combo increase per clearing move |
//! | `COMBO_MAX` | 2.5 | Combo cap |
//! | `TOKEN_SCORE_DIVISOR` | 1500 | Score per awarded token |
//!
//! # Examples
//!
//! ```
//! use lumelines_types::{GameMode, Point, BOARD_SIZE};
//!
//! let mode = GameMode::from_str("daily").unwrap();
//! assert_eq!(mode, GameMode::Daily);
//! assert_eq!(mode.as_str(), "daily");
//!
//! let origin = Point::new(3, 4);
//! assert_eq!(origin.offset(Point::new(1, 2)), Point::new(4, 6));
//!
//! assert_eq!(BOARD_SIZE, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Board width and height in cells
pub const BOARD_SIZE: u8 = 10;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Number of pieces offered per tray
pub const TRAY_SIZE: usize = 3;

/// Points awarded per cell placed
pub const PLACEMENT_SCORE_PER_CELL: u32 = 5;

/// Points per cleared row or column (before combo)
pub const LINE_CLEAR_SCORE: u32 = 120;

/// Extra points for every line beyond the first in a single placement
pub const LINE_MULTI_BONUS: u32 = 80;

/// Combo multiplier at the start of a run and after any non-clearing move
pub const COMBO_START: f64 = 1.0;

/// Combo increase per clearing move
pub const COMBO_STEP: f64 = 0.25;

/// Combo cap
pub const COMBO_MAX: f64 = 2.5;

/// Final score per awarded token
pub const TOKEN_SCORE_DIVISOR: u32 = 1500;

/// Extra tokens for beating the best score
pub const NEW_BEST_TOKEN_BONUS: u32 = 2;

/// Extra tokens for the first completed daily run of a day
pub const FIRST_DAILY_TOKEN_BONUS: u32 = 3;

/// Minimum run score before a continue is offered
pub const CONTINUE_MIN_SCORE: u32 = 800;

/// Minimum settled tokens before doubling is offered
pub const DOUBLE_TOKENS_MIN: u32 = 2;

/// Pieces with at least this many cells count as "large"
pub const LARGE_PIECE_SIZE: u8 = 5;

/// While the large streak is at least this long, only small pieces are drawn
pub const LARGE_STREAK_LIMIT: u8 = 2;

/// Moves during which generated trays must contain a placeable piece
pub const EARLY_GAME_MOVES: u32 = 10;

/// Rejection-sampling attempts before the forced fallback kicks in
pub const MAX_SET_ATTEMPTS: u32 = 24;

/// Minimum spacing between two rewarded actions (90s)
pub const REWARDED_COOLDOWN_MS: u64 = 90_000;

/// Cooldown started by a used continue (10 minutes)
pub const CONTINUE_COOLDOWN_MS: u64 = 10 * 60 * 1000;

/// Salt appended to the date key to build the daily seed
pub const DAILY_SEED_SALT: &str = "lumelines_v1";

/// Storage key prefix for the per-day best score
pub const DAILY_BEST_KEY_PREFIX: &str = "dailyBest_";


/// A cell on the game board
///
/// - `Empty`: free for placement
/// - `Filled`: occupied by a previously placed piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Filled = 1,
}

impl Cell {
    pub fn is_filled(self) -> bool {
        self == Cell::Filled
    }

    /// Numeric form used by snapshots (0 or 1)
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Any non-zero value counts as filled
    pub fn from_u8(v: u8) -> Self {
        if v == 0 {
            Cell::Empty
        } else {
            Cell::Filled
        }
    }
}

/// A grid coordinate or a piece-cell offset
///
/// Offsets inside a piece are always non-negative. Origins may be negative or
/// beyond the grid; such placements are simply rejected by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Add an offset, saturating at the `i8` range
    pub fn offset(self, by: Point) -> Point {
        Point {
            x: self.x.saturating_add(by.x),
            y: self.y.saturating_add(by.y),
        }
    }
}

/// Run mode
///
/// - **Free**: endless play with a time-derived seed
/// - **Daily**: date-derived seed shared by every player on that day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Free,
    Daily,
}

impl GameMode {
    /// Parse a mode from string (case-insensitive)
    ///
    /// `"play"` is accepted as an alias for free play.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumelines_types::GameMode;
    ///
    /// assert_eq!(GameMode::from_str("free"), Some(GameMode::Free));
    /// assert_eq!(GameMode::from_str("Daily"), Some(GameMode::Daily));
    /// assert_eq!(GameMode::from_str("ranked"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "free" | "play" => Some(GameMode::Free),
            "daily" => Some(GameMode::Daily),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Free => "free",
            GameMode::Daily => "daily",
        }
    }
}
