//! Scoring module - placement points, line clears and the combo multiplier
//!
//! The combo multiplier moves in steps of 0.25 between 1.0 and 2.5. It is
//! stored as a count of quarters so that capping and rounding are integer
//! operations; `as_f64` gives the multiplier hosts display.
//!
//! Rules:
//! - Placement: 5 points per cell placed.
//! - Clear: `120 * lines + 80 * (lines - 1)`, times the combo *before* this move,
//!   rounded half up.
//! - Combo: +0.25 (capped at 2.5) after any clearing move, back to 1.0 otherwise.
//!   The number of lines does not matter.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{
    COMBO_MAX, COMBO_START, COMBO_STEP, LINE_CLEAR_SCORE, LINE_MULTI_BONUS,
    PLACEMENT_SCORE_PER_CELL, TOKEN_SCORE_DIVISOR,
};

const QUARTERS_START: u8 = (COMBO_START / COMBO_STEP) as u8;
const QUARTERS_MAX: u8 = (COMBO_MAX / COMBO_STEP) as u8;

/// Combo multiplier in quarter steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct Combo(u8);

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("combo multiplier {0} is not a quarter step in [1.0, 2.5]")]
pub struct InvalidCombo(pub f64);

impl Combo {
    /// Multiplier at run start and after a non-clearing move
    pub const START: Combo = Combo(QUARTERS_START);
    /// Highest multiplier
    pub const MAX: Combo = Combo(QUARTERS_MAX);

    /// Parse a multiplier such as `1.75`
    ///
    /// Values are rounded to two decimals first, so float noise like
    /// `1.2500000001` is accepted.
    pub fn from_f64(value: f64) -> Result<Self, InvalidCombo> {
        let rounded = (value * 100.0).round() / 100.0;
        let quarters = rounded / COMBO_STEP;
        if quarters.fract() != 0.0
            || quarters < f64::from(QUARTERS_START)
            || quarters > f64::from(QUARTERS_MAX)
        {
            return Err(InvalidCombo(value));
        }
        Ok(Combo(quarters as u8))
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) * COMBO_STEP
    }

    pub fn quarters(self) -> u8 {
        self.0
    }

    /// Combo after a move that cleared `lines_cleared` lines
    pub fn next(self, lines_cleared: u32) -> Combo {
        if lines_cleared > 0 {
            Combo((self.0 + 1).min(QUARTERS_MAX))
        } else {
            Combo::START
        }
    }

    /// Multiply and round half up
    pub fn apply(self, points: u32) -> u32 {
        let scaled = u64::from(points) * u64::from(self.0);
        ((scaled + 2) / 4) as u32
    }
}

impl Default for Combo {
    fn default() -> Self {
        Combo::START
    }
}

impl From<Combo> for f64 {
    fn from(value: Combo) -> Self {
        value.as_f64()
    }
}

impl TryFrom<f64> for Combo {
    type Error = InvalidCombo;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Combo::from_f64(value)
    }
}

/// Score calculation result for one move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub placement_score: u32,
    pub clear_score: u32,
    pub total: u32,
    /// Combo to carry into the next move
    pub next_combo: Combo,
}

/// Points for placing `cells` cells
pub fn calculate_placement_score(cells: u32) -> u32 {
    cells * PLACEMENT_SCORE_PER_CELL
}

/// Points for clearing `lines` rows/columns at the given combo
pub fn calculate_clear_score(lines: u32, combo: Combo) -> u32 {
    if lines == 0 {
        return 0;
    }
    let base = lines * LINE_CLEAR_SCORE;
    let multi_bonus = if lines > 1 {
        LINE_MULTI_BONUS * (lines - 1)
    } else {
        0
    };
    combo.apply(base + multi_bonus)
}

/// Calculate the complete score delta for one move
pub fn calculate_score(cells_placed: u32, lines: u32, combo: Combo) -> ScoreResult {
    let placement_score = calculate_placement_score(cells_placed);
    let clear_score = calculate_clear_score(lines, combo);
    ScoreResult {
        placement_score,
        clear_score,
        total: placement_score + clear_score,
        next_combo: combo.next(lines),
    }
}

/// Tokens awarded for a final score, never fewer than one
pub fn tokens_from_score(score: u32) -> u32 {
    (score / TOKEN_SCORE_DIVISOR).max(1)
}
