//! Game state module - score, combo and move bookkeeping for one run
//!
//! `GameState` is a value: every successful move produces a new state and
//! leaves the previous one untouched. The board engine does placement and
//! clearing; this module turns its result into score and combo changes.

use crate::board::{Board, LineIndices};
use crate::pieces::PieceDef;
use crate::scoring::{calculate_score, Combo};
use crate::types::{GameMode, Point};

/// Complete state of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) score: u32,
    pub(crate) combo: Combo,
    pub(crate) moves: u32,
    pub(crate) lines_cleared: u32,
    pub(crate) mode: GameMode,
    pub(crate) seed: String,
    /// Run start, milliseconds since the Unix epoch
    pub(crate) started_at: u64,
}

/// Result of a successful move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub state: GameState,
    pub placement_score: u32,
    pub clear_score: u32,
    pub lines_cleared: u32,
    /// Cleared row indices, for highlighting
    pub rows: LineIndices,
    /// Cleared column indices, for highlighting
    pub cols: LineIndices,
}

impl MoveResult {
    pub fn score_delta(&self) -> u32 {
        self.placement_score + self.clear_score
    }
}

impl GameState {
    /// Fresh run on an empty board
    pub fn new(mode: GameMode, seed: impl Into<String>, started_at: u64) -> Self {
        Self::with_board(mode, seed, Board::new(), started_at)
    }

    /// Fresh run on a prepared board
    pub fn with_board(
        mode: GameMode,
        seed: impl Into<String>,
        board: Board,
        started_at: u64,
    ) -> Self {
        Self {
            board,
            score: 0,
            combo: Combo::START,
            moves: 0,
            lines_cleared: 0,
            mode,
            seed: seed.into(),
            started_at,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo(&self) -> Combo {
        self.combo
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn started_at(&self) -> u64 {
        self.started_at
    }

    /// Place `piece` at `origin`
    ///
    /// Returns `None` when the placement is illegal; `self` is never modified.
    pub fn apply_move(&self, piece: &PieceDef, origin: Point) -> Option<MoveResult> {
        let placement = self.board.apply_placement(piece, origin)?;
        let lines = placement.lines_cleared();
        let result = calculate_score(u32::from(placement.cells_placed), lines, self.combo);

        let state = GameState {
            board: placement.board,
            score: self.score + result.total,
            combo: result.next_combo,
            moves: self.moves + 1,
            lines_cleared: self.lines_cleared + lines,
            mode: self.mode,
            seed: self.seed.clone(),
            started_at: self.started_at,
        };

        Some(MoveResult {
            state,
            placement_score: result.placement_score,
            clear_score: result.clear_score,
            lines_cleared: lines,
            rows: placement.rows,
            cols: placement.cols,
        })
    }

    /// Same state with the combo reset to 1.0 (continue reward)
    pub fn with_combo_reset(&self) -> GameState {
        GameState {
            combo: Combo::START,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::piece_by_id;
    use crate::types::Cell;

    #[test]
    fn test_failed_move_leaves_state() {
        let mut board = Board::new();
        board.set(0, 0, Cell::Filled);
        let state = GameState::with_board(GameMode::Free, "seed", board, 0);
        let before = state.clone();

        assert!(state.apply_move(piece_by_id("dot").unwrap(), Point::new(0, 0)).is_none());
        assert!(state.apply_move(piece_by_id("dot").unwrap(), Point::new(10, 0)).is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn test_move_counters() {
        let state = GameState::new(GameMode::Daily, "20250101lumelines_v1", 42);
        let result = state
            .apply_move(piece_by_id("square_2").unwrap(), Point::new(0, 0))
            .unwrap();

        assert_eq!(result.state.moves(), 1);
        assert_eq!(result.state.score(), 20);
        assert_eq!(result.score_delta(), 20);
        assert_eq!(result.state.mode(), GameMode::Daily);
        assert_eq!(result.state.seed(), "20250101lumelines_v1");
        assert_eq!(result.state.started_at(), 42);
        assert_eq!(state.moves(), 0);
    }

    #[test]
    fn test_combo_uses_previous_value() {
        // Two back-to-back single clears: the second is scored at 1.25.
        let mut board = Board::new();
        for x in 1..10 {
            board.set(x, 0, Cell::Filled);
            board.set(x, 5, Cell::Filled);
        }
        let state = GameState::with_board(GameMode::Free, "s", board, 0);
        let dot = piece_by_id("dot").unwrap();

        let first = state.apply_move(dot, Point::new(0, 0)).unwrap();
        assert_eq!(first.clear_score, 120);
        assert_eq!(first.state.combo().as_f64(), 1.25);

        let second = first.state.apply_move(dot, Point::new(0, 5)).unwrap();
        assert_eq!(second.clear_score, 150);
        assert_eq!(second.state.combo().as_f64(), 1.5);
        assert_eq!(second.state.score(), 5 + 120 + 5 + 150);
        assert_eq!(second.state.lines_cleared(), 2);
    }
}
