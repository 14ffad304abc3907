//! Snapshots - plain serializable views for hosts
//!
//! Hosts persist best scores and render the board from these values; they
//! never hold references into the live state.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::game_state::GameState;
use crate::generator::{ActivePiece, InstanceId};
use crate::scoring::Combo;
use crate::types::{GameMode, BOARD_SIZE};

const SIZE: usize = BOARD_SIZE as usize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: [[u8; SIZE]; SIZE],
    pub score: u32,
    pub combo: Combo,
    pub moves: u32,
    pub lines_cleared: u32,
    pub mode: GameMode,
    pub seed: String,
    pub started_at: u64,
}

/// One occupied tray slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub instance_id: InstanceId,
    pub piece: String,
}

impl From<&ActivePiece> for PieceSnapshot {
    fn from(value: &ActivePiece) -> Self {
        Self {
            instance_id: value.instance_id,
            piece: value.def.id().to_string(),
        }
    }
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        let mut board = [[0u8; SIZE]; SIZE];
        state.board.write_u8_grid(&mut board);
        Self {
            board,
            score: state.score,
            combo: state.combo,
            moves: state.moves,
            lines_cleared: state.lines_cleared,
            mode: state.mode,
            seed: state.seed.clone(),
            started_at: state.started_at,
        }
    }
}

impl From<GameSnapshot> for GameState {
    fn from(snapshot: GameSnapshot) -> Self {
        Self {
            board: Board::from_u8_grid(&snapshot.board),
            score: snapshot.score,
            combo: snapshot.combo,
            moves: snapshot.moves,
            lines_cleared: snapshot.lines_cleared,
            mode: snapshot.mode,
            seed: snapshot.seed,
            started_at: snapshot.started_at,
        }
    }
}

impl GameSnapshot {
    /// Filled cells in the snapshot grid
    pub fn filled_count(&self) -> usize {
        self.board.iter().flatten().filter(|&&v| v != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::piece_by_id;
    use crate::types::Point;

    #[test]
    fn test_snapshot_conversion() {
        let state = GameState::new(GameMode::Free, "run_1", 1)
            .apply_move(piece_by_id("plus").unwrap(), Point::new(2, 3))
            .unwrap()
            .state;
        let snapshot = GameSnapshot::from(&state);
        assert_eq!(snapshot.board[4][3], 1);
        assert_eq!(snapshot.filled_count(), 5);
        assert_eq!(GameState::from(snapshot), state);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let state = GameState::new(GameMode::Daily, "20250101lumelines_v1", 7);
        let json = serde_json::to_value(GameSnapshot::from(&state)).unwrap();
        assert_eq!(json["mode"], "daily");
        assert_eq!(json["combo"], 1.0);
        assert_eq!(json["seed"], "20250101lumelines_v1");
        assert_eq!(json["board"][0].as_array().unwrap().len(), 10);
    }
}
