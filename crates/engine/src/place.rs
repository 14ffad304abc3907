use thiserror::Error;

use crate::core::{InstanceId, SequenceSource};
use crate::session::GameSession;
use crate::types::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("no piece {0} in the tray")]
    UnknownPiece(InstanceId),
    #[error("piece {instance_id} does not fit at ({}, {})", origin.x, origin.y)]
    Blocked {
        instance_id: InstanceId,
        origin: Point,
    },
    #[error("run is over")]
    RunOver,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::UnknownPiece(_) => "unknown_piece",
            PlaceError::Blocked { .. } => "invalid_place",
            PlaceError::RunOver => "run_over",
        }
    }
}

/// A legal move and what it would earn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedMove {
    pub instance_id: InstanceId,
    pub origin: Point,
    pub score_delta: u32,
    pub lines_cleared: u32,
    /// Filled cells left on the board afterwards
    pub filled_after: usize,
}

/// Greedy one-ply planner for headless play.
///
/// Tries every tray piece at every origin and keeps the move with the highest
/// immediate score; ties go to the emptier resulting board, then to the first
/// candidate in tray/row-major order. Returns `None` when nothing fits.
pub fn plan_move<R: SequenceSource>(session: &GameSession<R>) -> Option<PlannedMove> {
    let state = session.state();
    let mut best: Option<PlannedMove> = None;

    for piece in session.pieces() {
        for origin in state.board().origins() {
            let Some(result) = state.apply_move(piece.def, origin) else {
                continue;
            };
            let candidate = PlannedMove {
                instance_id: piece.instance_id,
                origin,
                score_delta: result.score_delta(),
                lines_cleared: result.lines_cleared,
                filled_after: result.state.board().filled_count(),
            };
            let better = match best {
                None => true,
                Some(b) => {
                    candidate.score_delta > b.score_delta
                        || (candidate.score_delta == b.score_delta
                            && candidate.filled_after < b.filled_after)
                }
            };
            if better {
                best = Some(candidate);
            }
        }
    }

    best
}

/// Plan and play one move
pub fn play_greedy<R: SequenceSource>(session: &mut GameSession<R>) -> Option<PlannedMove> {
    let planned = plan_move(session)?;
    match session.place_piece(planned.instance_id, planned.origin) {
        Ok(_) => Some(planned),
        Err(err) => {
            // plan_move only proposes legal moves, so this means the session
            // changed underneath us.
            tracing::warn!(code = err.code(), %err, "planned move rejected");
            None
        }
    }
}
