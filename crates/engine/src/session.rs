//! Game session - one run from first tray to exhaustion
//!
//! The session owns the current `GameState`, the tray, and the piece
//! generator. Hosts drive it with `place_piece` and read plain values back.
//!
//! Run status:
//!
//! - **Active**: at least one tray piece fits somewhere on the board.
//! - **Exhausted**: nothing in the tray fits. Terminal, unless the one-time
//!   continue reward replaces the tray.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::cooldowns::{RewardCooldowns, RewardedKind};
use crate::core::{
    continue_set, create_daily_seed, free_play_seed, ActivePiece, GameSnapshot, GameState,
    InstanceId, MoveResult, PieceGenerator, PieceSnapshot, SeededRng, SequenceSource,
};
use crate::place::PlaceError;
use crate::rewards::RewardDenied;
use crate::types::{GameMode, Point, CONTINUE_MIN_SCORE, TRAY_SIZE};

/// Tray slots; consumed slots are `None` until the tray refills
pub type Tray = [Option<ActivePiece>; TRAY_SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Active,
    Exhausted,
}

/// One run
#[derive(Debug, Clone)]
pub struct GameSession<R = SeededRng> {
    generator: PieceGenerator<R>,
    tray: Tray,
    state: GameState,
    status: RunStatus,
    continue_used: bool,
}

impl GameSession<SeededRng> {
    /// Free-play run seeded from its start time
    pub fn free(started_at: u64) -> Self {
        let seed = free_play_seed(started_at);
        let rng = SeededRng::new(&seed);
        Self::new(GameMode::Free, seed, rng, started_at)
    }

    /// Daily run; every session for the same date sees the same pieces
    pub fn daily(date: &impl Datelike, started_at: u64) -> Self {
        let seed = create_daily_seed(date);
        let rng = SeededRng::new(&seed);
        Self::new(GameMode::Daily, seed, rng, started_at)
    }
}

impl<R: SequenceSource> GameSession<R> {
    /// Start a run on an empty board and deal the first tray
    pub fn new(mode: GameMode, seed: impl Into<String>, source: R, started_at: u64) -> Self {
        let state = GameState::new(mode, seed, started_at);
        let mut generator = PieceGenerator::new(source);
        let tray = generator.next_set(state.board(), 0).map(Some);

        tracing::info!(mode = mode.as_str(), seed = state.seed(), "session started");

        let mut session = Self {
            generator,
            tray,
            state,
            status: RunStatus::Active,
            continue_used: false,
        };
        session.refresh_status();
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tray(&self) -> &Tray {
        &self.tray
    }

    /// Pieces still available in the tray
    pub fn pieces(&self) -> impl Iterator<Item = &ActivePiece> {
        self.tray.iter().flatten()
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn is_exhausted(&self) -> bool {
        self.status == RunStatus::Exhausted
    }

    pub fn continue_used(&self) -> bool {
        self.continue_used
    }

    /// Place the tray piece `instance_id` at `origin`
    ///
    /// On error nothing changes. On success the slot is consumed, the tray is
    /// refilled once empty, and the run status is recomputed.
    pub fn place_piece(
        &mut self,
        instance_id: InstanceId,
        origin: Point,
    ) -> Result<MoveResult, PlaceError> {
        if self.is_exhausted() {
            return Err(PlaceError::RunOver);
        }

        let (slot, piece) = self
            .tray
            .iter()
            .enumerate()
            .find_map(|(i, p)| p.filter(|p| p.instance_id == instance_id).map(|p| (i, p)))
            .ok_or(PlaceError::UnknownPiece(instance_id))?;

        let result = self
            .state
            .apply_move(piece.def, origin)
            .ok_or(PlaceError::Blocked { instance_id, origin })?;

        self.state = result.state.clone();
        self.tray[slot] = None;
        if self.tray.iter().all(Option::is_none) {
            self.tray = self
                .generator
                .next_set(self.state.board(), self.state.moves())
                .map(Some);
        }
        self.refresh_status();

        Ok(result)
    }

    /// True iff some remaining tray piece fits somewhere
    pub fn can_place_any(&self) -> bool {
        self.state
            .board()
            .can_any_piece_fit(self.pieces().map(|p| p.def))
    }

    /// Continue reward: replace the tray with a dot, a domino and a 2x2
    /// square and reset the combo. Allowed once per run.
    pub fn set_continue_pieces(&mut self) -> Result<(), RewardDenied> {
        if self.continue_used {
            return Err(RewardDenied::AlreadyUsed);
        }

        self.tray = continue_set().map(|def| Some(self.generator.wrap(def)));
        self.state = self.state.with_combo_reset();
        self.continue_used = true;
        self.refresh_status();

        tracing::info!(score = self.state.score(), "continue granted");
        Ok(())
    }

    /// Whether the continue reward may be offered right now
    pub fn continue_eligibility(
        &self,
        cooldowns: &RewardCooldowns,
        now: u64,
    ) -> Result<(), RewardDenied> {
        if self.continue_used {
            return Err(RewardDenied::AlreadyUsed);
        }
        if self.state.score() < CONTINUE_MIN_SCORE {
            return Err(RewardDenied::ScoreLow {
                score: self.state.score(),
            });
        }
        cooldowns.check(RewardedKind::Continue, now)
    }

    /// Check eligibility, record the rewarded request and the continue
    /// cooldown, then apply the continue pieces
    pub fn grant_continue(
        &mut self,
        cooldowns: &mut RewardCooldowns,
        now: u64,
    ) -> Result<(), RewardDenied> {
        self.continue_eligibility(cooldowns, now)?;
        self.set_continue_pieces()?;
        cooldowns.mark_rewarded(now);
        cooldowns.mark_continue_used(now);
        Ok(())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: GameSnapshot::from(&self.state),
            tray: self
                .tray
                .iter()
                .map(|slot| slot.as_ref().map(PieceSnapshot::from))
                .collect(),
            status: self.status,
            continue_used: self.continue_used,
        }
    }

    fn refresh_status(&mut self) {
        let next = if self.can_place_any() {
            RunStatus::Active
        } else {
            RunStatus::Exhausted
        };
        if next == RunStatus::Exhausted && self.status == RunStatus::Active {
            tracing::info!(
                score = self.state.score(),
                moves = self.state.moves(),
                lines = self.state.lines_cleared(),
                "run exhausted"
            );
        }
        self.status = next;
    }
}

/// Serializable view of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: GameSnapshot,
    pub tray: Vec<Option<PieceSnapshot>>,
    pub status: RunStatus,
    pub continue_used: bool,
}
